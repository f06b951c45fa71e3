mod catalog;

pub use catalog::rounding_catalog;
