mod question;

pub use question::{validate_catalog, CatalogError, Question};
