use clap::Parser;
use math_worksheet::{rounding_catalog, Worksheet};

/// A terminal math worksheet: rounding off to the nearest 10.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    let Args {} = Args::parse();
    let worksheet = Worksheet::new(rounding_catalog()).expect("Built-in catalog is valid");

    if let Err(e) = worksheet.run() {
        eprintln!("Error running worksheet: {}", e);
        std::process::exit(1);
    }
}
