use contact_book::prelude::run_app;
use dotenv::dotenv;
use std::process::exit;

fn main() {
    dotenv().ok();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
