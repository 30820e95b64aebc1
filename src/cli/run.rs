use crate::prelude::{
    AppError, Console, ContactStore,
    command::{Cli, Frontend},
    form::run_form,
    menu::run_menu,
};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_frontend(cli.frontend, stdin.lock(), stdout.lock())
}

/// Runs one session on a fresh store. The store lives only as long as the
/// session.
pub fn run_frontend<R: BufRead, W: Write>(
    frontend: Frontend,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let mut store = ContactStore::new();
    let mut console = Console::new(input, output);

    info!("starting {frontend:?} front end");

    match frontend {
        Frontend::Menu => run_menu(&mut store, &mut console)?,
        Frontend::Form => run_form(&mut store, &mut console)?,
    }

    info!("session ended with {} contacts", store.count());
    Ok(())
}

fn init_logger(filter: &str) {
    // RUST_LOG wins over the CLI flag when both are set.
    let env = env_logger::Env::default().default_filter_or(filter.to_string());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
