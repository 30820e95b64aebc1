pub mod command;
pub mod console;
pub mod form;
pub mod menu;
pub mod render;
pub mod run;

use crate::domain::ContactStore;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub use console::Console;
pub use run::run_app;
