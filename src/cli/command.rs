use crate::errors::AppError;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Sorted in-memory contact book")]
pub struct Cli {
    /// Front end to run (menu, form)
    #[arg(long, env = "CONTACT_BOOK_FRONTEND", value_enum, default_value_t = Frontend::Menu)]
    pub frontend: Frontend,

    /// Log filter written to stderr (off, error, warn, info, debug, trace).
    /// Ignored when RUST_LOG is set.
    #[arg(long, env = "CONTACT_BOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Supported front ends
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Frontend {
    Menu,
    Form,
}

/// Numbered entries of the text menu
#[derive(Debug, PartialEq, Eq)]
pub enum MenuCommand {
    CreateContact,
    DisplayContacts,
    SearchContact,
    UpdateContact,
    DeleteContact,
    CountContacts,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(MenuCommand::CreateContact),
            "2" => Ok(MenuCommand::DisplayContacts),
            "3" => Ok(MenuCommand::SearchContact),
            "4" => Ok(MenuCommand::UpdateContact),
            "5" => Ok(MenuCommand::DeleteContact),
            "6" => Ok(MenuCommand::CountContacts),
            "7" => Ok(MenuCommand::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

/// Buttons of the form front end
#[derive(Debug, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Search,
    Update,
    Delete,
    Quit,
}

impl FormAction {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "a" | "add" => Ok(FormAction::Add),
            "s" | "search" => Ok(FormAction::Search),
            "u" | "update" => Ok(FormAction::Update),
            "d" | "delete" => Ok(FormAction::Delete),
            "q" | "quit" => Ok(FormAction::Quit),
            _ => Err(AppError::ParseCommand(input.trim().to_string())),
        }
    }
}
