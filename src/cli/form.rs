//! Form-style front end.
//!
//! Mirrors a desktop contact form in the terminal: the contact table is
//! redrawn after every action, fields are collected one per line, and every
//! failure is shown as an alert line instead of ending the session.

use super::*;
use crate::cli::command::FormAction;
use crate::validation::{optional, require, validate_new_contact};

const ACTIONS: &str = "[a]dd  [s]earch  [u]pdate  [d]elete  [q]uit";

pub fn run_form<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        render_view(store, console)?;

        let Some(input) = console.prompt("> ")? else {
            return Ok(());
        };

        let outcome = match FormAction::parse(&input) {
            Ok(FormAction::Quit) => return Ok(()),
            Ok(FormAction::Add) => add(store, console),
            Ok(FormAction::Search) => search(store, console),
            Ok(FormAction::Update) => update(store, console),
            Ok(FormAction::Delete) => delete(store, console),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Some(message)) => console.println(&message)?,
            // Input ran out while a field was being filled in.
            Ok(None) => return Ok(()),
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => alert(console, &e)?,
        }
    }
}

fn render_view<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.println("")?;
    console.println(&render::table_header())?;
    console.println(&render::rule())?;

    if store.is_empty() {
        console.println("No contacts yet")?;
    }
    for (i, contact) in store.list_all().iter().enumerate() {
        console.println(&render::table_row(i + 1, contact))?;
    }

    console.println(&render::rule())?;
    console.println(&format!("Total contacts: {}", store.count()))?;
    console.println(ACTIONS)
}

fn alert<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &AppError,
) -> Result<(), AppError> {
    log::debug!("form alert: {err}");
    console.println(&format!("[!] {err}"))
}

fn add<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Option<String>, AppError> {
    let Some(name) = console.prompt("Name: ")? else {
        return Ok(None);
    };
    let Some(phone) = console.prompt("Phone: ")? else {
        return Ok(None);
    };
    let Some(email) = console.prompt("Email: ")? else {
        return Ok(None);
    };

    validate_new_contact(&name, &phone, &email)?;

    let message = format!("Contact added: {name}");
    store.insert(name, phone, email);
    Ok(Some(message))
}

fn search<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<Option<String>, AppError> {
    let Some(name) = console.prompt("Name: ")? else {
        return Ok(None);
    };
    require("Name", &name)?;

    let contact = store.find(&name)?;
    Ok(Some(render::display_contact(contact)))
}

fn update<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Option<String>, AppError> {
    let Some(name) = console.prompt("Name: ")? else {
        return Ok(None);
    };
    require("Name", &name)?;

    let Some(phone) = console.prompt("Phone (blank keeps current): ")? else {
        return Ok(None);
    };
    let Some(email) = console.prompt("Email (blank keeps current): ")? else {
        return Ok(None);
    };

    let phone = optional(phone);
    let email = optional(email);
    store.update(&name, phone.as_deref(), email.as_deref())?;
    Ok(Some(format!("Contact updated: {name}")))
}

fn delete<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Option<String>, AppError> {
    let Some(name) = console.prompt("Name: ")? else {
        return Ok(None);
    };
    require("Name", &name)?;

    // Check first so a missing contact is reported before asking to confirm.
    store.find(&name)?;

    if !console.confirm_action(&format!("Delete {name}"))? {
        return Ok(Some("Delete cancelled".to_string()));
    }

    store.delete(&name)?;
    Ok(Some(format!("Contact deleted: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(store: &mut ContactStore, input: &str) -> Result<String, AppError> {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        run_form(store, &mut console)?;
        Ok(String::from_utf8(console.into_output()).unwrap_or_default())
    }

    #[test]
    fn add_requires_every_field() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let output = run(&mut store, "a\nBob\n\nb@x\nq\n")?;

        assert!(output.contains("[!] Validation failed: Phone is required"));
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn table_lists_sorted_rows() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let output = run(&mut store, "a\nBob\n111\nb@x\na\nAlice\n222\na@x\nq\n")?;

        assert!(output.contains("Contact added: Alice"));
        assert!(output.contains("Total contacts: 2"));

        let last_view = output.rsplit("Name ").next().unwrap_or_default();
        let alice = last_view.find("  1. Alice").unwrap();
        let bob = last_view.find("  2. Bob").unwrap();
        assert!(alice < bob);
        Ok(())
    }

    #[test]
    fn update_and_search_alerts() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        store.insert("Bob".to_string(), "111".to_string(), "b@x".to_string());

        let output = run(&mut store, "u\nBob\n999\n\ns\nBob\ns\n\nu\nZed\n1\n\nq\n")?;

        assert!(output.contains("Contact updated: Bob"));
        assert!(output.contains("Name: Bob\nPhone: 999\nEmail: b@x"));
        assert!(output.contains("[!] Validation failed: Name is required"));
        assert!(output.contains("[!] Contact not found: Zed"));
        Ok(())
    }

    #[test]
    fn delete_asks_for_confirmation() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        store.insert("Bob".to_string(), "111".to_string(), "b@x".to_string());

        let output = run(&mut store, "d\nBob\nn\nd\nBob\ny\nd\nBob\nq\n")?;

        assert!(output.contains("Delete cancelled"));
        assert!(output.contains("Contact deleted: Bob"));
        assert!(output.contains("[!] Contact not found: Bob"));
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_action_is_an_alert() -> Result<(), AppError> {
        let mut store = ContactStore::new();
        let output = run(&mut store, "x\n")?;

        assert!(output.contains("No contacts yet"));
        assert!(output.contains("[!] Unrecognized command: 'x'"));
        Ok(())
    }
}
