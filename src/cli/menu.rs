use super::*;
use crate::cli::command::MenuCommand;

const MENU: &str = "\nContact Book Menu:\n\
1. Create Contact\n\
2. Display All Contacts\n\
3. Search Contact\n\
4. Update Contact\n\
5. Delete Contact\n\
6. Get Contact Count\n\
7. Exit";

/// Runs the numbered menu until the user picks Exit or input runs out.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        console.println(MENU)?;

        let Some(choice) = console.prompt("\nEnter your choice (1-7): ")? else {
            return Ok(());
        };

        let command = match MenuCommand::parse(&choice) {
            Ok(command) => command,
            Err(_) => {
                console.println("\nInvalid choice! Please try again.")?;
                continue;
            }
        };

        let keep_going = match command {
            MenuCommand::CreateContact => create_contact(store, console)?,
            MenuCommand::DisplayContacts => display_contacts(store, console)?,
            MenuCommand::SearchContact => search_contact(store, console)?,
            MenuCommand::UpdateContact => update_contact(store, console)?,
            MenuCommand::DeleteContact => delete_contact(store, console)?,
            MenuCommand::CountContacts => {
                console.println(&format!("\nTotal contacts: {}", store.count()))?;
                true
            }
            MenuCommand::Exit => {
                console.println("\nThank you for using Contact Book!")?;
                false
            }
        };

        if !keep_going {
            return Ok(());
        }
    }
}

// Each handler returns false once input is exhausted mid-form.

fn create_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(name) = console.prompt("Enter name: ")? else {
        return Ok(false);
    };
    let Some(phone) = console.prompt("Enter phone number: ")? else {
        return Ok(false);
    };
    let Some(email) = console.prompt("Enter email: ")? else {
        return Ok(false);
    };

    let message = format!("\nContact created successfully: {name}");
    store.insert(name, phone, email);
    console.println(&message)?;
    Ok(true)
}

fn display_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    if store.is_empty() {
        console.println("\nContact book is empty!")?;
        return Ok(true);
    }

    console.println("\nContact List:")?;
    console.println(&render::rule())?;
    for contact in store.list_all() {
        console.println(&render::display_contact(contact))?;
        console.println(&render::rule())?;
    }
    Ok(true)
}

fn search_contact<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(name) = console.prompt("Enter name to search: ")? else {
        return Ok(false);
    };

    match store.find(&name) {
        Ok(contact) => {
            console.println("\nContact found:")?;
            console.println(&render::rule())?;
            console.println(&render::display_contact(contact))?;
            console.println(&render::rule())?;
        }
        Err(e) => console.println(&format!("\n{e}"))?,
    }
    Ok(true)
}

fn update_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(name) = console.prompt("Enter name to update: ")? else {
        return Ok(false);
    };
    let Some(new_phone) = console.prompt("Enter new phone number (press enter to skip): ")? else {
        return Ok(false);
    };
    let Some(new_email) = console.prompt("Enter new email (press enter to skip): ")? else {
        return Ok(false);
    };

    match store.update(&name, Some(&new_phone), Some(&new_email)) {
        Ok(_) => console.println(&format!("\nContact updated successfully: {name}"))?,
        Err(e) => console.println(&format!("\n{e}"))?,
    }
    Ok(true)
}

fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<bool, AppError> {
    let Some(name) = console.prompt("Enter name to delete: ")? else {
        return Ok(false);
    };

    match store.delete(&name) {
        Ok(_) => console.println(&format!("\nContact deleted successfully: {name}"))?,
        Err(e) => console.println(&format!("\n{e}"))?,
    }
    Ok(true)
}
