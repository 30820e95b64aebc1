use crate::domain::Contact;

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}",
        contact.name, contact.phone, contact.email
    )
}

pub fn table_header() -> String {
    format!("{:>3}  {:<20} {:<15} {:<30}", "#", "Name", "Phone", "Email")
}

pub fn table_row(i: usize, c: &Contact) -> String {
    format!("{i:>3}. {:<20} {:<15} {:<30}", c.name, c.phone, c.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_block() {
        let contact = Contact::new("Bob".to_string(), "111".to_string(), "b@x".to_string());

        assert_eq!(display_contact(&contact), "Name: Bob\nPhone: 111\nEmail: b@x");
    }

    #[test]
    fn row_is_numbered_and_padded() {
        let contact = Contact::new("Bob".to_string(), "111".to_string(), "b@x".to_string());
        let row = table_row(2, &contact);

        assert!(row.starts_with("  2. Bob "));
        assert!(row.contains(" 111 "));
        assert_eq!(rule().len(), RULE_WIDTH);
    }
}
