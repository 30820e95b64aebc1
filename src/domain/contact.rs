#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact { name, phone, email }
    }

    /// Overwrites phone and email with whichever replacements are non-empty.
    /// The name is the store's ordering key and never changes here.
    pub fn apply_update(&mut self, new_phone: Option<&str>, new_email: Option<&str>) {
        if let Some(phone) = new_phone.filter(|p| !p.is_empty()) {
            self.phone = phone.to_string();
        }
        if let Some(email) = new_email.filter(|e| !e.is_empty()) {
            self.email = email.to_string();
        }
    }
}
