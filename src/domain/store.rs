use super::*;
use log::debug;

/// Contacts kept in ascending name order.
///
/// Every operation is a linear walk over the sorted list. Lookups stop as soon
/// as they pass the name they are looking for, so a miss near the front of the
/// alphabet is cheap, but there is no random-access search.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts in front of the first contact whose name is `>=` the new one,
    /// so a duplicate name lands at the head of its run.
    pub fn insert(&mut self, name: String, phone: String, email: String) {
        let index = self
            .contacts
            .iter()
            .position(|c| c.name >= name)
            .unwrap_or(self.contacts.len());

        debug!("inserting contact {name:?} at position {index}");
        self.contacts.insert(index, Contact::new(name, phone, email));
    }

    pub fn find(&self, name: &str) -> Result<&Contact, AppError> {
        let index = self.position(name)?;
        Ok(&self.contacts[index])
    }

    pub fn update(
        &mut self,
        name: &str,
        new_phone: Option<&str>,
        new_email: Option<&str>,
    ) -> Result<&Contact, AppError> {
        let index = self.position(name)?;
        let contact = &mut self.contacts[index];
        contact.apply_update(new_phone, new_email);

        debug!("updated contact {name:?}");
        Ok(contact)
    }

    /// Removes the first contact with this name and hands it back.
    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let index = self.position(name)?;

        debug!("deleting contact {name:?} at position {index}");
        Ok(self.contacts.remove(index))
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    // Early-exit scan: names past `name` cannot match in a sorted list.
    fn position(&self, name: &str) -> Result<usize, AppError> {
        for (index, contact) in self.contacts.iter().enumerate() {
            if contact.name.as_str() > name {
                break;
            }
            if contact.name == name {
                return Ok(index);
            }
        }

        debug!("no contact named {name:?}");
        Err(AppError::NotFound(name.to_string()))
    }
}
