pub mod contact;
pub mod store;

use crate::errors::AppError;

pub use contact::Contact;
pub use store::ContactStore;
