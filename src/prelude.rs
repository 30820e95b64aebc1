pub use crate::cli::{Console, command, form, menu, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    store::{self, ContactStore},
};
pub use crate::errors::AppError;
