pub mod contact;
pub mod manager;
pub mod search;

pub use crate::errors::AppError;
pub use contact::Contact;
pub use manager::ContactManager;
pub use search::{Match, NameResolver, resolve};
