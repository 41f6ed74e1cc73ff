pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod notify;
pub mod prelude;
pub mod skill;
pub mod store;
pub mod validation;

pub use cli::run::run_app;
