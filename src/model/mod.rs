pub mod config;
pub mod person;
pub mod roster;

pub use config::*;
pub use person::*;
