pub mod config_io;
pub mod roster_io;
