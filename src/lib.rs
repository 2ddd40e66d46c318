pub mod cli;
pub mod io;
pub mod model;
pub mod select;
pub mod tui;
pub mod util;
