pub mod filter;
pub mod picker;

pub use filter::matches_query;
pub use picker::Picker;
