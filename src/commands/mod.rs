mod retrieve;
mod search;

pub use retrieve::run_retrieve;
pub use search::run_search;
