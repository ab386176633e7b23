//! Agent tool implementations

mod web_search;

pub use web_search::{BochaSearchTool, SearchArgs, WEB_SEARCH};
