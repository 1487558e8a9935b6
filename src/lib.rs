pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod observability;
pub mod planner;

pub use error::{MenuError, Result};
pub use models::{CategoryTag, MacroTarget, MenuResult, Product, Serving};
