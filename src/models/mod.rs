pub mod menu;
pub mod product;
pub mod targets;

pub use menu::{MenuResult, MenuTotals, Serving};
pub use product::{CategoryTag, Product};
pub use targets::MacroTarget;
