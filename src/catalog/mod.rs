mod loader;
mod persistence;
mod portion;

pub use loader::{load_catalog, load_desirability_map};
pub use persistence::{load_config, load_menu_json, save_menu_csv, save_menu_json};
pub use portion::{mass_from_clarification, portion_weight_grams};
