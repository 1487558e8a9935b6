pub mod prompts;
pub mod render;

pub use prompts::{prompt_activity_level, prompt_biometrics, prompt_sex, prompt_yes_no};
pub use render::{display_category_summary, display_menu, display_targets};
