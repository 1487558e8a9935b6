pub mod calculations;
pub mod constants;
pub mod generator;
pub mod index;

pub use calculations::{
    basal_metabolic_rate, daily_calories, weekly_targets, ActivityLevel, Biometrics, MacroSplit,
    Sex,
};
pub use constants::*;
pub use generator::{
    attempt_rng, generate_weekly_menu, generate_weekly_menu_parallel, generate_weekly_menu_seeded,
    within_tolerance, DesirabilityWeighting, GeneratorConfig,
};
pub use index::CategoryIndex;
