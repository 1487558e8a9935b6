use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::planner::{DesirabilityWeighting, Sex};

/// WeeklyMenuMaker: builds a week of groceries that hits macro-nutrient targets.
#[derive(Parser, Debug)]
#[command(name = "weekly_menu_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the scored product catalog CSV.
    #[arg(short, long, default_value = "products_with_scores.csv", global = true)]
    pub catalog: PathBuf,

    /// Subcategory CSV supplying desirability for products that lack it.
    #[arg(long, global = true)]
    pub subcategories: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly menu.
    Generate(GenerateArgs),

    /// Compute weekly macro targets from body measurements.
    Targets(BiometricArgs),

    /// Show how many catalog products fall in each category.
    Summary,
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate(GenerateArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Weekly fat target in grams (with --protein and --carbs skips the calculator).
    #[arg(long, requires_all = ["protein", "carbs"])]
    pub fat: Option<f64>,

    /// Weekly protein target in grams.
    #[arg(long, requires_all = ["fat", "carbs"])]
    pub protein: Option<f64>,

    /// Weekly carbs target in grams.
    #[arg(long, requires_all = ["fat", "protein"])]
    pub carbs: Option<f64>,

    /// JSON file with generator settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Acceptance band as a fraction of each target.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum number of attempts.
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Desirability-based acceptance of drawn products.
    #[arg(long, value_enum)]
    pub weighting: Option<DesirabilityWeighting>,

    /// Random seed for a reproducible menu.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Spread attempts over all cores (requires a seed, random if omitted).
    #[arg(long)]
    pub parallel: bool,

    /// Write the menu as JSON.
    #[arg(long)]
    pub out_json: Option<PathBuf>,

    /// Write the menu as CSV.
    #[arg(long)]
    pub out_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BiometricArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Age in years.
    #[arg(long)]
    pub age: u32,

    /// Body weight in kilograms.
    #[arg(long)]
    pub weight: f64,

    /// Height in centimetres.
    #[arg(long)]
    pub height: f64,

    /// Activity level from 1 (sedentary) to 5 (very high).
    #[arg(long, default_value = "1")]
    pub activity: u8,

    /// Fixed fat share of calories in percent (random 25-35 if omitted).
    #[arg(long)]
    pub fat_percent: Option<f64>,

    /// Seed for the fat share draw.
    #[arg(long)]
    pub seed: Option<u64>,
}
