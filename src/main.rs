use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use weekly_menu_maker_rs::catalog::{
    load_catalog, load_config, load_desirability_map, save_menu_csv, save_menu_json,
};
use weekly_menu_maker_rs::cli::{BiometricArgs, Cli, Command, GenerateArgs};
use weekly_menu_maker_rs::error::{MenuError, Result};
use weekly_menu_maker_rs::interface::{
    display_category_summary, display_menu, display_targets, prompt_biometrics, prompt_yes_no,
};
use weekly_menu_maker_rs::models::MacroTarget;
use weekly_menu_maker_rs::observability::init_logging;
use weekly_menu_maker_rs::planner::{
    daily_calories, generate_weekly_menu, generate_weekly_menu_parallel, weekly_targets,
    ActivityLevel, Biometrics, CategoryIndex, GeneratorConfig, MacroSplit,
};

const DEFAULT_MENU_FILE: &str = "weekly_menu.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Generate(args) => cmd_generate(&cli.catalog, cli.subcategories.as_deref(), &args),
        Command::Targets(args) => cmd_targets(&args),
        Command::Summary => cmd_summary(&cli.catalog, cli.subcategories.as_deref()),
    }
}

/// Load the catalog and partition it into category buckets.
fn load_index(catalog: &Path, subcategories: Option<&Path>) -> Result<CategoryIndex> {
    if !catalog.exists() {
        return Err(MenuError::InvalidInput(format!(
            "catalog file not found: {}",
            catalog.display()
        )));
    }

    let desirability = match subcategories {
        Some(path) => load_desirability_map(path)?,
        None => HashMap::new(),
    };

    let products = load_catalog(catalog, &desirability)?;
    info!(count = products.len(), path = %catalog.display(), "catalog loaded");
    Ok(CategoryIndex::new(products))
}

/// Generator settings: config file first, then command-line overrides.
fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(weighting) = args.weighting {
        config.desirability_weighting = weighting;
    }

    Ok(config)
}

/// Explicit gram targets, or the interactive calorie calculator.
fn resolve_targets(args: &GenerateArgs, rng: &mut StdRng) -> Result<MacroTarget> {
    if let (Some(fat), Some(protein), Some(carbs)) = (args.fat, args.protein, args.carbs) {
        return Ok(MacroTarget::from_grams(fat, protein, carbs));
    }

    let bio = prompt_biometrics()?;
    let daily = daily_calories(&bio)?;
    let targets = weekly_targets(daily, &MacroSplit::default(), rng)?;
    display_targets(&targets, Some(daily));
    Ok(targets)
}

/// Generate a weekly menu and optionally save it.
fn cmd_generate(catalog: &Path, subcategories: Option<&Path>, args: &GenerateArgs) -> Result<()> {
    let index = load_index(catalog, subcategories)?;
    println!("Loaded {} products", index.len());

    let config = resolve_config(args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "random seed");

    let mut rng = StdRng::seed_from_u64(seed);
    let targets = resolve_targets(args, &mut rng)?;

    println!(
        "Searching for a menu within ±{:.0}% of targets ({} attempts max)...",
        config.tolerance * 100.0,
        config.max_attempts
    );

    let menu = if args.parallel {
        generate_weekly_menu_parallel(&index, &targets, &config, seed)?
    } else {
        generate_weekly_menu(&index, &targets, &config, &mut rng)?
    };

    display_menu(&menu, &targets, config.tolerance);

    let mut json_path = args.out_json.clone();
    if json_path.is_none()
        && args.out_csv.is_none()
        && prompt_yes_no(&format!("Save menu to {}?", DEFAULT_MENU_FILE), false)?
    {
        json_path = Some(PathBuf::from(DEFAULT_MENU_FILE));
    }

    if let Some(path) = &json_path {
        save_menu_json(path, &menu)?;
        println!("Menu saved to {}.", path.display());
    }
    if let Some(path) = &args.out_csv {
        save_menu_csv(path, &menu)?;
        println!("Menu saved to {}.", path.display());
    }

    Ok(())
}

/// Print weekly targets computed from command-line biometrics.
fn cmd_targets(args: &BiometricArgs) -> Result<()> {
    let bio = Biometrics {
        sex: args.sex,
        age_years: args.age,
        weight_kg: args.weight,
        height_cm: args.height,
        activity: ActivityLevel::new(args.activity)?,
    };

    let split = match args.fat_percent {
        Some(pct) => MacroSplit {
            fat_percent_min: pct,
            fat_percent_max: pct,
            ..MacroSplit::default()
        },
        None => MacroSplit::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let daily = daily_calories(&bio)?;
    let targets = weekly_targets(daily, &split, &mut rng)?;
    display_targets(&targets, Some(daily));
    Ok(())
}

/// Print category bucket sizes.
fn cmd_summary(catalog: &Path, subcategories: Option<&Path>) -> Result<()> {
    let index = load_index(catalog, subcategories)?;
    display_category_summary(&index);
    Ok(())
}
