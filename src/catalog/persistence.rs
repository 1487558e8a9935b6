use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MenuResult;
use crate::planner::GeneratorConfig;

/// Save a generated menu as pretty JSON.
pub fn save_menu_json<P: AsRef<Path>>(path: P, menu: &MenuResult) -> Result<()> {
    let json = serde_json::to_string_pretty(menu)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a menu previously written by `save_menu_json`.
pub fn load_menu_json<P: AsRef<Path>>(path: P) -> Result<MenuResult> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a menu as CSV, one row per serving.
pub fn save_menu_csv<P: AsRef<Path>>(path: P, menu: &MenuResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "Product Name",
        "Category",
        "Portion (g/ml)",
        "Calories",
        "Protein",
        "Fat",
        "Carbs",
        "Score",
        "Desirability",
    ])?;

    for serving in &menu.servings {
        wtr.write_record([
            serving.product_name.clone(),
            serving.category.to_string(),
            format!("{:.2}", serving.portion_weight_grams),
            format!("{:.2}", serving.calories),
            format!("{:.2}", serving.protein),
            format!("{:.2}", serving.fat),
            format!("{:.2}", serving.carbs),
            format!("{:.2}", serving.score),
            serving
                .desirability
                .map(|d| format!("{:.1}", d))
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Load generator settings from JSON; missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
