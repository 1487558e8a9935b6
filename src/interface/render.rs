use crate::models::{MacroTarget, MenuResult};
use crate::planner::CategoryIndex;

/// Display a generated menu, its weekly totals and the target bands.
pub fn display_menu(menu: &MenuResult, targets: &MacroTarget, tolerance: f64) {
    if menu.is_empty() {
        println!("Generated menu is empty.");
        return;
    }

    println!();
    println!("=== Weekly Menu ===");
    println!("Generated successfully in {} attempts.", menu.attempt);
    println!();

    let max_name_len = menu
        .servings
        .iter()
        .map(|s| s.product_name.chars().count())
        .max()
        .unwrap_or(10);

    for (i, item) in menu.servings.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} [{:<7}] {:>7.1} g | P {:>6.2} g, F {:>6.2} g, C {:>6.2} g",
            i + 1,
            item.product_name,
            item.category.name(),
            item.portion_weight_grams,
            item.protein,
            item.fat,
            item.carbs,
            width = max_name_len
        );
    }

    let totals = &menu.totals;
    println!();
    println!("--- Total Nutrients for the Week ---");
    println!("Servings: {}", menu.len());
    println!("Calories: {:.2} kcal (target {:.0})", totals.calories, targets.calories);
    print_band("Protein", totals.protein, targets.protein, tolerance);
    print_band("Fat", totals.fat, targets.fat, tolerance);
    print_band("Carbs", totals.carbs, targets.carbs, tolerance);
    println!("Total Score: {:.2}", totals.score);
    println!();
}

fn print_band(label: &str, actual: f64, target: f64, tolerance: f64) {
    let (lo, hi) = MacroTarget::band(target, tolerance);
    println!(
        "{}: {:.2} g (target {:.2} g, band {:.2}-{:.2})",
        label, actual, target, lo, hi
    );
}

/// Display weekly targets, with the daily calorie need they came from.
pub fn display_targets(targets: &MacroTarget, daily_calories: Option<f64>) {
    println!();
    if let Some(daily) = daily_calories {
        println!("Daily calorie need: {:.0} kcal", daily);
    }
    println!("=== Weekly Targets ===");
    println!("Calories: {:.0} kcal", targets.calories);
    println!("Protein:  {:.2} g", targets.protein);
    println!("Fat:      {:.2} g", targets.fat);
    println!("Carbs:    {:.2} g", targets.carbs);
    println!();
}

/// Display product counts per category bucket.
pub fn display_category_summary(index: &CategoryIndex) {
    println!();
    println!("=== Catalog ({} products) ===", index.len());
    for (tag, count) in index.counts() {
        println!("  {:<8} {:>5}", tag.name(), count);
    }
    println!();
}
