use serde::{Deserialize, Serialize};

use crate::models::{CategoryTag, Product};

/// One drawn portion of a product in a weekly menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serving {
    /// Name of the source product.
    pub product_name: String,

    /// Category bucket the product was drawn from.
    pub category: CategoryTag,

    /// Portion size; always one full unit of the product.
    pub portion_weight_grams: f64,

    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,

    /// Quality score copied from the product.
    pub score: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desirability: Option<f64>,
}

impl Serving {
    /// One unit of `product`, with per-100g values scaled to the portion.
    pub fn from_product(product: &Product) -> Self {
        let factor = product.portion_factor();
        Self {
            product_name: product.name.clone(),
            category: product.category,
            portion_weight_grams: product.portion_weight_grams,
            calories: product.calories_per_100g * factor,
            protein: product.protein_per_100g * factor,
            fat: product.fat_per_100g * factor,
            carbs: product.carbs_per_100g * factor,
            score: product.score,
            desirability: product.desirability,
        }
    }
}

/// Aggregate nutrients over a list of servings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub score: f64,
}

impl MenuTotals {
    pub fn of(servings: &[Serving]) -> Self {
        servings.iter().fold(Self::default(), |mut acc, s| {
            acc.calories += s.calories;
            acc.protein += s.protein;
            acc.fat += s.fat;
            acc.carbs += s.carbs;
            acc.score += s.score;
            acc
        })
    }
}

/// A successful weekly menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResult {
    pub servings: Vec<Serving>,
    pub totals: MenuTotals,
    /// 1-based number of the attempt that produced this menu.
    pub attempt: usize,
}

impl MenuResult {
    pub fn new(servings: Vec<Serving>, attempt: usize) -> Self {
        let totals = MenuTotals::of(&servings);
        Self {
            servings,
            totals,
            attempt,
        }
    }

    pub fn len(&self) -> usize {
        self.servings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servings.is_empty()
    }
}
