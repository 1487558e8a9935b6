use std::fmt;

use serde::{Deserialize, Serialize};

/// Dominant macro-nutrient of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryTag {
    Protein,
    Fat,
    Carbs,
    Mixed,
}

impl CategoryTag {
    /// Categories the generator draws from, in the order it picks among them.
    pub const DRAWABLE: [CategoryTag; 3] =
        [CategoryTag::Fat, CategoryTag::Protein, CategoryTag::Carbs];

    pub const ALL: [CategoryTag; 4] = [
        CategoryTag::Protein,
        CategoryTag::Fat,
        CategoryTag::Carbs,
        CategoryTag::Mixed,
    ];

    /// Classify by strict dominance of one macro over both others.
    ///
    /// Ties (including a three-way tie) fall through to `Mixed`.
    pub fn classify(protein: f64, fat: f64, carbs: f64) -> Self {
        if protein > fat && protein > carbs {
            CategoryTag::Protein
        } else if fat > protein && fat > carbs {
            CategoryTag::Fat
        } else if carbs > protein && carbs > fat {
            CategoryTag::Carbs
        } else {
            CategoryTag::Mixed
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CategoryTag::Protein => "Protein",
            CategoryTag::Fat => "Fat",
            CategoryTag::Carbs => "Carbs",
            CategoryTag::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog product with nutrient content per 100g.
///
/// `score` and `desirability` use a 0-10 scale and are assigned externally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: CategoryTag,
    pub portion_weight_grams: f64,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
    pub carbs_per_100g: f64,
    pub calories_per_100g: f64,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desirability: Option<f64>,
}

impl Product {
    /// Build a product and classify it from its macro content.
    pub fn new(
        name: impl Into<String>,
        portion_weight_grams: f64,
        protein_per_100g: f64,
        fat_per_100g: f64,
        carbs_per_100g: f64,
        calories_per_100g: f64,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: CategoryTag::classify(protein_per_100g, fat_per_100g, carbs_per_100g),
            portion_weight_grams,
            protein_per_100g,
            fat_per_100g,
            carbs_per_100g,
            calories_per_100g,
            score,
            desirability: None,
        }
    }

    pub fn with_desirability(mut self, desirability: f64) -> Self {
        self.desirability = Some(desirability);
        self
    }

    /// True if at least one of protein, fat, carbs is positive.
    #[inline]
    pub fn has_macros(&self) -> bool {
        self.protein_per_100g > 0.0 || self.fat_per_100g > 0.0 || self.carbs_per_100g > 0.0
    }

    /// Non-negative weight and nutrient values.
    pub fn is_valid(&self) -> bool {
        self.portion_weight_grams >= 0.0
            && self.protein_per_100g >= 0.0
            && self.fat_per_100g >= 0.0
            && self.carbs_per_100g >= 0.0
            && self.calories_per_100g >= 0.0
    }

    /// Scaling factor from per-100g values to one portion.
    #[inline]
    pub fn portion_factor(&self) -> f64 {
        self.portion_weight_grams / 100.0
    }

    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {}g, P:{} F:{} C:{} kcal:{}, score:{}",
            self.name,
            self.category,
            self.portion_weight_grams,
            self.protein_per_100g,
            self.fat_per_100g,
            self.carbs_per_100g,
            self.calories_per_100g,
            self.score
        )
    }
}
