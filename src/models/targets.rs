use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// Weekly macro-nutrient targets in grams, with calories for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
    pub calories: f64,
}

impl MacroTarget {
    /// Targets from gram amounts; calories derived with 9/4/4 kcal per gram.
    pub fn from_grams(fat: f64, protein: f64, carbs: f64) -> Self {
        Self {
            fat,
            protein,
            carbs,
            calories: fat * 9.0 + protein * 4.0 + carbs * 4.0,
        }
    }

    /// Every gram target must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("fat", self.fat), ("protein", self.protein), ("carbs", self.carbs)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MenuError::InvalidTarget { name, value });
            }
        }
        Ok(())
    }

    /// Inclusive acceptance band `[target*(1-tol), target*(1+tol)]`.
    #[inline]
    pub fn band(target: f64, tolerance: f64) -> (f64, f64) {
        (target * (1.0 - tolerance), target * (1.0 + tolerance))
    }
}
