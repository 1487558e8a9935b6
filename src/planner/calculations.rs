use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};
use crate::models::MacroTarget;
use crate::planner::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Sex {
    Male,
    Female,
}

/// Physical activity level, 1 (sedentary) through 5 (very high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ActivityLevel(u8);

impl TryFrom<u8> for ActivityLevel {
    type Error = MenuError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.0
    }
}

impl ActivityLevel {
    pub fn new(level: u8) -> Result<Self> {
        if (1..=5).contains(&level) {
            Ok(Self(level))
        } else {
            Err(MenuError::InvalidInput(format!(
                "activity level must be between 1 and 5, got {}",
                level
            )))
        }
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn multiplier(&self) -> f64 {
        ACTIVITY_MULTIPLIERS[(self.0 - 1) as usize]
    }

    pub fn description(&self) -> &'static str {
        match self.0 {
            1 => "Minimal (sedentary)",
            2 => "Low (light exercise 1-3 days/week)",
            3 => "Moderate (exercise 3-5 days/week)",
            4 => "High (intense exercise 6-7 days/week)",
            _ => "Very high (very intense or physical work)",
        }
    }
}

/// Body measurements used for the calorie estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub sex: Sex,
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
}

impl Biometrics {
    pub fn validate(&self) -> Result<()> {
        if self.age_years == 0 {
            return Err(MenuError::InvalidInput("age must be positive".to_string()));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(MenuError::InvalidInput("weight must be positive".to_string()));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(MenuError::InvalidInput("height must be positive".to_string()));
        }
        Ok(())
    }
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor.
pub fn basal_metabolic_rate(bio: &Biometrics) -> Result<f64> {
    bio.validate()?;

    let offset = match bio.sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };
    let bmr = BMR_WEIGHT_COEFF * bio.weight_kg + BMR_HEIGHT_COEFF * bio.height_cm
        - BMR_AGE_COEFF * bio.age_years as f64
        + offset;

    if bmr <= 0.0 {
        return Err(MenuError::InvalidInput(format!(
            "biometrics give a non-positive BMR ({:.1})",
            bmr
        )));
    }
    Ok(bmr)
}

/// Daily calorie need: BMR times the activity multiplier, truncated to whole kcal.
pub fn daily_calories(bio: &Biometrics) -> Result<f64> {
    let bmr = basal_metabolic_rate(bio)?;
    Ok((bmr * bio.activity.multiplier()).floor())
}

/// How daily calories are divided between macros (percentages).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub fat_percent_min: f64,
    pub fat_percent_max: f64,
    pub protein_percent: f64,
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            fat_percent_min: FAT_PERCENT_MIN,
            fat_percent_max: FAT_PERCENT_MAX,
            protein_percent: PROTEIN_PERCENT,
        }
    }
}

impl MacroSplit {
    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.fat_percent_min)
            || !in_range(self.fat_percent_max)
            || !in_range(self.protein_percent)
        {
            return Err(MenuError::InvalidInput(
                "macro percentages must be within 0-100".to_string(),
            ));
        }
        if self.fat_percent_min > self.fat_percent_max {
            return Err(MenuError::InvalidInput(
                "fat percent min exceeds max".to_string(),
            ));
        }
        if self.fat_percent_max + self.protein_percent >= 100.0 {
            return Err(MenuError::InvalidInput(
                "fat and protein leave no calories for carbs".to_string(),
            ));
        }
        Ok(())
    }

    /// Fat share for this run; drawn from the range unless it is a single value.
    fn fat_percent<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.fat_percent_min == self.fat_percent_max {
            self.fat_percent_min
        } else {
            rng.gen_range(self.fat_percent_min..=self.fat_percent_max)
        }
    }
}

/// Weekly gram targets from a daily calorie need.
pub fn weekly_targets<R: Rng + ?Sized>(
    daily_calories: f64,
    split: &MacroSplit,
    rng: &mut R,
) -> Result<MacroTarget> {
    if !(daily_calories.is_finite() && daily_calories > 0.0) {
        return Err(MenuError::InvalidInput(format!(
            "daily calories must be positive, got {}",
            daily_calories
        )));
    }
    split.validate()?;

    let fat_kcal = daily_calories * split.fat_percent(rng) / 100.0;
    let protein_kcal = daily_calories * split.protein_percent / 100.0;
    let carbs_kcal = daily_calories - fat_kcal - protein_kcal;

    Ok(MacroTarget {
        fat: fat_kcal * DAYS_PER_WEEK / KCAL_PER_GRAM_FAT,
        protein: protein_kcal * DAYS_PER_WEEK / KCAL_PER_GRAM_PROTEIN,
        carbs: carbs_kcal * DAYS_PER_WEEK / KCAL_PER_GRAM_CARBS,
        calories: daily_calories * DAYS_PER_WEEK,
    })
}
