/// Default half-width of the acceptance band, as a fraction of each target.
pub const DEFAULT_TOLERANCE: f64 = 0.25;

/// Default number of menu construction attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Loop-iteration cap for one attempt; an attempt that hits it counts as failed.
pub const DEFAULT_MAX_ITERATIONS_PER_ATTEMPT: usize = 100_000;

/// Planning horizon in days.
pub const DAYS_PER_WEEK: f64 = 7.0;

// ─────────────────────────────────────────────────────────────────────────────
// Desirability acceptance
// ─────────────────────────────────────────────────────────────────────────────

/// Desirability strictly above this is always accepted.
pub const DESIRABILITY_HIGH: f64 = 7.0;

/// Desirability strictly below this is accepted at `WEIGHT_LOW`.
pub const DESIRABILITY_LOW: f64 = 4.0;

pub const WEIGHT_HIGH: f64 = 1.5;
pub const WEIGHT_NEUTRAL: f64 = 1.0;
pub const WEIGHT_LOW: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Mifflin-St Jeor coefficients.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Activity multipliers for levels 1 (sedentary) through 5 (very high).
pub const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Share of daily calories from fat, drawn uniformly from this range (percent).
pub const FAT_PERCENT_MIN: f64 = 25.0;
pub const FAT_PERCENT_MAX: f64 = 35.0;

/// Share of daily calories from protein (percent).
pub const PROTEIN_PERCENT: f64 = 15.0;

/// Weight for a desirability rating. Missing desirability is neutral.
pub fn desirability_weight(desirability: Option<f64>) -> f64 {
    match desirability {
        Some(d) if d > DESIRABILITY_HIGH => WEIGHT_HIGH,
        Some(d) if d < DESIRABILITY_LOW => WEIGHT_LOW,
        _ => WEIGHT_NEUTRAL,
    }
}
