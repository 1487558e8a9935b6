use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{MenuError, Result};
use crate::models::{CategoryTag, MacroTarget, MenuResult, MenuTotals, Serving};
use crate::planner::constants::*;
use crate::planner::index::CategoryIndex;

/// How product desirability biases which draws make it into the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DesirabilityWeighting {
    /// Every draw is accepted.
    #[default]
    Disabled,
    /// Draws are accepted with a desirability-based probability; rejected
    /// draws leave the remaining budget untouched.
    DecrementOnAccept,
    /// Like `DecrementOnAccept`, but rejected draws still consume budget.
    /// Reproduces the legacy script's bookkeeping.
    DecrementAlways,
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Half-width of the acceptance band as a fraction of each target.
    pub tolerance: f64,
    pub max_attempts: usize,
    /// Loop-iteration cap inside one attempt, skipped picks included.
    pub max_iterations_per_attempt: usize,
    pub desirability_weighting: DesirabilityWeighting,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_iterations_per_attempt: DEFAULT_MAX_ITERATIONS_PER_ATTEMPT,
            desirability_weighting: DesirabilityWeighting::Disabled,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && (0.0..=1.0).contains(&self.tolerance)) {
            return Err(MenuError::InvalidInput(format!(
                "tolerance must be within 0-1, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations_per_attempt == 0 {
            return Err(MenuError::InvalidInput(
                "max_iterations_per_attempt must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Budget left to fill during one attempt.
#[derive(Debug, Clone, Copy)]
struct Remaining {
    fat: f64,
    protein: f64,
    carbs: f64,
}

impl Remaining {
    fn from_targets(targets: &MacroTarget) -> Self {
        Self {
            fat: targets.fat,
            protein: targets.protein,
            carbs: targets.carbs,
        }
    }

    fn any_positive(&self) -> bool {
        self.fat > 0.0 || self.protein > 0.0 || self.carbs > 0.0
    }

    fn get(&self, tag: CategoryTag) -> f64 {
        match tag {
            CategoryTag::Fat => self.fat,
            CategoryTag::Protein => self.protein,
            CategoryTag::Carbs => self.carbs,
            CategoryTag::Mixed => 0.0,
        }
    }

    /// Subtract a serving; counters may go negative.
    fn consume(&mut self, serving: &Serving) {
        self.fat -= serving.fat;
        self.protein -= serving.protein;
        self.carbs -= serving.carbs;
    }
}

/// True if fat, protein and carbs each fall inside their tolerance band.
pub fn within_tolerance(totals: &MenuTotals, targets: &MacroTarget, tolerance: f64) -> bool {
    [
        (totals.fat, targets.fat),
        (totals.protein, targets.protein),
        (totals.carbs, targets.carbs),
    ]
    .into_iter()
    .all(|(actual, target)| {
        let (lo, hi) = MacroTarget::band(target, tolerance);
        lo <= actual && actual <= hi
    })
}

/// Build one candidate menu by drawing until every budget is used up.
///
/// Returns `None` if the iteration cap is hit first.
fn draw_servings<R: Rng + ?Sized>(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<Vec<Serving>> {
    let mut remaining = Remaining::from_targets(targets);
    let mut servings = Vec::new();
    let mut iterations = 0;

    while remaining.any_positive() {
        if iterations >= config.max_iterations_per_attempt {
            return None;
        }
        iterations += 1;

        let tag = CategoryTag::DRAWABLE[rng.gen_range(0..CategoryTag::DRAWABLE.len())];
        if remaining.get(tag) <= 0.0 {
            continue;
        }
        let Some(product) = index.bucket(tag).choose(rng) else {
            continue;
        };

        let serving = Serving::from_product(product);

        let accepted = match config.desirability_weighting {
            DesirabilityWeighting::Disabled => true,
            DesirabilityWeighting::DecrementOnAccept | DesirabilityWeighting::DecrementAlways => {
                rng.r#gen::<f64>() < desirability_weight(product.desirability)
            }
        };

        if accepted || config.desirability_weighting == DesirabilityWeighting::DecrementAlways {
            remaining.consume(&serving);
        }
        if accepted {
            servings.push(serving);
        }
    }

    Some(servings)
}

/// Run a single attempt and keep it only if it lands inside the band.
fn try_attempt<R: Rng + ?Sized>(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
    attempt: usize,
    rng: &mut R,
) -> Option<MenuResult> {
    let Some(servings) = draw_servings(index, targets, config, rng) else {
        debug!(attempt, "iteration cap reached");
        return None;
    };
    let result = MenuResult::new(servings, attempt);
    if within_tolerance(&result.totals, targets, config.tolerance) {
        Some(result)
    } else {
        None
    }
}

fn check_inputs(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
) -> Result<()> {
    targets.validate()?;
    config.validate()?;
    index.ensure_drawable()
}

/// RNG for one attempt of a seeded run.
pub fn attempt_rng(seed: u64, attempt: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (attempt as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Generate a weekly menu by rejection sampling with a single RNG stream.
///
/// Fails fast with `InvalidTarget` or `Precondition` before sampling, and
/// with `GenerationExhausted` if no attempt lands inside the band.
pub fn generate_weekly_menu<R: Rng + ?Sized>(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<MenuResult> {
    check_inputs(index, targets, config)?;

    for attempt in 1..=config.max_attempts {
        if let Some(result) = try_attempt(index, targets, config, attempt, rng) {
            info!(attempt, servings = result.len(), "weekly menu generated");
            return Ok(result);
        }
    }

    warn!(attempts = config.max_attempts, "no menu within tolerance");
    Err(MenuError::GenerationExhausted {
        attempts: config.max_attempts,
    })
}

/// Sequential run where each attempt gets its own RNG from `attempt_rng`.
///
/// Produces exactly what `generate_weekly_menu_parallel` produces for the
/// same seed.
pub fn generate_weekly_menu_seeded(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
    seed: u64,
) -> Result<MenuResult> {
    check_inputs(index, targets, config)?;

    (1..=config.max_attempts)
        .find_map(|attempt| {
            let mut rng = attempt_rng(seed, attempt);
            try_attempt(index, targets, config, attempt, &mut rng)
        })
        .ok_or(MenuError::GenerationExhausted {
            attempts: config.max_attempts,
        })
}

/// Run attempts across the rayon pool; the lowest successful attempt wins.
pub fn generate_weekly_menu_parallel(
    index: &CategoryIndex,
    targets: &MacroTarget,
    config: &GeneratorConfig,
    seed: u64,
) -> Result<MenuResult> {
    check_inputs(index, targets, config)?;

    let found = (0..config.max_attempts)
        .into_par_iter()
        .map(|i| i + 1)
        .find_map_first(|attempt| {
            let mut rng = attempt_rng(seed, attempt);
            try_attempt(index, targets, config, attempt, &mut rng)
        });

    match found {
        Some(result) => {
            info!(attempt = result.attempt, servings = result.len(), "weekly menu generated");
            Ok(result)
        }
        None => {
            warn!(attempts = config.max_attempts, "no menu within tolerance");
            Err(MenuError::GenerationExhausted {
                attempts: config.max_attempts,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn sample_index() -> CategoryIndex {
        CategoryIndex::new(vec![
            Product::new("Chicken", 150.0, 31.0, 3.6, 0.0, 165.0, 8.0),
            Product::new("Rice", 200.0, 2.7, 0.3, 28.0, 130.0, 6.0),
            Product::new("Oil", 15.0, 0.0, 100.0, 0.0, 884.0, 4.0),
        ])
    }

    fn sample_targets() -> MacroTarget {
        MacroTarget::from_grams(150.0, 300.0, 1000.0)
    }

    #[test]
    fn test_within_tolerance_edges() {
        let targets = sample_targets();
        let totals = MenuTotals {
            fat: 112.5,
            protein: 375.0,
            carbs: 1000.0,
            ..Default::default()
        };
        assert!(within_tolerance(&totals, &targets, 0.25));

        let low = MenuTotals {
            fat: 112.4,
            ..totals
        };
        assert!(!within_tolerance(&low, &targets, 0.25));
    }

    #[test]
    fn test_draw_servings_exhausts_budgets() {
        let mut rng = StdRng::seed_from_u64(7);
        let servings = draw_servings(
            &sample_index(),
            &sample_targets(),
            &GeneratorConfig::default(),
            &mut rng,
        )
        .expect("cap not reached");
        let totals = MenuTotals::of(&servings);
        assert!(totals.fat >= 150.0);
        assert!(totals.protein >= 300.0);
        assert!(totals.carbs >= 1000.0);
    }

    #[test]
    fn test_iteration_cap_abandons_attempt() {
        let config = GeneratorConfig {
            max_iterations_per_attempt: 1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(draw_servings(&sample_index(), &sample_targets(), &config, &mut rng).is_none());
    }

    #[test]
    fn test_rejected_draws_keep_budget() {
        // All products rejected half the time; accepted servings alone must cover targets.
        let products = vec![
            Product::new("Chicken", 150.0, 31.0, 3.6, 0.0, 165.0, 8.0).with_desirability(1.0),
            Product::new("Rice", 200.0, 2.7, 0.3, 28.0, 130.0, 6.0).with_desirability(1.0),
            Product::new("Oil", 15.0, 0.0, 100.0, 0.0, 884.0, 4.0).with_desirability(1.0),
        ];
        let config = GeneratorConfig {
            desirability_weighting: DesirabilityWeighting::DecrementOnAccept,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let index = CategoryIndex::new(products);
        let servings = draw_servings(&index, &sample_targets(), &config, &mut rng).unwrap();
        let totals = MenuTotals::of(&servings);
        assert!(totals.fat >= 150.0);
        assert!(totals.protein >= 300.0);
        assert!(totals.carbs >= 1000.0);
    }

    #[test]
    fn test_decrement_always_spends_budget_on_rejections() {
        let rice = Product::new("Rice", 200.0, 2.7, 0.3, 28.0, 130.0, 6.0).with_desirability(1.0);
        let index = CategoryIndex::new(vec![
            Product::new("Chicken", 150.0, 31.0, 3.6, 0.0, 165.0, 8.0),
            rice,
            Product::new("Oil", 15.0, 0.0, 100.0, 0.0, 884.0, 4.0),
        ]);
        let config = GeneratorConfig {
            desirability_weighting: DesirabilityWeighting::DecrementAlways,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let servings = draw_servings(&index, &sample_targets(), &config, &mut rng).unwrap();
        let totals = MenuTotals::of(&servings);
        // About half of the rice draws are dropped but still counted against carbs
        assert!(totals.carbs < 1000.0);
    }

    #[test]
    fn test_invalid_tolerance() {
        let config = GeneratorConfig {
            tolerance: -0.1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let index = sample_index();
        let err = generate_weekly_menu(&index, &sample_targets(), &config, &mut rng).unwrap_err();
        assert!(matches!(err, MenuError::InvalidInput(_)));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{"tolerance": 0.1, "desirability_weighting": "decrement-always"}"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tolerance, 0.1);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.desirability_weighting, DesirabilityWeighting::DecrementAlways);
    }
}
