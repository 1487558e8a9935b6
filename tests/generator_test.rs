use rand::rngs::StdRng;
use rand::SeedableRng;

use weekly_menu_maker_rs::error::MenuError;
use weekly_menu_maker_rs::models::{CategoryTag, MacroTarget, MenuResult, Product};
use weekly_menu_maker_rs::planner::{
    generate_weekly_menu, generate_weekly_menu_parallel, generate_weekly_menu_seeded,
    CategoryIndex, DesirabilityWeighting, GeneratorConfig,
};

fn chicken() -> Product {
    Product::new("Chicken", 150.0, 31.0, 3.6, 0.0, 165.0, 8.0)
}

fn rice() -> Product {
    Product::new("Rice", 200.0, 2.7, 0.3, 28.0, 130.0, 6.0)
}

fn oil() -> Product {
    Product::new("Oil", 15.0, 0.0, 100.0, 0.0, 884.0, 4.0)
}

fn sample_index() -> CategoryIndex {
    CategoryIndex::new(vec![chicken(), rice(), oil()])
}

fn sample_targets() -> MacroTarget {
    MacroTarget::from_grams(150.0, 300.0, 1000.0)
}

fn assert_within_band(menu: &MenuResult, targets: &MacroTarget, tolerance: f64) {
    for (label, actual, target) in [
        ("fat", menu.totals.fat, targets.fat),
        ("protein", menu.totals.protein, targets.protein),
        ("carbs", menu.totals.carbs, targets.carbs),
    ] {
        let lo = target * (1.0 - tolerance);
        let hi = target * (1.0 + tolerance);
        assert!(
            lo <= actual && actual <= hi,
            "{} total {} outside [{}, {}]",
            label,
            actual,
            lo,
            hi
        );
    }
}

#[test]
fn test_example_scenario_hits_bands() {
    let targets = sample_targets();
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);

    let menu = generate_weekly_menu(&sample_index(), &targets, &config, &mut rng).unwrap();

    assert!(!menu.is_empty());
    assert!(menu.attempt >= 1 && menu.attempt <= config.max_attempts);
    assert!((112.5..=187.5).contains(&menu.totals.fat));
    assert!((225.0..=375.0).contains(&menu.totals.protein));
    assert!((750.0..=1250.0).contains(&menu.totals.carbs));
}

#[test]
fn test_tolerance_property_across_seeds() {
    let targets = sample_targets();
    let config = GeneratorConfig {
        tolerance: 0.2,
        ..Default::default()
    };

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let menu = generate_weekly_menu(&sample_index(), &targets, &config, &mut rng).unwrap();
        assert_within_band(&menu, &targets, config.tolerance);
    }
}

#[test]
fn test_servings_are_non_negative_whole_portions() {
    let mut rng = StdRng::seed_from_u64(5);
    let menu = generate_weekly_menu(
        &sample_index(),
        &sample_targets(),
        &GeneratorConfig::default(),
        &mut rng,
    )
    .unwrap();

    let catalog = [chicken(), rice(), oil()];
    for serving in &menu.servings {
        assert!(serving.calories >= 0.0);
        assert!(serving.protein >= 0.0);
        assert!(serving.fat >= 0.0);
        assert!(serving.carbs >= 0.0);

        let source = catalog
            .iter()
            .find(|p| p.name == serving.product_name)
            .expect("serving comes from the catalog");
        assert_eq!(serving.portion_weight_grams, source.portion_weight_grams);
        assert_eq!(serving.category, source.category);
    }
}

#[test]
fn test_mixed_products_are_never_drawn() {
    let index = CategoryIndex::new(vec![
        chicken(),
        rice(),
        oil(),
        Product::new("Trail Mix", 50.0, 20.0, 20.0, 20.0, 340.0, 7.0),
        Product::new("Egg", 60.0, 12.0, 12.0, 1.0, 155.0, 7.0),
    ]);
    assert_eq!(index.bucket(CategoryTag::Mixed).len(), 2);

    let mut rng = StdRng::seed_from_u64(9);
    let menu = generate_weekly_menu(
        &index,
        &sample_targets(),
        &GeneratorConfig::default(),
        &mut rng,
    )
    .unwrap();

    assert!(menu
        .servings
        .iter()
        .all(|s| s.category != CategoryTag::Mixed));
}

#[test]
fn test_same_seed_same_menu() {
    let config = GeneratorConfig::default();

    let mut rng_a = StdRng::seed_from_u64(77);
    let mut rng_b = StdRng::seed_from_u64(77);
    let a = generate_weekly_menu(&sample_index(), &sample_targets(), &config, &mut rng_a).unwrap();
    let b = generate_weekly_menu(&sample_index(), &sample_targets(), &config, &mut rng_b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_parallel_matches_seeded_sequential() {
    let config = GeneratorConfig::default();

    let sequential =
        generate_weekly_menu_seeded(&sample_index(), &sample_targets(), &config, 31337).unwrap();
    let parallel =
        generate_weekly_menu_parallel(&sample_index(), &sample_targets(), &config, 31337).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_impossible_target_exhausts() {
    let targets = MacroTarget::from_grams(0.0001, 300.0, 1000.0);
    let config = GeneratorConfig {
        max_attempts: 1,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_weekly_menu(&sample_index(), &targets, &config, &mut rng).unwrap_err();
    assert!(matches!(err, MenuError::GenerationExhausted { attempts: 1 }));

    let err = generate_weekly_menu_parallel(&sample_index(), &targets, &config, 1).unwrap_err();
    assert!(matches!(err, MenuError::GenerationExhausted { attempts: 1 }));
}

#[test]
fn test_empty_fat_bucket_fails_fast() {
    let index = CategoryIndex::new(vec![chicken(), rice()]);
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_weekly_menu(
        &index,
        &sample_targets(),
        &GeneratorConfig::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, MenuError::Precondition(CategoryTag::Fat)));
}

#[test]
fn test_non_positive_target_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let targets = MacroTarget::from_grams(150.0, 0.0, 1000.0);

    let err = generate_weekly_menu(
        &sample_index(),
        &targets,
        &GeneratorConfig::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MenuError::InvalidTarget {
            name: "protein",
            ..
        }
    ));
}

#[test]
fn test_zero_weight_product_is_tolerated() {
    let mut empty_bottle = oil();
    empty_bottle.name = "Empty Bottle".to_string();
    empty_bottle.portion_weight_grams = 0.0;

    let index = CategoryIndex::new(vec![chicken(), rice(), oil(), empty_bottle]);
    let targets = sample_targets();
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    let menu = generate_weekly_menu(&index, &targets, &config, &mut rng).unwrap();
    assert_within_band(&menu, &targets, config.tolerance);
    for serving in menu.servings.iter().filter(|s| s.product_name == "Empty Bottle") {
        assert_eq!(serving.fat, 0.0);
    }
}

#[test]
fn test_weighted_mode_meets_tolerance() {
    let index = CategoryIndex::new(vec![
        chicken().with_desirability(9.0),
        rice().with_desirability(5.0),
        oil().with_desirability(2.0),
    ]);
    let targets = sample_targets();
    let config = GeneratorConfig {
        desirability_weighting: DesirabilityWeighting::DecrementOnAccept,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(12);

    let menu = generate_weekly_menu(&index, &targets, &config, &mut rng).unwrap();
    assert_within_band(&menu, &targets, config.tolerance);
    assert!(menu.servings.iter().all(|s| s.desirability.is_some()));
}
