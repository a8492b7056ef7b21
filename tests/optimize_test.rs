#[macro_use]
extern crate assert_float_eq;

use macro_saver_rs::error::MacroError;
use macro_saver_rs::models::{OptimizationRequest, OptimizationResult, RawFood};
use macro_saver_rs::planner::{macro_targets, optimize};

#[allow(clippy::too_many_arguments)]
fn food(
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    price: f64,
    sat: f64,
    sodium: f64,
    sugar: f64,
) -> RawFood {
    RawFood::per_serving(name, price, calories, protein, carbs, fats, sat, sodium, sugar)
}

fn standard_catalog() -> Vec<RawFood> {
    vec![
        food("Apple", 52.0, 0.3, 14.0, 0.2, 0.50, 0.03, 1.0, 10.0),
        food("Banana", 89.0, 1.1, 23.0, 0.3, 0.30, 0.11, 1.0, 12.0),
        food("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 3.00, 1.02, 70.0, 0.0),
        food("Broccoli", 34.0, 2.8, 7.0, 0.4, 0.80, 0.04, 33.0, 1.0),
        food("Almonds", 579.0, 21.0, 22.0, 49.0, 1.50, 4.59, 1.0, 4.0),
        food("Oatmeal", 68.0, 2.4, 12.0, 1.4, 0.20, 0.24, 2.0, 0.0),
        food("Eggs", 155.0, 13.0, 1.1, 11.0, 0.20, 3.31, 124.0, 0.0),
        food("Salmon", 208.0, 20.0, 0.0, 13.0, 10.00, 3.1, 75.0, 0.0),
        food("Spinach", 23.0, 2.9, 3.6, 0.4, 0.50, 0.07, 79.0, 0.0),
        food("Sweet Potato", 86.0, 1.6, 20.0, 0.1, 0.60, 0.02, 72.0, 6.0),
        food("Quinoa", 120.0, 4.1, 21.0, 1.9, 0.90, 0.23, 5.0, 1.0),
        food("Greek Yogurt", 59.0, 10.0, 3.6, 0.4, 1.20, 0.19, 36.0, 7.0),
        food("Blueberries", 57.0, 0.7, 14.0, 0.3, 0.40, 0.03, 1.0, 10.0),
        food("Brown Rice", 123.0, 2.6, 25.0, 1.0, 0.50, 0.14, 2.0, 0.0),
        food("Avocado", 160.0, 2.0, 9.0, 15.0, 1.50, 2.13, 7.0, 0.0),
        food("Carrots", 41.0, 0.9, 10.0, 0.2, 0.30, 0.03, 69.0, 5.0),
        food("Lentils", 116.0, 9.0, 20.0, 0.4, 0.80, 0.05, 2.0, 0.0),
        food("Turkey", 135.0, 30.0, 0.0, 1.0, 3.00, 0.45, 10.0, 0.0),
        food("Walnuts", 654.0, 15.0, 14.0, 65.0, 1.50, 6.13, 2.0, 1.0),
        food("Orange", 47.0, 0.9, 12.0, 0.1, 0.50, 0.02, 1.0, 9.0),
    ]
}

fn stew_and_steak() -> Vec<RawFood> {
    vec![
        food("Stew", 100.0, 10.0, 10.0, 5.0, 2.00, 1.0, 200.0, 0.0),
        food("Steak", 100.0, 10.0, 10.0, 5.0, 5.00, 1.0, 200.0, 0.0),
    ]
}

#[test]
fn test_apple_and_chicken_cannot_meet_carb_floor() {
    // 217 kcal needs 18 g carbs; one apple supplies 14 g.
    let catalog = vec![
        food("Apple", 52.0, 0.3, 14.0, 0.2, 0.50, 0.03, 1.0, 10.0),
        food("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 3.00, 1.02, 70.0, 0.0),
    ];
    let request = OptimizationRequest::new(217);

    let result = optimize(&catalog, &request);
    assert!(matches!(result, Err(MacroError::Infeasible)));
}

#[test]
fn test_cheaper_identical_food_wins() {
    let result = optimize(&stew_and_steak(), &OptimizationRequest::new(100)).unwrap();

    assert_eq!(result.selected_foods.len(), 1);
    assert_eq!(result.selected_foods[0].name, "Stew");
    assert_float_absolute_eq!(result.selected_foods[0].servings, 1.0, 1e-9);
    assert_eq!(result.servings_of("Steak"), 0.0);
    assert_eq!(result.total_price, 2.00);
}

#[test]
fn test_sugar_cap_binds_and_calories_follow_macros() {
    let mut catalog = stew_and_steak();
    catalog.push(food("Candy", 100.0, 10.0, 10.0, 5.0, 0.50, 1.0, 10.0, 30.0));

    let result = optimize(&catalog, &OptimizationRequest::new(100)).unwrap();

    let names: Vec<&str> = result
        .selected_foods
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Candy", "Stew"]);
    assert_float_absolute_eq!(result.servings_of("Candy"), 25.0 / 30.0, 1e-6);
    assert_float_absolute_eq!(result.servings_of("Stew"), 5.0 / 30.0, 1e-6);

    assert_eq!(result.total_price, 0.75);
    assert_eq!(result.total_protein, 10.0);
    assert_eq!(result.total_carbs, 10.0);
    assert_eq!(result.total_fats, 5.0);
    // 4*10 + 4*10 + 9*5, not the 100 kcal the catalog lists.
    assert_eq!(result.total_calories, 125.0);
}

#[test]
fn test_package_records_are_split_into_servings() {
    let mut stew_pot = food("Stew Pot", 400.0, 40.0, 40.0, 20.0, 8.00, 4.0, 800.0, 0.0);
    stew_pot.servings = Some(4);
    let mut broken = food("Mystery Box", 100.0, 10.0, 10.0, 5.0, 0.10, 1.0, 10.0, 0.0);
    broken.servings = None;
    let catalog = vec![
        stew_pot,
        broken,
        food("Steak", 100.0, 10.0, 10.0, 5.0, 5.00, 1.0, 200.0, 0.0),
    ];

    let result = optimize(&catalog, &OptimizationRequest::new(100)).unwrap();

    assert_eq!(result.selected_foods.len(), 1);
    assert_eq!(result.selected_foods[0].name, "Stew Pot");
    assert_float_absolute_eq!(result.selected_foods[0].servings, 1.0, 1e-9);
    assert_eq!(result.total_price, 2.00);
    assert_eq!(result.servings_of("Mystery Box"), 0.0);
}

#[test]
fn test_standard_catalog_daily_plan() {
    let catalog = standard_catalog();
    let request = OptimizationRequest::new(2000)
        .with_tolerance(100, 100)
        .with_max_servings(3);

    let result = optimize(&catalog, &request).unwrap();
    let targets = macro_targets(2000);

    assert_eq!(result.total_price, 10.97);
    assert!(result.total_protein >= f64::from(targets.protein_g) - 0.01);
    assert!(result.total_carbs >= f64::from(targets.carbs_g) - 0.01);
    assert!(result.total_fats >= f64::from(targets.fats_g) - 0.01);

    let mut calories = 0.0;
    let mut sodium = 0.0;
    let mut sugar = 0.0;
    for selected in &result.selected_foods {
        assert!(selected.servings > 0.0 && selected.servings <= 3.0);
        let raw = catalog.iter().find(|f| f.name == selected.name).unwrap();
        calories += raw.calories_per_package * selected.servings;
        sodium += raw.sodium_per_package * selected.servings;
        sugar += raw.added_sugars_per_package * selected.servings;
    }
    assert!((1900.0 - 1e-6..=2100.0 + 1e-6).contains(&calories));
    assert!(sodium <= 1500.0 + 1e-6);
    assert!(sugar <= 25.0 + 1e-6);

    for pair in result.selected_foods.windows(2) {
        assert!(pair[0].servings >= pair[1].servings);
    }
}

#[test]
fn test_standard_catalog_other_targets() {
    let catalog = standard_catalog();

    let lighter = OptimizationRequest::new(1500)
        .with_tolerance(100, 100)
        .with_max_servings(3);
    assert_eq!(optimize(&catalog, &lighter).unwrap().total_price, 7.14);

    let exact = OptimizationRequest::new(2000).with_max_servings(3);
    assert_eq!(optimize(&catalog, &exact).unwrap().total_price, 11.16);
}

#[test]
fn test_single_serving_cap_is_infeasible_for_full_day() {
    let request = OptimizationRequest::new(2000)
        .with_tolerance(100, 100)
        .with_max_servings(1);
    let result = optimize(&standard_catalog(), &request);
    assert!(matches!(result, Err(MacroError::Infeasible)));
}

#[test]
fn test_repeated_runs_are_identical() {
    let catalog = standard_catalog();
    let request = OptimizationRequest::new(1800)
        .with_tolerance(50, 150)
        .with_max_servings(2);

    let first = optimize(&catalog, &request).unwrap();
    let second = optimize(&catalog, &request).unwrap();
    assert!(!first.selected_foods.is_empty());

    let totals = |r: &OptimizationResult| {
        [
            r.total_protein,
            r.total_carbs,
            r.total_fats,
            r.total_calories,
            r.total_price,
        ]
        .map(f64::to_bits)
    };
    assert_eq!(totals(&first), totals(&second));

    assert_eq!(first.selected_foods.len(), second.selected_foods.len());
    for (a, b) in first.selected_foods.iter().zip(&second.selected_foods) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.vendor, b.vendor);
        assert_eq!(a.servings.to_bits(), b.servings.to_bits());
    }
}

#[test]
fn test_invalid_records_are_ignored() {
    let mut catalog = stew_and_steak();
    catalog.push(food("Free Lunch", 100.0, 10.0, 10.0, 5.0, -1.0, 1.0, 10.0, 0.0));
    catalog.push(food("Void", f64::NAN, 10.0, 10.0, 5.0, 0.01, 1.0, 10.0, 0.0));

    let result = optimize(&catalog, &OptimizationRequest::new(100)).unwrap();
    assert_eq!(result.selected_foods.len(), 1);
    assert_eq!(result.selected_foods[0].name, "Stew");
}
