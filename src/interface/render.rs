use crate::models::{OptimizationRequest, OptimizationResult, RawFood};

/// Display an optimization result in a formatted table.
pub fn display_optimization_result(request: &OptimizationRequest, result: &OptimizationResult) {
    if result.selected_foods.is_empty() {
        println!("No foods selected.");
        return;
    }

    println!();
    println!(
        "=== Cheapest plan for {} kcal ({:.0}-{:.0}) ===",
        request.target_calories,
        request.min_calories().max(0.0),
        request.max_calories()
    );
    println!();

    let max_name_len = result
        .selected_foods
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(10);

    for (i, food) in result.selected_foods.iter().enumerate() {
        let vendor = food
            .vendor
            .as_ref()
            .map(|v| format!("  ({})", v))
            .unwrap_or_default();

        println!(
            "{:>3}. {:<width$} - {:>6.2} servings{}",
            i + 1,
            food.name,
            food.servings,
            vendor,
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals ---");
    println!("Protein:  {:.2} g", result.total_protein);
    println!("Carbs:    {:.2} g", result.total_carbs);
    println!("Fats:     {:.2} g", result.total_fats);
    println!("Calories: {:.2} kcal", result.total_calories);
    println!("Price:    ${:.2}", result.total_price);
    println!();
}

/// Display a simple list of catalog records.
pub fn display_food_list(foods: &[&RawFood], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let meal = food
            .meal_type
            .as_ref()
            .map(|m| format!(" [{}]", m))
            .unwrap_or_default();

        println!(
            "  {}{} - ${:.2} for {} serving(s), {} cal, P:{} C:{} F:{}",
            food.name,
            meal,
            food.price_per_package,
            food.servings.unwrap_or(0),
            food.calories_per_package,
            food.protein_per_package,
            food.carbs_per_package,
            food.fats_per_package
        );
    }

    println!();
}
