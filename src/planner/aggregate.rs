use crate::models::{FoodItem, OptimizationResult, SelectedFood};
use crate::planner::constants::*;

/// Round to `places` decimals, halves away from zero.
///
/// Works on the shortest decimal representation of `value`, so 1.005 rounds
/// to 1.01 even though its binary value sits just below 1.005.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    // Beyond 2^53 there is no fractional part left to round.
    if !value.is_finite() || value.abs() >= 9.0e15 {
        return value;
    }

    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let places = places as usize;
    if frac_part.len() <= places {
        return value;
    }

    // `repr` holds only ASCII digits and one '.': f64 Display never uses an
    // exponent. Below 9e15 there are at most 16 integer digits.
    let mut scaled = int_part
        .bytes()
        .chain(frac_part[..places].bytes())
        .fold(0_u128, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u128::from(digit - b'0'))
        });
    if frac_part.as_bytes()[places] >= b'5' {
        scaled += 1;
    }

    let rounded = scaled as f64 / 10_f64.powi(places as i32);
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// Snap solver output onto `[0, max_servings]`: tiny values become exactly
/// zero and round-off above the cap is removed.
pub fn clamp_servings(values: &[f64], max_servings: u32) -> Vec<f64> {
    let cap = f64::from(max_servings);
    values
        .iter()
        .map(|&v| if v < SERVING_EPSILON { 0.0 } else { v.min(cap) })
        .collect()
}

/// Turn per-item servings into the reported result.
///
/// `servings` is index-aligned with `items`. Macro and price totals sum over
/// every item; total calories are derived from the rounded macros (4/4/9).
pub fn aggregate(items: &[FoodItem], servings: &[f64]) -> OptimizationResult {
    let sum = |field: fn(&FoodItem) -> f64| -> f64 {
        items
            .iter()
            .zip(servings)
            .map(|(item, x)| field(item) * x)
            .sum()
    };

    let total_protein = round_half_up(sum(|f| f.protein_g), TOTAL_DECIMALS);
    let total_carbs = round_half_up(sum(|f| f.carbs_g), TOTAL_DECIMALS);
    let total_fats = round_half_up(sum(|f| f.fats_g), TOTAL_DECIMALS);
    let total_price = round_half_up(sum(|f| f.price_per_serving), TOTAL_DECIMALS);
    let total_calories = round_half_up(
        CALORIES_PER_GRAM_PROTEIN * total_protein
            + CALORIES_PER_GRAM_CARBS * total_carbs
            + CALORIES_PER_GRAM_FATS * total_fats,
        TOTAL_DECIMALS,
    );

    let mut selected_foods: Vec<SelectedFood> = items
        .iter()
        .zip(servings)
        .filter(|(_, x)| **x > SERVING_EPSILON)
        .map(|(item, x)| SelectedFood {
            name: item.name.clone(),
            servings: *x,
            vendor: item.vendor.clone(),
        })
        .collect();

    // Stable: equal servings keep catalog order.
    selected_foods.sort_by(|a, b| b.servings.total_cmp(&a.servings));

    OptimizationResult {
        total_protein,
        total_carbs,
        total_fats,
        total_calories,
        total_price,
        selected_foods,
    }
}
