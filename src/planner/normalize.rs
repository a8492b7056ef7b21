use tracing::{debug, trace};

use crate::models::{FoodItem, RawFood};

/// Convert one raw record to a per-serving item.
///
/// Returns `None` when the serving count is missing or not positive, or when
/// any numeric value is negative or not finite.
pub fn normalize_food(raw: &RawFood) -> Option<FoodItem> {
    let servings = match raw.servings {
        Some(count) if count > 0 => f64::from(count),
        _ => return None,
    };

    if raw
        .numeric_fields()
        .iter()
        .any(|v| !v.is_finite() || *v < 0.0)
    {
        return None;
    }

    Some(FoodItem {
        name: raw.name.clone(),
        price_per_serving: raw.price_per_package / servings,
        calories_per_serving: raw.calories_per_package / servings,
        protein_g: raw.protein_per_package / servings,
        carbs_g: raw.carbs_per_package / servings,
        fats_g: raw.fats_per_package / servings,
        saturated_fat_g: raw.saturated_fat_per_package / servings,
        sodium_mg: raw.sodium_per_package / servings,
        added_sugars_g: raw.added_sugars_per_package / servings,
        vendor: raw.vendor.clone(),
    })
}

/// Normalize a catalog, preserving order and dropping malformed records.
///
/// The input is only borrowed; callers sharing one catalog across threads see
/// no mutation.
pub fn normalize_catalog(records: &[RawFood]) -> Vec<FoodItem> {
    records
        .iter()
        .filter_map(|raw| {
            let item = normalize_food(raw);
            match &item {
                Some(item) => {
                    debug_assert!(item.is_valid());
                    trace!(
                        item = %item.debug_string(),
                        macro_kcal = item.macro_calories(),
                        "normalized"
                    );
                }
                None => {
                    debug!(food = %raw.name, servings = ?raw.servings, "excluding malformed record");
                }
            }
            item
        })
        .collect()
}
