/// Energy density of protein, kcal per gram.
pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate, kcal per gram.
pub const CALORIES_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat, kcal per gram.
pub const CALORIES_PER_GRAM_FATS: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split (share of target calories)
// ─────────────────────────────────────────────────────────────────────────────

pub const PERCENTAGE_PROTEIN: f64 = 0.30;
pub const PERCENTAGE_CARBS: f64 = 0.35;
pub const PERCENTAGE_FATS: f64 = 0.35;

// ─────────────────────────────────────────────────────────────────────────────
// Upper limits
// ─────────────────────────────────────────────────────────────────────────────

/// Saturated-fat cap as a factor of target calories.
///
/// NOTE: the cap compares grams against a calorie-scaled number (10% of kcal,
/// not 10% of kcal converted to grams). Kept as-is for compatibility with
/// existing plans; see DESIGN.md before changing it.
pub const SATURATED_FAT_CALORIE_FACTOR: f64 = 0.10;

/// Daily sodium cap in milligrams.
pub const MAX_SODIUM_MG: f64 = 1500.0;

/// Daily added-sugar cap in grams.
pub const MAX_ADDED_SUGARS_G: f64 = 25.0;

/// Serving cap per item when the caller does not choose one.
pub const DEFAULT_MAX_SERVINGS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Numerics
// ─────────────────────────────────────────────────────────────────────────────

/// Servings below this are reported as exactly zero.
pub const SERVING_EPSILON: f64 = 1e-6;

/// Decimal places kept in reported totals.
pub const TOTAL_DECIMALS: u32 = 2;
