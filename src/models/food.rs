use serde::{Deserialize, Serialize};

/// A food record as supplied by the catalog collaborator.
///
/// Price and nutrition describe the whole package; `servings` says how many
/// servings the package holds. Sources that already store per-serving values
/// use `servings = 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFood {
    pub name: String,

    #[serde(default)]
    pub servings: Option<i32>,

    pub price_per_package: f64,

    pub calories_per_package: f64,

    pub protein_per_package: f64,

    pub carbs_per_package: f64,

    pub fats_per_package: f64,

    #[serde(default)]
    pub saturated_fat_per_package: f64,

    #[serde(default)]
    pub sodium_per_package: f64,

    #[serde(default)]
    pub added_sugars_per_package: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
}

impl RawFood {
    /// Build a single-serving record. Optional fields start empty.
    #[allow(clippy::too_many_arguments)]
    pub fn per_serving(
        name: &str,
        price: f64,
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
        saturated_fat: f64,
        sodium: f64,
        added_sugars: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            servings: Some(1),
            price_per_package: price,
            calories_per_package: calories,
            protein_per_package: protein,
            carbs_per_package: carbs,
            fats_per_package: fats,
            saturated_fat_per_package: saturated_fat,
            sodium_per_package: sodium,
            added_sugars_per_package: added_sugars,
            vendor: None,
            meal_type: None,
        }
    }

    /// All numeric package values, in declaration order.
    pub fn numeric_fields(&self) -> [f64; 8] {
        [
            self.price_per_package,
            self.calories_per_package,
            self.protein_per_package,
            self.carbs_per_package,
            self.fats_per_package,
            self.saturated_fat_per_package,
            self.sodium_per_package,
            self.added_sugars_per_package,
        ]
    }

    /// Case-insensitive name key for lookups.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Nutrition and price for exactly one serving.
///
/// Values are compared by field equality; names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub price_per_serving: f64,
    pub calories_per_serving: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub saturated_fat_g: f64,
    pub sodium_mg: f64,
    pub added_sugars_g: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl FoodItem {
    /// Energy implied by the macros (4/4/9 kcal per gram).
    #[inline]
    pub fn macro_calories(&self) -> f64 {
        4.0 * self.protein_g + 4.0 * self.carbs_g + 9.0 * self.fats_g
    }

    /// Every numeric field is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.price_per_serving,
            self.calories_per_serving,
            self.protein_g,
            self.carbs_g,
            self.fats_g,
            self.saturated_fat_g,
            self.sodium_mg,
            self.added_sugars_g,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: ${:.2}, {} cal, P:{} C:{} F:{} SF:{} Na:{} S:{}",
            self.name,
            self.price_per_serving,
            self.calories_per_serving,
            self.protein_g,
            self.carbs_g,
            self.fats_g,
            self.saturated_fat_g,
            self.sodium_mg,
            self.added_sugars_g
        )
    }
}
