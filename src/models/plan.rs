use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_MAX_SERVINGS;

/// Parameters for one optimization call.
///
/// The acceptable calorie band is
/// `[target_calories - lower_tolerance, target_calories + upper_tolerance]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub target_calories: u32,
    pub lower_tolerance: u32,
    pub upper_tolerance: u32,
    pub max_servings_per_item: u32,
}

impl OptimizationRequest {
    /// Request with zero tolerance and the default serving cap.
    pub fn new(target_calories: u32) -> Self {
        Self {
            target_calories,
            lower_tolerance: 0,
            upper_tolerance: 0,
            max_servings_per_item: DEFAULT_MAX_SERVINGS,
        }
    }

    pub fn with_tolerance(mut self, lower: u32, upper: u32) -> Self {
        self.lower_tolerance = lower;
        self.upper_tolerance = upper;
        self
    }

    pub fn with_max_servings(mut self, max_servings_per_item: u32) -> Self {
        self.max_servings_per_item = max_servings_per_item;
        self
    }

    /// Lower edge of the calorie band. May be negative for wide tolerances.
    pub fn min_calories(&self) -> f64 {
        f64::from(self.target_calories) - f64::from(self.lower_tolerance)
    }

    pub fn max_calories(&self) -> f64 {
        f64::from(self.target_calories) + f64::from(self.upper_tolerance)
    }
}

/// One food chosen by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFood {
    pub name: String,
    pub servings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

/// Outcome of a successful optimization.
///
/// Totals are rounded half-up to two decimals; `selected_foods` is ordered by
/// descending servings, ties in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
    pub total_calories: f64,
    pub total_price: f64,
    pub selected_foods: Vec<SelectedFood>,
}

impl OptimizationResult {
    /// Servings chosen for `name`, or 0.0 when the food was not selected.
    pub fn servings_of(&self, name: &str) -> f64 {
        self.selected_foods
            .iter()
            .filter(|s| s.name == name)
            .map(|s| s.servings)
            .sum()
    }
}
