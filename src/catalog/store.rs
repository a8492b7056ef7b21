use strsim::jaro_winkler;

use crate::error::{MacroError, Result};
use crate::models::RawFood;

/// Minimum Jaro-Winkler score for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Score above which a single fuzzy match is accepted without asking.
pub const FUZZY_AUTO_ACCEPT: f64 = 0.9;

/// Most alternatives offered for an unresolved name.
pub const MAX_SUGGESTIONS: usize = 5;

/// Criteria applied to the catalog before it is handed to the optimizer.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Keep records whose package price is at most this.
    pub max_price: Option<f64>,
    /// Keep records of this meal type (case-insensitive).
    pub meal_type: Option<String>,
    /// Drop records with these names (case-insensitive, exact).
    pub exclude: Vec<String>,
}

impl CatalogFilter {
    pub fn matches(&self, food: &RawFood) -> bool {
        if let Some(max) = self.max_price {
            if food.price_per_package > max {
                return false;
            }
        }

        if let Some(meal) = &self.meal_type {
            let same_meal = food
                .meal_type
                .as_ref()
                .is_some_and(|m| m.eq_ignore_ascii_case(meal));
            if !same_meal {
                return false;
            }
        }

        !self
            .exclude
            .iter()
            .any(|name| name.to_lowercase() == food.key())
    }
}

/// Read-only, ordered collection of raw food records.
///
/// The optimizer never sees this type; callers filter here and hand the
/// resulting records to [`crate::planner::optimize`].
pub struct FoodCatalog {
    foods: Vec<RawFood>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<RawFood>) -> Self {
        Self { foods }
    }

    pub fn all(&self) -> &[RawFood] {
        &self.foods
    }

    /// First record with this name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&RawFood> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Records whose names resemble `query`, best match first.
    pub fn find_similar(&self, query: &str) -> Vec<(&RawFood, f64)> {
        let query = query.to_lowercase();
        let mut candidates: Vec<(&RawFood, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// Resolve a user-typed name to a catalog name.
    ///
    /// Exact (case-insensitive) matches win; otherwise the best fuzzy match is
    /// accepted when it scores above [`FUZZY_AUTO_ACCEPT`].
    pub fn resolve_name(&self, query: &str) -> Result<String> {
        if let Some(food) = self.find(query) {
            return Ok(food.name.clone());
        }

        match self.find_similar(query).first() {
            Some((food, score)) if *score > FUZZY_AUTO_ACCEPT => Ok(food.name.clone()),
            _ => Err(MacroError::FoodNotFound(query.to_string())),
        }
    }

    /// Names to offer when [`Self::resolve_name`] fails, best first.
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        self.find_similar(query)
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(food, _)| food.name.as_str())
            .collect()
    }

    /// Records whose package price is at most `max_price`.
    pub fn under_price(&self, max_price: f64) -> Vec<&RawFood> {
        self.foods
            .iter()
            .filter(|f| f.price_per_package <= max_price)
            .collect()
    }

    /// Distinct meal types, sorted.
    pub fn meal_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .foods
            .iter()
            .filter_map(|f| f.meal_type.clone())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    /// Copy of the records passing `filter`, in catalog order.
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<RawFood> {
        self.foods
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FoodCatalog {
        let mut oatmeal = RawFood::per_serving("Oatmeal", 0.20, 68.0, 2.4, 12.0, 1.4, 0.24, 2.0, 0.0);
        oatmeal.meal_type = Some("Breakfast".to_string());
        let mut salmon = RawFood::per_serving("Salmon", 10.0, 208.0, 20.0, 0.0, 13.0, 3.1, 75.0, 0.0);
        salmon.meal_type = Some("Dinner".to_string());
        let mut eggs = RawFood::per_serving("Eggs", 0.20, 155.0, 13.0, 1.1, 11.0, 3.31, 124.0, 0.0);
        eggs.meal_type = Some("breakfast".to_string());

        FoodCatalog::new(vec![
            oatmeal,
            salmon,
            eggs,
            RawFood::per_serving("Sweet Potato", 0.60, 86.0, 1.6, 20.0, 0.1, 0.02, 72.0, 6.0),
        ])
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.find("salmon").is_some());
        assert!(catalog.find("SALMON").is_some());
        assert!(catalog.find("tuna").is_none());
    }

    #[test]
    fn test_under_price() {
        let catalog = sample_catalog();
        let cheap: Vec<&str> = catalog
            .under_price(0.60)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(cheap, vec!["Oatmeal", "Eggs", "Sweet Potato"]);
    }

    #[test]
    fn test_find_similar_ranks_best_first() {
        let catalog = sample_catalog();
        let matches = catalog.find_similar("sweet potatoe");
        assert!(!matches.is_empty());
        assert_eq!(matches[0].0.name, "Sweet Potato");
    }

    #[test]
    fn test_resolve_name() {
        let catalog = sample_catalog();
        assert_eq!(catalog.resolve_name("eggs").unwrap(), "Eggs");
        assert_eq!(catalog.resolve_name("Sweet Potatos").unwrap(), "Sweet Potato");
        assert!(matches!(
            catalog.resolve_name("Quinoa"),
            Err(MacroError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_suggestions_are_capped_and_ranked() {
        let names = [
            "Bean Soup", "Bean Stew", "Bean Salad", "Bean Chili", "Bean Curry", "Bean Wrap",
            "Bean Dip",
        ];
        let catalog = FoodCatalog::new(
            names
                .iter()
                .map(|n| RawFood::per_serving(n, 1.0, 100.0, 5.0, 15.0, 2.0, 0.3, 50.0, 0.0))
                .collect(),
        );

        let offered = catalog.suggestions("bean s");
        assert_eq!(offered.len(), MAX_SUGGESTIONS);
        let scores: Vec<f64> = offered
            .iter()
            .map(|n| strsim::jaro_winkler(&n.to_lowercase(), "bean s"))
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        assert!(catalog.suggestions("zzz").is_empty());
    }

    #[test]
    fn test_filter_by_meal_type_price_and_exclusions() {
        let catalog = sample_catalog();
        let filter = CatalogFilter {
            max_price: Some(1.0),
            meal_type: Some("BREAKFAST".to_string()),
            exclude: vec!["eggs".to_string()],
        };
        let kept = catalog.filtered(&filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Oatmeal");

        assert_eq!(catalog.filtered(&CatalogFilter::default()).len(), 4);
    }

    #[test]
    fn test_meal_types_sorted_and_distinct() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.meal_types(),
            vec!["Breakfast".to_string(), "Dinner".to_string(), "breakfast".to_string()]
        );
    }
}
