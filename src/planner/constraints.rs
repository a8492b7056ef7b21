use crate::models::{FoodItem, OptimizationRequest};
use crate::planner::constants::*;
use crate::solver::{Constraint, LinearProgram};

/// Minimum grams of each macro implied by a calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

/// Split `target_calories` 30/35/35 into whole grams (truncated).
pub fn macro_targets(target_calories: u32) -> MacroTargets {
    let calories = f64::from(target_calories);
    MacroTargets {
        protein_g: (calories * PERCENTAGE_PROTEIN / CALORIES_PER_GRAM_PROTEIN).floor() as u32,
        carbs_g: (calories * PERCENTAGE_CARBS / CALORIES_PER_GRAM_CARBS).floor() as u32,
        fats_g: (calories * PERCENTAGE_FATS / CALORIES_PER_GRAM_FATS).floor() as u32,
    }
}

/// What a row of the diet model enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    MinCalories,
    MaxCalories,
    MinProtein,
    MinCarbs,
    MinFats,
    MaxSaturatedFat,
    MaxSodium,
    MaxAddedSugars,
    /// Serving cap for the catalog item at this index.
    ServingCap(usize),
}

/// A diet LP together with the meaning of each row.
#[derive(Debug, Clone)]
pub struct DietModel {
    pub program: LinearProgram,
    /// Parallel to `program.constraints()`.
    pub kinds: Vec<ConstraintKind>,
    pub macros: MacroTargets,
}

impl DietModel {
    /// The row enforcing `kind`, if present.
    pub fn row(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.kinds
            .iter()
            .position(|k| *k == kind)
            .map(|i| &self.program.constraints()[i])
    }

    fn push(&mut self, kind: ConstraintKind, constraint: Constraint) {
        self.program.add_constraint(constraint);
        self.kinds.push(kind);
    }
}

/// Build the cost-minimizing diet LP over one variable per item.
///
/// Pure data transformation; nothing is solved here.
pub fn build_model(items: &[FoodItem], request: &OptimizationRequest) -> DietModel {
    let column = |field: fn(&FoodItem) -> f64| -> Vec<f64> { items.iter().map(field).collect() };
    let target = f64::from(request.target_calories);
    let macros = macro_targets(request.target_calories);

    let mut model = DietModel {
        program: LinearProgram::new(column(|f| f.price_per_serving)),
        kinds: Vec::with_capacity(8 + items.len()),
        macros,
    };

    let calories = column(|f| f.calories_per_serving);
    model.push(
        ConstraintKind::MinCalories,
        Constraint::greater_or_equal(calories.clone(), request.min_calories()),
    );
    model.push(
        ConstraintKind::MaxCalories,
        Constraint::less_or_equal(calories, request.max_calories()),
    );

    model.push(
        ConstraintKind::MinProtein,
        Constraint::greater_or_equal(column(|f| f.protein_g), f64::from(macros.protein_g)),
    );
    model.push(
        ConstraintKind::MinCarbs,
        Constraint::greater_or_equal(column(|f| f.carbs_g), f64::from(macros.carbs_g)),
    );
    model.push(
        ConstraintKind::MinFats,
        Constraint::greater_or_equal(column(|f| f.fats_g), f64::from(macros.fats_g)),
    );

    // Grams against a calorie-scaled bound; see SATURATED_FAT_CALORIE_FACTOR.
    model.push(
        ConstraintKind::MaxSaturatedFat,
        Constraint::less_or_equal(
            column(|f| f.saturated_fat_g),
            target * SATURATED_FAT_CALORIE_FACTOR,
        ),
    );
    model.push(
        ConstraintKind::MaxSodium,
        Constraint::less_or_equal(column(|f| f.sodium_mg), MAX_SODIUM_MG),
    );
    model.push(
        ConstraintKind::MaxAddedSugars,
        Constraint::less_or_equal(column(|f| f.added_sugars_g), MAX_ADDED_SUGARS_G),
    );

    let cap = f64::from(request.max_servings_per_item);
    for i in 0..items.len() {
        let mut unit = vec![0.0; items.len()];
        unit[i] = 1.0;
        model.push(
            ConstraintKind::ServingCap(i),
            Constraint::less_or_equal(unit, cap),
        );
    }

    model
}
