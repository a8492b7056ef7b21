use tracing::{debug, info};

use crate::error::{MacroError, Result};
use crate::models::{OptimizationRequest, OptimizationResult, RawFood};
use crate::planner::aggregate::{aggregate, clamp_servings};
use crate::planner::constraints::build_model;
use crate::planner::normalize::normalize_catalog;
use crate::solver::{solve, SolverOptions};

/// Choose the cheapest servings that meet the request's nutrition targets.
///
/// Runs normalize -> build -> solve -> aggregate with default solver options.
pub fn optimize(catalog: &[RawFood], request: &OptimizationRequest) -> Result<OptimizationResult> {
    optimize_with(catalog, request, &SolverOptions::default())
}

/// [`optimize`] with explicit solver settings.
pub fn optimize_with(
    catalog: &[RawFood],
    request: &OptimizationRequest,
    options: &SolverOptions,
) -> Result<OptimizationResult> {
    if request.target_calories == 0 {
        return Err(MacroError::InvalidInput(
            "target calories must be positive".to_string(),
        ));
    }
    if request.max_servings_per_item == 0 {
        return Err(MacroError::InvalidInput(
            "max servings per item must be positive".to_string(),
        ));
    }

    let items = normalize_catalog(catalog);
    if items.is_empty() {
        return Err(MacroError::InvalidInput(
            "catalog has no usable foods".to_string(),
        ));
    }
    debug!(
        usable = items.len(),
        excluded = catalog.len() - items.len(),
        "catalog normalized"
    );

    let model = build_model(&items, request);
    debug!(
        variables = model.program.num_variables(),
        constraints = model.program.num_constraints(),
        protein_g = model.macros.protein_g,
        carbs_g = model.macros.carbs_g,
        fats_g = model.macros.fats_g,
        "diet model built"
    );

    let solution = solve(&model.program, options)?;
    let servings = clamp_servings(&solution.values, request.max_servings_per_item);
    let result = aggregate(&items, &servings);

    info!(
        target_calories = request.target_calories,
        selected = result.selected_foods.len(),
        total_price = result.total_price,
        pivots = solution.iterations,
        "optimization complete"
    );

    Ok(result)
}
