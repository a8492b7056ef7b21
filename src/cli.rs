use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::CatalogFilter;
use crate::models::OptimizationRequest;

/// MacroSaver: find the cheapest foods that hit your calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "macro_saver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food catalog (JSON, or CSV by extension).
    #[arg(short, long, global = true, default_value = "data/foods.json")]
    pub file: PathBuf,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose the cheapest servings meeting a calorie target.
    Optimize(OptimizeArgs),

    /// List catalog foods, optionally by price, meal type or name.
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Target daily calories. Prompted for when omitted.
    #[arg(short, long)]
    pub calories: Option<u32>,

    /// Symmetric calorie tolerance.
    #[arg(short, long, default_value_t = 100)]
    pub tolerance: u32,

    /// Allowed calories below target (overrides --tolerance).
    #[arg(long)]
    pub lower_tolerance: Option<u32>,

    /// Allowed calories above target (overrides --tolerance).
    #[arg(long)]
    pub upper_tolerance: Option<u32>,

    /// Maximum servings of any single food.
    #[arg(short, long, default_value_t = 3)]
    pub max_servings: u32,

    /// Only consider foods whose package price is at most this.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only consider foods of this meal type.
    #[arg(long)]
    pub meal_type: Option<String>,

    /// Leave a food out (repeatable, fuzzy matched).
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Print the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Also write the result to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl OptimizeArgs {
    /// Request for `target_calories` using this invocation's tolerances and cap.
    pub fn request(&self, target_calories: u32) -> OptimizationRequest {
        OptimizationRequest::new(target_calories)
            .with_tolerance(
                self.lower_tolerance.unwrap_or(self.tolerance),
                self.upper_tolerance.unwrap_or(self.tolerance),
            )
            .with_max_servings(self.max_servings)
    }

    /// Catalog filter with `exclude` already resolved to catalog names.
    pub fn filter(&self, exclude: Vec<String>) -> CatalogFilter {
        CatalogFilter {
            max_price: self.max_price,
            meal_type: self.meal_type.clone(),
            exclude,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Only foods whose package price is at most this.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only foods of this meal type.
    #[arg(long)]
    pub meal_type: Option<String>,

    /// Fuzzy name search.
    #[arg(short, long)]
    pub name: Option<String>,
}
