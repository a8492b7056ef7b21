pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod solver;

pub use error::{MacroError, Result};
pub use models::{FoodItem, OptimizationRequest, OptimizationResult, RawFood, SelectedFood};
pub use planner::optimize;
