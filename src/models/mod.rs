pub mod food;
pub mod plan;

pub use food::{FoodItem, RawFood};
pub use plan::{OptimizationRequest, OptimizationResult, SelectedFood};
