pub mod aggregate;
pub mod constants;
pub mod constraints;
pub mod normalize;
pub mod optimize;

pub use aggregate::{aggregate, clamp_servings, round_half_up};
pub use constants::*;
pub use constraints::{build_model, macro_targets, ConstraintKind, DietModel, MacroTargets};
pub use normalize::{normalize_catalog, normalize_food};
pub use optimize::{optimize, optimize_with};
