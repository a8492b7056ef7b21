pub mod prompts;
pub mod render;

pub use prompts::{
    collect_request, prompt_exclusions, prompt_max_servings, prompt_target_calories,
    prompt_tolerance, prompt_yes_no,
};
pub use render::{display_food_list, display_optimization_result};
