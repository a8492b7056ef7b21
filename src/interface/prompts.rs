use dialoguer::{Confirm, Input, Select};

use crate::catalog::FoodCatalog;
use crate::error::{MacroError, Result};
use crate::models::OptimizationRequest;

fn parse_count(input: &str, what: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| MacroError::InvalidInput(format!("Invalid {}: '{}'", what, input.trim())))
}

/// Prompt for the daily calorie target.
pub fn prompt_target_calories() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("What is your daily calorie target?")
        .default("2000".to_string())
        .interact_text()?;

    let target = parse_count(&input, "calorie target")?;
    if target == 0 {
        return Err(MacroError::InvalidInput(
            "Calorie target must be positive".to_string(),
        ));
    }

    Ok(target)
}

/// Prompt for how far total calories may stray from the target.
pub fn prompt_tolerance(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many calories above or below the target are acceptable?")
        .default(default.to_string())
        .interact_text()?;

    parse_count(&input, "tolerance")
}

/// Prompt for the per-food serving cap.
pub fn prompt_max_servings(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("At most how many servings of any one food?")
        .default(default.to_string())
        .interact_text()?;

    let max = parse_count(&input, "serving cap")?;
    if max == 0 {
        return Err(MacroError::InvalidInput(
            "Serving cap must be at least 1".to_string(),
        ));
    }

    Ok(max)
}

/// How a typed exclusion relates to the catalog.
#[derive(Debug, PartialEq)]
enum Exclusion<'a> {
    Resolved(String),
    Ambiguous(Vec<&'a str>),
    Unknown,
}

/// Same resolution as `--exclude`, falling back to suggestions for the user.
fn lookup_exclusion<'a>(catalog: &'a FoodCatalog, input: &str) -> Exclusion<'a> {
    match catalog.resolve_name(input) {
        Ok(name) => Exclusion::Resolved(name),
        Err(_) => {
            let offered = catalog.suggestions(input);
            if offered.is_empty() {
                Exclusion::Unknown
            } else {
                Exclusion::Ambiguous(offered)
            }
        }
    }
}

/// Ask which suggestion was meant; `None` when the user declines them all.
fn choose_suggestion(offered: &[&str]) -> Result<Option<String>> {
    if let [only] = offered {
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", only))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| only.to_string()));
    }

    let mut items: Vec<&str> = offered.to_vec();
    items.push("None of these");

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(offered.get(selection).map(|name| name.to_string()))
}

/// Prompt for foods to leave out until an empty line.
pub fn prompt_exclusions(catalog: &FoodCatalog) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Exclude a food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let chosen = match lookup_exclusion(catalog, input) {
            Exclusion::Resolved(name) => Some(name),
            Exclusion::Ambiguous(offered) => choose_suggestion(&offered)?,
            Exclusion::Unknown => {
                println!("No matching food found for '{}'", input);
                None
            }
        };

        if let Some(name) = chosen {
            println!("Excluded: {}", name);
            excluded.push(name);
        }
    }

    Ok(excluded)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through a full request plus exclusions.
pub fn collect_request(
    catalog: &FoodCatalog,
    default_tolerance: u32,
    default_max_servings: u32,
) -> Result<(OptimizationRequest, Vec<String>)> {
    let target = prompt_target_calories()?;
    let tolerance = prompt_tolerance(default_tolerance)?;
    let max_servings = prompt_max_servings(default_max_servings)?;

    let excluded = if prompt_yes_no("Leave any foods out?", false)? {
        prompt_exclusions(catalog)?
    } else {
        Vec::new()
    };

    let request = OptimizationRequest::new(target)
        .with_tolerance(tolerance, tolerance)
        .with_max_servings(max_servings);

    Ok((request, excluded))
}
