use clap::Parser;
use std::path::Path;
use tracing::{error, info, warn};

use macro_saver_rs::catalog::{load_catalog, write_result_csv, CatalogFilter, FoodCatalog};
use macro_saver_rs::cli::{Cli, Command, OptimizeArgs, SearchArgs};
use macro_saver_rs::error::{MacroError, Result};
use macro_saver_rs::interface::{collect_request, display_food_list, display_optimization_result};
use macro_saver_rs::logging::LoggingConfig;
use macro_saver_rs::models::RawFood;
use macro_saver_rs::planner::optimize;

fn main() {
    if let Err(e) = run() {
        if !e.is_client_error() {
            error!(error = %e, "macro_saver failed");
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::from_env(cli.verbose).init();

    let catalog = open_catalog(&cli.file)?;

    match &cli.command {
        Command::Optimize(args) => cmd_optimize(&catalog, args),
        Command::Search(args) => cmd_search(&catalog, args),
    }
}

fn open_catalog(path: &Path) -> Result<FoodCatalog> {
    if !path.exists() {
        return Err(MacroError::InvalidInput(format!(
            "Food catalog not found: {}",
            path.display()
        )));
    }

    let foods = load_catalog(path)?;
    info!(path = %path.display(), records = foods.len(), "catalog loaded");
    Ok(FoodCatalog::new(foods))
}

/// Solve for the cheapest plan and report it.
fn cmd_optimize(catalog: &FoodCatalog, args: &OptimizeArgs) -> Result<()> {
    let (request, excluded) = match args.calories {
        Some(calories) => {
            let excluded = args
                .exclude
                .iter()
                .map(|name| catalog.resolve_name(name))
                .collect::<Result<Vec<_>>>()?;
            (args.request(calories), excluded)
        }
        None => {
            println!("Loaded {} foods", catalog.len());
            println!();
            collect_request(catalog, args.tolerance, args.max_servings)?
        }
    };

    let foods = catalog.filtered(&args.filter(excluded));
    info!(
        candidates = foods.len(),
        target_calories = request.target_calories,
        "optimizing"
    );

    let result = match optimize(&foods, &request) {
        Ok(result) => result,
        Err(e @ (MacroError::Infeasible | MacroError::NonConvergence { .. })) => {
            warn!(
                target_calories = request.target_calories,
                max_servings = request.max_servings_per_item,
                error = %e,
                "no plan found"
            );
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_optimization_result(&request, &result);
    }

    if let Some(path) = &args.csv {
        write_result_csv(path, &result)?;
        println!("Result written to {}", path.display());
    }

    Ok(())
}

/// List catalog records matching price, meal type and name.
fn cmd_search(catalog: &FoodCatalog, args: &SearchArgs) -> Result<()> {
    let filter = CatalogFilter {
        max_price: args.max_price,
        meal_type: args.meal_type.clone(),
        exclude: Vec::new(),
    };

    let foods: Vec<&RawFood> = match &args.name {
        Some(query) => catalog
            .find_similar(query)
            .into_iter()
            .map(|(food, _)| food)
            .filter(|food| filter.matches(food))
            .collect(),
        None => match args.max_price {
            Some(max) => catalog
                .under_price(max)
                .into_iter()
                .filter(|food| filter.matches(food))
                .collect(),
            None => catalog.all().iter().filter(|f| filter.matches(f)).collect(),
        },
    };

    let title = match args.max_price {
        Some(max) => format!("Foods under ${:.2}", max),
        None => "Foods".to_string(),
    };
    display_food_list(&foods, &title);

    if args.meal_type.is_none() && foods.is_empty() {
        let types = catalog.meal_types();
        if !types.is_empty() {
            println!("Known meal types: {}", types.join(", "));
        }
    }

    Ok(())
}
