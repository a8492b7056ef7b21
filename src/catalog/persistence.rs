use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{OptimizationResult, RawFood};

/// Load a catalog, choosing the format from the file extension.
///
/// `.csv` files are read with a header row; anything else is parsed as a JSON
/// array. Record order is preserved and duplicate names are kept.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<RawFood>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        load_csv(path)
    } else {
        load_json(path)
    }
}

/// Load a catalog from a JSON array of records.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Vec<RawFood>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<RawFood> = serde_json::from_str(&content)?;
    Ok(foods)
}

/// Load a catalog from CSV with camelCase headers matching the JSON keys.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawFood>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in rdr.deserialize() {
        let food: RawFood = record?;
        foods.push(food);
    }
    Ok(foods)
}

/// Save a catalog as pretty-printed JSON.
pub fn save_json<P: AsRef<Path>>(path: P, foods: &[RawFood]) -> Result<()> {
    let json = serde_json::to_string_pretty(foods)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the selected foods followed by a TOTAL row.
pub fn write_result_csv<P: AsRef<Path>>(path: P, result: &OptimizationResult) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "food", "vendor", "servings", "protein", "carbs", "fats", "calories", "price",
    ])?;

    for food in &result.selected_foods {
        let servings = format!("{:.4}", food.servings);
        wtr.write_record([
            food.name.as_str(),
            food.vendor.as_deref().unwrap_or(""),
            servings.as_str(),
            "",
            "",
            "",
            "",
            "",
        ])?;
    }

    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", result.total_protein),
        format!("{:.2}", result.total_carbs),
        format!("{:.2}", result.total_fats),
        format!("{:.2}", result.total_calories),
        format!("{:.2}", result.total_price),
    ])?;

    wtr.flush()?;
    Ok(())
}
