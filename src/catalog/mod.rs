mod persistence;
mod store;

pub use persistence::{load_catalog, load_csv, load_json, save_json, write_result_csv};
pub use store::{
    CatalogFilter, FoodCatalog, FUZZY_AUTO_ACCEPT, FUZZY_MATCH_THRESHOLD, MAX_SUGGESTIONS,
};
