pub mod app_state;
pub mod catalog_state;
pub mod product;
pub mod static_product;

pub use app_state::{AppState, CatalogMode};
pub use catalog_state::{CatalogState, LoadPhase};
pub use product::{CatalogPayload, Characteristics, Product};
pub use static_product::{static_products, StaticProduct};
