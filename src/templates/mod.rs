// Page templates
pub mod index_template;
pub mod catalog_template;

pub use index_template::IndexTemplate;
pub use catalog_template::CatalogSectionTemplate;

pub const SITE_NAME: &str = "ЭлектроПастух";

/// Reload interval for the page while the catalog is still loading.
pub const LOADING_REFRESH_SECS: u32 = 2;
