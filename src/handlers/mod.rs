pub mod helpers;
pub mod products_api;
pub mod site;
