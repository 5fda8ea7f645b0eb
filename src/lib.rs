//! ElectroPastuh storefront: a server-rendered catalog page for galvanized
//! electric-fence wire, plus the marketplace product proxy that feeds it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;
pub mod utils;
