// Outbound HTTP: the catalog endpoint and the marketplace content API
pub mod client;
pub mod catalog;
pub mod wildberries;

pub use client::{build_http_client, set_silent};
pub use catalog::fetch_catalog;
pub use wildberries::{parse_cards_response, WbClient};
