// Display formatting
pub mod price_formatter;
pub mod text;

// JSON utilities
pub mod json_converter;

pub use price_formatter::{format_price, format_rubles};
pub use text::truncate_chars;
pub use json_converter::value_to_short_string;
