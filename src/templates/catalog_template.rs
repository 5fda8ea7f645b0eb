use askama::Template;

use crate::catalog::{CatalogSection, ProductCard};
use crate::models::StaticProduct;

/// The catalog grid, rendered on its own for `/catalog` and embedded in the page.
#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogSectionTemplate<'a> {
    pub loading: bool,
    pub error_message: Option<&'a str>,
    pub empty: bool,
    pub cards: &'a [ProductCard],
    pub fixed: &'a [StaticProduct],
}

impl<'a> CatalogSectionTemplate<'a> {
    pub fn new(section: &'a CatalogSection) -> Self {
        let mut tpl = CatalogSectionTemplate {
            loading: false,
            error_message: None,
            empty: false,
            cards: &[],
            fixed: &[],
        };
        match section {
            CatalogSection::Loading => tpl.loading = true,
            CatalogSection::Failed { message } => tpl.error_message = Some(message.as_str()),
            CatalogSection::Empty => tpl.empty = true,
            CatalogSection::Products(cards) => tpl.cards = cards.as_slice(),
            CatalogSection::Fixed(items) => tpl.fixed = items.as_slice(),
        }
        tpl
    }
}
