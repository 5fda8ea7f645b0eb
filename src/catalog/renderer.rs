use crate::error::FETCH_FAILED_MESSAGE;
use crate::models::{CatalogState, LoadPhase, Product, StaticProduct};
use crate::utils::{format_price, truncate_chars};

/// Characteristics shown per card.
pub const PREVIEW_CHARACTERISTICS: usize = 3;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

/// Everything a product card displays, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub image: Option<String>,
    pub description: String,
    pub characteristics: Vec<SpecRow>,
    /// `None` renders the "price not specified" label.
    pub price: Option<String>,
    pub link: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let characteristics = product
            .characteristics
            .iter()
            .flat_map(|c| c.iter())
            .take(PREVIEW_CHARACTERISTICS)
            .map(|(label, value)| SpecRow {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();

        ProductCard {
            id: product.id,
            name: product.name.clone(),
            brand: product.display_brand().map(str::to_string),
            image: product.first_image().map(str::to_string),
            description: truncate_chars(&product.description, DESCRIPTION_PREVIEW_CHARS),
            characteristics,
            price: product.price.map(format_price),
            link: product.link.clone(),
        }
    }
}

/// What the catalog section shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSection {
    Loading,
    Failed { message: String },
    Empty,
    Products(Vec<ProductCard>),
    Fixed(Vec<StaticProduct>),
}

impl CatalogSection {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogSection::Loading)
    }

    pub fn card_count(&self) -> usize {
        match self {
            CatalogSection::Products(cards) => cards.len(),
            CatalogSection::Fixed(items) => items.len(),
            _ => 0,
        }
    }
}

/// Map loader state to section content. Idle renders as loading since the
/// fetch starts on mount.
pub fn render_catalog(state: &CatalogState) -> CatalogSection {
    match state.phase() {
        LoadPhase::Idle | LoadPhase::Loading => CatalogSection::Loading,
        LoadPhase::Error => CatalogSection::Failed {
            message: state
                .error()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(FETCH_FAILED_MESSAGE)
                .to_string(),
        },
        LoadPhase::Success if state.products().is_empty() => CatalogSection::Empty,
        LoadPhase::Success => {
            CatalogSection::Products(state.products().iter().map(ProductCard::from_product).collect())
        }
    }
}

pub fn render_static_catalog(items: &[StaticProduct]) -> CatalogSection {
    CatalogSection::Fixed(items.to_vec())
}
