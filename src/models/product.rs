use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::utils::value_to_short_string;

/// A catalog entry as served by the product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Minor currency units (kopecks).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Characteristics>,
}

impl Product {
    /// Brand for the badge; blank brands count as missing.
    pub fn display_brand(&self) -> Option<&str> {
        self.brand.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }

    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Label/value pairs in the order the endpoint sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Characteristics(Vec<(String, String)>);

impl Characteristics {
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.0.push((label.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Characteristics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Characteristics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json is built with preserve_order, so the map keeps wire order.
        let raw = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Characteristics(
            raw.into_iter()
                .map(|(label, value)| (label, value_to_short_string(&value)))
                .collect(),
        ))
    }
}

/// Body of the catalog endpoint. A missing or null `products` field means an empty catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Product>, D::Error> {
    Ok(Option::<Vec<Product>>::deserialize(deserializer)?.unwrap_or_default())
}
