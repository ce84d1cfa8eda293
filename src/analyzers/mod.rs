pub mod rarities;

use serde_aux::prelude::*;

#[derive(Default, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub trait_type: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub value: String,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub percent: f64,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub score: f64,
}

impl Trait {
    pub fn new(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }
}

/// One collection member as handed to the rarity engine.
#[derive(Default, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub token_id: u64,
    #[serde(default)]
    pub attributes: Vec<Trait>,
}

#[derive(Default, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rarity {
    pub token_id: u64,
    pub rank: usize,
    pub score: f64,
    pub attributes: Vec<Trait>,
}

impl Rarity {
    /// The attribute contributing the most to this item's score.
    pub fn rarest_trait(&self) -> Option<&Trait> {
        self.attributes
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

fn is_unset(f: &f64) -> bool {
    *f == 0f64
}
