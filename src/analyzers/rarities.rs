use super::{Item, Rarity, Trait};
use itertools::Itertools;
use std::collections::HashMap;

/// Occurrence counts for every trait type and every (type, value) pair of a
/// single collection. Never share one census between collections.
#[derive(Default, Debug, Clone)]
pub struct TraitCensus {
    types: HashMap<String, u64>,
    values: HashMap<String, HashMap<String, u64>>,
}

impl TraitCensus {
    pub fn from_items(items: &[Item]) -> Self {
        let mut census = Self::default();
        for t in items.iter().flat_map(|i| i.attributes.iter()) {
            *census.types.entry(t.trait_type.clone()).or_default() += 1;
            *census
                .values
                .entry(t.trait_type.clone())
                .or_default()
                .entry(t.value.clone())
                .or_default() += 1;
        }
        census
    }

    pub fn type_count(&self, trait_type: &str) -> u64 {
        self.types.get(trait_type).copied().unwrap_or_default()
    }

    pub fn value_count(&self, trait_type: &str, value: &str) -> u64 {
        self.values
            .get(trait_type)
            .and_then(|v| v.get(value))
            .copied()
            .unwrap_or_default()
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str).sorted()
    }

    pub fn values(&self, trait_type: &str) -> Vec<(&str, u64)> {
        self.values
            .get(trait_type)
            .map(|v| {
                v.iter()
                    .map(|(value, count)| (value.as_str(), *count))
                    .sorted()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fills in `percent` and `score` for one attribute, which must come from
    /// the items this census was built from so both counts are at least 1.
    fn score(&self, t: &Trait) -> Trait {
        let total = self.type_count(&t.trait_type) as f64;
        let count = self.value_count(&t.trait_type, &t.value) as f64;
        Trait {
            percent: count / total,
            score: total / count,
            ..t.clone()
        }
    }
}

/// Rarity score like rarity.tools: a trait value scores
/// `1 / (items with that value / items with that trait type)` and an item
/// scores the sum over its attributes.
///
/// Ranks are dense and 1-based. Equal scores are ordered by token id
/// ascending.
pub fn rarity_score(items: &[Item]) -> Vec<Rarity> {
    let census = TraitCensus::from_items(items);
    log::debug!(
        "Census of {} items, {} trait types",
        items.len(),
        census.types.len()
    );

    items
        .iter()
        .map(|item| {
            let attributes = item
                .attributes
                .iter()
                .map(|t| census.score(t))
                .collect::<Vec<_>>();
            Rarity {
                token_id: item.token_id,
                rank: 0,
                score: attributes.iter().map(|t| t.score).sum(),
                attributes,
            }
        })
        .sorted_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.token_id.cmp(&b.token_id))
        })
        .enumerate()
        .map(|(i, r)| Rarity { rank: i + 1, ..r })
        .collect()
}
