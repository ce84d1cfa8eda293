pub mod normalize;

pub use normalize::{localize_time, normalize, normalize_in, to_ether};

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub static OPENSEA_ASSETS_URL: &str = "https://opensea.io/assets";

/// Marketplace activity kinds as shown to users. Kinds the marketplace adds
/// later are kept verbatim in `Other`.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    #[display(fmt = "Sale")]
    Sale,
    #[display(fmt = "Offer")]
    Offer,
    #[display(fmt = "Bid")]
    Bid,
    #[display(fmt = "Bid Cancel")]
    BidCancel,
    #[display(fmt = "Transfer")]
    Transfer,
    #[display(fmt = "Mint")]
    Mint,
    #[display(fmt = "List")]
    List,
    // OpenSea shows "Cancel", kept distinct from "Bid Cancel"
    #[display(fmt = "List Cancel")]
    ListCancel,
    #[display(fmt = "{}", _0)]
    Other(String),
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s {
            "Sale" => Self::Sale,
            "Offer" => Self::Offer,
            "Bid" => Self::Bid,
            "Bid Cancel" => Self::BidCancel,
            "Transfer" => Self::Transfer,
            "Mint" => Self::Mint,
            "List" => Self::List,
            "List Cancel" => Self::ListCancel,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(String::deserialize(deserializer)?.as_str().into())
    }
}

/// Marketplace event reorganized for messaging. `price` is either empty or
/// `"<amount> <symbol>"`; `date` is the local time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub collection: String,
    pub contract: String,
    pub name: String,
    pub id: String,
    #[serde(rename = "event")]
    pub kind: EventKind,
    pub price: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub image_preview_url: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Marketplace page of the asset. Contract addresses are lower-cased here
    /// and nowhere else.
    pub fn asset_url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}",
            base.trim_end_matches('/'),
            self.contract.to_lowercase(),
            self.id
        )
    }
}
