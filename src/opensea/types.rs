use serde_aux::prelude::*;

pub const EVENT_TYPE_TRANSFER: &str = "transfer";
pub const EVENT_TYPE_LIST: &str = "created";
pub const EVENT_TYPE_LIST_CANCEL: &str = "cancelled";
pub const EVENT_TYPE_BID: &str = "bid_entered";
pub const EVENT_TYPE_BID_CANCEL: &str = "bid_withdrawn";
pub const EVENT_TYPE_SALE: &str = "successful";
pub const EVENT_TYPE_OFFER: &str = "offer_entered";

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub asset_events: Vec<AssetEvent>,
}

/// One entry of the `/events` feed. Which price field carries the amount
/// depends on `event_type`:
/// `bid_amount` for bids and offers, `ending_price` for listings and their
/// cancellation, `total_price` for sales and withdrawn bids.
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetEvent {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub asset: EmbeddedAsset,
    pub event_type: String,
    pub bid_amount: Option<String>,
    pub ending_price: Option<String>,
    pub total_price: Option<String>,
    pub created_date: String,
    pub from_account: Option<Account>,
    pub to_account: Option<Account>,
    pub owner: Option<Account>,
    pub seller: Option<Account>,
    pub winner_account: Option<Account>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub payment_token: PaymentToken,
}

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmbeddedAsset {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub token_id: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    pub asset_contract: AssetContract,
    pub collection: AssetCollection,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub image_preview_url: String,
}

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetContract {
    pub address: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
}

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AssetCollection {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Account {
    pub user: Option<User>,
    pub address: String,
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub username: Option<String>,
}

#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaymentToken {
    pub symbol: String,
    pub decimals: u32,
}

impl PaymentToken {
    pub fn new(symbol: &str, decimals: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals,
        }
    }
}
