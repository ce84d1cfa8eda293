use self::types::*;
use crate::address::short_address;
use std::fmt;

pub mod types;

impl Account {
    pub fn username(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .filter(|u| !u.is_empty())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = short_address(&self.address);
        match self.username() {
            Some(name) => write!(f, "{}({})", name, addr),
            None => write!(f, "{}", addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_display() {
        let mut account = Account {
            user: None,
            address: String::from("0x1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d"),
        };
        assert_eq!(account.to_string(), "0x1a2b...3c4d");

        account.user = Some(User { username: None });
        assert_eq!(account.to_string(), "0x1a2b...3c4d");

        account.user = Some(User {
            username: Some(String::new()),
        });
        assert_eq!(account.to_string(), "0x1a2b...3c4d");

        account.user = Some(User {
            username: Some(String::from("magicmerchant")),
        });
        assert_eq!(account.to_string(), "magicmerchant(0x1a2b...3c4d)");
    }

    #[test]
    fn test_decode_events_response() {
        let resp: EventsResponse =
            serde_json::from_str(include_str!("fixtures/events.json")).unwrap();
        assert_eq!(resp.asset_events.len(), 2);

        let sale = &resp.asset_events[0];
        assert_eq!(sale.event_type, EVENT_TYPE_SALE);
        assert_eq!(sale.asset.token_id, "1284");
        assert_eq!(sale.total_price.as_deref(), Some("1500000000000000000"));
        assert_eq!(sale.payment_token.decimals, 18);
        assert!(sale.from_account.is_none());
        assert_eq!(
            sale.seller.as_ref().and_then(|s| s.username()),
            Some("magicmerchant")
        );

        let transfer = &resp.asset_events[1];
        assert_eq!(transfer.event_type, EVENT_TYPE_TRANSFER);
        assert_eq!(transfer.asset.name, "");
        assert_eq!(transfer.asset.image_preview_url, "");
        assert_eq!(transfer.payment_token.symbol, "");
        assert!(transfer.bid_amount.is_none());
    }
}
