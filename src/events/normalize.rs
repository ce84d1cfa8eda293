use super::{Event, EventKind};
use crate::address::{checksum, is_zero_address};
use crate::opensea::types::*;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;
use std::str::FromStr;

// "2021-08-28T09:44:43.664713", always UTC
static CREATED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
static TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Normalizes a raw event with its time of day in the local zone.
pub fn normalize(raw: &AssetEvent) -> Event {
    normalize_in(raw, &Local)
}

pub fn normalize_in<Tz: TimeZone>(raw: &AssetEvent, tz: &Tz) -> Event
where
    Tz::Offset: Display,
{
    let mut e = Event {
        collection: raw.asset.collection.name.clone(),
        contract: checksum(&raw.asset.asset_contract.address),
        name: raw.asset.name.clone(),
        id: raw.asset.token_id.clone(),
        kind: EventKind::Other(raw.event_type.clone()),
        price: String::new(),
        from: String::new(),
        to: String::new(),
        date: localize_time(&raw.created_date, tz),
        image_preview_url: raw.asset.image_preview_url.clone(),
        created_at: Utc::now(),
    };

    let token = &raw.payment_token;
    match raw.event_type.as_str() {
        // no explicit mint tag, a transfer out of the zero address is one
        EVENT_TYPE_TRANSFER => match &raw.from_account {
            Some(from) if !is_zero_address(&from.address) => {
                e.kind = EventKind::Transfer;
                e.from = from.to_string();
                e.to = display(&raw.to_account);
            }
            _ => {
                e.kind = EventKind::Mint;
                e.to = display(&raw.to_account);
            }
        },
        EVENT_TYPE_LIST => {
            e.kind = EventKind::List;
            e.from = display(&raw.from_account);
            e.price = price(&raw.ending_price, token);
        }
        EVENT_TYPE_LIST_CANCEL => {
            e.kind = EventKind::ListCancel;
            e.from = display(&raw.seller);
            e.price = price(&raw.ending_price, token);
        }
        EVENT_TYPE_BID => {
            e.kind = EventKind::Bid;
            e.from = display(&raw.from_account);
            e.price = price(&raw.bid_amount, token);
        }
        EVENT_TYPE_BID_CANCEL => {
            e.kind = EventKind::BidCancel;
            e.from = display(&raw.from_account);
            e.price = price(&raw.total_price, token);
        }
        EVENT_TYPE_SALE => {
            e.kind = EventKind::Sale;
            e.from = display(&raw.seller);
            e.to = display(&raw.winner_account);
            e.price = price(&raw.total_price, token);
        }
        EVENT_TYPE_OFFER => {
            e.kind = EventKind::Offer;
            e.from = display(&raw.from_account);
            e.price = price(&raw.bid_amount, token);
        }
        other => log::debug!("Passing through event type {:?}", other),
    }

    e
}

fn display(account: &Option<Account>) -> String {
    account.as_ref().map(|a| a.to_string()).unwrap_or_default()
}

fn price(amount: &Option<String>, token: &PaymentToken) -> String {
    to_ether(amount.as_deref().unwrap_or_default(), token)
}

/// `amount / 10^decimals` followed by the token symbol, in exact decimal
/// arithmetic with trailing zeros trimmed. Anything that isn't a decimal
/// numeral is returned as given.
pub fn to_ether(amount: &str, payment: &PaymentToken) -> String {
    match BigDecimal::from_str(amount.trim()) {
        Ok(d) => {
            let (mantissa, scale) = d.as_bigint_and_exponent();
            format!(
                "{} {}",
                plain_decimal(&mantissa, scale + i64::from(payment.decimals)),
                payment.symbol
            )
        }
        Err(e) => {
            log::debug!("Keeping raw amount {:?}: {}", amount, e);
            amount.to_string()
        }
    }
}

/// `mantissa * 10^-scale` in positional notation, never exponential.
fn plain_decimal(mantissa: &BigInt, scale: i64) -> String {
    let mut digits = mantissa.magnitude().to_string();
    if scale < 0 {
        digits.push_str(&"0".repeat(scale.unsigned_abs() as usize));
    }
    let scale = scale.max(0) as usize;
    if digits.len() <= scale {
        digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
    }

    let (int, frac) = digits.split_at(digits.len() - scale);
    let int = match int.trim_start_matches('0') {
        "" => "0",
        i => i,
    };
    let frac = frac.trim_end_matches('0');

    let mut out = String::new();
    if mantissa.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(int);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Time of day of a marketplace timestamp in `tz`. The date is dropped.
pub fn localize_time<Tz: TimeZone>(date: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    match NaiveDateTime::parse_from_str(date, CREATED_DATE_FORMAT) {
        Ok(t) => tz
            .from_utc_datetime(&t)
            .format(TIME_OF_DAY_FORMAT)
            .to_string(),
        Err(e) => {
            log::debug!("Keeping raw date {:?}: {}", date, e);
            date.to_string()
        }
    }
}
