use crate::events::OPENSEA_ASSETS_URL;
use anyhow::Result;
use chrono::FixedOffset;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum ConfigError {
    #[display(fmt = "{} is not a UTC offset like +08:00: {:?}", _0, _1)]
    InvalidOffset(&'static str, String),
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Zone for event times of day, `None` for the machine's local zone.
    pub tz_offset: Option<FixedOffset>,
    pub market_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tz_offset: None,
            market_url: OPENSEA_ASSETS_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut settings = Self::default();
        if let Ok(offset) = dotenv::var("ACTIVITY_TZ_OFFSET") {
            settings.tz_offset = Some(parse_offset("ACTIVITY_TZ_OFFSET", &offset)?);
        }
        if let Ok(url) = dotenv::var("ACTIVITY_MARKET_URL") {
            settings.market_url = url;
        }
        Ok(settings)
    }

    pub fn tz_offset(&mut self, arg: &str) -> Result<&mut Self> {
        self.tz_offset = Some(parse_offset("--tz", arg)?);
        Ok(self)
    }
}

fn parse_offset(name: &'static str, value: &str) -> Result<FixedOffset> {
    value
        .trim()
        .parse::<FixedOffset>()
        .map_err(|_| ConfigError::InvalidOffset(name, value.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset() {
        assert_eq!(
            parse_offset("tz", "+08:00").unwrap(),
            FixedOffset::east_opt(8 * 3600).unwrap()
        );
        assert_eq!(
            parse_offset("tz", "-05:30").unwrap(),
            FixedOffset::west_opt(5 * 3600 + 1800).unwrap()
        );

        let err = parse_offset("tz", "Asia/Shanghai").unwrap_err();
        assert!(err.to_string().contains("Asia/Shanghai"));
    }

    #[test]
    fn test_override() {
        let mut settings = Settings::default();
        assert!(settings.tz_offset.is_none());
        assert_eq!(settings.market_url, OPENSEA_ASSETS_URL);

        settings.tz_offset("+00:00").unwrap();
        assert_eq!(settings.tz_offset, FixedOffset::east_opt(0));
        assert!(settings.tz_offset("8").is_err());
    }
}
