use alloy_primitives::Address;
use std::str::FromStr;

/// EIP-55 mixed-case form. Strings that are not a 20 byte hex address come
/// back unchanged.
pub fn checksum(address: &str) -> String {
    match Address::from_str(address.trim()) {
        Ok(a) => a.to_checksum(None),
        Err(e) => {
            log::debug!("Not an address {:?}: {}", address, e);
            address.to_string()
        }
    }
}

pub fn is_zero_address(address: &str) -> bool {
    Address::from_str(address.trim())
        .map(|a| a == Address::ZERO)
        .unwrap_or(false)
}

/// `0x1234...abcd`
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    static VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    #[test]
    fn test_checksum() {
        assert_eq!(checksum(&VITALIK.to_lowercase()), VITALIK);
        assert_eq!(checksum(&VITALIK.to_uppercase().replace("0X", "0x")), VITALIK);
        assert_eq!(checksum("not-an-address"), "not-an-address");
    }

    #[test]
    fn test_zero_address() {
        assert!(is_zero_address("0x0000000000000000000000000000000000000000"));
        assert!(!is_zero_address(VITALIK));
        assert!(!is_zero_address(""));
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address(VITALIK), "0xd8dA...6045");
        assert_eq!(short_address("0x1234"), "0x1234");
    }
}
