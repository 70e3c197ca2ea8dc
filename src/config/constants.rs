//! Static dapp constants.
//!
//! Content identifiers are IPFS CIDv0 strings naming the off-chain trade
//! model and objective artifacts.

/// ENS version handed to the Robonomics client.
pub const VERSION: u32 = 5;

/// Trade model CID.
pub const MODEL_TRADE: &str = "Qmd6bn2JGW26hSx7g5gVCmfgB7uigRPrhAukJn77ee3bMM";

/// Trade objective CID.
pub const OBJECTIVE_TRADE: &str = "QmVAFgUxBitKqtV2sjaYcHkKfcAPVy3GswhaE5n5bcgLkf";

/// Offers API base URL.
pub const OFFERS_API: &str = "https://devjs-01.corp.aira.life:3024/";

/// Payment token contract. `None` falls back to the library default.
pub const TOKEN: Option<&str> = None;

pub const TOKEN_SYMBOL: &str = "XRT";

/// XRT has 9 decimal places.
pub const TOKEN_DECIMALS: u8 = 9;

/// Price per liability, in token base units.
pub const PRICE: u64 = 0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::is_cid_v0;

    #[test]
    fn test_trade_cids_verbatim() {
        assert_eq!(MODEL_TRADE, "Qmd6bn2JGW26hSx7g5gVCmfgB7uigRPrhAukJn77ee3bMM");
        assert_eq!(OBJECTIVE_TRADE, "QmVAFgUxBitKqtV2sjaYcHkKfcAPVy3GswhaE5n5bcgLkf");
        assert!(is_cid_v0(MODEL_TRADE));
        assert!(is_cid_v0(OBJECTIVE_TRADE));
    }

    #[test]
    fn test_offers_api_parses() {
        let url: url::Url = OFFERS_API.parse().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.port(), Some(3024));
    }

    #[test]
    fn test_token_defaults() {
        assert!(TOKEN.is_none());
        assert_eq!(TOKEN_SYMBOL, "XRT");
        assert_eq!(TOKEN_DECIMALS, 9);
        assert_eq!(PRICE, 0);
        assert_eq!(VERSION, 5);
    }
}
