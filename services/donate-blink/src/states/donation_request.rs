use std::str::FromStr;

use anchor_lang::prelude::Pubkey;

use crate::{
    contexts::DonateQuery,
    errors::{BlinkError, Result},
    states::{Asset, AssetRegistry, NATIVE_SYMBOL},
};

/// 4ypD7kxRj9DLF3PMxsY3qvp8YdNhAHZRnN3fyVDh5CFX
pub const DEFAULT_DONATION_ADDRESS: Pubkey = Pubkey::new_from_array([
    59, 32, 247, 34, 71, 88, 155, 234, 14, 229, 232, 15, 228, 129, 178, 141, 83, 95, 22, 177, 13,
    65, 82, 129, 137, 56, 73, 58, 207, 208, 219, 118,
]);
pub const DEFAULT_AMOUNT: f64 = 0.1;

/// A donation request after every query parameter has been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationRequest {
    pub to: Pubkey,
    pub asset: Asset,
    pub amount: f64,
}

impl DonationRequest {
    pub fn from_query(query: &DonateQuery, registry: &AssetRegistry) -> Result<Self> {
        let to = parse_destination(query.to.as_deref())?;
        let amount = parse_amount(query.amount.as_deref())?;
        let asset = parse_asset(query.token.as_deref(), registry)?;

        Ok(Self { to, asset, amount })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn parse_destination(to: Option<&str>) -> Result<Pubkey> {
    match present(to) {
        Some(to) => Pubkey::from_str(to).map_err(|_| BlinkError::InvalidTo),
        None => Ok(DEFAULT_DONATION_ADDRESS),
    }
}

pub fn parse_amount(amount: Option<&str>) -> Result<f64> {
    let amount = match present(amount) {
        Some(amount) => amount.parse::<f64>().map_err(|_| BlinkError::InvalidAmount)?,
        None => DEFAULT_AMOUNT,
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BlinkError::InvalidAmount);
    }

    Ok(amount)
}

pub fn parse_asset(token: Option<&str>, registry: &AssetRegistry) -> Result<Asset> {
    let symbol = present(token).unwrap_or(NATIVE_SYMBOL);
    registry.get(symbol).cloned().ok_or(BlinkError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::USDC_MINT;

    fn query(to: Option<&str>, token: Option<&str>, amount: Option<&str>) -> DonateQuery {
        DonateQuery {
            to: to.map(String::from),
            token: token.map(String::from),
            amount: amount.map(String::from),
        }
    }

    #[test]
    fn default_address_matches_its_base58_form() {
        assert_eq!(
            DEFAULT_DONATION_ADDRESS.to_string(),
            "4ypD7kxRj9DLF3PMxsY3qvp8YdNhAHZRnN3fyVDh5CFX"
        );
    }

    #[test]
    fn empty_query_uses_defaults() {
        let request =
            DonationRequest::from_query(&DonateQuery::default(), &AssetRegistry::mainnet())
                .unwrap();
        assert_eq!(request.to, DEFAULT_DONATION_ADDRESS);
        assert_eq!(request.amount, DEFAULT_AMOUNT);
        assert!(request.asset.is_native());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let request = DonationRequest::from_query(
            &query(Some(""), Some(""), Some(" ")),
            &AssetRegistry::mainnet(),
        )
        .unwrap();
        assert_eq!(request.to, DEFAULT_DONATION_ADDRESS);
        assert_eq!(request.amount, DEFAULT_AMOUNT);
    }

    #[test]
    fn parses_explicit_values() {
        let to = Pubkey::new_unique();
        let request = DonationRequest::from_query(
            &query(Some(&to.to_string()), Some("USDC"), Some("5")),
            &AssetRegistry::mainnet(),
        )
        .unwrap();
        assert_eq!(request.to, to);
        assert_eq!(request.asset.mint(), Some(USDC_MINT));
        assert_eq!(request.amount, 5.0);
    }

    #[test]
    fn rejects_malformed_destination() {
        for to in ["not-a-key", "0OIl", "11111111111111111111111111111111111111111111111"] {
            assert!(matches!(
                parse_destination(Some(to)),
                Err(BlinkError::InvalidTo)
            ));
        }
    }

    #[test]
    fn rejects_non_positive_or_non_finite_amounts() {
        for amount in ["0", "-1", "abc", "NaN", "inf", "-0.0", "1.2.3"] {
            assert!(
                matches!(parse_amount(Some(amount)), Err(BlinkError::InvalidAmount)),
                "{amount} should be rejected"
            );
        }
        assert_eq!(parse_amount(Some("0.25")).unwrap(), 0.25);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let registry = AssetRegistry::mainnet();
        assert!(matches!(
            parse_asset(Some("DOGE"), &registry),
            Err(BlinkError::InvalidToken)
        ));
        assert!(matches!(
            parse_asset(Some("sol"), &registry),
            Err(BlinkError::InvalidToken)
        ));
    }

    #[test]
    fn destination_is_checked_before_amount() {
        let err = DonationRequest::from_query(
            &query(Some("bogus"), Some("DOGE"), Some("-1")),
            &AssetRegistry::mainnet(),
        )
        .unwrap_err();
        assert!(matches!(err, BlinkError::InvalidTo));
    }
}
