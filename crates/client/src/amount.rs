use alloy_primitives::{
    U256,
    utils::{ParseUnits, Unit},
};

use crate::error::VaultError;

/// A vault amount, held as an integer number of 18-decimal base units.
///
/// The human decimal form and the base-unit form are two renditions of the
/// same value: scaling is exact in both directions. Inputs with more
/// fractional digits than the unit scale supports are rejected rather than
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(U256);

impl Amount {
    /// Parses a human decimal string into base units.
    ///
    /// Rejects empty, non-numeric, negative and zero inputs, and inputs
    /// with more than [`Unit::ETHER`] fractional digits.
    pub fn parse(input: &str) -> Result<Self, VaultError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(VaultError::InvalidAmount("no amount entered".to_string()));
        }
        if input.starts_with('-') {
            return Err(VaultError::InvalidAmount(format!("`{input}` is not positive")));
        }
        let (integral, fraction) = input.split_once('.').unwrap_or((input, ""));
        let numeric = !(integral.is_empty() && fraction.is_empty())
            && integral.chars().all(|c| c.is_ascii_digit())
            && fraction.chars().all(|c| c.is_ascii_digit());
        if !numeric {
            return Err(VaultError::InvalidAmount(format!("`{input}` is not a decimal number")));
        }
        if fraction.len() > Unit::ETHER.get() as usize {
            return Err(VaultError::InvalidAmount(format!(
                "`{input}` has more than {} fractional digits",
                Unit::ETHER.get()
            )));
        }
        let value = ParseUnits::parse_units(input, Unit::ETHER)
            .map_err(|err| VaultError::InvalidAmount(err.to_string()))?
            .get_absolute();
        if value.is_zero() {
            return Err(VaultError::InvalidAmount("amount must be greater than zero".to_string()));
        }
        Ok(Self(value))
    }

    /// Wraps an on-chain base-unit value.
    pub const fn from_base_units(value: U256) -> Self {
        Self(value)
    }

    /// The integer base-unit value sent on chain.
    pub const fn base_units(&self) -> U256 {
        self.0
    }

    /// Renders the human decimal form with trailing zeros trimmed.
    pub fn display(&self) -> String {
        let mut formatted = ParseUnits::U256(self.0).format_units(Unit::ETHER);
        if let Some(dot) = formatted.find('.') {
            let end = formatted.trim_end_matches('0').len().max(dot);
            formatted.truncate(if end == dot + 1 { dot } else { end });
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(value: u128) -> U256 {
        U256::from(value)
    }

    #[test]
    fn scales_to_base_units_exactly() {
        assert_eq!(Amount::parse("1").unwrap().base_units(), wei(1_000_000_000_000_000_000));
        assert_eq!(Amount::parse("2.5").unwrap().base_units(), wei(2_500_000_000_000_000_000));
        assert_eq!(Amount::parse("0.000000000000000001").unwrap().base_units(), wei(1));
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(Amount::from_base_units(wei(2_500_000_000_000_000_000)).display(), "2.5");
        assert_eq!(Amount::from_base_units(wei(1_000_000_000_000_000_000)).display(), "1");
        assert_eq!(Amount::from_base_units(wei(10)).display(), "0.00000000000000001");
        assert_eq!(Amount::from_base_units(U256::ZERO).display(), "0");
    }

    #[test]
    fn round_trips_through_the_decimal_form() {
        for input in ["1", "2.5", "0.1", "123.456789012345678", "0.000000000000000001"] {
            let amount = Amount::parse(input).unwrap();
            assert_eq!(Amount::parse(&amount.display()).unwrap(), amount, "round trip of {input}");
        }
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        // 19 fractional digits cannot be represented; never truncate.
        let err = Amount::parse("1.0000000000000000001").unwrap_err();
        assert!(matches!(err, VaultError::InvalidAmount(_)), "got {err:?}");
    }

    #[test]
    fn rejects_invalid_inputs() {
        for input in ["", "  ", "-3", "abc", "1.2.3", "1e18", "0", "0.0"] {
            let err = Amount::parse(input).unwrap_err();
            assert!(matches!(err, VaultError::InvalidAmount(_)), "`{input}` got {err:?}");
        }
    }
}
