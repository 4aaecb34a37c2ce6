//! Helpers for moving between user facing decimal amounts and base units.

pub fn multiplier(decimals: u8) -> f64 {
    10_f64.powi(i32::from(decimals))
}

/// Converts a decimal amount into the smallest unit of an asset with
/// `decimals` places, rounding to the nearest unit. Returns `None` when the
/// result is not representable as `u64`.
pub fn ui_amount_to_base_units(amount: f64, decimals: u8) -> Option<u64> {
    let scaled = (amount * multiplier(decimals)).round();
    if !scaled.is_finite() || scaled < 0.0 || scaled >= u64::MAX as f64 {
        return None;
    }

    Some(scaled as u64)
}

pub fn format_price(price: f64) -> String {
    if price >= 1.0 {
        return format!("${price:.2}");
    }

    // keep three significant digits for sub-dollar tokens
    let decimals = ((-price.log10()).ceil() as usize + 3).clamp(2, 18);
    let formatted = format!("{price:.decimals$}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("${trimmed}")
}

pub fn price_label(symbol: &str, price: Option<f64>) -> String {
    match price {
        Some(price) if price.is_finite() && price > 0.0 => {
            format!("{symbol} ({})", format_price(price))
        }
        _ => format!("{symbol} (price unavailable)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_sol_to_lamports() {
        assert_eq!(ui_amount_to_base_units(0.1, 9), Some(100_000_000));
        assert_eq!(ui_amount_to_base_units(1.0, 9), Some(1_000_000_000));
    }

    #[test]
    fn rounds_instead_of_truncating() {
        // 0.29 * 1e6 is 289999.99999999994 in f64
        assert_eq!(ui_amount_to_base_units(0.29, 6), Some(290_000));
        assert_eq!(ui_amount_to_base_units(5.0, 6), Some(5_000_000));
    }

    #[test]
    fn rejects_unrepresentable_amounts() {
        assert_eq!(ui_amount_to_base_units(1e30, 9), None);
        assert_eq!(ui_amount_to_base_units(f64::INFINITY, 6), None);
        assert_eq!(ui_amount_to_base_units(f64::NAN, 6), None);
    }

    #[test]
    fn labels_prices() {
        assert_eq!(price_label("SOL", Some(142.5)), "SOL ($142.50)");
        assert_eq!(price_label("BONK", Some(0.00002135)), "BONK ($0.00002135)");
        assert_eq!(price_label("USDC", Some(0.5)), "USDC ($0.5)");
        assert_eq!(price_label("USDC", None), "USDC (price unavailable)");
        assert_eq!(price_label("USDC", Some(0.0)), "USDC (price unavailable)");
    }

    #[test]
    fn tiny_prices_keep_significant_digits() {
        assert_eq!(price_label("X", Some(1e-9)), "X ($0.000000001)");
        assert_eq!(price_label("X", Some(4.2e-12)), "X ($0.0000000000042)");
        assert_eq!(price_label("X", Some(0.9998)), "X ($0.9998)");
    }
}
