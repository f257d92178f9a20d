//! Display formatting for monetary amounts.

use rust_decimal::Decimal;

use crate::reference;

/// Fixed-decimal rendering with thousands separators.
pub fn format_amount(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp(decimals);
    let formatted = format!("{:.*}", decimals as usize, rounded);

    let (number, fraction) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part.to_string(), Some(frac.to_string())),
        None => (formatted, None),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Amount with the currency's display symbol, falling back to the raw
/// code for currencies outside the catalog.
pub fn format_money(value: Decimal, code: &str, decimals: u32) -> String {
    let amount = format_amount(value, decimals);
    match reference::get_currency(code) {
        Some(currency) => match amount.strip_prefix('-') {
            Some(rest) => format!("-{}{}", currency.symbol, rest),
            None => format!("{}{}", currency.symbol, amount),
        },
        None => format!("{} {}", code, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_amount(dec!(1000), 0), "1,000");
        assert_eq!(format_amount(dec!(999), 0), "999");
    }

    #[test]
    fn test_pads_fraction_to_requested_places() {
        assert_eq!(format_amount(dec!(10), 2), "10.00");
        assert_eq!(format_amount(dec!(0.1), 4), "0.1000");
    }

    #[test]
    fn test_keeps_sign_outside_grouping() {
        assert_eq!(format_amount(dec!(-1234.56), 2), "-1,234.56");
    }

    #[test]
    fn test_money_uses_catalog_symbol() {
        assert_eq!(format_money(dec!(10), "USD", 2), "$10.00");
        assert_eq!(format_money(dec!(1234.5), "JPY", 0), "¥1,234");
        assert_eq!(format_money(dec!(-10), "USD", 2), "-$10.00");
    }

    #[test]
    fn test_money_falls_back_to_code() {
        assert_eq!(format_money(dec!(10), "XXX", 2), "XXX 10.00");
    }
}
