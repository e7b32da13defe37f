//! Locale-tolerant numeric field cleanup.
//!
//! Two conventions are accepted for prices: `1.234,56` (dot thousands, comma
//! decimal) and `1234.56`. Anything that still does not read as a number
//! becomes zero.

const CURRENCY_PREFIX: &str = "R$";

/// Stock column: keep ASCII digits only and read them as an integer.
///
/// `"R$ 10 un"` → `10`; no digits (or more than fit in a `u64`) → `0`.
pub fn parse_stock(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Bring a price field to `.`-decimal form without parsing it.
///
/// Only the first currency token and the first comma are rewritten.
pub fn normalize_price(raw: &str) -> String {
    let trimmed = raw.trim().replacen(CURRENCY_PREFIX, "", 1);
    let value = trimmed.trim();

    if value.contains(',') && value.contains('.') {
        value.replace('.', "").replacen(',', ".", 1)
    } else if value.contains(',') {
        value.replacen(',', ".", 1)
    } else {
        value.to_string()
    }
}

/// Price column: normalize, then read the leading decimal number.
///
/// Trailing garbage is ignored (`"1500.00 net"` → `1500.0`). Signs other than
/// `+`, non-finite values and unreadable input all give `0.0`.
pub fn parse_price(raw: &str) -> f64 {
    let normalized = normalize_price(raw);
    let prefix = leading_number(&normalized);
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Longest prefix of `s` shaped like `[+]digits[.digits][e[+-]digits]`.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'+') {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stock_keeps_digits_only() {
        assert_eq!(parse_stock("R$ 10 un"), 10);
        assert_eq!(parse_stock("1.200"), 1200);
        assert_eq!(parse_stock(" 7 "), 7);
    }

    #[test]
    fn stock_without_digits_is_zero() {
        assert_eq!(parse_stock("n/a"), 0);
        assert_eq!(parse_stock(""), 0);
        assert_eq!(parse_stock("99999999999999999999999"), 0);
    }

    #[test]
    fn brazilian_format_with_thousands() {
        assert_eq!(normalize_price("1.234,56"), "1234.56");
        assert_eq!(parse_price("1.234,56"), 1234.56);
    }

    #[test]
    fn comma_decimal_only() {
        assert_eq!(parse_price("1234,56"), 1234.56);
    }

    #[test]
    fn dot_decimal_untouched() {
        assert_eq!(normalize_price("1234.56"), "1234.56");
        assert_eq!(parse_price("1234.56"), 1234.56);
    }

    #[test]
    fn currency_prefix_is_removed() {
        assert_eq!(parse_price("R$ 1.500,00"), 1500.0);
        assert_eq!(parse_price("  R$1200,5 "), 1200.5);
    }

    #[test]
    fn only_first_comma_becomes_decimal_point() {
        assert_eq!(normalize_price("1,234,56"), "1.234,56");
        assert_eq!(parse_price("1,234,56"), 1.234);
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_price("1500.00 liquido"), 1500.0);
        assert_eq!(parse_price("2e3"), 2000.0);
        assert_eq!(parse_price("2e"), 2.0);
    }

    #[test]
    fn unreadable_price_is_zero() {
        assert_eq!(parse_price("sob consulta"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("-5"), 0.0);
        assert_eq!(parse_price("."), 0.0);
        assert_eq!(parse_price("1e400"), 0.0);
    }

    proptest! {
        /// Property: whole cents written in Brazilian notation read back as the same amount.
        #[test]
        fn brazilian_notation_reads_back(reais in 0u64..10_000_000, cents in 0u64..100) {
            let mut grouped = String::new();
            let digits = reais.to_string();
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push('.');
                }
                grouped.push(ch);
            }
            let raw = format!("R$ {grouped},{cents:02}");
            let expected: f64 = format!("{reais}.{cents:02}").parse().unwrap();
            prop_assert_eq!(parse_price(&raw), expected);
        }

        /// Property: the stock column ignores every non-digit character.
        #[test]
        fn stock_ignores_noise(n in 0u32..1_000_000, noise in "[a-zA-Z $.,]{0,6}") {
            let raw = format!("{noise}{n}{noise}");
            prop_assert_eq!(parse_stock(&raw), u64::from(n));
        }
    }
}
