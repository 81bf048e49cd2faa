//! Price Formatting
//!
//! Display and DOM-input helpers for whole-unit prices.

use super::error::{DomainError, DomainResult};

/// Separator between digit groups; non-breaking so prices never wrap
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Group thousands: `120000` -> `"120\u{a0}000"`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Parse a price coming from a range/number input
pub fn parse_price(raw: &str) -> DomainResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidInput(format!("price {:?}", raw)));
    }
    trimmed
        .parse::<u32>()
        .map_err(|e| DomainError::InvalidInput(format!("price {:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(8_500), "8\u{a0}500");
        assert_eq!(format_price(120_000), "120\u{a0}000");
        assert_eq!(format_price(1_234_567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_format_price_never_uses_breaking_space() {
        let formatted = format_price(150_000);
        assert!(!formatted.contains(' '));
        assert_eq!(formatted.chars().filter(|&c| c == GROUP_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("45000"), Ok(45_000));
        assert_eq!(parse_price(" 150000 "), Ok(150_000));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(parse_price(""), Err(DomainError::InvalidInput(_))));
        assert!(matches!(parse_price("-5"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(parse_price("12.5"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(parse_price("99999999999"), Err(DomainError::InvalidInput(_))));
    }
}
