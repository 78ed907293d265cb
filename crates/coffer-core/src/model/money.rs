//! Money formatting and parsing.
//!
//! All amounts are stored as `i64` minor units (cents). Formatting and
//! parsing happen at the edges; arithmetic stays in integers.

use crate::error::{CofferError, Result};

/// Format minor units as a dollar amount with thousands separators.
///
/// `250000` renders as `$2,500.00`; negative amounts carry a leading
/// sign: `-$250.00`.
pub fn format_usd(amount_minor: i64) -> String {
    let negative = amount_minor < 0;
    let abs = amount_minor.unsigned_abs();
    let dollars = abs / 100;
    let cents = abs % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{:02}", grouped, cents)
    } else {
        format!("${}.{:02}", grouped, cents)
    }
}

/// Parse a dollar amount into minor units.
///
/// Accepts optional `$`, optional sign, thousands separators, and up to
/// two decimal places: `500`, `$1,234.56`, `-250.00`.
pub fn parse_usd(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CofferError::InvalidInput("Amount is empty".to_string()));
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();

    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid_amount(input));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_amount(input));
    }
    if frac.len() > 2 {
        return Err(CofferError::InvalidInput(format!(
            "Amount has more than two decimal places: {}",
            input
        )));
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid_amount(input))?
    };
    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid_amount(input))? * 10,
        _ => frac.parse().map_err(|_| invalid_amount(input))?,
    };

    let minor = dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(|| invalid_amount(input))?;

    Ok(if negative { -minor } else { minor })
}

fn invalid_amount(input: &str) -> CofferError {
    CofferError::InvalidInput(format!("Invalid amount: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(50000), "$500.00");
        assert_eq!(format_usd(123456), "$1,234.56");
        assert_eq!(format_usd(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_usd(-25000), "-$250.00");
    }

    #[test]
    fn test_parse_plain_and_decorated() {
        assert_eq!(parse_usd("500").unwrap(), 50000);
        assert_eq!(parse_usd("500.5").unwrap(), 50050);
        assert_eq!(parse_usd("$1,234.56").unwrap(), 123456);
        assert_eq!(parse_usd("-250.00").unwrap(), -25000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_usd("").is_err());
        assert!(parse_usd("abc").is_err());
        assert!(parse_usd("1.234").is_err());
        assert!(parse_usd("$").is_err());
    }

    #[test]
    fn test_format_parse_round_trip() {
        for amount in [0, 999, 50000, 123456, -25000] {
            assert_eq!(parse_usd(&format_usd(amount)).unwrap(), amount);
        }
    }
}
