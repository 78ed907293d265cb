//! Parsing helpers for dates, money, filters, and output format.

use std::str::FromStr;

use chrono::NaiveDate;
use coffer_core::model::parse_usd;
use coffer_core::projection::Adjustment;
use coffer_core::CofferError;

/// Parse a date string (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date (expected YYYY-MM-DD): {}", value))
}

/// Parse a dollar amount string into minor units (cents).
pub fn parse_money(value: &str) -> anyhow::Result<i64> {
    parse_usd(value).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Parse a session adjustment in `DATE:AMOUNT:NOTE` form.
///
/// The note keeps any further colons, so "2025-06-01:-250.00:refund: check 88"
/// carries the full note text.
pub fn parse_adjustment(value: &str) -> anyhow::Result<Adjustment> {
    let mut parts = value.splitn(3, ':');
    let date_part = parts.next().unwrap_or_default();
    let amount_part = parts.next().ok_or_else(|| {
        anyhow::anyhow!("Invalid adjustment (expected DATE:AMOUNT:NOTE): {}", value)
    })?;
    let note_part = parts.next().ok_or_else(|| {
        anyhow::anyhow!("Invalid adjustment (expected DATE:AMOUNT:NOTE): {}", value)
    })?;

    let date = parse_date(date_part)?;
    let amount_minor = parse_money(amount_part)?;

    Ok(Adjustment {
        date,
        amount_minor,
        note: note_part.trim().to_string(),
    })
}

/// Parse an optional filter value, treating "all" (any case) as no filter.
pub fn parse_filter_or_all<T>(value: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = CofferError>,
{
    match value {
        None => Ok(None),
        Some(v) if v.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => T::from_str(v.trim())
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{}", e)),
    }
}

/// Parse an optional enum value, falling back to its default.
///
/// Sort keys and directions use this: an absent flag means the
/// domain's default ordering, not "no sort".
pub fn parse_or_default<T>(value: Option<&str>) -> anyhow::Result<T>
where
    T: FromStr<Err = CofferError> + Default,
{
    match value {
        None => Ok(T::default()),
        Some(v) => T::from_str(v.trim()).map_err(|e| anyhow::anyhow!("{}", e)),
    }
}

/// Validate the --json / --format flag combination.
///
/// `--json` is exclusive; `--format` accepts `table` or `plain`.
pub fn check_format_flags(json: bool, format: Option<&str>) -> anyhow::Result<()> {
    if json && format.is_some() {
        return Err(anyhow::anyhow!(
            "--json and --format cannot be combined; --json is exclusive"
        ));
    }

    if let Some(fmt) = format {
        match fmt {
            "table" | "plain" => {}
            "json" => {
                return Err(anyhow::anyhow!(
                    "Use --json for JSON output instead of --format json"
                ));
            }
            other => {
                return Err(anyhow::anyhow!(
                    "Invalid format: {} (use table or plain)",
                    other
                ));
            }
        }
    }

    Ok(())
}
