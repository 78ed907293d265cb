//! Contribution statement rendering.
//!
//! Renders a self-contained HTML document for one donor's giving,
//! optionally limited to a calendar year. The renderer is a pure
//! function of its inputs: no I/O, no clock, no randomness, so the same
//! profile always produces the same bytes.

use chrono::{Datelike, NaiveDate};

use crate::model::money::format_usd;
use crate::model::{DonorProfile, Gift, Organization};

/// Render the contribution statement for one donor.
///
/// The document contains a Purpose/Fund summary table (one subtotal row
/// per distinct purpose, then a grand total) and a detail table sorted
/// by date ascending. Reference IDs are assigned from the detail order:
/// a three-letter uppercase payment-method prefix plus a zero-padded
/// sequence number. The NTD Amount column mirrors the Amount column;
/// the Total column is the running sum.
pub fn contribution_statement(
    org: &Organization,
    profile: &DonorProfile,
    year: Option<i32>,
) -> String {
    let mut gifts: Vec<&Gift> = profile
        .history
        .iter()
        .filter(|gift| year.map_or(true, |y| gift.date.year() == y))
        .collect();
    gifts.sort_by(|a, b| a.date.cmp(&b.date));

    let grand_total: i64 = gifts.iter().map(|g| g.amount_minor).sum();
    let period = match year {
        Some(y) => format!("January 1 - December 31, {}", y),
        None => "All recorded contributions".to_string(),
    };

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Contribution Statement - {}</title>\n",
        esc(&profile.name)
    ));
    html.push_str("<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<div class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", esc(&org.name)));
    html.push_str("<h2>Contribution Statement</h2>\n");
    html.push_str(&format!(
        "<p class=\"donor\">{}<br>{}</p>\n",
        esc(&profile.name),
        esc(&profile.email)
    ));
    html.push_str(&format!("<p class=\"period\">{}</p>\n", period));
    html.push_str("</div>\n");

    html.push_str("<h3>Summary by Purpose/Fund</h3>\n");
    html.push_str("<table class=\"summary\">\n<thead>\n<tr><th>Purpose/Fund</th><th class=\"amount\">Subtotal</th></tr>\n</thead>\n<tbody>\n");
    for (purpose, subtotal) in fund_subtotals(&gifts) {
        html.push_str(&format!(
            "<tr class=\"fund-row\"><td>{}</td><td class=\"amount\">{}</td></tr>\n",
            esc(&purpose),
            format_usd(subtotal)
        ));
    }
    html.push_str(&format!(
        "<tr class=\"grand-total\"><td>Total</td><td class=\"amount\">{}</td></tr>\n",
        format_usd(grand_total)
    ));
    html.push_str("</tbody>\n</table>\n");

    html.push_str("<h3>Contribution Detail</h3>\n");
    html.push_str("<table class=\"detail\">\n<thead>\n<tr><th>Date</th><th>Ref ID</th><th>Purpose/Fund</th><th class=\"amount\">Amount</th><th class=\"amount\">NTD Amount</th><th class=\"amount\">Total</th></tr>\n</thead>\n<tbody>\n");
    let mut running = 0i64;
    for (index, gift) in gifts.iter().enumerate() {
        running += gift.amount_minor;
        let amount = format_usd(gift.amount_minor);
        html.push_str(&format!(
            "<tr class=\"detail-row\"><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td><td class=\"amount\">{}</td></tr>\n",
            format_date(gift.date),
            ref_id(gift, index),
            esc(&gift.purpose),
            amount,
            amount,
            format_usd(running)
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str(
        "<p class=\"footer\">Please retain this statement for your tax records. No goods or services were provided in exchange for these contributions.</p>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}

const STYLESHEET: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; color: #222; margin: 2rem auto; max-width: 48rem; }
.header { border-bottom: 2px solid #2c5f2d; padding-bottom: 1rem; margin-bottom: 1.5rem; }
.header h1 { margin: 0; color: #2c5f2d; }
.header h2 { margin: 0.25rem 0 1rem; font-weight: normal; color: #555; }
.header .donor { margin: 0; }
.header .period { margin: 0.25rem 0 0; color: #555; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f0f4f0; }
td.amount, th.amount { text-align: right; }
tr.grand-total td { font-weight: bold; border-top: 2px solid #2c5f2d; }
.footer { font-size: 0.85rem; color: #555; }
";

/// Reference ID for one detail row: method prefix plus 1-based sequence.
fn ref_id(gift: &Gift, index: usize) -> String {
    format!("{}-{:03}", gift.method.ref_prefix(), index + 1)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Subtotals per purpose in order of first appearance in the detail list.
fn fund_subtotals(gifts: &[&Gift]) -> Vec<(String, i64)> {
    let mut subtotals: Vec<(String, i64)> = Vec::new();
    for gift in gifts {
        match subtotals.iter_mut().find(|(p, _)| *p == gift.purpose) {
            Some((_, total)) => *total += gift.amount_minor,
            None => subtotals.push((gift.purpose.clone(), gift.amount_minor)),
        }
    }
    subtotals
}

fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
