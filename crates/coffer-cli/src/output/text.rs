//! Table and text output for records, lists, and profiles.
//!
//! Each print function handles all three output modes. JSON mode emits the
//! payload from [`crate::output::json`] and nothing else; pretty mode gets
//! tables, totals lines, and hints; plain mode gets stable `key=value`
//! tokens suitable for scripts.

use coffer_core::dataset::OrgCounts;
use coffer_core::intake::Receipt;
use coffer_core::model::{format_usd, Organization};
use coffer_core::pipeline::{DonationView, DonorView, PersonnelView, VolunteerView};
use coffer_core::projection::{DonorProfileView, HistoryLine, VolunteerProfileView};
use coffer_core::EntitySelector;

use crate::output::json;
use crate::ui::format::{format_date, format_optional_date, short_id, single_line, truncate};
use crate::ui::render::{
    blank_line, divider, header, hint, kv, print, receipt, simple_table, table, Column,
};
use crate::ui::UiContext;

const PURPOSE_WIDTH: usize = 28;
const SKILLS_WIDTH: usize = 28;

fn emit_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Join totals fragments with a centered dot for pretty mode.
fn totals_line(parts: &[String]) -> String {
    parts.join(" \u{00B7} ")
}

/// Header line for a list screen; scoped lists name their entity.
fn list_header(ctx: &UiContext, command: &str, selector: &EntitySelector) {
    if ctx.mode.is_pretty() {
        let context = if selector.is_all() {
            None
        } else {
            Some(selector.as_str())
        };
        print(ctx, &header(ctx, command, context));
        blank_line(ctx);
    }
}

/// Print the organization list with per-org record counts.
pub fn print_org_list(
    ctx: &UiContext,
    rows: &[(&Organization, OrgCounts)],
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        let payload: Vec<serde_json::Value> = rows
            .iter()
            .map(|(org, counts)| json::org_json(org, counts))
            .collect();
        return emit_json(&serde_json::Value::Array(payload));
    }

    if ctx.mode.is_pretty() {
        print(ctx, &header(ctx, "orgs list", None));
        blank_line(ctx);
    }

    if rows.is_empty() {
        print(ctx, "No organizations found.");
        return Ok(());
    }

    let columns = [
        Column::new("Id"),
        Column::new("Name"),
        Column::new("Kind"),
        Column::new("Donors"),
        Column::new("Donations"),
        Column::new("People"),
        Column::new("Volunteers"),
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(org, counts)| {
            vec![
                org.id.clone(),
                org.name.clone(),
                org.kind.label().to_string(),
                counts.donors.to_string(),
                counts.donations.to_string(),
                counts.personnel.to_string(),
                counts.volunteers.to_string(),
            ]
        })
        .collect();
    print(ctx, &table(ctx, &columns, &table_rows));

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, "coffer donors list --entity <id>"));
    }
    Ok(())
}

/// Print a donor list view.
pub fn print_donor_list(
    ctx: &UiContext,
    selector: &EntitySelector,
    view: &DonorView<'_>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::donor_list_json(selector, view));
    }

    list_header(ctx, "donors list", selector);

    let show_entity = selector.is_all();
    if view.rows.is_empty() {
        print(ctx, "No donors found.");
    } else {
        let mut columns = vec![Column::new("Name")];
        if show_entity {
            columns.push(Column::new("Entity"));
        }
        columns.extend([
            Column::new("Kind"),
            Column::new("Status"),
            Column::new("Gifts"),
            Column::new("Total"),
            Column::new("Last Gift"),
        ]);

        let table_rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|d| {
                let mut row = vec![d.name.clone()];
                if show_entity {
                    row.push(d.entity.clone());
                }
                row.extend([
                    d.kind.label().to_string(),
                    d.status.label().to_string(),
                    d.gift_count.to_string(),
                    format_usd(d.total_given_minor),
                    format_optional_date(d.last_gift_on, false),
                ]);
                row
            })
            .collect();
        print(ctx, &simple_table(ctx, &columns, &table_rows));
    }

    if ctx.mode.is_pretty() {
        blank_line(ctx);
        let noun = if view.totals.count == 1 { "donor" } else { "donors" };
        print(
            ctx,
            &totals_line(&[
                format!("{} {}", view.totals.count, noun),
                format!("{} lifetime", format_usd(view.totals.total_given_minor)),
                format!("{} active", view.totals.active),
            ]),
        );
    } else {
        print(
            ctx,
            &format!(
                "count={} total_given={} active={}",
                view.totals.count,
                format_usd(view.totals.total_given_minor),
                view.totals.active
            ),
        );
    }

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, "coffer donors show <name>"));
    }
    Ok(())
}

/// Print a donation list view.
pub fn print_donation_list(
    ctx: &UiContext,
    selector: &EntitySelector,
    view: &DonationView<'_>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::donation_list_json(selector, view));
    }

    list_header(ctx, "donations list", selector);

    let show_entity = selector.is_all();
    if view.rows.is_empty() {
        print(ctx, "No donations found.");
    } else {
        let mut columns = vec![Column::new("Date")];
        if show_entity {
            columns.push(Column::new("Entity"));
        }
        columns.extend([
            Column::new("Donor"),
            Column::new("Amount"),
            Column::new("Method"),
            Column::new("Status"),
            Column::new("Purpose"),
        ]);

        let table_rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|d| {
                let mut row = vec![format_date(d.date, false)];
                if show_entity {
                    row.push(d.entity.clone());
                }
                row.extend([
                    d.donor.clone().unwrap_or_else(|| "(unassigned)".to_string()),
                    format_usd(d.amount_minor),
                    d.method.label().to_string(),
                    d.status.label().to_string(),
                    truncate(&single_line(&d.purpose), PURPOSE_WIDTH),
                ]);
                row
            })
            .collect();
        print(ctx, &simple_table(ctx, &columns, &table_rows));
    }

    if ctx.mode.is_pretty() {
        blank_line(ctx);
        let noun = if view.totals.count == 1 {
            "donation"
        } else {
            "donations"
        };
        print(
            ctx,
            &totals_line(&[
                format!("{} {}", view.totals.count, noun),
                format_usd(view.totals.amount_minor),
                format!("{} completed", view.totals.completed),
                format!("{} unassigned", view.totals.unassigned),
            ]),
        );
    } else {
        print(
            ctx,
            &format!(
                "count={} amount={} completed={} unassigned={}",
                view.totals.count,
                format_usd(view.totals.amount_minor),
                view.totals.completed,
                view.totals.unassigned
            ),
        );
    }

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, "coffer donations assign <donation-id> <donor>"));
    }
    Ok(())
}

/// Print a personnel list view.
pub fn print_personnel_list(
    ctx: &UiContext,
    selector: &EntitySelector,
    view: &PersonnelView<'_>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::personnel_list_json(selector, view));
    }

    list_header(ctx, "personnel list", selector);

    let show_entity = selector.is_all();
    if view.rows.is_empty() {
        print(ctx, "No personnel found.");
    } else {
        let mut columns = vec![Column::new("Name")];
        if show_entity {
            columns.push(Column::new("Entity"));
        }
        columns.extend([
            Column::new("Role"),
            Column::new("Status"),
            Column::new("Employment"),
            Column::new("Started"),
        ]);

        let table_rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|p| {
                let mut row = vec![p.name.clone()];
                if show_entity {
                    row.push(p.entity.clone());
                }
                row.extend([
                    p.role.clone(),
                    p.status.label().to_string(),
                    p.employment.label().to_string(),
                    format_date(p.started_on, false),
                ]);
                row
            })
            .collect();
        print(ctx, &simple_table(ctx, &columns, &table_rows));
    }

    if ctx.mode.is_pretty() {
        blank_line(ctx);
        let noun = if view.totals.count == 1 {
            "person"
        } else {
            "people"
        };
        print(
            ctx,
            &totals_line(&[
                format!("{} {}", view.totals.count, noun),
                format!("{} active", view.totals.active),
                format!("{} on leave", view.totals.on_leave),
            ]),
        );
    } else {
        print(
            ctx,
            &format!(
                "count={} active={} on_leave={}",
                view.totals.count, view.totals.active, view.totals.on_leave
            ),
        );
    }
    Ok(())
}

/// Print a volunteer list view.
pub fn print_volunteer_list(
    ctx: &UiContext,
    selector: &EntitySelector,
    view: &VolunteerView<'_>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::volunteer_list_json(selector, view));
    }

    list_header(ctx, "volunteers list", selector);

    let show_entity = selector.is_all();
    if view.rows.is_empty() {
        print(ctx, "No volunteers found.");
    } else {
        let mut columns = vec![Column::new("Name")];
        if show_entity {
            columns.push(Column::new("Entity"));
        }
        columns.extend([
            Column::new("Status"),
            Column::new("Skills"),
            Column::new("Hours"),
            Column::new("Last Session"),
        ]);

        let table_rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|v| {
                let mut row = vec![v.name.clone()];
                if show_entity {
                    row.push(v.entity.clone());
                }
                row.extend([
                    v.status.label().to_string(),
                    truncate(&single_line(&v.skills.join(", ")), SKILLS_WIDTH),
                    v.hours_logged.to_string(),
                    format_optional_date(v.last_session_on, false),
                ]);
                row
            })
            .collect();
        print(ctx, &simple_table(ctx, &columns, &table_rows));
    }

    if ctx.mode.is_pretty() {
        blank_line(ctx);
        let noun = if view.totals.count == 1 {
            "volunteer"
        } else {
            "volunteers"
        };
        print(
            ctx,
            &totals_line(&[
                format!("{} {}", view.totals.count, noun),
                format!("{} active", view.totals.active),
                format!("{} hours logged", view.totals.hours),
            ]),
        );
    } else {
        print(
            ctx,
            &format!(
                "count={} active={} hours={}",
                view.totals.count, view.totals.active, view.totals.hours
            ),
        );
    }

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, "coffer volunteers show <name>"));
    }
    Ok(())
}

/// Print a donor profile with computed figures and merged history.
pub fn print_donor_profile(
    ctx: &UiContext,
    view: &DonorProfileView<'_>,
    history: &[HistoryLine],
    adjusted_total_minor: i64,
    has_adjustments: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::donor_profile_json(view, history, adjusted_total_minor));
    }

    let pretty = ctx.mode.is_pretty();
    print(ctx, &kv(ctx, "Name", &view.profile.name));
    print(ctx, &kv(ctx, "Entity", &view.profile.entity));
    print(ctx, &kv(ctx, "Email", &view.profile.email));
    if let Some(ref phone) = view.profile.phone {
        print(ctx, &kv(ctx, "Phone", phone));
    }
    print(ctx, &kv(ctx, "Since", &format_date(view.profile.since, pretty)));
    print(ctx, &kv(ctx, "Gifts", &view.gift_count.to_string()));
    print(
        ctx,
        &kv(ctx, "Lifetime", &format_usd(view.lifetime_total_minor)),
    );
    if has_adjustments {
        print(
            ctx,
            &kv(ctx, "Adjusted Total", &format_usd(adjusted_total_minor)),
        );
    }
    print(
        ctx,
        &kv(
            ctx,
            "First Gift",
            &format_optional_date(view.first_gift_on, pretty),
        ),
    );
    print(
        ctx,
        &kv(
            ctx,
            "Last Gift",
            &format_optional_date(view.last_gift_on, pretty),
        ),
    );

    if !history.is_empty() {
        if pretty {
            blank_line(ctx);
            print(ctx, &divider(ctx));
            let columns = [
                Column::new("Date"),
                Column::new("Amount"),
                Column::new("Type"),
                Column::new("Detail"),
            ];
            let rows: Vec<Vec<String>> = history
                .iter()
                .map(|line| {
                    vec![
                        format_date(line.date, false),
                        format_usd(line.amount_minor),
                        if line.adjustment {
                            "Adjustment".to_string()
                        } else {
                            "Gift".to_string()
                        },
                        single_line(&line.detail),
                    ]
                })
                .collect();
            print(ctx, &simple_table(ctx, &columns, &rows));
        } else {
            for line in history {
                let kind = if line.adjustment { "adjustment" } else { "gift" };
                print(
                    ctx,
                    &format!(
                        "{} date={} amount={} detail={}",
                        kind,
                        format_date(line.date, false),
                        format_usd(line.amount_minor),
                        single_line(&line.detail)
                    ),
                );
            }
        }
    }

    if !quiet {
        blank_line(ctx);
        print(ctx, &hint(ctx, "coffer statement <name>"));
    }
    Ok(())
}

/// Print a volunteer profile with computed figures and sessions.
pub fn print_volunteer_profile(
    ctx: &UiContext,
    view: &VolunteerProfileView<'_>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::volunteer_profile_json(view));
    }

    let pretty = ctx.mode.is_pretty();
    print(ctx, &kv(ctx, "Name", &view.profile.name));
    print(ctx, &kv(ctx, "Entity", &view.profile.entity));
    print(ctx, &kv(ctx, "Email", &view.profile.email));
    print(ctx, &kv(ctx, "Since", &format_date(view.profile.since, pretty)));
    print(ctx, &kv(ctx, "Hours", &view.hours.to_string()));
    print(ctx, &kv(ctx, "Sessions", &view.session_count.to_string()));
    print(
        ctx,
        &kv(
            ctx,
            "Last Session",
            &format_optional_date(view.last_session_on, pretty),
        ),
    );

    if !view.profile.sessions.is_empty() {
        if pretty {
            blank_line(ctx);
            print(ctx, &divider(ctx));
            let columns = [
                Column::new("Date"),
                Column::new("Hours"),
                Column::new("Activity"),
            ];
            let rows: Vec<Vec<String>> = view
                .profile
                .sessions
                .iter()
                .map(|s| {
                    vec![
                        format_date(s.date, false),
                        s.hours.to_string(),
                        single_line(&s.activity),
                    ]
                })
                .collect();
            print(ctx, &simple_table(ctx, &columns, &rows));
        } else {
            for s in &view.profile.sessions {
                print(
                    ctx,
                    &format!(
                        "session date={} hours={} activity={}",
                        format_date(s.date, false),
                        s.hours,
                        single_line(&s.activity)
                    ),
                );
            }
        }
    }
    Ok(())
}

/// Print an intake receipt with its reference and extra detail lines.
pub fn print_receipt(
    ctx: &UiContext,
    intake_receipt: &Receipt,
    extras: &[(&str, String)],
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        return emit_json(&json::receipt_json(intake_receipt));
    }

    let reference = short_id(&intake_receipt.reference);
    let mut items: Vec<(&str, &str)> = vec![("Reference", reference.as_str())];
    for (key, value) in extras {
        items.push((key, value.as_str()));
    }
    print(ctx, &receipt(ctx, &intake_receipt.summary, &items));
    Ok(())
}
