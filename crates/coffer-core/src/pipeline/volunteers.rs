//! Volunteer list queries.

use std::str::FromStr;

use crate::error::CofferError;
use crate::model::{Volunteer, VolunteerStatus};
use crate::pipeline::filter::matches_text;
use crate::pipeline::sort::{cmp_names, cmp_optional_dates, SortDirection};

/// Sort key for volunteer lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VolunteerSortKey {
    #[default]
    Name,
    Hours,
    Joined,
    LastSession,
}

impl FromStr for VolunteerSortKey {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(VolunteerSortKey::Name),
            "hours" => Ok(VolunteerSortKey::Hours),
            "joined" => Ok(VolunteerSortKey::Joined),
            "last_session" | "last-session" => Ok(VolunteerSortKey::LastSession),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown volunteer sort key: {} (expected name, hours, joined, or last_session)",
                other
            ))),
        }
    }
}

/// Totals folded over the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolunteerTotals {
    /// Number of volunteers after filtering
    pub count: usize,

    /// How many are active
    pub active: usize,

    /// Sum of logged hours
    pub hours: u64,
}

/// A filtered, sorted volunteer list with its totals.
#[derive(Debug)]
pub struct VolunteerView<'a> {
    pub rows: Vec<&'a Volunteer>,
    pub totals: VolunteerTotals,
}

/// Filter and sort settings for a volunteer list.
#[derive(Debug, Clone, Default)]
pub struct VolunteerQuery {
    /// Free-text search over name, email, and skills
    pub text: String,

    /// Status filter; `None` keeps every status
    pub status: Option<VolunteerStatus>,

    /// Skill filter: keeps volunteers listing a skill that contains
    /// this string (case-insensitive); `None` keeps everyone
    pub skill: Option<String>,

    /// Active sort key
    pub sort: VolunteerSortKey,

    /// Sort direction
    pub direction: SortDirection,
}

impl VolunteerQuery {
    /// Run the query: filter, sort, and fold totals.
    pub fn apply<'a>(&self, rows: &[&'a Volunteer]) -> VolunteerView<'a> {
        let mut kept: Vec<&'a Volunteer> = rows
            .iter()
            .filter(|v| self.keeps(v))
            .copied()
            .collect();

        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                VolunteerSortKey::Name => cmp_names(&a.name, &b.name),
                VolunteerSortKey::Hours => a.hours_logged.cmp(&b.hours_logged),
                VolunteerSortKey::Joined => a.joined_on.cmp(&b.joined_on),
                VolunteerSortKey::LastSession => {
                    cmp_optional_dates(a.last_session_on, b.last_session_on)
                }
            };
            self.direction.apply(ordering)
        });

        let totals = fold_totals(&kept);
        VolunteerView { rows: kept, totals }
    }

    fn keeps(&self, volunteer: &Volunteer) -> bool {
        let mut fields: Vec<Option<&str>> = vec![
            Some(volunteer.name.as_str()),
            Some(volunteer.email.as_str()),
        ];
        fields.extend(volunteer.skills.iter().map(|s| Some(s.as_str())));

        let skill_ok = match &self.skill {
            None => true,
            Some(wanted) => {
                let needle = wanted.to_lowercase();
                volunteer
                    .skills
                    .iter()
                    .any(|s| s.to_lowercase().contains(&needle))
            }
        };

        matches_text(&self.text, &fields)
            && self.status.map_or(true, |s| volunteer.status == s)
            && skill_ok
    }
}

fn fold_totals(rows: &[&Volunteer]) -> VolunteerTotals {
    rows.iter().fold(VolunteerTotals::default(), |mut acc, v| {
        acc.count += 1;
        acc.hours += u64::from(v.hours_logged);
        if v.status == VolunteerStatus::Active {
            acc.active += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn volunteer(id: &str, name: &str, skills: &[&str], hours: u32) -> Volunteer {
        Volunteer {
            id: id.to_string(),
            entity: "bonfire".to_string(),
            name: name.to_string(),
            email: format!("{}@example.org", id),
            status: VolunteerStatus::Active,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            hours_logged: hours,
            joined_on: date("2024-04-01"),
            last_session_on: None,
        }
    }

    fn rows(volunteers: &[Volunteer]) -> Vec<&Volunteer> {
        volunteers.iter().collect()
    }

    #[test]
    fn test_skills_are_searchable() {
        let volunteers = vec![
            volunteer("v1", "Gia", &["tutoring", "event setup"], 40),
            volunteer("v2", "Hal", &["driving"], 12),
        ];
        let view = VolunteerQuery {
            text: "tutoring".to_string(),
            ..Default::default()
        }
        .apply(&rows(&volunteers));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].name, "Gia");
    }

    #[test]
    fn test_skill_filter_narrows() {
        let volunteers = vec![
            volunteer("v1", "Gia", &["tutoring"], 40),
            volunteer("v2", "Hal", &["driving"], 12),
            volunteer("v3", "Ines", &["Tutoring", "cooking"], 8),
        ];
        let view = VolunteerQuery {
            skill: Some("tutor".to_string()),
            ..Default::default()
        }
        .apply(&rows(&volunteers));
        let names: Vec<_> = view.rows.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Gia", "Ines"]);
    }

    #[test]
    fn test_hours_total_folds_filtered_set() {
        let volunteers = vec![
            volunteer("v1", "Gia", &["tutoring"], 40),
            volunteer("v2", "Hal", &["driving"], 12),
        ];
        let view = VolunteerQuery::default().apply(&rows(&volunteers));
        assert_eq!(view.totals.count, 2);
        assert_eq!(view.totals.hours, 52);
        assert_eq!(view.totals.active, 2);
    }

    #[test]
    fn test_last_session_sort_missing_dates_flip_with_direction() {
        let mut recent = volunteer("v1", "Gia", &[], 40);
        recent.last_session_on = Some(date("2025-07-15"));
        let never = volunteer("v2", "Hal", &[], 0);

        let volunteers = vec![never, recent];
        let asc = VolunteerQuery {
            sort: VolunteerSortKey::LastSession,
            ..Default::default()
        }
        .apply(&rows(&volunteers));
        let names: Vec<_> = asc.rows.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Gia", "Hal"]);

        let desc = VolunteerQuery {
            sort: VolunteerSortKey::LastSession,
            direction: SortDirection::Descending,
            ..Default::default()
        }
        .apply(&rows(&volunteers));
        let names: Vec<_> = desc.rows.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Hal", "Gia"]);
    }
}
