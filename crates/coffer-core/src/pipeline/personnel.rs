//! Personnel list queries.

use std::str::FromStr;

use crate::error::CofferError;
use crate::model::{EmploymentKind, Person, PersonnelStatus};
use crate::pipeline::filter::matches_text;
use crate::pipeline::sort::{cmp_names, SortDirection};

/// Sort key for personnel lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersonnelSortKey {
    #[default]
    Name,
    Role,
    Started,
}

impl FromStr for PersonnelSortKey {
    type Err = CofferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(PersonnelSortKey::Name),
            "role" => Ok(PersonnelSortKey::Role),
            "started" => Ok(PersonnelSortKey::Started),
            other => Err(CofferError::InvalidInput(format!(
                "Unknown personnel sort key: {} (expected name, role, or started)",
                other
            ))),
        }
    }
}

/// Totals folded over the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonnelTotals {
    /// Number of staff after filtering
    pub count: usize,

    /// How many are active
    pub active: usize,

    /// How many are on leave
    pub on_leave: usize,
}

/// A filtered, sorted personnel list with its totals.
#[derive(Debug)]
pub struct PersonnelView<'a> {
    pub rows: Vec<&'a Person>,
    pub totals: PersonnelTotals,
}

/// Filter and sort settings for a personnel list.
#[derive(Debug, Clone, Default)]
pub struct PersonnelQuery {
    /// Free-text search over name, email, and role
    pub text: String,

    /// Status filter; `None` keeps every status
    pub status: Option<PersonnelStatus>,

    /// Employment filter; `None` keeps every arrangement
    pub employment: Option<EmploymentKind>,

    /// Active sort key
    pub sort: PersonnelSortKey,

    /// Sort direction
    pub direction: SortDirection,
}

impl PersonnelQuery {
    /// Run the query: filter, sort, and fold totals.
    pub fn apply<'a>(&self, rows: &[&'a Person]) -> PersonnelView<'a> {
        let mut kept: Vec<&'a Person> = rows
            .iter()
            .filter(|p| self.keeps(p))
            .copied()
            .collect();

        kept.sort_by(|a, b| {
            let ordering = match self.sort {
                PersonnelSortKey::Name => cmp_names(&a.name, &b.name),
                PersonnelSortKey::Role => cmp_names(&a.role, &b.role),
                PersonnelSortKey::Started => a.started_on.cmp(&b.started_on),
            };
            self.direction.apply(ordering)
        });

        let totals = fold_totals(&kept);
        PersonnelView { rows: kept, totals }
    }

    fn keeps(&self, person: &Person) -> bool {
        let fields = [
            Some(person.name.as_str()),
            Some(person.email.as_str()),
            Some(person.role.as_str()),
        ];
        matches_text(&self.text, &fields)
            && self.status.map_or(true, |s| person.status == s)
            && self.employment.map_or(true, |e| person.employment == e)
    }
}

fn fold_totals(rows: &[&Person]) -> PersonnelTotals {
    rows.iter().fold(PersonnelTotals::default(), |mut acc, p| {
        acc.count += 1;
        match p.status {
            PersonnelStatus::Active => acc.active += 1,
            PersonnelStatus::OnLeave => acc.on_leave += 1,
            PersonnelStatus::Ended => {}
        }
        acc
    })
}
