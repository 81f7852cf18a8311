//! The closed set of record kinds exposed by the store.
//!
//! HTTP callers name a kind through the `table` query parameter; parsing it
//! into [`ResourceKind`] up front means an unknown table can never reach the
//! storage layer.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Employees,
    Parking,
    Departments,
    Buildings,
    Waitlist,
    Bookings,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Employees,
        ResourceKind::Parking,
        ResourceKind::Departments,
        ResourceKind::Buildings,
        ResourceKind::Waitlist,
        ResourceKind::Bookings,
    ];

    /// Public name used in query strings and status reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Employees => "employees",
            ResourceKind::Parking => "parking",
            ResourceKind::Departments => "departments",
            ResourceKind::Buildings => "buildings",
            ResourceKind::Waitlist => "waitlist",
            ResourceKind::Bookings => "bookings",
        }
    }

    /// Singular entity label used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            ResourceKind::Employees => "Employee",
            ResourceKind::Parking => "Parking spot",
            ResourceKind::Departments => "Department",
            ResourceKind::Buildings => "Building",
            ResourceKind::Waitlist => "Waitlist entry",
            ResourceKind::Bookings => "EV booking",
        }
    }

    /// Backing SQLite table.
    pub fn table_name(self) -> &'static str {
        match self {
            ResourceKind::Employees => "employees",
            ResourceKind::Parking => "parking_spots",
            ResourceKind::Departments => "departments",
            ResourceKind::Buildings => "buildings",
            ResourceKind::Waitlist => "waitlist_entries",
            ResourceKind::Bookings => "ev_bookings",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Invalid table parameter: '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_table_is_a_validation_error() {
        assert_matches!(
            "loginInfo".parse::<ResourceKind>(),
            Err(CoreError::Validation(msg)) if msg.contains("loginInfo")
        );
    }

    #[test]
    fn table_names_are_distinct() {
        let mut names: Vec<_> = ResourceKind::ALL.iter().map(|k| k.table_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }
}
