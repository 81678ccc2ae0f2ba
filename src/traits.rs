//! Roster source abstraction.
//!
//! A roster can come from a JSON export on disk or from the seeded virtual
//! generator used for demos and tests; both sides of that seam implement
//! [`RosterReader`].

use crate::model::Roster;

/// A source of friend rosters.
pub trait RosterReader {
    /// Reads a roster. File-backed readers interpret `path`; generated
    /// readers ignore it.
    fn read(&self, path: &str) -> anyhow::Result<Roster>;
}
