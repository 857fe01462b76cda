//! Path-to-zone classification.

use serde::{Deserialize, Serialize};

/// Where unauthenticated and denied callers are sent.
pub const LOGIN_PATH: &str = "/student/login/";

/// The protection level of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    /// No session required.
    Public,
    /// Requires an authenticated student.
    StudentOnly,
    /// Requires an authenticated staff member or superuser.
    StaffOnly,
}

/// Maps request paths to zones by longest matching prefix.
///
/// Paths that match no entry are Public. The login and logout paths are
/// deliberately unlisted so a caller with a dead session can always
/// reach them.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    entries: Vec<(String, Zone)>,
}

impl ZoneTable {
    /// Builds an empty table where every path is Public.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds the standard table for the application's route layout.
    pub fn with_default_routes() -> Self {
        let mut table = Self::new();
        table.add("/student/dashboard/", Zone::StudentOnly);
        table.add("/admin-panel/", Zone::StaffOnly);
        table
    }

    /// Registers a prefix. Longer prefixes win over shorter ones.
    pub fn add(&mut self, prefix: impl Into<String>, zone: Zone) {
        self.entries.push((prefix.into(), zone));
        self.entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Classifies a request path.
    pub fn classify(&self, path: &str) -> Zone {
        self.entries
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, zone)| *zone)
            .unwrap_or(Zone::Public)
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes_classify() {
        let table = ZoneTable::with_default_routes();
        assert_eq!(table.classify("/"), Zone::Public);
        assert_eq!(table.classify("/student/login/"), Zone::Public);
        assert_eq!(table.classify("/student/logout/"), Zone::Public);
        assert_eq!(table.classify("/student/dashboard/"), Zone::StudentOnly);
        assert_eq!(table.classify("/admin-panel/"), Zone::StaffOnly);
        assert_eq!(
            table.classify("/admin-panel/students/"),
            Zone::StaffOnly
        );
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut table = ZoneTable::with_default_routes();
        table.add("/admin-panel/open/", Zone::Public);
        assert_eq!(table.classify("/admin-panel/open/docs"), Zone::Public);
        assert_eq!(table.classify("/admin-panel/other"), Zone::StaffOnly);
    }
}
