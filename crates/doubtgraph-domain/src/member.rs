//! Member module - external chat members as reported by a roster

use std::fmt;

/// Identity of an external member (e.g. a chat user id)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Create a new member id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get member id as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An external member together with the category markers (roles) they hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// External identity
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Category markers in the order the platform reports them
    pub markers: Vec<String>,
}

impl Member {
    /// Create a new member
    pub fn new<I, S>(id: impl Into<MemberId>, name: impl Into<String>, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether this member carries the given marker
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// First marker not contained in `excluded`
    ///
    /// This is the member's distinguishing category marker.
    pub fn first_marker_except(&self, excluded: &[&str]) -> Option<&str> {
        self.markers
            .iter()
            .map(String::as_str)
            .find(|m| !excluded.contains(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_marker() {
        let m = Member::new("1", "alice", ["@everyone", "attendees", "red"]);
        assert!(m.has_marker("attendees"));
        assert!(m.has_marker("red"));
        assert!(!m.has_marker("blue"));
    }

    #[test]
    fn test_first_marker_except() {
        let m = Member::new("1", "alice", ["@everyone", "attendees", "red", "mod"]);
        assert_eq!(m.first_marker_except(&["@everyone", "attendees"]), Some("red"));

        let bare = Member::new("2", "bob", ["@everyone", "attendees"]);
        assert_eq!(bare.first_marker_except(&["@everyone", "attendees"]), None);
    }
}
