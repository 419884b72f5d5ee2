//! Resolver configuration

use serde::Deserialize;

/// Marker rules for eligibility and color tags
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Marker a member must carry to take part in the graph
    pub attendee_marker: String,

    /// Markers every member carries implicitly; never used as a color tag
    pub ignored_markers: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            attendee_marker: "attendees".to_string(),
            ignored_markers: vec!["@everyone".to_string()],
        }
    }
}

impl ResolverConfig {
    /// Markers that can never be a member's distinguishing marker
    pub fn non_category_markers(&self) -> Vec<&str> {
        std::iter::once(self.attendee_marker.as_str())
            .chain(self.ignored_markers.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.attendee_marker, "attendees");
        assert_eq!(config.non_category_markers(), vec!["attendees", "@everyone"]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ResolverConfig = toml::from_str(r#"attendee_marker = "players""#).unwrap();
        assert_eq!(config.attendee_marker, "players");
        assert_eq!(config.ignored_markers, vec!["@everyone"]);
    }
}
