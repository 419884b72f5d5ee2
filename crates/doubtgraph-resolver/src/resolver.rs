//! Attendee resolution logic

use crate::{ResolveError, ResolverConfig};
use doubtgraph_domain::traits::RelationGraph;
use doubtgraph_domain::{Member, MemberId, Player};

/// A resolved `(source, target)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Player holding the opinion
    pub source: Player,

    /// Player the opinion is about
    pub target: Player,
}

/// The resolver maps command identifiers onto eligible members
pub struct AttendeeResolver {
    config: ResolverConfig,
}

impl AttendeeResolver {
    /// Create a new resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver with default configuration
    pub fn default_config() -> Self {
        Self::new(ResolverConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Whether `member` carries the participation marker
    pub fn is_attendee(&self, member: &Member) -> bool {
        member.has_marker(&self.config.attendee_marker)
    }

    /// The member's distinguishing category marker, or `""` when they hold none
    pub fn color_tag<'m>(&self, member: &'m Member) -> &'m str {
        member
            .first_marker_except(&self.config.non_category_markers())
            .unwrap_or("")
    }

    /// Reject two identical identifiers
    ///
    /// Cheap to call before fetching a roster.
    pub fn check_identifiers(
        &self,
        first: &str,
        second: Option<&str>,
    ) -> Result<(), ResolveError> {
        if second == Some(first) {
            return Err(ResolveError::DuplicateRole);
        }
        Ok(())
    }

    /// Resolve identifiers against a freshly fetched roster
    ///
    /// # Arguments
    ///
    /// * `graph` - Store receiving a player for every eligible member
    /// * `invoker` - Member issuing the command; the default source
    /// * `roster` - Every current member, as reported by the platform
    /// * `first` - Target marker (one-arg form) or source marker (two-arg form)
    /// * `second` - Target marker in the two-arg form
    ///
    /// The invoker is only consulted in the one-arg form. When several
    /// eligible members carry the queried marker, the last one in roster
    /// order wins.
    pub fn resolve<G: RelationGraph>(
        &self,
        graph: &mut G,
        invoker: Option<&MemberId>,
        roster: &[Member],
        first: &str,
        second: Option<&str>,
    ) -> Result<Resolution, ResolveError> {
        self.check_identifiers(first, second)?;

        let attendees: Vec<&Member> = roster.iter().filter(|m| self.is_attendee(m)).collect();

        for attendee in &attendees {
            graph.upsert_player(&attendee.id, &attendee.name, self.color_tag(attendee));
        }

        let (source, target_label) = match second {
            None => {
                let invoker = invoker.ok_or(ResolveError::MissingInvoker)?;
                let source = attendees
                    .iter()
                    .copied()
                    .find(|m| &m.id == invoker)
                    .ok_or_else(|| {
                        ResolveError::NotAttendee(self.invoker_label(roster, invoker))
                    })?;
                (source, first)
            }
            Some(second) => {
                let source = find_by_marker(&attendees, first)
                    .ok_or_else(|| ResolveError::NotAttendee(first.to_string()))?;
                (source, second)
            }
        };

        let target = find_by_marker(&attendees, target_label)
            .ok_or_else(|| ResolveError::NotAttendee(target_label.to_string()))?;

        if source.id == target.id {
            return Err(ResolveError::SpecifyYourself);
        }

        let source_player = graph
            .player(&source.id)
            .cloned()
            .ok_or_else(|| ResolveError::NotAttendee(source.name.clone()))?;
        let target_player = graph
            .player(&target.id)
            .cloned()
            .ok_or_else(|| ResolveError::NotAttendee(target_label.to_string()))?;

        Ok(Resolution {
            source: source_player,
            target: target_player,
        })
    }

    /// Label reported when the invoker is not eligible
    ///
    /// The invoker's category marker, else their name, else the raw id when
    /// the roster no longer lists them.
    fn invoker_label(&self, roster: &[Member], invoker: &MemberId) -> String {
        match roster.iter().find(|m| &m.id == invoker) {
            Some(member) => member
                .first_marker_except(&self.config.non_category_markers())
                .map(str::to_string)
                .unwrap_or_else(|| member.name.clone()),
            None => invoker.to_string(),
        }
    }
}

/// Last eligible member carrying `marker`
fn find_by_marker<'m>(attendees: &[&'m Member], marker: &str) -> Option<&'m Member> {
    attendees.iter().rev().copied().find(|m| m.has_marker(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, markers: &[&str]) -> Member {
        Member::new(id, name, markers.iter().copied())
    }

    #[test]
    fn test_color_tag_skips_default_markers() {
        let resolver = AttendeeResolver::default_config();
        let m = member("1", "alice", &["@everyone", "attendees", "red"]);
        assert_eq!(resolver.color_tag(&m), "red");

        let bare = member("2", "bob", &["@everyone", "attendees"]);
        assert_eq!(resolver.color_tag(&bare), "");
    }

    #[test]
    fn test_check_identifiers() {
        let resolver = AttendeeResolver::default_config();
        assert!(resolver.check_identifiers("red", None).is_ok());
        assert!(resolver.check_identifiers("red", Some("blue")).is_ok());
        assert_eq!(
            resolver.check_identifiers("red", Some("red")),
            Err(ResolveError::DuplicateRole)
        );
    }

    #[test]
    fn test_find_by_marker_last_wins() {
        let a = member("1", "alice", &["attendees", "fox"]);
        let b = member("2", "bob", &["attendees", "fox"]);
        let c = member("3", "carol", &["attendees", "owl"]);
        let attendees = vec![&a, &b, &c];

        assert_eq!(find_by_marker(&attendees, "fox").map(|m| m.name.as_str()), Some("bob"));
        assert!(find_by_marker(&attendees, "cat").is_none());
    }

    #[test]
    fn test_invoker_label_falls_back_to_name() {
        let resolver = AttendeeResolver::default_config();
        let roster = vec![
            member("9", "sam", &["@everyone"]),
            member("8", "tom", &["@everyone", "yellow"]),
        ];

        assert_eq!(resolver.invoker_label(&roster, &MemberId::new("9")), "sam");
        assert_eq!(resolver.invoker_label(&roster, &MemberId::new("8")), "yellow");
        assert_eq!(resolver.invoker_label(&roster, &MemberId::new("7")), "7");
    }
}
