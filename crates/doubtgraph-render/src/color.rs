//! Color mapping for nodes and edges

use doubtgraph_domain::RelationKind;

/// Fill color for a player's category marker
///
/// Unknown markers fall back to black.
pub fn node_color(color_tag: &str) -> &'static str {
    match color_tag {
        "red" => "red",
        "blue" => "blue",
        "yellow" => "yellow",
        "pink" => "fuchsia",
        "green" => "green",
        "lime" => "lime",
        "brown" => "saddlebrown",
        "white" => "whitesmoke",
        "purple" => "purple",
        "cyan" => "cyan",
        "black" => "dimgrey",
        "orange" => "orange",
        _ => "black",
    }
}

/// Stroke color for a relation
pub fn edge_color(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::Doubt => "red",
        RelationKind::Trust => "cyan",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_color_mapping() {
        assert_eq!(node_color("pink"), "fuchsia");
        assert_eq!(node_color("black"), "dimgrey");
        assert_eq!(node_color("white"), "whitesmoke");
        assert_eq!(node_color("red"), "red");
    }

    #[test]
    fn test_unknown_tag_is_black() {
        assert_eq!(node_color(""), "black");
        assert_eq!(node_color("Red"), "black");
    }

    #[test]
    fn test_edge_color() {
        assert_eq!(edge_color(RelationKind::Doubt), "red");
        assert_eq!(edge_color(RelationKind::Trust), "cyan");
    }
}
