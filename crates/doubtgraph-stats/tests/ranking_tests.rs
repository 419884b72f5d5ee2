//! Ranking scenarios built through the store

use doubtgraph_domain::traits::RelationGraph;
use doubtgraph_domain::{MemberId, PlayerId, RelationKind};
use doubtgraph_stats::{compute_rankings, DEFAULT_RANK_LIMIT};
use doubtgraph_store::MemoryStore;

fn add(store: &mut MemoryStore, id: &str, tag: &str) -> PlayerId {
    store.upsert_player(&MemberId::new(id), id, tag).id
}

#[test]
fn test_ties_keep_node_order() {
    let mut store = MemoryStore::new();
    let x = add(&mut store, "x", "red");
    let y = add(&mut store, "y", "blue");
    let z = add(&mut store, "z", "green");
    let voters: Vec<PlayerId> = (0..3)
        .map(|i| add(&mut store, &format!("v{}", i), "white"))
        .collect();

    for v in &voters {
        store.set_relation(*v, x, RelationKind::Doubt).unwrap();
        store.set_relation(*v, z, RelationKind::Doubt).unwrap();
    }
    store.set_relation(voters[0], y, RelationKind::Doubt).unwrap();

    let rankings = compute_rankings(&store.snapshot(), 2);

    let names: Vec<_> = rankings.doubt_ranked.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["x", "z"]);
    assert_eq!(rankings.doubt_ranked[0].rank, 1);
    assert_eq!(rankings.doubt_ranked[1].rank, 2);
    assert!(rankings.doubt_ranked.iter().all(|e| e.count == 3));
    assert!(rankings.trust_ranked.is_empty());
}

#[test]
fn test_single_trust_scenario() {
    let mut store = MemoryStore::new();
    let a = add(&mut store, "A", "red");
    let b = add(&mut store, "B", "blue");
    store.set_relation(a, b, RelationKind::Trust).unwrap();

    let rankings = compute_rankings(&store.snapshot(), DEFAULT_RANK_LIMIT);

    assert!(rankings.doubt_ranked.is_empty());
    assert_eq!(rankings.trust_ranked.len(), 1);
    assert_eq!(rankings.trust_ranked[0].name, "B");
    assert_eq!(rankings.trust_ranked[0].color_tag, "blue");
    assert_eq!(rankings.trust_ranked[0].count, 1);
    assert!(!rankings.trust_ranked.iter().any(|e| e.name == "A"));
}

#[test]
fn test_default_limit_truncates_to_three() {
    let mut store = MemoryStore::new();
    let source = add(&mut store, "s", "black");
    for i in 0..5 {
        let t = add(&mut store, &format!("t{}", i), "orange");
        store.set_relation(source, t, RelationKind::Trust).unwrap();
    }

    let rankings = compute_rankings(&store.snapshot(), DEFAULT_RANK_LIMIT);
    let names: Vec<_> = rankings.trust_ranked.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["t0", "t1", "t2"]);
}

#[test]
fn test_overwrite_moves_count_between_lists() {
    let mut store = MemoryStore::new();
    let a = add(&mut store, "a", "red");
    let b = add(&mut store, "b", "blue");
    store.set_relation(a, b, RelationKind::Trust).unwrap();
    store.set_relation(a, b, RelationKind::Doubt).unwrap();

    let rankings = compute_rankings(&store.snapshot(), DEFAULT_RANK_LIMIT);
    assert!(rankings.trust_ranked.is_empty());
    assert_eq!(rankings.doubt_ranked[0].name, "b");
}

#[test]
fn test_rankings_serialize() {
    let mut store = MemoryStore::new();
    let a = add(&mut store, "a", "red");
    let b = add(&mut store, "b", "blue");
    store.set_relation(a, b, RelationKind::Doubt).unwrap();

    let json = serde_json::to_value(compute_rankings(&store.snapshot(), 1)).unwrap();
    assert_eq!(json["doubt_ranked"][0]["name"], "b");
    assert_eq!(json["doubt_ranked"][0]["rank"], 1);
    assert_eq!(json["trust_ranked"].as_array().map(Vec::len), Some(0));
}
