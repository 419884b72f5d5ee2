//! Integration tests for the graph mutation service

use async_trait::async_trait;
use doubtgraph_domain::{Member, MemberId, RelationKind};
use doubtgraph_resolver::{AttendeeResolver, ResolveError};
use doubtgraph_service::{
    GraphService, RosterError, RosterProvider, ServiceError, SessionContext, StaticRoster,
};
use doubtgraph_store::StoreError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn members() -> Vec<Member> {
    vec![
        Member::new("a", "alice", ["@everyone", "attendees", "red"]),
        Member::new("b", "bob", ["@everyone", "attendees", "blue"]),
        Member::new("c", "carol", ["@everyone", "attendees", "green"]),
        Member::new("s", "sam", ["@everyone", "yellow"]),
    ]
}

fn member(id: &str) -> MemberId {
    MemberId::new(id)
}

fn create_test_service() -> GraphService {
    GraphService::new(
        AttendeeResolver::default_config(),
        Arc::new(StaticRoster::new(members())),
    )
}

/// Counts fetches and optionally fails them
struct CountingRoster {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl RosterProvider for CountingRoster {
    async fn fetch_roster(&self, _ctx: &SessionContext) -> Result<Vec<Member>, RosterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err("guild unavailable".into());
        }
        Ok(members())
    }
}

#[tokio::test]
async fn test_trust_then_stat() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");

    service.trust(&ctx, Some(&member("a")), "blue", None).await.unwrap();

    let snap = service.snapshot().await;
    assert_eq!(snap.relations.len(), 1);
    let edge = snap.relations[0];
    assert_eq!(snap.player(edge.source).map(|p| p.name.as_str()), Some("alice"));
    assert_eq!(snap.player(edge.target).map(|p| p.name.as_str()), Some("bob"));
    assert_eq!(edge.kind, RelationKind::Trust);

    let rankings = service.rankings(3).await;
    assert!(rankings.doubt_ranked.is_empty());
    assert_eq!(rankings.trust_ranked.len(), 1);
    assert_eq!(rankings.trust_ranked[0].name, "bob");
}

#[tokio::test]
async fn test_doubt_overwrites_trust() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");

    service.trust(&ctx, Some(&member("a")), "blue", None).await.unwrap();
    let snap = service.doubt(&ctx, Some(&member("s")), "red", Some("blue")).await.unwrap();

    assert_eq!(snap.relations.len(), 1);
    assert_eq!(snap.relations[0].kind, RelationKind::Doubt);
}

#[tokio::test]
async fn test_clear_relation() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");

    let missing = service.clear_relation(&ctx, Some(&member("a")), "blue", None).await;
    assert!(matches!(missing, Err(ServiceError::Store(StoreError::NoSuchRelation))));

    service.doubt(&ctx, Some(&member("a")), "blue", None).await.unwrap();
    let snap = service
        .clear_relation(&ctx, Some(&member("a")), "blue", None)
        .await
        .unwrap();
    assert!(snap.is_empty());
    assert!(snap.players.is_empty());
}

#[tokio::test]
async fn test_two_arg_form_without_invoker() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");

    let snap = service.doubt(&ctx, None, "green", Some("red")).await.unwrap();
    assert_eq!(snap.relations.len(), 1);

    let missing = service.trust(&ctx, None, "red", None).await;
    assert!(matches!(missing, Err(ServiceError::Resolve(ResolveError::MissingInvoker))));
}

#[tokio::test]
async fn test_resolver_errors_propagate() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");

    let not_attendee = service.trust(&ctx, Some(&member("s")), "blue", None).await;
    assert!(matches!(
        not_attendee,
        Err(ServiceError::Resolve(ResolveError::NotAttendee(ref label))) if label == "yellow"
    ));

    let yourself = service.doubt(&ctx, Some(&member("a")), "red", None).await;
    assert!(matches!(
        yourself,
        Err(ServiceError::Resolve(ResolveError::SpecifyYourself))
    ));
}

#[tokio::test]
async fn test_duplicate_roles_skip_roster_fetch() {
    let roster = Arc::new(CountingRoster {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let service = GraphService::new(AttendeeResolver::default_config(), roster.clone());
    let ctx = SessionContext::new("game");

    let result = service.trust(&ctx, Some(&member("a")), "blue", Some("blue")).await;

    assert!(matches!(
        result,
        Err(ServiceError::Resolve(ResolveError::DuplicateRole))
    ));
    assert_eq!(roster.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_roster_fetched_once_per_command() {
    let roster = Arc::new(CountingRoster {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let service = GraphService::new(AttendeeResolver::default_config(), roster.clone());
    let ctx = SessionContext::new("game");

    service.trust(&ctx, Some(&member("a")), "blue", None).await.unwrap();
    service.doubt(&ctx, Some(&member("a")), "green", None).await.unwrap();

    assert_eq!(roster.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_roster_failure_is_opaque() {
    let roster = Arc::new(CountingRoster {
        calls: AtomicUsize::new(0),
        fail: true,
    });
    let service = GraphService::new(AttendeeResolver::default_config(), roster);
    let ctx = SessionContext::new("game");

    let result = service.trust(&ctx, Some(&member("a")), "blue", None).await;

    match result {
        Err(ServiceError::Roster(e)) => assert_eq!(e.to_string(), "guild unavailable"),
        other => panic!("expected roster error, got {:?}", other),
    }
    assert!(service.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_roster_changes_are_picked_up() {
    let roster = Arc::new(StaticRoster::new(members()));
    let service = GraphService::new(AttendeeResolver::default_config(), roster.clone());
    let ctx = SessionContext::new("game");

    let late = service.trust(&ctx, Some(&member("a")), "pink", None).await;
    assert!(late.is_err());

    let mut joined = members();
    joined.push(Member::new("p", "pia", ["@everyone", "attendees", "pink"]));
    roster.set_members(joined).await;

    let snap = service.trust(&ctx, Some(&member("a")), "pink", None).await.unwrap();
    assert!(snap.players.iter().any(|p| p.name == "pia"));
}

#[tokio::test]
async fn test_clear_all_wipes_graph() {
    let service = create_test_service();
    let ctx = SessionContext::new("game");
    service.trust(&ctx, Some(&member("a")), "blue", None).await.unwrap();
    service.doubt(&ctx, Some(&member("b")), "green", None).await.unwrap();

    service.clear_all().await;

    assert!(service.snapshot().await.is_empty());
    assert!(service.rankings(3).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_commands_are_serialized() {
    let service = Arc::new(create_test_service());
    let mut handles = Vec::new();

    for i in 0..40 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let ctx = SessionContext::new("game");
            let (invoker, target) = match i % 3 {
                0 => ("a", "blue"),
                1 => ("b", "green"),
                _ => ("c", "red"),
            };
            let kind = if i % 2 == 0 {
                RelationKind::Trust
            } else {
                RelationKind::Doubt
            };
            service
                .apply_relation(&ctx, Some(&member(invoker)), target, None, kind)
                .await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snap = service.snapshot().await;
    assert_eq!(snap.players.len(), 3, "each member must map to exactly one player");
    assert_eq!(snap.relations.len(), 3, "one edge per ordered pair");
}
