//! Send orchestrator and liveness tests against a stub transport.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use vesselmail_client::{Client, DrainState, LivenessMonitor, Outbox};
use vesselmail_core::error::SignatureError;
use vesselmail_core::{package, MailError, PackagedMessage, RawMessage, SharedSecret};

use stub_transport::{Health, StubTransport};

const SECRET: &[u8] = b"outbox-test-secret";

fn raw(subject: &str) -> RawMessage {
    RawMessage::new(
        ("Bob", "Snow"),
        ("Kevin", "Liberty"),
        subject,
        "Strong currents ahead, ~5nm NE of our position.",
    )
}

fn outbox_with(stub: StubTransport, subjects: &[&str]) -> Outbox<StubTransport> {
    let outbox = Outbox::new(stub);
    for s in subjects {
        outbox.add(&raw(s), SECRET).unwrap();
    }
    outbox
}

#[tokio::test]
async fn offline_probe_leaves_queue_untouched() {
    let outbox = outbox_with(StubTransport::new(Health::Unreachable), &["one", "two", "three"]);
    assert_eq!(outbox.state(), DrainState::NotStarted);
    assert!(!outbox.is_reachable());

    let err = outbox.send_all(SECRET).await.expect_err("must be offline");

    assert!(matches!(err, MailError::Offline));
    assert_eq!(outbox.size(), 3);
    assert_eq!(outbox.transport().probes(), 1);
    assert_eq!(outbox.transport().attempts(), 0);
    assert!(!outbox.is_reachable());
    assert_eq!(outbox.state(), DrainState::Idle);
}

#[tokio::test]
async fn transport_failure_stops_the_drain() {
    let outbox = outbox_with(
        StubTransport::new(Health::Ok).failing_on(2),
        &["one", "two", "three"],
    );

    let err = outbox.send_all(SECRET).await.expect_err("second delivery fails");

    match err {
        MailError::Transport { status, .. } => assert_eq!(status, Some(500)),
        other => panic!("expected transport error, got {other:?}"),
    }
    let delivered = outbox.transport().delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].subject(), "one");

    assert_eq!(outbox.size(), 1);
    assert_eq!(outbox.summary(), "Number of messages in queue: 1\nSubjects: three\n");
    assert_eq!(outbox.state(), DrainState::Idle);
}

#[tokio::test]
async fn drains_everything_in_order() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &["one", "two", "three"]);

    let sent = outbox.send_all(SECRET).await.unwrap();

    assert_eq!(sent, 3);
    assert!(outbox.is_empty());
    assert!(outbox.is_reachable());
    let subjects: Vec<_> = outbox
        .transport()
        .delivered()
        .iter()
        .map(|m| m.subject().to_string())
        .collect();
    assert_eq!(subjects, ["one", "two", "three"]);
}

#[tokio::test]
async fn cached_reachability_skips_the_probe() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &["one"]);
    outbox.check_liveness().await.unwrap();
    assert_eq!(outbox.transport().probes(), 1);

    // Server goes away after the probe; the stale state is accepted and the
    // send itself surfaces the failure.
    outbox.transport().set_health(Health::Unreachable);
    outbox.add(&raw("two"), SECRET).unwrap();

    assert_eq!(outbox.send_all(SECRET).await.unwrap(), 2);
    assert_eq!(outbox.transport().probes(), 1);
}

#[tokio::test]
async fn bad_signature_aborts_without_skipping() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &[]);

    // A message signed with another key sits at the head of the queue.
    outbox.enqueue(package(&raw("poison"), b"someone else's key").unwrap());
    outbox.add(&raw("good"), SECRET).unwrap();

    let err = outbox.send_all(SECRET).await.expect_err("poison message");

    assert!(matches!(err, MailError::Signature(SignatureError::Mismatch)));
    assert_eq!(outbox.transport().attempts(), 0);
    assert_eq!(outbox.size(), 1);

    // The caller decides to carry on.
    assert_eq!(outbox.send_all(SECRET).await.unwrap(), 1);
}

#[tokio::test]
async fn tampered_message_is_not_transmitted() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &[]);

    let msg = package(&raw("orders"), SECRET).unwrap();
    let mut v = serde_json::to_value(&msg).unwrap();
    v["body"] = json!("Turn back.");
    outbox.enqueue(serde_json::from_value::<PackagedMessage>(v).unwrap());

    assert!(matches!(outbox.send_one(SECRET).await, Err(MailError::Signature(_))));
    assert!(outbox.transport().delivered().is_empty());
    assert!(outbox.is_empty());
}

#[tokio::test]
async fn send_one_sends_only_the_head() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &["one", "two"]);

    outbox.send_one(SECRET).await.unwrap();
    assert_eq!(outbox.size(), 1);
    assert_eq!(outbox.transport().delivered()[0].subject(), "one");

    outbox.send_one(SECRET).await.unwrap();
    assert!(outbox.is_empty());
    assert_eq!(outbox.transport().attempts(), 2);
}

#[tokio::test]
async fn send_one_on_empty_outbox_is_a_queue_race() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &[]);

    let err = outbox.send_one(SECRET).await.unwrap_err();
    assert!(matches!(err, MailError::QueueRace), "got {err:?}");
    assert_eq!(err.client_code().as_str(), "QUEUE_RACE");
    assert_eq!(outbox.state(), DrainState::Idle);
    assert!(outbox.is_reachable());
    assert_eq!(outbox.transport().attempts(), 0);
}

#[tokio::test]
async fn send_one_offline_keeps_queue() {
    let outbox = outbox_with(StubTransport::new(Health::Status(503)), &["one"]);

    assert!(matches!(outbox.send_one(SECRET).await, Err(MailError::Offline)));
    assert_eq!(outbox.size(), 1);
}

#[tokio::test]
async fn add_rejects_incomplete_messages() {
    let outbox = outbox_with(StubTransport::new(Health::Ok), &[]);
    let mut r = raw("subject");
    r.body.clear();

    assert!(matches!(outbox.add(&r, SECRET), Err(MailError::MissingField { .. })));
    assert!(outbox.is_empty());
}

#[tokio::test]
async fn probe_interprets_health_payload() {
    let monitor = LivenessMonitor::new();
    assert!(!monitor.is_reachable());

    let stub = StubTransport::new(Health::Ok);
    monitor.probe(&stub).await.unwrap();
    assert!(monitor.is_reachable());

    for bad in [
        Health::Value("DEGRADED".into()),
        Health::Value("ok".into()),
        Health::Status(500),
        Health::Unreachable,
    ] {
        stub.set_health(Health::Ok);
        monitor.probe(&stub).await.unwrap();

        stub.set_health(bad.clone());
        let err = monitor.probe(&stub).await.expect_err("must be offline");
        assert!(matches!(err, MailError::Offline), "health={bad:?}");
        assert!(!monitor.is_reachable(), "health={bad:?}");
    }
}

#[tokio::test]
async fn client_signs_as_configured_sender() {
    let secret = SharedSecret::new(SECRET.to_vec()).unwrap();
    let client = Client::new(StubTransport::new(Health::Ok), secret, "Kevin", "Liberty");

    client.compose("Bob", "Snow", "Roger", "We will slow to below 4kt.").unwrap();
    client.check_server().await.unwrap();
    assert_eq!(client.send_all().await.unwrap(), 1);

    let delivered = client.outbox().transport().delivered();
    let sent = &delivered[0];
    assert_eq!(sent.from().to_string(), "kevin@liberty");
    assert_eq!(sent.to().to_string(), "bob@snow");
    vesselmail_core::verify(sent, SECRET).unwrap();
}
