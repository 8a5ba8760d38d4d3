use super::*;

use std::time::Duration;

use crate::error::giveaway::GiveawayError;

/// Tests the full happy path on a paused clock.
///
/// Five entrants, two winners, a "10s" duration. Nothing may happen before
/// the deadline; at the deadline exactly one conclusion fires, drawing two
/// distinct winners from the entrant pool and removing the record.
///
/// Expected: one Result post with 2 distinct entrant winners, empty store
#[tokio::test(start_paused = true)]
async fn concludes_once_at_deadline() {
    let channel = Arc::new(MockChannel::with_entrants(vec![1, 2, 3, 4, 5]));
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let message_id = service
        .start(start_params("10s", 2, "Gift Card"))
        .await
        .unwrap();

    // One second short of the deadline: still pending, only the announcement posted
    tokio::time::sleep(Duration::from_secs(9)).await;
    assert_eq!(channel.posts().len(), 1);
    assert!(store.get(&message_id).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_secs(2)).await;

    let posts = channel.posts();
    assert_eq!(posts.len(), 2);
    match &posts[1] {
        Post::Result {
            channel_id,
            prize,
            winner_ids,
        } => {
            assert_eq!(*channel_id, 200);
            assert_eq!(prize, "Gift Card");
            assert_eq!(winner_ids.len(), 2);
            assert!(winner_ids.iter().all(|w| (1..=5).contains(w)));
            assert_ne!(winner_ids[0], winner_ids[1]);
        }
        other => panic!("expected result post, got {:?}", other),
    }

    assert!(store.get(&message_id).await.unwrap().is_none());

    // Nothing re-arms the timer
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(channel.posts().len(), 2);
}

/// Tests that invalid duration expressions fail without side effects.
///
/// Expected: InvalidDuration; no posts, no record
#[tokio::test]
async fn invalid_duration_has_no_side_effects() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    for spec in ["bogus", "", "0s", "-5s", "10x"] {
        let result = service.start(start_params(spec, 1, "x")).await;
        assert!(
            matches!(result, Err(GiveawayError::InvalidDuration(_))),
            "expected InvalidDuration for {:?}",
            spec
        );
    }

    assert!(channel.posts().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

/// Tests that an unresolvable destination channel fails without side effects.
///
/// Expected: ChannelUnavailable; no posts, no record
#[tokio::test]
async fn unresolvable_channel_has_no_side_effects() {
    let channel = Arc::new(MockChannel::default());
    channel.unresolvable.store(true, Ordering::SeqCst);
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let result = service.start(start_params("10s", 1, "x")).await;

    assert!(matches!(result, Err(GiveawayError::ChannelUnavailable(200))));
    assert!(channel.posts().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

/// Tests that a publish failure propagates and leaves no record behind.
///
/// Expected: Publish error; empty store
#[tokio::test]
async fn publish_failure_leaves_no_record() {
    let channel = Arc::new(MockChannel::default());
    channel.fail_publish.store(true, Ordering::SeqCst);
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let result = service.start(start_params("10s", 1, "x")).await;

    assert!(matches!(result, Err(GiveawayError::Publish(_))));
    assert!(store.list().await.unwrap().is_empty());
}

/// Tests the best-effort store contract on start.
///
/// A store write failure must not fail the command; the announcement already
/// went out.
///
/// Expected: Ok from start, announcement posted
#[tokio::test]
async fn store_failure_on_start_is_swallowed() {
    let channel = Arc::new(MockChannel::default());
    let service = GiveawayService::new(
        channel.clone(),
        Arc::new(FailingStore),
        GiveawayConfig::default(),
    );

    let result = service.start(start_params("10s", 1, "Sticker")).await;

    assert!(result.is_ok());
    assert_eq!(channel.posts().len(), 1);
}

/// Tests that the persisted record reflects the start inputs.
///
/// Expected: record fields equal the inputs, ends_at ≈ now + duration
#[tokio::test]
async fn record_round_trips_start_inputs() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let before = chrono::Utc::now();
    let message_id = service
        .start(start_params("10s", 3, "Gift Card"))
        .await
        .unwrap();

    let record = store.get(&message_id).await.unwrap().unwrap();
    assert_eq!(record.message_id, message_id);
    assert_eq!(record.channel_id, "200");
    assert_eq!(record.prize, "Gift Card");
    assert_eq!(record.winners, 3);
    assert_eq!(record.host_id, "300");

    let expected = before + chrono::Duration::seconds(10);
    let skew = (record.ends_at - expected).num_milliseconds().abs();
    assert!(skew < 1_000, "ends_at off by {}ms", skew);
}

/// Tests that a configured default channel overrides the origin channel.
///
/// Expected: announcement posted to the configured channel
#[tokio::test]
async fn configured_channel_overrides_origin() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = GiveawayService::new(
        channel.clone(),
        store.clone(),
        GiveawayConfig {
            default_channel_id: Some(900),
        },
    );

    let message_id = service.start(start_params("10s", 1, "x")).await.unwrap();

    assert_eq!(
        channel.posts()[0],
        Post::Announce {
            channel_id: 900,
            prize: "x".to_string(),
            winners: 1,
        }
    );
    assert_eq!(
        store.get(&message_id).await.unwrap().unwrap().channel_id,
        "900"
    );
}

/// Tests that a requested winner count of zero is raised to one.
///
/// Expected: record stores winners = 1
#[tokio::test]
async fn zero_winners_becomes_one() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let message_id = service.start(start_params("10s", 0, "x")).await.unwrap();

    assert_eq!(store.get(&message_id).await.unwrap().unwrap().winners, 1);
}

/// Tests that a winner count beyond the stored range stays positive.
///
/// Expected: record stores winners = i32::MAX, never a negative count
#[tokio::test]
async fn oversized_winner_count_is_capped() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let message_id = service
        .start(start_params("10s", u32::MAX, "x"))
        .await
        .unwrap();

    let record = store.get(&message_id).await.unwrap().unwrap();
    assert_eq!(record.winners, i32::MAX);
}

/// Tests that an absurdly long duration still records a future deadline.
///
/// Expected: start succeeds and ends_at lands after now, not in the past
#[tokio::test(start_paused = true)]
async fn extreme_duration_keeps_deadline_in_future() {
    let channel = Arc::new(MockChannel::default());
    let store = Arc::new(MemoryStore::default());
    let service = service(&channel, &store);

    let before = chrono::Utc::now();
    let message_id = service
        .start(start_params("50000000000w", 1, "x"))
        .await
        .unwrap();

    let record = store.get(&message_id).await.unwrap().unwrap();
    assert!(record.ends_at > before, "ends_at wrapped into the past");
}
