//! Retry behavior of the counter fetcher against a scripted store.

use std::sync::Arc;
use std::time::Duration;

use hit_counter::counter::HitCounter;
use hit_counter::resilience::RetryPolicy;

mod common;
use common::{BrokenStore, MockStore};

fn fetcher(store: Arc<MockStore>) -> HitCounter {
    HitCounter::new(store, RetryPolicy::new(5, Duration::from_millis(500)))
}

#[tokio::test(start_paused = true)]
async fn transient_failures_within_budget_succeed() {
    for failures in 0..5u32 {
        let store = MockStore::new();
        store.fail_next(failures);
        let counter = fetcher(store.clone());

        let value = counter.fetch_and_increment("hits").await.unwrap();
        assert_eq!(value, 1);
        // N failures then success: exactly N retries beyond the first try.
        assert_eq!(store.attempts(), failures + 1);
        assert_eq!(store.value(), 1);
    }
}

#[tokio::test(start_paused = true)]
async fn five_consecutive_failures_propagate() {
    let store = MockStore::new();
    store.fail_next(5);
    let counter = fetcher(store.clone());

    let err = counter.fetch_and_increment("hits").await.unwrap_err();
    assert!(err.is_connection());
    assert_eq!(store.attempts(), 5, "no attempt beyond the exhausted budget");
    assert_eq!(store.value(), 0, "failed call must not move the counter");
}

#[tokio::test(start_paused = true)]
async fn more_failures_behave_like_exactly_five() {
    let exhausted = MockStore::new();
    exhausted.fail_next(5);
    let persistent = MockStore::new();
    persistent.fail_next(50);

    assert!(fetcher(exhausted.clone())
        .fetch_and_increment("hits")
        .await
        .is_err());
    assert!(fetcher(persistent.clone())
        .fetch_and_increment("hits")
        .await
        .is_err());

    assert_eq!(exhausted.attempts(), persistent.attempts());
}

#[tokio::test(start_paused = true)]
async fn each_success_increments_by_exactly_one() {
    let store = MockStore::new();
    store.set_value(41);
    let counter = fetcher(store.clone());

    assert_eq!(counter.fetch_and_increment("hits").await.unwrap(), 42);
    assert_eq!(counter.fetch_and_increment("hits").await.unwrap(), 43);
    assert_eq!(store.value(), 43);
}

#[tokio::test(start_paused = true)]
async fn concurrent_fetches_get_independent_budgets() {
    // Two calls racing on one store: 4 scripted failures total. Neither
    // call's budget (5) can be exhausted by the other's failures.
    let store = MockStore::new();
    store.fail_next(4);
    let counter = Arc::new(fetcher(store.clone()));

    let a = tokio::spawn({
        let counter = counter.clone();
        async move { counter.fetch_and_increment("hits").await }
    });
    let b = tokio::spawn({
        let counter = counter.clone();
        async move { counter.fetch_and_increment("hits").await }
    });

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(store.value(), 2);
}

#[tokio::test(start_paused = true)]
async fn scripted_failures_are_consumed_exactly_once() {
    // Many callers racing on the same store: every scripted failure is
    // claimed by exactly one attempt, so total attempts must come out
    // to one success per call plus one attempt per scripted failure.
    let store = MockStore::new();
    store.fail_next(4);
    let counter = Arc::new(fetcher(store.clone()));

    let calls: Vec<_> = (0..10)
        .map(|_| {
            let counter = counter.clone();
            tokio::spawn(async move { counter.fetch_and_increment("hits").await })
        })
        .collect();
    for call in calls {
        assert!(call.await.unwrap().is_ok());
    }

    assert_eq!(store.value(), 10);
    assert_eq!(store.attempts(), 14);
}

#[tokio::test(start_paused = true)]
async fn backend_error_is_not_retried() {
    let counter = HitCounter::new(
        Arc::new(BrokenStore),
        RetryPolicy::new(5, Duration::from_millis(500)),
    );

    let err = counter.fetch_and_increment("hits").await.unwrap_err();
    assert!(!err.is_connection());
}
