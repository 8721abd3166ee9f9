//! Integration tests for lens-finder

use async_trait::async_trait;
use lens_finder::{
    error::LensFinderError, AvailabilityStatus, CandidatePool, HandleChecker, HandleOracle,
    HandleSampler, ProfileLookup, Result, SampleBoard, SampleConfig, SearchState, SubmitOutcome,
};
use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory naming service: handles in `available` have no profile
struct FakeLens {
    available: HashSet<String>,
    calls: AtomicUsize,
    delay: Duration,
}

impl FakeLens {
    fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            available: available
                .into_iter()
                .map(|h| format!("{}.lens", h.as_ref()))
                .collect(),
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HandleOracle for FakeLens {
    async fn lookup_profile(&self, full_handle: &str) -> Result<ProfileLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.available.contains(full_handle) {
            Ok(ProfileLookup::NotFound)
        } else {
            Ok(ProfileLookup::Found {
                id: format!("0x{:04x}", full_handle.len()),
            })
        }
    }

    fn name(&self) -> &'static str {
        "fake-lens"
    }
}

fn numbered_words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("handle{:04}", i)).collect()
}

#[tokio::test]
async fn test_vitalik_is_available() {
    let oracle = Arc::new(FakeLens::new(["vitalik"]));
    let checker = HandleChecker::new(oracle.clone(), "lens");
    let mut state = SearchState::default();

    state.apply_input(&checker, "vitalik");
    let outcome = state.submit(&checker).await;

    assert_eq!(outcome, SubmitOutcome::Available);
    let message = state.success_message.expect("success message");
    assert!(message.contains("vitalik"));
    assert!(message.contains(".lens"));
    assert!(state.failure_message.is_none());
    assert_eq!(oracle.calls(), 1);
}

#[tokio::test]
async fn test_short_handle_skips_lookup() {
    let oracle = Arc::new(FakeLens::new(["abcd"]));
    let checker = HandleChecker::new(oracle.clone(), "lens");
    let mut state = SearchState::default();

    state.apply_input(&checker, "abcd");
    assert_eq!(state.submit(&checker).await, SubmitOutcome::LengthRejected);
    assert!(state
        .failure_message
        .unwrap()
        .contains("minimum of 5 length and maximum of 31 length"));
    assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn test_every_valid_length_is_looked_up() {
    let oracle = Arc::new(FakeLens::new(Vec::<String>::new()));
    let checker = HandleChecker::new(oracle.clone(), "lens");

    for len in 0..=40 {
        let mut state = SearchState::default();
        state.apply_input(&checker, &"q".repeat(len));
        let outcome = state.submit(&checker).await;
        if (5..=31).contains(&len) {
            assert_eq!(outcome, SubmitOutcome::Taken, "length {}", len);
        } else {
            assert_eq!(outcome, SubmitOutcome::LengthRejected, "length {}", len);
        }
    }

    assert_eq!(oracle.calls(), 27);
}

#[tokio::test]
async fn test_sample_of_six_from_partly_available_pool() {
    let words = numbered_words(1000);
    let available: Vec<&String> = words.iter().take(600).collect();
    let available_set: HashSet<String> = available.iter().map(|w| w.to_string()).collect();

    let oracle = Arc::new(FakeLens::new(available));
    let pool = CandidatePool::from_words(&words).unwrap();
    let checker = HandleChecker::new(oracle, "lens");
    let config = SampleConfig {
        target: 6,
        ..Default::default()
    };
    let sampler = HandleSampler::new(pool, checker, config).unwrap();

    let sample = sampler.sample().await.unwrap();
    assert_eq!(sample.len(), 6);
    assert!(sample.handles.iter().all(|h| available_set.contains(h)));

    let distinct: HashSet<&String> = sample.handles.iter().collect();
    assert_eq!(distinct.len(), 6);
}

#[tokio::test]
async fn test_sampler_gives_up_when_nothing_is_available() {
    let words = numbered_words(20);
    let oracle = Arc::new(FakeLens::new(Vec::<String>::new()));
    let pool = CandidatePool::from_words(&words).unwrap();
    let checker = HandleChecker::new(oracle.clone(), "lens");
    let config = SampleConfig {
        target: 6,
        max_attempts: 40,
        ..Default::default()
    };
    let sampler = HandleSampler::new(pool, checker, config).unwrap();

    let err = sampler.sample().await.unwrap_err();
    assert!(matches!(
        err,
        LensFinderError::SampleExhausted { target: 6, attempts: 40, .. }
    ));
    assert_eq!(oracle.calls(), 40);
}

#[tokio::test]
async fn test_rapid_refreshes_are_serialized() {
    let words = numbered_words(200);
    let oracle = Arc::new(FakeLens::new(&words).with_delay(Duration::from_millis(2)));
    let pool = CandidatePool::from_words(&words).unwrap();
    let checker = HandleChecker::new(oracle, "lens");
    let config = SampleConfig {
        target: 4,
        ..Default::default()
    };
    let board = SampleBoard::new(HandleSampler::new(pool, checker, config).unwrap());

    let (first, second) = tokio::join!(board.refresh(), board.refresh());
    let first = first.unwrap();
    let second = second.unwrap();

    let mut generations = vec![first.generation, second.generation];
    generations.sort();
    assert_eq!(generations, vec![1, 2]);

    let latest = if first.generation == 2 { &first } else { &second };
    let shown = board.current().unwrap();
    assert_eq!(shown.generation, 2);
    assert_eq!(shown.sample.handles, latest.sample.handles);
    assert!(!board.is_loading());
}

#[tokio::test]
async fn test_wordlist_file_feeds_sampler() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"commonNamesAndWords": ["Aurora", "Bob", "Cassandra", "Dominic"]}}"#
    )
    .unwrap();

    let pool = CandidatePool::from_json_file(file.path()).unwrap();
    // "Bob" is too short to ever be a handle
    assert_eq!(pool.len(), 3);

    let oracle = Arc::new(FakeLens::new(["aurora", "cassandra", "dominic"]));
    let checker = HandleChecker::new(oracle, "lens");
    let config = SampleConfig {
        target: 3,
        seed: Some(42),
        ..Default::default()
    };
    let sampler = HandleSampler::new(pool, checker, config).unwrap();

    let mut handles = sampler.sample().await.unwrap().handles;
    handles.sort();
    assert_eq!(handles, vec!["aurora", "cassandra", "dominic"]);
}

#[test]
fn test_batch_check_statuses() {
    let oracle = Arc::new(FakeLens::new(["freeone"]));
    let checker = HandleChecker::new(oracle, "lens");
    let handles = vec!["freeone".to_string(), "takenone".to_string()];

    let results = tokio_test::block_on(checker.check_handles(&handles));
    assert_eq!(results[0].status, AvailabilityStatus::Available);
    assert_eq!(results[1].status, AvailabilityStatus::Taken);
    assert_eq!(checker.get_metrics_snapshot().handles_checked, 2);
}

#[test]
fn test_library_initialization() {
    assert!(lens_finder::init().is_ok());
}
