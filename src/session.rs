//! Search state for the handle lookup form
//!
//! The UI owns one [`SearchState`] and feeds it keystrokes and submissions;
//! everything it shows is read back from the state.

use crate::error::LensFinderError;
use crate::handle::validator::LENGTH_MESSAGE;
use crate::handle::HandleChecker;
use crate::types::{AvailabilityStatus, HandleResult};

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Length out of range; the oracle was not asked
    LengthRejected,
    /// Strict mode only: characters outside `[a-z0-9_-]`; the oracle was not asked
    CharsetRejected,
    Available,
    Taken,
    /// The lookup failed, availability unknown
    Failed,
}

/// Current handle input and the messages shown for it
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub handle: String,
    /// Warning under the input box
    pub input_message: Option<String>,
    pub success_message: Option<String>,
    pub failure_message: Option<String>,
    pub last_result: Option<HandleResult>,
    /// Block submission on characters, not only on length
    pub strict_charset: bool,
}

impl SearchState {
    pub fn new(strict_charset: bool) -> Self {
        Self {
            strict_charset,
            ..Default::default()
        }
    }

    /// Take raw input from the user
    pub fn apply_input(&mut self, checker: &HandleChecker, raw: &str) {
        let check = checker.validator().check_input(raw);
        self.handle = check.handle;
        self.input_message = check.message;
    }

    /// Submit the current handle.
    ///
    /// At most one lookup is issued, and only for handles of valid length.
    pub async fn submit(&mut self, checker: &HandleChecker) -> SubmitOutcome {
        let validator = checker.validator();

        if validator.validate_length(&self.handle).is_err() {
            self.fail(LENGTH_MESSAGE.to_string());
            return SubmitOutcome::LengthRejected;
        }

        if self.strict_charset {
            if let Err(e) = validator.validate_characters(&self.handle) {
                let message = match e {
                    LensFinderError::Validation { message } => message,
                    other => other.to_string(),
                };
                self.fail(message);
                return SubmitOutcome::CharsetRejected;
            }
        }

        let result = checker.check_handle(&self.handle).await;
        let full_handle = result.full_handle.clone();

        let outcome = match result.status {
            AvailabilityStatus::Available => {
                self.failure_message = None;
                self.success_message = Some(format!("Hey! {} is Available!", full_handle));
                SubmitOutcome::Available
            }
            AvailabilityStatus::Taken => {
                self.fail(format!("Bummer... {} is not available.", full_handle));
                SubmitOutcome::Taken
            }
            AvailabilityStatus::Failed => {
                self.fail(format!(
                    "Hmm... couldn't reach the Lens API to check {}. Try again.",
                    full_handle
                ));
                SubmitOutcome::Failed
            }
        };

        self.last_result = Some(result);
        outcome
    }

    fn fail(&mut self, message: String) {
        self.success_message = None;
        self.failure_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LensFinderError, Result};
    use crate::handle::validator::INVALID_CHARACTERS_MESSAGE;
    use crate::handle::{HandleOracle, ProfileLookup};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingOracle {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HandleOracle for CountingOracle {
        async fn lookup_profile(&self, full_handle: &str) -> Result<ProfileLookup> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match full_handle {
                "vitalik.lens" => Ok(ProfileLookup::NotFound),
                "offline.lens" => Err(LensFinderError::network("connection reset", None, None)),
                _ => Ok(ProfileLookup::Found { id: "0x10".to_string() }),
            }
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn setup() -> (Arc<CountingOracle>, HandleChecker) {
        let oracle = Arc::new(CountingOracle { calls: AtomicUsize::new(0) });
        let checker = HandleChecker::new(oracle.clone(), "lens");
        (oracle, checker)
    }

    #[tokio::test]
    async fn test_available_sets_success_and_clears_failure() {
        let (_, checker) = setup();
        let mut state = SearchState::default();
        state.failure_message = Some("old failure".to_string());

        state.apply_input(&checker, "Vitalik");
        let outcome = state.submit(&checker).await;

        assert_eq!(outcome, SubmitOutcome::Available);
        assert_eq!(state.success_message.as_deref(), Some("Hey! vitalik.lens is Available!"));
        assert!(state.failure_message.is_none());
    }

    #[tokio::test]
    async fn test_taken_sets_failure_and_clears_success() {
        let (_, checker) = setup();
        let mut state = SearchState::default();
        state.success_message = Some("old success".to_string());

        state.apply_input(&checker, "stani");
        assert_eq!(state.submit(&checker).await, SubmitOutcome::Taken);
        assert_eq!(
            state.failure_message.as_deref(),
            Some("Bummer... stani.lens is not available.")
        );
        assert!(state.success_message.is_none());
    }

    #[tokio::test]
    async fn test_short_handle_never_queries() {
        let (oracle, checker) = setup();
        let mut state = SearchState::default();

        state.apply_input(&checker, "abcd");
        assert_eq!(state.submit(&checker).await, SubmitOutcome::LengthRejected);
        assert_eq!(state.failure_message.as_deref(), Some(LENGTH_MESSAGE));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);

        state.apply_input(&checker, &"x".repeat(32));
        assert_eq!(state.submit(&checker).await, SubmitOutcome::LengthRejected);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_has_its_own_message() {
        let (_, checker) = setup();
        let mut state = SearchState::default();

        state.apply_input(&checker, "offline");
        assert_eq!(state.submit(&checker).await, SubmitOutcome::Failed);
        let message = state.failure_message.unwrap();
        assert!(message.contains("couldn't reach"));
        assert!(!message.contains("not available"));
    }

    #[tokio::test]
    async fn test_charset_only_blocks_in_strict_mode() {
        let (oracle, checker) = setup();

        let mut lenient = SearchState::default();
        lenient.apply_input(&checker, "ab!cd");
        assert!(lenient.input_message.is_none());
        assert_eq!(lenient.submit(&checker).await, SubmitOutcome::Taken);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);

        let mut strict = SearchState::new(true);
        strict.apply_input(&checker, "ab!cd");
        assert_eq!(strict.submit(&checker).await, SubmitOutcome::CharsetRejected);
        assert_eq!(strict.failure_message.as_deref(), Some(INVALID_CHARACTERS_MESSAGE));
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_input_message_follows_input() {
        let (_, checker) = setup();
        let mut state = SearchState::default();

        state.apply_input(&checker, "###");
        assert_eq!(state.input_message.as_deref(), Some(INVALID_CHARACTERS_MESSAGE));

        state.apply_input(&checker, "");
        assert!(state.input_message.is_none());
        assert_eq!(state.handle, "");
    }
}
