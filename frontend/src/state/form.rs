use crate::api::ApiError;
use leptos::*;

/// Submitting flag and the last error of a modal form.
#[derive(Clone, Copy)]
pub struct Submission {
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl Submission {
    pub fn new() -> Self {
        Self {
            submitting: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn reset(&self) {
        self.submitting.set(false);
        self.error.set(None);
    }

    /// Marks the form as submitting and clears the previous error.
    /// Returns `false` when a submission is already in flight.
    pub fn try_begin(&self) -> bool {
        if self.submitting.get_untracked() {
            log::debug!("submission ignored, one is already in flight");
            return false;
        }
        self.submitting.set(true);
        self.error.set(None);
        true
    }

    /// Ends the submission. A failure's message stays on the form.
    pub fn finish<T>(&self, outcome: Result<T, ApiError>) -> Option<T> {
        self.submitting.set(false);
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("submission failed: {}", err);
                self.error.set(Some(err.message));
                None
            }
        }
    }
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn begin_clears_previous_error_and_blocks_second_submit() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.error.set(Some("stale".into()));
            assert!(submission.try_begin());
            assert!(submission.submitting.get_untracked());
            assert!(submission.error.get_untracked().is_none());
            assert!(!submission.try_begin());
        });
    }

    #[test]
    fn successful_finish_returns_value() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.try_begin();
            assert_eq!(submission.finish(Ok::<_, ApiError>(5)), Some(5));
            assert!(!submission.submitting.get_untracked());
            assert!(submission.error.get_untracked().is_none());
        });
    }

    #[test]
    fn failed_finish_keeps_error_message() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.try_begin();
            let value = submission.finish(Err::<(), _>(ApiError::http(
                409,
                "Employee with ID EMP001 already exists.",
            )));
            assert!(value.is_none());
            assert_eq!(
                submission.error.get_untracked().as_deref(),
                Some("Employee with ID EMP001 already exists.")
            );
            assert!(!submission.submitting.get_untracked());
            assert!(submission.try_begin());
        });
    }

    #[test]
    fn reset_clears_everything() {
        with_runtime(|| {
            let submission = Submission::new();
            submission.try_begin();
            submission.error.set(Some("boom".into()));
            submission.reset();
            assert!(!submission.submitting.get_untracked());
            assert!(submission.error.get_untracked().is_none());
        });
    }
}
