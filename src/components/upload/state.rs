/// Local state of the upload panel: the selected file, whether an upload is
/// in flight, and the last failure message.
///
/// Transitions are pure (each returns the next state), so the whole state
/// machine is testable without a DOM. The panel instantiates it with
/// `web_sys::File`; tests use any placeholder handle.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadState<F> {
    pub file: Option<F>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            file: None,
            loading: false,
            error: None,
        }
    }
}

impl<F> UploadState<F> {
    /// A (de)selection from the file picker. Always returns to the idle
    /// state and clears any prior error.
    pub fn select_file(self, file: Option<F>) -> Self {
        Self {
            file,
            loading: false,
            error: None,
        }
    }

    /// Submission is valid only with a file held and no upload in flight.
    /// The submit control is disabled otherwise, which is the only guard
    /// against double submission.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.loading
    }

    /// Enter the loading state. A no-op unless submission is valid.
    pub fn begin_upload(self) -> Self {
        if !self.can_submit() {
            return self;
        }
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    /// The in-flight upload failed; hold the message for inline display.
    pub fn fail(self, message: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: Some(message.into()),
            ..self
        }
    }

    /// The in-flight upload succeeded. The parent swaps views right after,
    /// so this only clears the loading flag.
    pub fn finish(self) -> Self {
        Self {
            loading: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = UploadState<&'static str>;

    #[test]
    fn initial_state_cannot_submit() {
        let state = State::default();
        assert!(state.file.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!state.can_submit());
    }

    #[test]
    fn selecting_a_file_enables_submit_and_clears_error() {
        let state = State::default().fail("boom").select_file(Some("ledger.csv"));
        assert_eq!(state.file, Some("ledger.csv"));
        assert!(state.error.is_none());
        assert!(state.can_submit());
    }

    #[test]
    fn deselecting_disables_submit() {
        let state = State::default()
            .select_file(Some("ledger.csv"))
            .select_file(None);
        assert!(!state.can_submit());
    }

    #[test]
    fn begin_upload_without_file_is_a_noop() {
        let state = State::default().begin_upload();
        assert!(!state.loading);
    }

    #[test]
    fn submit_is_blocked_while_loading() {
        let state = State::default()
            .select_file(Some("ledger.csv"))
            .begin_upload();
        assert!(state.loading);
        assert!(!state.can_submit());

        // A second begin_upload while in flight changes nothing.
        let again = state.clone().begin_upload();
        assert_eq!(again, state);
    }

    #[test]
    fn failure_holds_message_and_clears_loading() {
        let state = State::default()
            .select_file(Some("ledger.csv"))
            .begin_upload()
            .fail("Failed to upload file. Please try again.");
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to upload file. Please try again.")
        );
        // The file is still held, so the user can retry manually.
        assert!(state.can_submit());
    }

    #[test]
    fn success_clears_loading() {
        let state = State::default()
            .select_file(Some("ledger.csv"))
            .begin_upload()
            .finish();
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
