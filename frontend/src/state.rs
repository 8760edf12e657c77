//! Upload widget state machine.
//!
//! All widget state lives in one [`WidgetState`] value with one method per
//! event. Nothing here touches the browser: the file handle is a type
//! parameter, and preview handles released by a transition are handed back
//! to the caller, which must revoke them.
//!
//! ```text
//!   Empty ──select_file(f)──▶ PreviewPending ──begin_submit──▶ Loading
//!     ▲                            ▲                          │     │
//!     │                            │                         200  failure
//!     │                            │ select_file(g)           ▼     ▼
//!     └── clear / select_file(∅) ──┴──────────────────── Result | Error
//! ```
//!
//! Every selection change bumps a generation counter. Requests carry the
//! generation they were issued for, and [`WidgetState::complete`] drops
//! answers for superseded selections.

use crate::config::{ACCEPTED_MIME_PREFIX, MAX_FILE_SIZE, UPLOAD_FAILED_MESSAGE};
use crate::types::{AppResult, InferenceResult};

/// Revocable `blob:` URL pointing at the selected file.
pub type PreviewUrl = String;

/// What the widget currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Drop-zone only
    Empty,
    /// File selected, request not started yet
    PreviewPending,
    /// Preview with spinner
    Loading,
    /// Preview with result table
    Result,
    /// Preview with error message
    Error,
}

/// Identifies the selection a request was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// State of the upload widget.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<F> {
    file: Option<F>,
    preview: Option<PreviewUrl>,
    result: Option<InferenceResult>,
    is_loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<F> Default for WidgetState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> WidgetState<F> {
    /// Initial, empty state.
    pub fn new() -> Self {
        Self {
            file: None,
            preview: None,
            result: None,
            is_loading: false,
            error: None,
            generation: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Record a new selection, or return to Empty on `None`.
    ///
    /// Any result, error or in-flight request of the previous selection is
    /// dropped. Returns the previous preview handle for revocation.
    #[must_use = "the released preview handle must be revoked"]
    pub fn select_file(&mut self, file: Option<F>) -> Option<PreviewUrl> {
        self.generation = self.generation.wrapping_add(1);
        self.result = None;
        self.error = None;
        self.is_loading = false;
        self.file = file;
        self.preview.take()
    }

    /// Attach the preview handle derived from the current selection.
    ///
    /// Returns a handle to revoke: `url` itself when there is no selection,
    /// or a previously attached handle it replaces.
    #[must_use = "the released preview handle must be revoked"]
    pub fn attach_preview(&mut self, url: PreviewUrl) -> Option<PreviewUrl> {
        if self.file.is_none() {
            return Some(url);
        }
        self.preview.replace(url)
    }

    /// Start the prediction request for the current selection.
    ///
    /// Only valid in [`Phase::PreviewPending`]; returns `None` otherwise so
    /// a selection is never submitted twice.
    pub fn begin_submit(&mut self) -> Option<RequestTicket> {
        if self.phase() != Phase::PreviewPending || self.preview.is_none() {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        Some(RequestTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` and leaves the state untouched when the ticket
    /// belongs to a superseded selection or the request was already settled.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: AppResult<InferenceResult>) -> bool {
        if ticket.generation != self.generation || !self.is_loading {
            return false;
        }
        self.is_loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(_) => self.error = Some(UPLOAD_FAILED_MESSAGE.to_string()),
        }
        true
    }

    /// Record a failure that happened before any request was issued.
    pub fn fail(&mut self) {
        if self.file.is_some() && !self.is_loading {
            self.result = None;
            self.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
        }
    }

    /// Return to Empty. Returns the preview handle for revocation.
    #[must_use = "the released preview handle must be revoked"]
    pub fn clear(&mut self) -> Option<PreviewUrl> {
        self.select_file(None)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        if self.file.is_none() {
            Phase::Empty
        } else if self.is_loading {
            Phase::Loading
        } else if self.result.is_some() {
            Phase::Result
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::PreviewPending
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn result(&self) -> Option<&InferenceResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drop-zone is shown only while nothing is selected.
    pub fn shows_dropzone(&self) -> bool {
        self.file.is_none()
    }

    /// Image preview is shown whenever something is selected.
    pub fn shows_preview(&self) -> bool {
        self.file.is_some()
    }

    /// Confidence of the current result as a percentage, e.g. `"92.00"`.
    pub fn confidence_percent(&self) -> Option<String> {
        self.result.as_ref().map(InferenceResult::confidence_percent)
    }
}

/// Whether the drop-zone accepts a file with this mime type and size.
pub fn is_acceptable_image(mime: &str, size: f64) -> bool {
    mime.starts_with(ACCEPTED_MIME_PREFIX) && size > 0.0 && size <= MAX_FILE_SIZE
}
