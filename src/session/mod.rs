//! Scan session lifecycle
//!
//! A [`ScanSession`] owns the view state for one user's scanning session.
//! The four screens (form, loading, results, error) are a single
//! [`ViewState`], so two of them can never be active at once.
//!
//! ```text
//!            submit              ok
//!   Form ───────────▶ Loading ─────────▶ Results
//!    ▲                   │                  │
//!    │                   │ server/transport │
//!    │   reset           ▼        error     │ reset
//!    └────────────── Error ◀────────────────┘
//!                     (form shown again, can resubmit)
//! ```

use log::debug;

use crate::client::{ScanApi, ScanRequest, ScanResult};
use crate::error::{ApiError, Error, Result, SessionError};
use crate::models::{RenderedReport, TextTarget, render, render_for};

pub mod scheduler;

pub use scheduler::CoalescingScheduler;

/// Raw form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub domain: String,
    pub nameserver: String,
}

impl FormInput {
    pub fn new(domain: impl Into<String>, nameserver: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            nameserver: nameserver.into(),
        }
    }

    pub fn clear(&mut self) {
        self.domain.clear();
        self.nameserver.clear();
    }
}

/// A completed scan together with its rendered reports
#[derive(Debug, Clone)]
pub struct ScanView {
    pub result: ScanResult,
    /// Escaped for markup
    pub report: RenderedReport,
    /// Sanitized for the terminal
    pub terminal: RenderedReport,
}

impl ScanView {
    pub fn new(result: ScanResult) -> Self {
        let report = render(&result);
        let terminal = render_for(&result, TextTarget::Terminal);
        Self {
            result,
            report,
            terminal,
        }
    }
}

/// The active screen
#[derive(Debug, Clone)]
pub enum ViewState {
    Form,
    Loading,
    Results(Box<ScanView>),
    Error(String),
}

/// Discriminant of [`ViewState`], for logging and transition history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Form,
    Loading,
    Results,
    Error,
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Form => ViewKind::Form,
            ViewState::Loading => ViewKind::Loading,
            ViewState::Results(_) => ViewKind::Results,
            ViewState::Error(_) => ViewKind::Error,
        }
    }

    /// Which regions are on screen. The form stays available next to an error
    /// so the input can be corrected.
    pub fn visibility(&self) -> Visibility {
        let kind = self.kind();
        Visibility {
            form: matches!(kind, ViewKind::Form | ViewKind::Error),
            loading: kind == ViewKind::Loading,
            results: kind == ViewKind::Results,
            error: kind == ViewKind::Error,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn scan_view(&self) -> Option<&ScanView> {
        match self {
            ViewState::Results(view) => Some(&**view),
            _ => None,
        }
    }
}

/// Derived visibility flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub form: bool,
    pub loading: bool,
    pub results: bool,
    pub error: bool,
}

/// Region a scroll request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRegion {
    Intro,
    Results,
    Error,
}

/// Vertical alignment of a scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
}

/// A smooth-scroll request emitted by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntent {
    pub region: ScrollRegion,
    pub align: ScrollAlign,
}

/// Scan session controller
pub struct ScanSession<C: ScanApi> {
    client: C,
    form: FormInput,
    state: ViewState,
    pending: Option<ScanRequest>,
    scroll: Option<ScrollIntent>,
    history: Vec<ViewKind>,
}

impl<C: ScanApi> ScanSession<C> {
    /// Start a session on the form screen.
    pub fn new(client: C) -> Self {
        Self {
            client,
            form: FormInput::default(),
            state: ViewState::Form,
            pending: None,
            scroll: None,
            history: vec![ViewKind::Form],
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    /// Replace the form fields (typing into the form).
    pub fn set_input(&mut self, input: FormInput) {
        self.form = input;
    }

    /// Every screen the session has shown, in order.
    #[cfg(test)]
    pub fn history(&self) -> &[ViewKind] {
        &self.history
    }

    /// Take the most recent scroll request, if any.
    pub fn take_scroll(&mut self) -> Option<ScrollIntent> {
        self.scroll.take()
    }

    /// Submit the form: `Form | Error -> Loading`.
    ///
    /// Both fields are trimmed; an empty nameserver is passed through. The
    /// domain format is left to the service. Rejected while the form is not
    /// on screen.
    pub fn submit(&mut self) -> Result<&ScanRequest> {
        if !self.visibility().form {
            return Err(SessionError::NotAcceptingInput.into());
        }

        let request = ScanRequest::new(&self.form.domain, &self.form.nameserver);
        debug!(
            "Submitting scan for {:?} (nameserver {:?})",
            request.domain, request.nameserver
        );
        self.transition(ViewState::Loading);
        Ok(&*self.pending.insert(request))
    }

    /// Send the submitted request and move to `Results` or `Error`.
    ///
    /// Whatever the outcome, the session has left `Loading` when this returns.
    pub async fn dispatch(&mut self) -> Result<&ViewState> {
        let request = match (&self.state, self.pending.take()) {
            (ViewState::Loading, Some(request)) => request,
            _ => return Err(SessionError::NothingSubmitted.into()),
        };

        let outcome = self.client.scan(&request).await;

        let (next, scroll) = match outcome {
            Ok(result) => (
                ViewState::Results(Box::new(ScanView::new(result))),
                ScrollIntent {
                    region: ScrollRegion::Results,
                    align: ScrollAlign::Start,
                },
            ),
            Err(err) => (
                ViewState::Error(failure_message(&err)),
                ScrollIntent {
                    region: ScrollRegion::Error,
                    align: ScrollAlign::Center,
                },
            ),
        };

        self.transition(next);
        self.scroll = Some(scroll);
        Ok(&self.state)
    }

    /// Submit and dispatch in one step.
    #[cfg(test)]
    pub async fn run(&mut self) -> Result<&ViewState> {
        self.submit()?;
        self.dispatch().await
    }

    /// Back to a clean form: clears the input and any results or error.
    pub fn reset(&mut self) {
        self.form.clear();
        self.pending = None;
        self.transition(ViewState::Form);
        self.scroll = Some(ScrollIntent {
            region: ScrollRegion::Intro,
            align: ScrollAlign::Start,
        });
    }

    fn transition(&mut self, next: ViewState) {
        self.history.push(next.kind());
        debug!(
            "View {:?} -> {:?} (transition {})",
            self.state.kind(),
            next.kind(),
            self.history.len() - 1
        );
        self.state = next;
    }
}

/// Message for the error screen.
fn failure_message(err: &Error) -> String {
    match err {
        Error::Api(api) => {
            if !api.is_server_reported() {
                debug!("No usable response from the scan service: {:?}", api);
            }
            api.user_message()
        }
        other => ApiError::Transport(other.to_string()).user_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockScanClient;
    use crate::error::GENERIC_SCAN_FAILURE;

    async fn session_with_result() -> ScanSession<MockScanClient> {
        let mock = MockScanClient::new()
            .with_result(MockScanClient::sample_result())
            .await;
        ScanSession::new(mock)
    }

    #[test]
    fn test_initial_state_shows_only_form() {
        let session = ScanSession::new(MockScanClient::new());
        assert_eq!(
            session.visibility(),
            Visibility {
                form: true,
                loading: false,
                results: false,
                error: false
            }
        );
    }

    #[tokio::test]
    async fn test_submit_moves_to_loading_with_trimmed_request() {
        let mut session = session_with_result().await;
        session.set_input(FormInput::new("  example.com  ", "   "));

        let request = session.submit().unwrap().clone();
        assert_eq!(request, ScanRequest::new("example.com", ""));
        assert_eq!(session.state().kind(), ViewKind::Loading);

        let vis = session.visibility();
        assert!(vis.loading);
        assert!(!vis.form && !vis.results && !vis.error);
    }

    #[tokio::test]
    async fn test_success_lifecycle() {
        let mut session = session_with_result().await;
        session.set_input(FormInput::new("example.com", ""));

        session.run().await.unwrap();

        assert_eq!(
            session.history(),
            &[ViewKind::Form, ViewKind::Loading, ViewKind::Results]
        );
        let vis = session.visibility();
        assert!(vis.results);
        assert!(!vis.loading && !vis.form && !vis.error);

        let view = session.state().scan_view().unwrap();
        assert_eq!(view.report.domain, "example.com");
        assert_eq!(view.report.nameserver, "127.0.0.1");
        assert_eq!(view.report.score.value, 66);

        assert_eq!(
            session.take_scroll(),
            Some(ScrollIntent {
                region: ScrollRegion::Results,
                align: ScrollAlign::Start
            })
        );
        assert_eq!(session.take_scroll(), None);
    }

    #[tokio::test]
    async fn test_request_carries_form_values() {
        let mock = MockScanClient::new()
            .with_result(MockScanClient::sample_result())
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("example.com", " 10.0.0.53 "));
        session.run().await.unwrap();

        let captured = session.client.captured_requests().await;
        assert_eq!(captured, vec![ScanRequest::new("example.com", "10.0.0.53")]);
    }

    #[tokio::test]
    async fn test_server_error_shows_message_and_form() {
        let mock = MockScanClient::new()
            .with_error(ApiError::ServerReported("invalid domain".to_string()))
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("not a domain", ""));

        session.run().await.unwrap();

        assert_eq!(session.state().error_message(), Some("invalid domain"));
        let vis = session.visibility();
        assert!(vis.error && vis.form);
        assert!(!vis.loading && !vis.results);
        assert_eq!(
            session.take_scroll(),
            Some(ScrollIntent {
                region: ScrollRegion::Error,
                align: ScrollAlign::Center
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_fallback_message() {
        let mock = MockScanClient::new()
            .with_error(ApiError::ServerReported(GENERIC_SCAN_FAILURE.to_string()))
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("example.com", ""));

        session.run().await.unwrap();
        assert_eq!(session.state().error_message(), Some(GENERIC_SCAN_FAILURE));
    }

    #[tokio::test]
    async fn test_transport_failure_message() {
        let mock = MockScanClient::new()
            .with_error(ApiError::Transport("network down".to_string()))
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("example.com", ""));

        session.run().await.unwrap();

        let message = session.state().error_message().unwrap();
        assert!(message.contains("network down"));
        assert!(message.starts_with("Failed to connect to the server"));
        assert!(!session.visibility().loading);
    }

    #[tokio::test]
    async fn test_error_allows_resubmission() {
        let mock = MockScanClient::new()
            .with_result(MockScanClient::sample_result())
            .await
            .with_error(ApiError::Transport("network down".to_string()))
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("example.com", ""));

        session.run().await.unwrap();
        assert_eq!(session.state().kind(), ViewKind::Error);
        // Input survives the error for correction
        assert_eq!(session.form().domain, "example.com");

        session.run().await.unwrap();
        assert_eq!(session.state().kind(), ViewKind::Results);
    }

    #[tokio::test]
    async fn test_submit_rejected_while_loading_or_showing_results() {
        let mut session = session_with_result().await;
        session.set_input(FormInput::new("example.com", ""));

        session.submit().unwrap();
        assert!(matches!(
            session.submit(),
            Err(Error::Session(SessionError::NotAcceptingInput))
        ));

        session.dispatch().await.unwrap();
        assert!(matches!(
            session.submit(),
            Err(Error::Session(SessionError::NotAcceptingInput))
        ));
        assert_eq!(session.client.captured_requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_without_submit() {
        let mut session = session_with_result().await;
        assert!(matches!(
            session.dispatch().await,
            Err(Error::Session(SessionError::NothingSubmitted))
        ));
        assert_eq!(session.state().kind(), ViewKind::Form);
    }

    #[tokio::test]
    async fn test_reset_from_results() {
        let mut session = session_with_result().await;
        session.set_input(FormInput::new("example.com", "127.0.0.1"));
        session.run().await.unwrap();
        session.take_scroll();

        session.reset();

        assert_eq!(
            session.visibility(),
            Visibility {
                form: true,
                loading: false,
                results: false,
                error: false
            }
        );
        assert_eq!(session.form(), &FormInput::default());
        assert_eq!(
            session.take_scroll(),
            Some(ScrollIntent {
                region: ScrollRegion::Intro,
                align: ScrollAlign::Start
            })
        );
    }

    #[tokio::test]
    async fn test_reset_from_error() {
        let mock = MockScanClient::new()
            .with_error(ApiError::ServerReported("invalid domain".to_string()))
            .await;
        let mut session = ScanSession::new(mock);
        session.set_input(FormInput::new("not a domain", "127.0.0.1"));
        session.run().await.unwrap();
        assert_eq!(session.state().kind(), ViewKind::Error);
        session.take_scroll();

        session.reset();

        assert_eq!(
            session.visibility(),
            Visibility {
                form: true,
                loading: false,
                results: false,
                error: false
            }
        );
        assert_eq!(session.state().error_message(), None);
        assert_eq!(session.form(), &FormInput::default());
        assert_eq!(
            session.take_scroll(),
            Some(ScrollIntent {
                region: ScrollRegion::Intro,
                align: ScrollAlign::Start
            })
        );
        assert_eq!(
            session.history(),
            &[
                ViewKind::Form,
                ViewKind::Loading,
                ViewKind::Error,
                ViewKind::Form
            ]
        );
    }

    #[tokio::test]
    async fn test_second_scan_replaces_first() {
        let mut session = session_with_result().await;
        session.set_input(FormInput::new("example.com", ""));
        session.run().await.unwrap();
        let first = session.state().scan_view().unwrap().report.clone();

        session.reset();
        session.set_input(FormInput::new("example.com", ""));
        session.run().await.unwrap();
        let second = &session.state().scan_view().unwrap().report;

        assert_eq!(&first, second);
        assert_eq!(second.cards.len(), 3);
    }
}
