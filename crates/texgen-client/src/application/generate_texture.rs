//! TextureGenerator: the form-driven client of the texture-generation endpoint.
//!
//! This use case binds the five parameter inputs of the page, validates them
//! as the user types, sends them to `POST /calculate` when the submit control
//! is clicked, and renders either the generated texture or the failure.
//!
//! # Architecture
//!
//! The use case depends only on traits ([`FormView`], [`GenerationTransport`])
//! and on the optional [`Capabilities`].  The browser document, the HTTP
//! client, and the toast function are injected, so the whole flow runs in
//! unit tests without a network or a page.
//!
//! # Submission lifecycle
//!
//! ```text
//! click ──> in flight? ──yes──> ignored
//!               │ no
//!               v
//!          validate all ──any invalid──> stop (inline errors already shown)
//!               │
//!               v
//!          claim in-flight flag, control disabled, label "Generating..."
//!               │
//!          POST /calculate
//!          ├─ 2xx    → render image + actions, success toast, TextureGenerated event
//!          ├─ 4xx/5xx → error toast (or alert)
//!          └─ transport failure → error toast (or alert), "Network error: ..."
//!               │
//!               v
//!          control re-enabled, label restored, in-flight flag cleared
//! ```
//!
//! The last step runs from a drop guard, so it happens exactly once per
//! submission on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use texgen_core::{cache_busted_url, CalculateResponse, FieldId, GenerationRequest};

use super::capabilities::{texts, Capabilities, ToastKind};

/// Class carried by an input whose value fails validation.
pub const INVALID_CLASS: &str = "invalid";

/// File name offered by the download action.
pub const DOWNLOAD_FILE_NAME: &str = "texture.png";

/// Alt text of the rendered texture image.
pub const RESULT_IMAGE_ALT: &str = "Generated texture";

/// Failure message when a success response does not name the image.
pub const MISSING_IMAGE_URL: &str = "Server response did not include an image URL";

/// Capacity of the `TextureGenerated` broadcast channel.
const EVENT_CHANNEL_CAPACITY: usize = 16;

// ── Ports ─────────────────────────────────────────────────────────────────────

/// State of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControlState {
    pub disabled: bool,
    pub label: String,
}

/// What the result area shows after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureResult {
    /// Image `src`: the server URL plus a cache-busting query parameter.
    pub image_src: String,
    pub image_alt: String,
    /// The "view" action opens this URL in a new tab.
    pub view_url: String,
    pub view_label: String,
    /// The "download" action saves this URL under `download_file_name`.
    pub download_url: String,
    pub download_file_name: String,
    pub download_label: String,
}

/// The part of the page the texture generator reads and mutates.
///
/// Field accessors address inputs by [`FieldId`]; implementations resolve
/// them to element ids (`kValue`, `tMaxValue`, ...).  Mutating a field whose
/// element does not exist is a no-op.
///
/// Methods take `&self`; implementations use interior mutability so the view
/// can be shared between the use case and whoever delivers events.
pub trait FormView: Send + Sync {
    /// Current text of the input, or `None` if the element is missing.
    fn field_value(&self, field: FieldId) -> Option<String>;

    /// Replaces the text of the input.
    fn set_field_value(&self, field: FieldId, value: &str);

    /// Adds (`present = true`) or removes a class on the input.
    fn set_field_class(&self, field: FieldId, class: &str, present: bool);

    /// Whether an error-message element already sits next to the input.
    fn has_error_message(&self, field: FieldId) -> bool;

    /// Appends an error-message element next to the input.
    fn append_error_message(&self, field: FieldId, message: &str);

    /// Removes the error-message element next to the input, if any.
    fn remove_error_message(&self, field: FieldId);

    /// Updates the submit control (no-op if the page has none).
    fn set_submit_control(&self, state: SubmitControlState);

    /// Replaces the content of the result area (no-op if the page has none).
    fn render_result(&self, result: &TextureResult);

    /// Blocking alert, used for errors when no notifier is available.
    fn alert(&self, message: &str);
}

/// Raw outcome of one `/calculate` exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: CalculateResponse,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures of the request itself, as opposed to error responses.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request never completed (connection refused, DNS failure, timeout).
    #[error("{0}")]
    Request(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Sends a generation request to the server.
///
/// The production implementation uses `reqwest`; tests use recording stubs.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn calculate(
        &self,
        request: &GenerationRequest,
    ) -> Result<TransportResponse, TransportError>;
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Kind of a UI event delivered to [`TextureGenerator::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Change,
}

/// Element an event was dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    SubmitControl,
    Field(FieldId),
    Other,
}

/// A UI event, with DOM-style default-action suppression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: EventTarget,
    default_prevented: bool,
}

impl UiEvent {
    pub fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target, default_prevented: false }
    }

    pub fn click(target: EventTarget) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn input(field: FieldId) -> Self {
        Self::new(EventKind::Input, EventTarget::Field(field))
    }

    pub fn change(field: FieldId) -> Self {
        Self::new(EventKind::Change, EventTarget::Field(field))
    }

    /// Suppresses the browser's default action (form submission for clicks).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What [`TextureGenerator::handle_event`] did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not a bound event, or the generator is detached.
    Ignored,
    Validated { field: FieldId, valid: bool },
    Submitted(SubmitOutcome),
}

/// Result of one call to [`TextureGenerator::submit`].
///
/// Every variant is a normal return: failures are reported to the user
/// through the view and notifier, never propagated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The generator is not attached to a view.
    NotAttached,
    /// Another submission is still running; no request was sent.
    AlreadyInFlight,
    /// At least one field is missing or invalid; no request was sent.
    Invalid,
    /// The server generated the texture.
    Generated { image_url: String },
    /// The server reported an error, or the request failed.
    Failed { message: String },
}

/// Broadcast after each successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureGenerated {
    pub image_url: String,
}

// ── In-flight guard ───────────────────────────────────────────────────────────

/// Owns the in-flight flag for one submission.
///
/// Dropping it restores the submit control (if it was switched to the
/// generating state) and clears the flag.
struct Submission<'a> {
    in_flight: &'a AtomicBool,
    restore: Option<(Arc<dyn FormView>, String)>,
}

impl<'a> Submission<'a> {
    /// Claims the flag, or returns `None` if a submission is already running.
    fn begin(in_flight: &'a AtomicBool) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { in_flight, restore: None })
    }

    /// Disables the submit control and remembers the label to restore.
    fn show_generating(&mut self, view: &Arc<dyn FormView>, busy_label: String, idle_label: String) {
        view.set_submit_control(SubmitControlState { disabled: true, label: busy_label });
        self.restore = Some((Arc::clone(view), idle_label));
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if let Some((view, label)) = self.restore.take() {
            view.set_submit_control(SubmitControlState { disabled: false, label });
        }
        self.in_flight.store(false, Ordering::Release);
    }
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// The texture generator use case.
///
/// One instance serves one form.  Call [`attach`](Self::attach) to bind it to
/// a view, then deliver events through [`handle_event`](Self::handle_event)
/// (or call [`validate`](Self::validate) / [`submit`](Self::submit) directly).
pub struct TextureGenerator {
    transport: Arc<dyn GenerationTransport>,
    capabilities: Capabilities,
    root: Option<Arc<dyn FormView>>,
    in_flight: AtomicBool,
    events: broadcast::Sender<TextureGenerated>,
}

impl TextureGenerator {
    /// Creates a detached generator.
    pub fn new(transport: Arc<dyn GenerationTransport>, capabilities: Capabilities) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            transport,
            capabilities,
            root: None,
            in_flight: AtomicBool::new(false),
            events,
        }
    }

    /// Binds the generator to `root` and fills every empty input with its
    /// default value.  Inputs the user already filled keep their text.
    ///
    /// Attaching while attached replaces the previous view.
    pub fn attach(&mut self, root: Arc<dyn FormView>) {
        if self.root.is_some() {
            debug!("re-attaching texture generator to a new view");
        }
        for field in FieldId::ALL {
            match root.field_value(field) {
                Some(value) if value.is_empty() => {
                    root.set_field_value(field, field.default_value());
                }
                Some(_) => {}
                None => warn!(%field, "form input is missing"),
            }
        }
        self.root = Some(root);
        info!("texture generator attached");
    }

    /// Unbinds the generator and returns the view it was attached to.
    ///
    /// Events delivered afterwards are ignored.
    pub fn detach(&mut self) -> Option<Arc<dyn FormView>> {
        let root = self.root.take();
        if root.is_some() {
            info!("texture generator detached");
        }
        root
    }

    pub fn is_attached(&self) -> bool {
        self.root.is_some()
    }

    /// `true` while a submission is between its start and its final cleanup.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Subscribes to [`TextureGenerated`] events.
    pub fn subscribe(&self) -> broadcast::Receiver<TextureGenerated> {
        self.events.subscribe()
    }

    /// Routes a UI event to the matching handler.
    ///
    /// Clicks on the submit control prevent the default form submission and
    /// run [`submit`](Self::submit); input/change events on a field run
    /// [`validate`](Self::validate) for that field.
    pub async fn handle_event(&self, event: &mut UiEvent) -> EventOutcome {
        if self.root.is_none() {
            return EventOutcome::Ignored;
        }
        match (event.kind, event.target) {
            (EventKind::Click, EventTarget::SubmitControl) => {
                event.prevent_default();
                EventOutcome::Submitted(self.submit().await)
            }
            (EventKind::Input | EventKind::Change, EventTarget::Field(field)) => {
                EventOutcome::Validated { field, valid: self.validate(field) }
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// Validates one field and updates its inline error state.
    ///
    /// On failure the input gets the `invalid` class and exactly one error
    /// message next to it; on success both are removed.  Calling this twice
    /// with the same value leaves the view unchanged.
    ///
    /// Returns `false` for a missing input or a detached generator.
    pub fn validate(&self, field: FieldId) -> bool {
        let Some(view) = self.root.as_ref() else {
            return false;
        };
        check_field(view.as_ref(), field).is_some()
    }

    /// Validates every field and returns their raw text if all pass.
    ///
    /// All five fields are validated even after a failure so the user sees
    /// every problem at once.  The request carries exactly the text each
    /// field had when it was validated; every input is read once.
    pub fn collect_params(&self) -> Option<GenerationRequest> {
        let view = self.root.as_ref()?;
        let checked = FieldId::ALL.map(|field| (field, check_field(view.as_ref(), field)));
        GenerationRequest::from_fields(|field| {
            checked.iter().find(|(f, _)| *f == field).and_then(|(_, value)| value.clone())
        })
    }

    /// Runs one submission.  See the module docs for the lifecycle.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(view) = self.root.clone() else {
            warn!("submit called on a detached texture generator");
            return SubmitOutcome::NotAttached;
        };
        if self.is_generating() {
            debug!("submission already in flight; ignoring");
            return SubmitOutcome::AlreadyInFlight;
        }
        let Some(params) = self.collect_params() else {
            debug!("form has invalid fields; not submitting");
            return SubmitOutcome::Invalid;
        };
        // Another valid submission may have claimed the flag while this one
        // was validating.
        let Some(mut submission) = Submission::begin(&self.in_flight) else {
            debug!("submission already in flight; ignoring");
            return SubmitOutcome::AlreadyInFlight;
        };

        submission.show_generating(
            &view,
            self.capabilities.text(texts::GENERATING),
            self.capabilities.text(texts::GENERATE_TEXTURE),
        );

        let submission_id = Uuid::new_v4();
        info!(%submission_id, ?params, "requesting texture generation");

        let response = self
            .transport
            .calculate(&params)
            .instrument(info_span!("calculate", %submission_id))
            .await;

        let outcome = match response {
            Ok(resp) if resp.is_success() => match resp.body.image_url {
                Some(image_url) => self.on_success(view.as_ref(), image_url),
                None => self.on_failure(view.as_ref(), MISSING_IMAGE_URL.to_string()),
            },
            Ok(resp) => {
                warn!(%submission_id, status = resp.status, "server rejected generation request");
                self.on_failure(view.as_ref(), resp.body.error_message().to_string())
            }
            Err(e) => self.on_failure(view.as_ref(), format!("Network error: {e}")),
        };

        drop(submission);
        info!(%submission_id, "submission finished");
        outcome
    }

    fn on_success(&self, view: &dyn FormView, image_url: String) -> SubmitOutcome {
        let timestamp_ms = Utc::now().timestamp_millis();
        view.render_result(&TextureResult {
            image_src: cache_busted_url(&image_url, timestamp_ms),
            image_alt: RESULT_IMAGE_ALT.to_string(),
            view_url: image_url.clone(),
            view_label: self.capabilities.text(texts::VIEW),
            download_url: image_url.clone(),
            download_file_name: DOWNLOAD_FILE_NAME.to_string(),
            download_label: self.capabilities.text(texts::DOWNLOAD),
        });

        if let Some(notifier) = &self.capabilities.notifier {
            notifier.toast(&self.capabilities.text(texts::TEXTURE_GENERATED), ToastKind::Success);
        }

        // An error only means nobody is subscribed.
        let _ = self.events.send(TextureGenerated { image_url: image_url.clone() });

        info!(%image_url, "texture generated");
        SubmitOutcome::Generated { image_url }
    }

    fn on_failure(&self, view: &dyn FormView, message: String) -> SubmitOutcome {
        error!(%message, "texture generation error");
        match &self.capabilities.notifier {
            Some(notifier) => notifier.toast(&message, ToastKind::Error),
            None => view.alert(&message),
        }
        SubmitOutcome::Failed { message }
    }
}

/// Reads one field, validates it, and updates its inline error state.
///
/// On failure the input gets the `invalid` class and exactly one error
/// message next to it; on success both are removed.  Returns the text that
/// was validated when it passed, `None` when it failed or the input is
/// missing.
fn check_field(view: &dyn FormView, field: FieldId) -> Option<String> {
    let value = view.field_value(field)?;
    let outcome = field.spec().validate(&value);
    debug!(%field, %value, valid = outcome.valid, "field validated");

    if outcome.valid {
        view.set_field_class(field, INVALID_CLASS, false);
        view.remove_error_message(field);
    } else {
        view.set_field_class(field, INVALID_CLASS, true);
        if !view.has_error_message(field) {
            view.append_error_message(field, outcome.message);
        }
    }
    outcome.valid.then_some(value)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
