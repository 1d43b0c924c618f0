//! Headless form: an in-memory `FormView`.
//!
//! Stands in for the browser document wherever there is none: the CLI fills
//! it from command-line flags, and tests drive it like a user would (type
//! into an input, then deliver an `input` event) and inspect what the
//! texture generator did to it.
//!
//! All state sits behind one `Mutex`, so the form can be shared as
//! `Arc<HeadlessForm>` between the generator and the test or CLI code.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use texgen_core::FieldId;

use crate::application::capabilities::texts;
use crate::application::generate_texture::{FormView, SubmitControlState, TextureResult};

/// Snapshot of one input element and its sibling error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub value: String,
    pub classes: BTreeSet<String>,
    pub error_messages: Vec<String>,
}

impl InputState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug)]
struct FormState {
    inputs: BTreeMap<FieldId, InputState>,
    submit_control: Option<SubmitControlState>,
    result: Option<TextureResult>,
    alerts: Vec<String>,
}

/// In-memory form with the five inputs, a submit control and a result area.
#[derive(Debug)]
pub struct HeadlessForm {
    state: Mutex<FormState>,
}

impl Default for HeadlessForm {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessForm {
    /// A form with all five inputs empty and an enabled submit control.
    pub fn new() -> Self {
        let inputs = FieldId::ALL.iter().map(|&f| (f, InputState::default())).collect();
        Self {
            state: Mutex::new(FormState {
                inputs,
                submit_control: Some(SubmitControlState {
                    disabled: false,
                    label: texts::GENERATE_TEXTURE.fallback.to_string(),
                }),
                result: None,
                alerts: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the text of an input, the way a user typing would.
    ///
    /// Does not validate; deliver an input event for that.
    pub fn type_text(&self, field: FieldId, text: &str) {
        self.set_field_value(field, text);
    }

    /// Removes an input from the page.
    pub fn remove_input(&self, field: FieldId) {
        self.lock().inputs.remove(&field);
    }

    /// Removes the submit control from the page.
    pub fn remove_submit_control(&self) {
        self.lock().submit_control = None;
    }

    /// Snapshot of an input, or `None` if it was removed.
    pub fn input(&self, field: FieldId) -> Option<InputState> {
        self.lock().inputs.get(&field).cloned()
    }

    /// Every field that currently shows an error message, with the message.
    pub fn field_errors(&self) -> Vec<(FieldId, String)> {
        self.lock()
            .inputs
            .iter()
            .flat_map(|(&f, input)| input.error_messages.iter().map(move |m| (f, m.clone())))
            .collect()
    }

    pub fn submit_control(&self) -> Option<SubmitControlState> {
        self.lock().submit_control.clone()
    }

    /// What the result area shows, if anything was rendered.
    pub fn result(&self) -> Option<TextureResult> {
        self.lock().result.clone()
    }

    /// Every alert shown so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }
}

impl FormView for HeadlessForm {
    fn field_value(&self, field: FieldId) -> Option<String> {
        self.lock().inputs.get(&field).map(|i| i.value.clone())
    }

    fn set_field_value(&self, field: FieldId, value: &str) {
        if let Some(input) = self.lock().inputs.get_mut(&field) {
            input.value = value.to_string();
        }
    }

    fn set_field_class(&self, field: FieldId, class: &str, present: bool) {
        if let Some(input) = self.lock().inputs.get_mut(&field) {
            if present {
                input.classes.insert(class.to_string());
            } else {
                input.classes.remove(class);
            }
        }
    }

    fn has_error_message(&self, field: FieldId) -> bool {
        self.lock().inputs.get(&field).is_some_and(|i| !i.error_messages.is_empty())
    }

    fn append_error_message(&self, field: FieldId, message: &str) {
        if let Some(input) = self.lock().inputs.get_mut(&field) {
            input.error_messages.push(message.to_string());
        }
    }

    fn remove_error_message(&self, field: FieldId) {
        if let Some(input) = self.lock().inputs.get_mut(&field) {
            input.error_messages.clear();
        }
    }

    fn set_submit_control(&self, state: SubmitControlState) {
        let mut form = self.lock();
        if let Some(control) = form.submit_control.as_mut() {
            trace!(disabled = state.disabled, label = %state.label, "submit control updated");
            *control = state;
        }
    }

    fn render_result(&self, result: &TextureResult) {
        self.lock().result = Some(result.clone());
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
