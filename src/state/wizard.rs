//! Wizard state machine
//!
//! `WizardState` is the single source of truth for the form. Every change goes
//! through [`update`], which mutates the state and returns the side effects the
//! caller has to perform (issuing the request, showing a notice). Nothing in
//! here touches the terminal or the network.

use super::form_data::{Field, FormData};
use super::notice::Notice;
use crate::relay::SubmitError;

/// Position in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    One,
    Two,
    Three,
}

impl Step {
    pub const TOTAL: u8 = 3;

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }

    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::One => None,
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
        }
    }

    /// Field edited on this step
    pub fn field(&self) -> Field {
        match self {
            Self::One => Field::Name,
            Self::Two => Field::Email,
            Self::Three => Field::Message,
        }
    }

    /// Fraction of the wizard completed once this step is shown
    pub fn ratio(&self) -> f64 {
        f64::from(self.number()) / f64::from(Self::TOTAL)
    }
}

/// Complete wizard state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    /// True only while a submission is in flight
    pub loading: bool,
    pub data: FormData,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field. Step, loading and the other fields are left alone.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.data.set(field, value);
    }

    /// Guard for the "Next" action on the current step.
    /// Step three has no "Next"; it offers "Submit" instead.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::One => self.data.is_filled(Field::Name),
            Step::Two => self.data.is_filled(Field::Email),
            Step::Three => false,
        }
    }

    /// "Back" is offered on every step except the first and is never guarded
    pub fn can_go_back(&self) -> bool {
        self.step.prev().is_some()
    }

    /// Submit is only reachable on the last step and not while a request is out
    pub fn can_submit(&self) -> bool {
        self.step == Step::Three && !self.loading
    }

    /// Back to a fresh form on the first step
    pub fn reset(&mut self) {
        self.step = Step::One;
        self.data = FormData::default();
    }
}

/// Events fed into the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    FieldChanged { field: Field, value: String },
    Next,
    Back,
    Submit,
    /// The in-flight submission finished, one way or another
    SubmissionSettled(Result<(), SubmitError>),
}

/// Work the caller must carry out after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST this snapshot to the relay
    Submit(FormData),
    /// Show a modal notice
    Notify(Notice),
}

/// Apply a message to the state and return the resulting effects
pub fn update(state: &mut WizardState, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::FieldChanged { field, value } => {
            state.update_field(field, value);
            Vec::new()
        }
        Msg::Next => {
            if state.can_advance() {
                if let Some(next) = state.step.next() {
                    tracing::debug!(from = state.step.number(), to = next.number(), "Next");
                    state.step = next;
                }
            }
            Vec::new()
        }
        Msg::Back => {
            if let Some(prev) = state.step.prev() {
                tracing::debug!(from = state.step.number(), to = prev.number(), "Back");
                state.step = prev;
            }
            Vec::new()
        }
        Msg::Submit => {
            if !state.can_submit() {
                return Vec::new();
            }
            state.loading = true;
            vec![Effect::Submit(state.data.clone())]
        }
        Msg::SubmissionSettled(result) => {
            state.loading = false;
            let notice = match result {
                Ok(()) => {
                    state.reset();
                    Notice::Submitted
                }
                Err(SubmitError::Rejected { .. }) => Notice::SubmitFailed,
                Err(SubmitError::Transport(_)) => Notice::SubmitError,
            };
            vec![Effect::Notify(notice)]
        }
    }
}
