//! Application state and core logic

use crate::relay::{FormRelay, SubmitError};
use crate::state::{
    update, Effect, Focus, FormData, Msg, NoticeQueue, ProgressAnimation, Step, StepButton,
    WizardState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Wizard state machine
    pub wizard: WizardState,
    /// Keyboard focus within the current step
    pub focus: Focus,
    /// Notices waiting to be acknowledged
    pub notices: NoticeQueue,
    /// Progress bar animation
    pub progress: ProgressAnimation,
    /// Relay the finished form is posted to
    relay: Arc<dyn FormRelay>,
    settled_tx: UnboundedSender<Msg>,
    settled_rx: UnboundedReceiver<Msg>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(relay: Arc<dyn FormRelay>) -> Self {
        let wizard = WizardState::new();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        Self {
            progress: ProgressAnimation::new(wizard.step.ratio()),
            wizard,
            focus: Focus::default(),
            notices: NoticeQueue::default(),
            relay,
            settled_tx,
            settled_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// True while something on screen is moving and wants fast redraws
    pub fn is_busy(&self) -> bool {
        self.progress.is_animating() || self.wizard.loading
    }

    /// Feed a message through the state machine and carry out its effects
    pub fn dispatch(&mut self, msg: Msg) {
        let step_before = self.wizard.step;
        let effects = update(&mut self.wizard, msg);

        if self.wizard.step != step_before {
            self.focus = Focus::Input;
            self.progress.set_target(self.wizard.step.ratio());
        }

        for effect in effects {
            match effect {
                Effect::Notify(notice) => self.notices.push(notice),
                Effect::Submit(data) => self.start_submission(data),
            }
        }
    }

    /// Hand the snapshot to the relay on a background task.
    /// Whatever happens to the task, exactly one `SubmissionSettled` comes back.
    fn start_submission(&self, data: FormData) {
        let relay = Arc::clone(&self.relay);
        let mut guard = SubmissionGuard::new(self.settled_tx.clone());

        tokio::spawn(async move {
            let outcome = relay.submit(&data).await;
            guard.outcome = Some(outcome);
        });
    }

    /// Drain finished submissions. Called once per event loop tick.
    pub fn poll_submissions(&mut self) {
        while let Ok(msg) = self.settled_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notice dialog is modal
        if self.notices.has_pending() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notices.dismiss();
            }
            return;
        }

        let step = self.wizard.step;
        match key.code {
            KeyCode::Esc => self.dispatch(Msg::Back),
            KeyCode::Char('s') if is_command(key.modifiers) => {
                self.dispatch(Msg::Submit);
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus.toggle(step),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Buttons(_) => self.handle_buttons_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let field = self.wizard.step.field();
        let mut value = self.wizard.data.get(field).to_string();

        match key.code {
            KeyCode::Char(c) if !c.is_control() && !is_command(key.modifiers) => {
                value.push(c);
            }
            KeyCode::Backspace => {
                value.pop();
            }
            // The message box is multi-line; elsewhere Enter means "Next"
            KeyCode::Enter if self.wizard.step == Step::Three => value.push('\n'),
            KeyCode::Enter => {
                self.dispatch(Msg::Next);
                return;
            }
            _ => return,
        }

        self.dispatch(Msg::FieldChanged { field, value });
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        let step = self.wizard.step;
        match key.code {
            KeyCode::Left | KeyCode::Up => self.focus.prev_button(step),
            KeyCode::Right | KeyCode::Down => self.focus.next_button(step),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(button) = self.focus.selected_button(step) {
                    self.press(button);
                }
            }
            _ => {}
        }
    }

    /// Activate a button. Disabled buttons are refused by the state machine.
    pub fn press(&mut self, button: StepButton) {
        let msg = match button {
            StepButton::Back => Msg::Back,
            StepButton::Next => Msg::Next,
            StepButton::Submit => Msg::Submit,
        };
        self.dispatch(msg);
    }

    /// Whether a button is currently actionable
    pub fn is_enabled(&self, button: StepButton) -> bool {
        match button {
            StepButton::Back => self.wizard.can_go_back(),
            StepButton::Next => self.wizard.can_advance(),
            StepButton::Submit => self.wizard.can_submit(),
        }
    }
}

/// Ctrl without Alt. Windows reports AltGr as Ctrl+Alt, and those keys type text.
fn is_command(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

/// Reports a submission's outcome when dropped, so `loading` is always cleared
struct SubmissionGuard {
    tx: UnboundedSender<Msg>,
    outcome: Option<Result<(), SubmitError>>,
}

impl SubmissionGuard {
    fn new(tx: UnboundedSender<Msg>) -> Self {
        Self { tx, outcome: None }
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        let outcome = self.outcome.take().unwrap_or_else(|| {
            tracing::warn!("Submission task ended without a result");
            Err(SubmitError::Transport(
                "submission task ended without a result".to_string(),
            ))
        });
        // Receiver is gone only when the app has already shut down
        let _ = self.tx.send(Msg::SubmissionSettled(outcome));
    }
}
