//! User-facing notices shown as modal dialogs

use std::collections::VecDeque;

/// Outcome notices raised by a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Relay accepted the form
    Submitted,
    /// Relay answered with a non-success status
    SubmitFailed,
    /// Request never got a response
    SubmitError,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Submitted => "Success",
            Self::SubmitFailed | Self::SubmitError => "Error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::SubmitFailed => "Something went wrong. Please try again.",
            Self::SubmitError => "Error submitting form.",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Submitted)
    }
}

/// FIFO of notices waiting to be acknowledged. Only the front one is shown.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        self.pending.push_back(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }
}
