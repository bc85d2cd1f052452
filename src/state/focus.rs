//! Keyboard focus within a step

use super::wizard::Step;

/// Buttons a step can show, in left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepButton {
    Back,
    Next,
    Submit,
}

impl StepButton {
    /// Buttons rendered for a step
    pub fn for_step(step: Step) -> &'static [StepButton] {
        match step {
            Step::One => &[StepButton::Next],
            Step::Two => &[StepButton::Back, StepButton::Next],
            Step::Three => &[StepButton::Back, StepButton::Submit],
        }
    }

    pub fn label(&self, loading: bool) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::Submit if loading => "Submitting...",
            Self::Submit => "Submit",
        }
    }
}

/// Which part of the step has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    /// Button row, with the index of the selected button
    Buttons(usize),
}

impl Focus {
    /// Tab: input -> primary button -> input
    pub fn toggle(&mut self, step: Step) {
        *self = match self {
            Focus::Input => Focus::Buttons(StepButton::for_step(step).len() - 1),
            Focus::Buttons(_) => Focus::Input,
        };
    }

    pub fn next_button(&mut self, step: Step) {
        if let Focus::Buttons(index) = self {
            let count = StepButton::for_step(step).len();
            *index = (*index + 1) % count;
        }
    }

    pub fn prev_button(&mut self, step: Step) {
        if let Focus::Buttons(index) = self {
            let count = StepButton::for_step(step).len();
            *index = if *index == 0 { count - 1 } else { *index - 1 };
        }
    }

    /// The selected button, if the button row is focused
    pub fn selected_button(&self, step: Step) -> Option<StepButton> {
        match self {
            Focus::Input => None,
            Focus::Buttons(index) => StepButton::for_step(step).get(*index).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_has_no_back() {
        assert_eq!(StepButton::for_step(Step::One), &[StepButton::Next]);
        assert!(StepButton::for_step(Step::Two).contains(&StepButton::Back));
        assert!(StepButton::for_step(Step::Three).contains(&StepButton::Back));
    }

    #[test]
    fn test_only_last_step_submits() {
        assert!(!StepButton::for_step(Step::Two).contains(&StepButton::Submit));
        assert!(StepButton::for_step(Step::Three).contains(&StepButton::Submit));
    }

    #[test]
    fn test_submit_label_while_loading() {
        assert_eq!(StepButton::Submit.label(false), "Submit");
        assert_eq!(StepButton::Submit.label(true), "Submitting...");
        assert_eq!(StepButton::Back.label(true), "Back");
    }

    #[test]
    fn test_toggle_selects_primary_button() {
        let mut focus = Focus::Input;
        focus.toggle(Step::Two);
        assert_eq!(focus, Focus::Buttons(1));
        assert_eq!(focus.selected_button(Step::Two), Some(StepButton::Next));
        focus.toggle(Step::Two);
        assert_eq!(focus, Focus::Input);
        assert_eq!(focus.selected_button(Step::Two), None);
    }

    #[test]
    fn test_button_selection_wraps() {
        let mut focus = Focus::Buttons(1);
        focus.next_button(Step::Three);
        assert_eq!(focus, Focus::Buttons(0));
        focus.prev_button(Step::Three);
        assert_eq!(focus, Focus::Buttons(1));
    }

    #[test]
    fn test_single_button_stays_put() {
        let mut focus = Focus::Buttons(0);
        focus.next_button(Step::One);
        assert_eq!(focus, Focus::Buttons(0));
        focus.prev_button(Step::One);
        assert_eq!(focus, Focus::Buttons(0));
    }

    #[test]
    fn test_button_moves_ignored_on_input() {
        let mut focus = Focus::Input;
        focus.next_button(Step::Three);
        assert_eq!(focus, Focus::Input);
    }
}
