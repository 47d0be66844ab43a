//! Waitlist form feedback. The web layer mirrors this state onto the input and
//! button elements and arms the reset timers.

use crate::email::is_valid_email;
use std::time::Duration;

pub const BUTTON_LABEL_IDLE: &str = "Request Early Access";
pub const BUTTON_LABEL_SUBMITTED: &str = "Added to Waitlist!";
pub const SUBMITTED_RESET_AFTER: Duration = Duration::from_millis(3000);
pub const ERROR_CLEAR_AFTER: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    /// Accepted; the input is locked until the reset timer fires.
    Submitted,
    /// Rejected; the input shows error styling until the clear timer fires.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { email: String },
    Rejected,
    /// Nothing happened (already submitted, or Enter with the button hidden).
    Ignored,
}

#[derive(Clone, Debug)]
pub struct WaitlistForm {
    value: String,
    phase: FormPhase,
    button_visible: bool,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            value: String::new(),
            phase: FormPhase::Idle,
            button_visible: false,
        }
    }
}

impl WaitlistForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn button_visible(&self) -> bool {
        self.button_visible
    }

    pub fn input_enabled(&self) -> bool {
        self.phase != FormPhase::Submitted
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Submitted => BUTTON_LABEL_SUBMITTED,
            FormPhase::Idle | FormPhase::Error => BUTTON_LABEL_IDLE,
        }
    }

    /// The input text changed. Returns whether the button should be visible.
    pub fn input(&mut self, value: &str) -> bool {
        if self.phase != FormPhase::Submitted {
            self.value = value.to_string();
            self.button_visible = !self.value.trim().is_empty();
        }
        self.button_visible
    }

    /// Button clicked.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            return SubmitOutcome::Ignored;
        }
        let email = self.value.trim();
        if !email.is_empty() && is_valid_email(email) {
            let email = email.to_string();
            self.phase = FormPhase::Submitted;
            log::info!("[form] waitlist request accepted");
            SubmitOutcome::Accepted { email }
        } else {
            self.phase = FormPhase::Error;
            SubmitOutcome::Rejected
        }
    }

    /// Enter pressed in the input; only submits while the button is showing.
    pub fn enter_pressed(&mut self) -> SubmitOutcome {
        if self.button_visible {
            self.submit()
        } else {
            SubmitOutcome::Ignored
        }
    }

    /// Timer after a successful submission: back to an empty, unlocked form.
    pub fn reset_after_submit(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.value.clear();
            self.button_visible = false;
            self.phase = FormPhase::Idle;
        }
    }

    /// Timer after a rejection: drop the error styling, keep the text.
    pub fn clear_error(&mut self) {
        if self.phase == FormPhase::Error {
            self.phase = FormPhase::Idle;
        }
    }
}
