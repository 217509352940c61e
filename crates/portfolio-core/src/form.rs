//! Simulated contact form submission feedback.

use crate::constants::{FORM_SENT_BACKGROUND, FORM_SENT_LABEL};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormFeedback {
    #[default]
    Idle,
    Sent {
        original_label: String,
    },
}

/// What the submit button should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: String,
    pub background: Option<&'static str>,
}

impl FormFeedback {
    /// Start the "sent" feedback. Returns `None` while feedback is already
    /// showing so the original label is kept.
    pub fn submit(&mut self, current_label: &str) -> Option<ButtonLook> {
        if matches!(self, Self::Sent { .. }) {
            return None;
        }
        *self = Self::Sent {
            original_label: current_label.to_string(),
        };
        Some(ButtonLook {
            label: FORM_SENT_LABEL.to_string(),
            background: Some(FORM_SENT_BACKGROUND),
        })
    }

    /// Timer expiry: back to idle with the original label restored.
    pub fn restore(&mut self) -> Option<ButtonLook> {
        match std::mem::take(self) {
            Self::Sent { original_label } => Some(ButtonLook {
                label: original_label,
                background: None,
            }),
            Self::Idle => None,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}
