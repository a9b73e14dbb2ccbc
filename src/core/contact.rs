//! The contact form. Collects three free-text fields and acknowledges a
//! submit without sending anything anywhere.

use tracing::info;

pub const DEFAULT_ACKNOWLEDGMENT: &str = "Message sent! (Demo)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// User-visible confirmation produced by a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    acknowledgment: String,
    submissions: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_ACKNOWLEDGMENT)
    }
}

impl ContactForm {
    pub fn new(acknowledgment: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            acknowledgment: acknowledgment.into(),
            submissions: 0,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Accepts the form as-is. No validation is applied and nothing leaves
    /// the process; the field contents are kept.
    pub fn submit(&mut self) -> Acknowledgment {
        self.submissions += 1;
        info!(
            submission = self.submissions,
            filled = [Field::Name, Field::Email, Field::Message]
                .iter()
                .filter(|field| !self.get(**field).trim().is_empty())
                .count(),
            "contact form submitted"
        );
        Acknowledgment {
            text: self.acknowledgment.clone(),
        }
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }
}
