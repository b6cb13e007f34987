//! Contact form controller.
//!
//! ```text
//!   idle ──submit──▶ sending ──delivered──▶ success (fields cleared)
//!                      │  ▲                    │
//!                   failed└──submit── error ◀──┘ (new submit re-enters sending)
//! ```
//!
//! Only one submission per form may be in flight. Each submission carries a
//! `Ticket`; a result is applied only if its ticket is still the in-flight
//! one, so late results for a superseded or discarded form are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    /// Inline status line shown under the form.
    pub fn message(self) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sending => Some("Sending…"),
            FormStatus::Success => Some("Thanks! Your message has been sent."),
            FormStatus::Error => Some("Something went wrong. Please try again."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

/// The JSON body sent to the form intake: `{name, email, message}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// First required field that is blank, in form order.
    pub fn missing(&self) -> Option<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("This message is already being sent")]
    AlreadySending,

    #[error("{0} is required")]
    Missing(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A submission the caller must deliver and then report back with `resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub payload: ContactFields,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    next_ticket: u64,
    in_flight: Option<Ticket>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with what the user typed; status idle.
    pub fn with_fields(fields: ContactFields) -> Self {
        let ContactFields { name, email, message } = fields;
        let mut form = Self::new();
        form.set(Field::Name, name);
        form.set(Field::Email, email);
        form.set(Field::Message, message);
        form
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// The submit control is disabled for the whole sending interval.
    pub fn submit_disabled(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Enter `sending` and hand out the payload to deliver.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        if self.status == FormStatus::Sending {
            return Err(FormError::AlreadySending);
        }
        if let Some(field) = self.fields.missing() {
            return Err(FormError::Missing(field));
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.status = FormStatus::Sending;

        Ok(Submission { ticket, payload: self.fields.clone() })
    }

    /// Apply a delivery result. Returns false if the ticket is stale and the
    /// result was ignored.
    pub fn resolve(&mut self, ticket: Ticket, delivered: bool) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;

        if delivered {
            self.fields.clear();
            self.status = FormStatus::Success;
        } else {
            self.status = FormStatus::Error;
        }
        true
    }
}
