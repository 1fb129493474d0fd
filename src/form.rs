// src/form.rs
//
// Contact form state. The browser posts the form itself; this only tracks
// what the visitor typed and whether they pressed "Envoyer".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name` attribute of the matching input, also the POST key.
    pub fn attr(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attr())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.attr() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Last write wins; the other fields are untouched.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field left empty, in page order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    /// Marks the form as sent. The flag is optimistic: it is set before the
    /// relay answers and only a fresh form clears it.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if let Some(field) = self.first_missing() {
            return Err(FormError::MissingField(field));
        }
        self.submitted = true;
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submission(&self, config: &SiteConfig, next_url: &str) -> Submission {
        let mut fields: Vec<(&'static str, String)> = Field::ALL
            .into_iter()
            .map(|f| (f.attr(), self.get(f).to_string()))
            .collect();
        fields.push(("_captcha", config.captcha.to_string()));
        fields.push(("_next", next_url.to_string()));
        fields.push(("_subject", config.subject.clone()));

        Submission {
            action: config.relay_action.clone(),
            fields,
        }
    }
}

/// The POST the browser sends to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub action: String,
    pub fields: Vec<(&'static str, String)>,
}

impl Submission {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Relay directives, rendered as hidden inputs.
    pub fn hidden_fields(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.fields.iter().filter(|(k, _)| k.starts_with('_'))
    }
}

/// Where the relay redirects after accepting the message.
pub fn redirect_target(protocol: &str, host: &str, pathname: &str, anchor: &str) -> String {
    format!("{protocol}//{host}{pathname}#{anchor}")
}
