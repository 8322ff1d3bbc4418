//! RSVP form model: validation, wire encoding and submission state.
//!
//! The backend is a spreadsheet-backed Apps Script endpoint that only reads
//! `application/x-www-form-urlencoded` bodies, so a submission is flattened
//! into ordered key/value pairs.

use crate::events::EventId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const MAX_GUESTS: u8 = 9;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Raw form input, as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsvpDraft {
    pub name: String,
    pub email: String,
    pub events: BTreeSet<EventId>,
    /// Additional guests, as entered in the number field.
    pub guest_count: String,
    pub dietary: String,
    pub message: String,
}

/// Per-field validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RsvpErrors {
    pub name: bool,
    pub email: bool,
    pub events: bool,
    pub guest_count: bool,
}

impl RsvpErrors {
    pub fn any(&self) -> bool {
        self.name || self.email || self.events || self.guest_count
    }
}

/// A validated submission ready to post.
#[derive(Debug, Clone, PartialEq)]
pub struct RsvpSubmission {
    pub name: String,
    pub email: String,
    pub events: BTreeSet<EventId>,
    pub guest_count: u8,
    pub dietary: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Parse the guest count; an empty field means no extra guests.
pub fn parse_guest_count(input: &str) -> Option<u8> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<u8>().ok().filter(|&n| n <= MAX_GUESTS)
}

impl RsvpDraft {
    pub fn toggle_event(&mut self, id: EventId, attending: bool) {
        if attending {
            self.events.insert(id);
        } else {
            self.events.remove(&id);
        }
    }

    pub fn validate(&self) -> Result<RsvpSubmission, RsvpErrors> {
        let guest_count = parse_guest_count(&self.guest_count);
        let errors = RsvpErrors {
            name: self.name.trim().is_empty(),
            email: !is_valid_email(&self.email),
            events: self.events.is_empty(),
            guest_count: guest_count.is_none(),
        };
        if errors.any() {
            return Err(errors);
        }
        Ok(RsvpSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            events: self.events.clone(),
            guest_count: guest_count.unwrap_or(0),
            dietary: self.dietary.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

impl RsvpSubmission {
    /// Form fields in the order the sheet expects them.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let events = self
            .events
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("events", events),
            ("guestCount", self.guest_count.to_string()),
            ("dietary", self.dietary.clone()),
            ("message", self.message.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RsvpError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("server answered HTTP {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode the form: {0}")]
    Encode(String),
    #[error("no RSVP endpoint configured")]
    NotConfigured,
}

impl RsvpError {
    /// i18n key of the message shown to the guest.
    pub fn message_key(&self) -> &'static str {
        match self {
            RsvpError::Timeout(_) => "rsvp.error_timeout",
            _ => "rsvp.error_message",
        }
    }
}

/// Outcome of the endpoint's HTTP status.
///
/// Status 0 is an opaque redirect response, which the script endpoint
/// produces after accepting a row.
pub fn check_status(status: u16) -> Result<(), RsvpError> {
    if status == 0 || (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RsvpError::Http(status))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(RsvpError),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RsvpDraft {
        let mut draft = RsvpDraft {
            name: "  Anaël Cohen ".into(),
            email: "anael@example.com".into(),
            guest_count: "2".into(),
            dietary: "végétarien".into(),
            ..Default::default()
        };
        draft.toggle_event(EventId::WeddingCeremony, true);
        draft.toggle_event(EventId::Mairie, true);
        draft
    }

    #[test]
    fn valid_draft_produces_trimmed_submission() {
        let sub = filled().validate().unwrap();
        assert_eq!(sub.name, "Anaël Cohen");
        assert_eq!(sub.guest_count, 2);
        assert_eq!(sub.events.len(), 2);
    }

    #[test]
    fn empty_draft_flags_required_fields() {
        let errors = RsvpDraft::default().validate().unwrap_err();
        assert!(errors.name);
        assert!(errors.email);
        assert!(errors.events);
        // Empty guest count means zero.
        assert!(!errors.guest_count);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut draft = filled();
        draft.name = "   ".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.name && !errors.email && !errors.events);
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" guest@mail.fr "));
        assert!(!is_valid_email("guest@mail"));
        assert!(!is_valid_email("guest mail@x.fr"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn guest_count_bounds() {
        assert_eq!(parse_guest_count(""), Some(0));
        assert_eq!(parse_guest_count("9"), Some(9));
        assert_eq!(parse_guest_count("10"), None);
        assert_eq!(parse_guest_count("-1"), None);
        assert_eq!(parse_guest_count("1.5"), None);
    }

    #[test]
    fn unticking_last_event_fails_validation() {
        let mut draft = filled();
        draft.toggle_event(EventId::Mairie, false);
        draft.toggle_event(EventId::WeddingCeremony, false);
        assert!(draft.validate().unwrap_err().events);
    }

    #[test]
    fn form_pairs_are_ordered_and_events_follow_journey_order() {
        let pairs = filled().validate().unwrap().form_pairs();
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["name", "email", "events", "guestCount", "dietary", "message"]);
        assert_eq!(pairs[2].1, "mairie,wedding-ceremony");
        assert_eq!(pairs[3].1, "2");
        assert_eq!(pairs[5].1, "");
    }

    #[test]
    fn timeout_has_its_own_message() {
        assert_eq!(RsvpError::Timeout(10_000).message_key(), "rsvp.error_timeout");
        assert_eq!(RsvpError::Http(500).message_key(), "rsvp.error_message");
        assert_eq!(RsvpError::Http(500).to_string(), "server answered HTTP 500");
    }

    #[test]
    fn http_status_mapping() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(0), Ok(()));
        assert_eq!(check_status(404), Err(RsvpError::Http(404)));
        assert_eq!(check_status(302), Err(RsvpError::Http(302)));
    }

    #[test]
    fn default_status_is_idle() {
        assert_eq!(FormStatus::default(), FormStatus::Idle);
        assert!(FormStatus::Submitting.is_submitting());
    }
}
