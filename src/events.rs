//! The four wedding events and where they happen.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventId {
    Mairie,
    WelcomeDinner,
    BeachParty,
    WeddingCeremony,
}

impl EventId {
    pub const ALL: [EventId; 4] = [
        EventId::Mairie,
        EventId::WelcomeDinner,
        EventId::BeachParty,
        EventId::WeddingCeremony,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventId::Mairie => "mairie",
            EventId::WelcomeDinner => "welcome-dinner",
            EventId::BeachParty => "beach-party",
            EventId::WeddingCeremony => "wedding-ceremony",
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event id: {0}")]
pub struct UnknownEvent(pub String);

impl FromStr for EventId {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}

/// [longitude, latitude] in degrees.
pub type LonLat = [f64; 2];

#[derive(Debug, Clone, PartialEq)]
pub struct WeddingEvent {
    pub id: EventId,
    pub emoji: &'static str,
    pub date: NaiveDate,
    pub coordinates: LonLat,
    /// Prefix of the event's i18n keys, e.g. `event.mairie`.
    pub translation_key: &'static str,
}

// NaiveDate::from_ymd_opt is not const; build the list lazily.
static EVENT_LIST: once_cell::sync::Lazy<Vec<WeddingEvent>> = once_cell::sync::Lazy::new(|| {
    let date = |d: u32| NaiveDate::from_ymd_opt(2026, 10, d).unwrap_or_default();
    vec![
        WeddingEvent {
            id: EventId::Mairie,
            emoji: "🏛️",
            date: date(18),
            coordinates: [2.3522, 48.8566],
            translation_key: "event.mairie",
        },
        WeddingEvent {
            id: EventId::WelcomeDinner,
            emoji: "🍽️",
            date: date(18),
            coordinates: [34.7659, 32.0606],
            translation_key: "event.welcome_dinner",
        },
        WeddingEvent {
            id: EventId::BeachParty,
            emoji: "🏖️",
            date: date(19),
            coordinates: [34.7875, 32.1629],
            translation_key: "event.beach_party",
        },
        WeddingEvent {
            id: EventId::WeddingCeremony,
            emoji: "💒",
            date: date(20),
            coordinates: [34.7307, 31.9056],
            translation_key: "event.wedding_ceremony",
        },
    ]
});

/// All events in journey order.
pub fn events() -> &'static [WeddingEvent] {
    &EVENT_LIST
}

pub fn event_by_id(id: EventId) -> &'static WeddingEvent {
    // Every EventId has exactly one entry, in declaration order.
    &EVENT_LIST[id as usize]
}

/// Route waypoints in journey order.
pub fn route_coordinates() -> Vec<LonLat> {
    events().iter().map(|e| e.coordinates).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for id in EventId::ALL {
            assert_eq!(id.as_str().parse::<EventId>(), Ok(id));
        }
        assert!("brunch".parse::<EventId>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&EventId::WelcomeDinner).unwrap();
        assert_eq!(json, "\"welcome-dinner\"");
    }

    #[test]
    fn lookup_matches_declaration_order() {
        for id in EventId::ALL {
            assert_eq!(event_by_id(id).id, id);
        }
        assert_eq!(events().len(), 4);
    }

    #[test]
    fn events_are_chronological() {
        let dates: Vec<_> = events().iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }
}
