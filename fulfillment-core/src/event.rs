use serde::Deserialize;
use std::collections::HashMap;

/// Name of the slot carrying the requested city.
pub const CITY_SLOT: &str = "city";

/// Intent-fulfillment event as delivered by the conversational runtime.
///
/// Read-only to the handler; unrecognized fields in the runtime's payload
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentEvent {
    pub current_intent: CurrentIntent,

    /// Attributes the runtime carries across turns.
    #[serde(default)]
    pub session_attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentIntent {
    #[serde(default)]
    pub name: String,

    /// Slot values may be JSON null when the runtime left them unfilled.
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
}

impl IntentEvent {
    /// Raw slot value, if present and non-null.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent.slots.get(name).and_then(|v| v.as_deref())
    }

    /// The `city` slot, or an empty string when absent.
    ///
    /// No validation happens here: an empty city flows into the provider
    /// query as-is and the provider's error response governs the outcome.
    pub fn city(&self) -> &str {
        self.slot(CITY_SLOT).unwrap_or("")
    }

    /// Synthetic event carrying only a `city` slot, for local invocation.
    pub fn for_city(city: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(CITY_SLOT.to_string(), Some(city.into()));

        Self {
            current_intent: CurrentIntent { name: "GetWeather".to_string(), slots },
            session_attributes: HashMap::new(),
        }
    }
}
