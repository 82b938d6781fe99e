use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Snapshot of the conversation state sent along with an action call.
///
/// Only the fields the actions read are modelled; anything else the host
/// sends is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
}

impl Tracker {
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: Some(sender_id.into()),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// Returns the slot value, treating an explicit JSON `null` as unset.
    pub fn get_slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).filter(|value| !value.is_null())
    }
}

/// A state update returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum Event {
    #[serde(rename = "slot")]
    SlotSet {
        timestamp: Option<f64>,
        name: String,
        value: Value,
    },
}

impl Event {
    pub fn slot_set(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Event::SlotSet {
            timestamp: None,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One request from the host to run a named action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    #[serde(default)]
    pub domain: Value,
    #[serde(default)]
    pub version: Option<String>,
}

impl ActionCall {
    pub fn new(next_action: impl Into<String>, tracker: Tracker) -> Self {
        Self {
            next_action: next_action.into(),
            sender_id: tracker.sender_id.clone(),
            tracker,
            domain: Value::Null,
            version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<Value>,
}

impl ActionResponse {
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events,
            responses: Vec::new(),
        }
    }
}

/// Reported in place of a response when a call could not be executed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionFailure {
    pub error: String,
    pub action_name: Option<String>,
}
