//! Counter-capture parsing.
//!
//! Parses the CSV output of a hardware-counter capture (`perf stat -x,`
//! style) into a map from event name to counter value. The parser is
//! deliberately tolerant: header noise is skipped, and events the kernel
//! could not count degrade to [`CounterValue::Unavailable`] rather than
//! raising errors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Sentinel values perf emits for events it could not measure.
const SENTINELS: &[&str] = &["<not supported>", "<not counted>"];

/// A single counter reading.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterValue {
    /// A measured value with its (possibly empty) unit string.
    Counted { value: f64, unit: String },
    /// The event appeared in the capture but carried no usable value.
    Unavailable,
}

/// Map from event name to counter value, keyed by the event's last
/// occurrence in the capture.
#[derive(Debug, Clone, Default)]
pub struct EventMap {
    events: HashMap<String, CounterValue>,
}

impl EventMap {
    /// Load and parse a counter capture from a file.
    ///
    /// A missing or unreadable file is fatal; malformed content is not.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read counter capture {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parse counter-capture text.
    ///
    /// Lines are `value,unit,event_name[,...]`. Blank lines and lines not
    /// starting with a digit or `<` are treated as headers or comments and
    /// skipped, as are lines with fewer than three fields. Values matching
    /// a perf sentinel, or that fail to parse as a number, register the
    /// event as [`CounterValue::Unavailable`]. The last occurrence of an
    /// event name wins.
    pub fn parse(content: &str) -> Self {
        let mut events = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !line.starts_with(|c: char| c.is_ascii_digit() || c == '<') {
                debug!(line, "skipping non-metric line");
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 3 {
                debug!(line, "skipping short line");
                continue;
            }
            let (value, unit, event) = (fields[0], fields[1], fields[2]);

            if SENTINELS.contains(&value) {
                events.insert(event.to_string(), CounterValue::Unavailable);
                continue;
            }

            // perf can emit thousands separators depending on locale.
            let counter = match value.replace(',', "").parse::<f64>() {
                Ok(num) => CounterValue::Counted {
                    value: num,
                    unit: unit.to_string(),
                },
                Err(_) => CounterValue::Unavailable,
            };
            events.insert(event.to_string(), counter);
        }

        Self { events }
    }

    /// Numeric value of an event, or `None` if the event is missing or
    /// unavailable.
    pub fn value(&self, name: &str) -> Option<f64> {
        match self.events.get(name) {
            Some(CounterValue::Counted { value, .. }) => Some(*value),
            _ => None,
        }
    }

    /// Unit string recorded for an event, if it was counted.
    pub fn unit(&self, name: &str) -> Option<&str> {
        match self.events.get(name) {
            Some(CounterValue::Counted { unit, .. }) => Some(unit.as_str()),
            _ => None,
        }
    }

    /// Number of events registered in the capture.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
