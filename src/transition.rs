//! Paint property transitions.

use maplibre_style::{TimeUnit, TransitionOptions};
use serde_json::Value;

/// Property name suffix of transition entries.
pub const TRANSITION_SUFFIX: &str = "-transition";

/// Transition timing in milliseconds.
#[derive(PartialEq, Eq, Copy, Clone, Default, Debug)]
pub struct TransitionTiming {
    pub delay: u64,
    pub duration: u64,
}

impl TransitionTiming {
    pub fn new(delay: u64, duration: u64) -> Self {
        Self { delay, duration }
    }
}

/// Decode a `{delay, duration}` entry.
///
/// Both fields must be non-negative integers, otherwise the transition is
/// considered unset.
pub fn decode(entry: &Value) -> Option<TransitionTiming> {
    let delay = entry.get("delay")?.as_u64()?;
    let duration = entry.get("duration")?.as_u64()?;
    Some(TransitionTiming { delay, duration })
}

/// Convert a transition to the platform's native unit.
pub fn encode(timing: TransitionTiming, unit: TimeUnit) -> TransitionOptions {
    TransitionOptions::new(unit.from_millis(timing.duration), unit.from_millis(timing.delay), unit)
}

/// Get the paint property targeted by a transition key.
pub fn target_property(key: &str) -> Option<&str> {
    key.strip_suffix(TRANSITION_SUFFIX).filter(|property| !property.is_empty())
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!({}), None)]
    #[case(json!({ "delay": 100 }), None)]
    #[case(json!({ "duration": 300 }), None)]
    #[case(json!({ "delay": 100, "duration": 300 }), Some(TransitionTiming::new(100, 300)))]
    #[case(json!({ "delay": 0, "duration": 0 }), Some(TransitionTiming::new(0, 0)))]
    #[case(json!({ "delay": -1, "duration": 300 }), None)]
    #[case(json!({ "delay": 1.5, "duration": 300 }), None)]
    #[case(json!({ "delay": "100", "duration": 300 }), None)]
    #[case(json!(null), None)]
    fn decode_entries(#[case] entry: Value, #[case] expected: Option<TransitionTiming>) {
        assert_eq!(decode(&entry), expected);
    }

    #[test]
    fn native_units() {
        let timing = TransitionTiming::new(100, 300);

        let android = encode(timing, TimeUnit::Milliseconds);
        assert_eq!(android, TransitionOptions::new(300., 100., TimeUnit::Milliseconds));

        let ios = encode(timing, TimeUnit::Seconds);
        assert_eq!(ios, TransitionOptions::new(0.3, 0.1, TimeUnit::Seconds));
    }

    #[test]
    fn transition_keys() {
        assert_eq!(target_property("fill-color-transition"), Some("fill-color"));
        assert_eq!(target_property("-transition"), None);
        assert_eq!(target_property("fill-color"), None);
    }
}
