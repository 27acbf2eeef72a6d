//! Declarative construction of timers and chains, mirroring how sketches
//! describe their phase timings as plain data (often loaded from JSON).

use crate::{
    chain::TimerChain,
    error::{TickflowError, TickflowResult},
    timer::Timer,
};

/// Serializable description of a single timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimerSpec {
    /// Duration in frames. Zero completes on the first step.
    pub duration: u64,
    /// Whether the timer starts running; defaults to true.
    #[serde(default = "default_on")]
    pub on: bool,
}

fn default_on() -> bool {
    true
}

impl TimerSpec {
    pub fn new(duration: u64) -> Self {
        Self { duration, on: true }
    }

    pub fn build(&self) -> Timer {
        let mut t = Timer::new(self.duration);
        t.set_on(self.on);
        t
    }
}

/// Serializable description of a sequential chain of timers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SequenceSpec {
    pub timers: Vec<TimerSpec>,
    #[serde(default)]
    pub looped: bool,
}

impl SequenceSpec {
    /// Build the chain; an empty `timers` list is a validation error.
    pub fn build(&self) -> TickflowResult<TimerChain> {
        TimerChain::new(
            self.timers.iter().map(TimerSpec::build).collect(),
            self.looped,
        )
    }
}

/// Parse a [`SequenceSpec`] from JSON and build its chain.
#[tracing::instrument(skip(json))]
pub fn sequence_from_json(json: &str) -> TickflowResult<TimerChain> {
    let spec: SequenceSpec =
        serde_json::from_str(json).map_err(|e| TickflowError::serde(e.to_string()))?;
    spec.build()
}

/// Chain of plain timers, one per phase duration. The common
/// appear/hold/disappear shape is `phases(&[in, hold, out], false)`.
pub fn phases(durations: &[u64], looped: bool) -> TickflowResult<TimerChain> {
    TimerChain::new(durations.iter().map(|&d| Timer::new(d)).collect(), looped)
}

/// A looping chain of phase durations.
pub fn cycle(durations: &[u64]) -> TickflowResult<TimerChain> {
    phases(durations, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_spec_defaults_to_on() {
        let spec: TimerSpec = serde_json::from_str(r#"{ "duration": 4 }"#).unwrap();
        assert!(spec.on);
        let t = spec.build();
        assert_eq!(t.duration(), 4);
        assert!(t.is_on());
    }

    #[test]
    fn sequence_spec_round_trips() {
        let spec = SequenceSpec {
            timers: vec![TimerSpec::new(2), TimerSpec::new(3)],
            looped: true,
        };
        let json = serde_json::to_string(&spec).unwrap();
        let back: SequenceSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn sequence_from_json_builds_a_runnable_chain() {
        let json = r#"{ "timers": [ { "duration": 2 }, { "duration": 3 } ] }"#;
        let mut chain = sequence_from_json(json).unwrap();
        assert_eq!(chain.len(), 2);
        assert!(!chain.is_looped());

        chain.step();
        chain.step();
        assert_eq!(chain.current_index(), 1);
    }

    #[test]
    fn empty_sequence_is_a_validation_error() {
        let err = sequence_from_json(r#"{ "timers": [] }"#).unwrap_err();
        assert!(matches!(err, TickflowError::Validation(_)));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = sequence_from_json("{ not json").unwrap_err();
        assert!(matches!(err, TickflowError::Serde(_)));
    }

    #[test]
    fn phases_builds_one_timer_per_duration() {
        let chain = phases(&[5, 10, 5], false).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.timers()[1].duration(), 10);

        let looped = cycle(&[2, 2]).unwrap();
        assert!(looped.is_looped());
    }
}
