//! Stat counter animation.
//!
//! A counter climbs from 0 to its target over a fixed window using the
//! ease-out-quartic curve. Sampling is a pure function of the wall clock so
//! the same animation can be replayed frame by frame in tests.

use crate::constants::{
    COUNTER_DURATION_MS, COUNTER_HUE_SPAN, COUNTER_HUE_START, COUNTER_SCALE_BOOST, PRIMARY_YELLOW,
};
use crate::easing::ease_out_quart;
use crate::error::{FolioError, Result};

/// Validate a `data-target` attribute value.
pub fn parse_counter_target(raw: Option<&str>) -> Result<u64> {
    let raw = raw.unwrap_or_default().trim();
    let value: i64 = raw.parse().map_err(|_| FolioError::InvalidCounterTarget {
        raw: raw.to_string(),
    })?;
    u64::try_from(value).map_err(|_| FolioError::NegativeCounterTarget { value })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: u64,
    pub eased: f64,
    pub done: bool,
}

impl CounterFrame {
    pub fn transform(&self) -> String {
        if self.done {
            "scale(1)".to_string()
        } else {
            format!("scale({})", 1.0 + self.eased * COUNTER_SCALE_BOOST)
        }
    }

    pub fn color(&self) -> String {
        if self.done {
            PRIMARY_YELLOW.to_string()
        } else {
            format!(
                "hsl({}, 100%, 50%)",
                COUNTER_HUE_START + self.eased * COUNTER_HUE_SPAN
            )
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    target: u64,
    start_ms: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, start_ms: f64) -> Self {
        Self::with_duration(target, start_ms, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: u64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms: duration_ms.max(1.0),
        }
    }

    pub fn sample(&self, now_ms: f64) -> CounterFrame {
        let progress = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                eased: 1.0,
                done: true,
            };
        }
        let eased = ease_out_quart(progress);
        let value = ((eased * self.target as f64).floor() as u64).min(self.target);
        CounterFrame {
            value,
            eased,
            done: false,
        }
    }
}

/// Latch that lets the stats container start its counters exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnceTrigger {
    fired: bool,
}

impl OnceTrigger {
    /// Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_and_padded_integers() {
        assert_eq!(parse_counter_target(Some("250")), Ok(250));
        assert_eq!(parse_counter_target(Some("  12 ")), Ok(12));
        assert_eq!(parse_counter_target(Some("0")), Ok(0));
    }

    #[test]
    fn parse_rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_counter_target(Some("lots")),
            Err(FolioError::InvalidCounterTarget { .. })
        ));
        assert!(matches!(
            parse_counter_target(None),
            Err(FolioError::InvalidCounterTarget { .. })
        ));
        assert_eq!(
            parse_counter_target(Some("-4")),
            Err(FolioError::NegativeCounterTarget { value: -4 })
        );
    }

    #[test]
    fn frame_styles_switch_to_rest_state_when_done() {
        let anim = CounterAnimation::new(10, 0.0);
        let mid = anim.sample(1000.0);
        assert!(mid.transform().starts_with("scale(1.0"));
        assert!(mid.color().starts_with("hsl("));
        let end = anim.sample(5000.0);
        assert_eq!(end.transform(), "scale(1)");
        assert_eq!(end.color(), PRIMARY_YELLOW);
    }

    #[test]
    fn once_trigger_fires_once() {
        let mut t = OnceTrigger::default();
        assert!(t.fire());
        assert!(!t.fire());
        assert!(t.has_fired());
    }
}
