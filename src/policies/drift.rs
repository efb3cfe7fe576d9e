//! # Health drift applied on every successful work tick.
//!
//! [`HealthDrift`] draws a small signed health step per worker per tick:
//!
//! ```text
//! draw decay  (p = decay_probability) ─► -step
//!   else draw boost (p = boost_probability) ─► +step
//!   else ─► 0
//! ```
//!
//! The boost draw only happens when no decay was drawn, so the effective boost
//! probability is `(1 - decay) * boost`. The result is clamped by the worker record.

use rand::Rng;

/// Randomized health perturbation policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthDrift {
    /// Probability of a negative step.
    pub decay_probability: f64,
    /// Probability of a positive step, drawn only if no decay was drawn.
    pub boost_probability: f64,
    /// Magnitude of one step.
    pub step: u8,
}

impl HealthDrift {
    /// A drift that never changes health.
    pub const fn none() -> Self {
        Self {
            decay_probability: 0.0,
            boost_probability: 0.0,
            step: 0,
        }
    }

    /// Draws the signed health delta for one worker tick.
    pub fn sample(&self) -> i16 {
        if self.step == 0 {
            return 0;
        }
        let mut rng = rand::rng();
        let step = i16::from(self.step);
        if rng.random_bool(probability(self.decay_probability)) {
            -step
        } else if rng.random_bool(probability(self.boost_probability)) {
            step
        } else {
            0
        }
    }
}

impl Default for HealthDrift {
    /// Returns the reference drift: `-1` with p=0.2, else `+1` with p=0.1.
    fn default() -> Self {
        Self {
            decay_probability: 0.2,
            boost_probability: 0.1,
            step: 1,
        }
    }
}

/// Sanitizes a probability for `random_bool` (non-finite → 0, clamped to `[0, 1]`).
fn probability(p: f64) -> f64 {
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_never_moves() {
        let drift = HealthDrift::none();
        for _ in 0..100 {
            assert_eq!(drift.sample(), 0);
        }
    }

    #[test]
    fn certain_decay_always_decays() {
        let drift = HealthDrift {
            decay_probability: 1.0,
            boost_probability: 1.0,
            step: 3,
        };
        for _ in 0..100 {
            assert_eq!(drift.sample(), -3);
        }
    }

    #[test]
    fn certain_boost_without_decay() {
        let drift = HealthDrift {
            decay_probability: 0.0,
            boost_probability: 1.0,
            step: 1,
        };
        assert_eq!(drift.sample(), 1);
    }

    #[test]
    fn default_stays_within_one_step() {
        let drift = HealthDrift::default();
        for _ in 0..500 {
            assert!((-1..=1).contains(&drift.sample()));
        }
    }

    #[test]
    fn bad_probabilities_are_sanitized() {
        let drift = HealthDrift {
            decay_probability: f64::NAN,
            boost_probability: 7.0,
            step: 1,
        };
        assert_eq!(drift.sample(), 1);
    }
}
