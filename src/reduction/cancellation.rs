//! Pole-zero cancellation rules for positive zeros
//!
//! A positive zero is removed by cancelling it against its nearest pole. How
//! the model is rewritten depends on the ordering of the delay `d`, the pole
//! `p` and the zero `z`. Rules are checked in a fixed priority order and the
//! first match wins:
//!
//! | Case | Condition            | Gain factor     | Extra pole |
//! |------|----------------------|-----------------|------------|
//! | ZPD  | `z ≥ p ≥ d`          | `z / p`         | -          |
//! | ZDP  | `z ≥ d ≥ p`          | `z / d`         | -          |
//! | DZP  | `d ≥ z ≥ p`          | `1`             | -          |
//! | PZD  | `p ≥ z ≥ 5d`         | `z / p`         | -          |
//! | MIN  | `min(p, 5d) ≥ z`     | `min(p, 5d)`    | `\|p − z\|` |
//!
//! Every rule removes both the pole and the zero. For finite inputs one of the
//! rules always matches; only NaN slips through to [`Cancellation::Unclassified`].

use std::fmt;

/// Multiplier applied to the delay in the PZD and MIN rules
pub const DELAY_FACTOR: f64 = 5.0;

/// The delay, pole and zero taking part in one cancellation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub delay: f64,
    pub pole: f64,
    pub zero: f64,
}

/// Cancellation rule selected for a [`Candidate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancellation {
    Zpd,
    Zdp,
    Dzp,
    Pzd,
    Min,
    /// No rule applied
    Unclassified,
}

/// Model rewrite produced by a cancellation rule
///
/// The zero is always removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rewrite {
    pub gain_factor: f64,
    pub remove_pole: bool,
    pub new_pole: Option<f64>,
}

impl Cancellation {
    /// Pick the first matching rule for the candidate
    pub fn classify(c: Candidate) -> Self {
        let Candidate {
            delay: d,
            pole: p,
            zero: z,
        } = c;

        if z >= p && p >= d {
            Cancellation::Zpd
        } else if z >= d && d >= p {
            Cancellation::Zdp
        } else if d >= z && z >= p {
            Cancellation::Dzp
        } else if p >= z && z >= DELAY_FACTOR * d {
            Cancellation::Pzd
        } else if p.min(DELAY_FACTOR * d) >= z {
            Cancellation::Min
        } else {
            Cancellation::Unclassified
        }
    }

    /// Describe how this rule rewrites the model for the candidate
    pub fn rewrite(self, c: Candidate) -> Rewrite {
        match self {
            Cancellation::Zpd | Cancellation::Pzd => Rewrite {
                gain_factor: c.zero / c.pole,
                remove_pole: true,
                new_pole: None,
            },
            Cancellation::Zdp => Rewrite {
                gain_factor: c.zero / c.delay,
                remove_pole: true,
                new_pole: None,
            },
            Cancellation::Dzp => Rewrite {
                gain_factor: 1.0,
                remove_pole: true,
                new_pole: None,
            },
            Cancellation::Min => Rewrite {
                gain_factor: c.pole.min(DELAY_FACTOR * c.delay),
                remove_pole: true,
                new_pole: Some((c.pole - c.zero).abs()),
            },
            Cancellation::Unclassified => Rewrite {
                gain_factor: 1.0,
                remove_pole: false,
                new_pole: None,
            },
        }
    }
}

impl fmt::Display for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cancellation::Zpd => "ZPD",
            Cancellation::Zdp => "ZDP",
            Cancellation::Dzp => "DZP",
            Cancellation::Pzd => "PZD",
            Cancellation::Min => "MIN",
            Cancellation::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}
