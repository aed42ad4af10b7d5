//! Positive zero resolution (the "special rule")
//!
//! Order reduction only lumps negative zeros into the delay. Positive zeros
//! are first cancelled one at a time against their nearest pole, largest zero
//! first, using the rules in [`super::cancellation`].
//!
//! The resolver never touches the caller's model: it rewrites an owned copy
//! and returns a freshly built, re-sorted [`Model`].

use log::{debug, warn};

use super::cancellation::{Cancellation, Candidate};
use crate::config::{ReductionConfig, UnclassifiedPolicy};
use crate::error::{ReduceError, Result};
use crate::model::Model;

/// Cancel every positive zero of `model`
///
/// Each step removes exactly one zero and only ever adds poles, so the loop
/// runs at most once per positive zero. The iteration bound is the larger of
/// `config.max_iterations` and the number of positive zeros on entry, so the
/// cap never rejects a model the loop would finish.
///
/// The result is rebuilt with [`Model::new`], which re-sorts any pole added
/// by a MIN step. A residual pole larger than the poles after it therefore
/// moves forward and may become the dominant pole seen by a later reduction,
/// rather than staying at the end of the list.
///
/// # Errors
/// - [`ReduceError::NoPoles`] if a positive zero has no pole to cancel against
/// - [`ReduceError::IterationLimit`] if the iteration cap is hit
/// - [`ReduceError::UnclassifiedCancellation`] if no rule matches and the
///   policy is [`UnclassifiedPolicy::Reject`]
pub fn resolve(model: &Model, config: &ReductionConfig) -> Result<Model> {
    let mut work = model.clone();
    let limit = config.max_iterations.max(positive_zero_count(work.zeros()));
    let mut iterations = 0;

    while let Some(zero_index) = first_positive_zero(work.zeros()) {
        if iterations >= limit {
            return Err(ReduceError::IterationLimit {
                limit,
                remaining: positive_zero_count(work.zeros()),
            });
        }
        iterations += 1;

        let pole_index =
            nearest_pole_index(work.poles(), work.zeros()[zero_index]).ok_or(
                ReduceError::NoPoles {
                    operation: "special rule resolution",
                },
            )?;

        let candidate = Candidate {
            delay: work.delay(),
            pole: work.poles()[pole_index],
            zero: work.zeros()[zero_index],
        };
        let case = Cancellation::classify(candidate);

        if case == Cancellation::Unclassified {
            match config.unclassified {
                UnclassifiedPolicy::Reject => {
                    return Err(ReduceError::UnclassifiedCancellation {
                        delay: candidate.delay,
                        pole: candidate.pole,
                        zero: candidate.zero,
                    });
                }
                UnclassifiedPolicy::DropZero => {
                    warn!(
                        "No cancellation rule for zero {} (pole {}, delay {}); dropping the zero",
                        candidate.zero, candidate.pole, candidate.delay
                    );
                }
            }
        }

        let rewrite = case.rewrite(candidate);
        let gain = work.gain() * rewrite.gain_factor;
        debug!(
            "Special rule step {}: {} on zero {} / pole {} (delay {}), gain {} -> {}",
            iterations,
            case,
            candidate.zero,
            candidate.pole,
            candidate.delay,
            work.gain(),
            gain
        );

        work.set_gain(gain);
        if rewrite.remove_pole {
            work.remove_pole(pole_index)?;
        }
        work.remove_zero(zero_index)?;
        if let Some(pole) = rewrite.new_pole {
            work.add_pole(pole);
        }
    }

    // Rebuild so that poles appended by MIN steps are back in order. No
    // positive zero remains, so the rebuilt special-rule flag is false.
    Ok(Model::new(
        work.gain(),
        work.delay(),
        work.zeros().to_vec(),
        work.poles().to_vec(),
    ))
}

/// Index of the first strictly positive zero
fn first_positive_zero(zeros: &[f64]) -> Option<usize> {
    zeros.iter().position(|&z| z > 0.0)
}

fn positive_zero_count(zeros: &[f64]) -> usize {
    zeros.iter().filter(|&&z| z > 0.0).count()
}

/// Index of the pole closest to `zero`
///
/// Ties keep the earliest pole. Returns `None` for an empty pole list.
fn nearest_pole_index(poles: &[f64], zero: f64) -> Option<usize> {
    let first = poles.first()?;
    let mut best = (0, (zero - first).abs());

    for (i, &pole) in poles.iter().enumerate().skip(1) {
        let diff = (zero - pole).abs();
        if diff < best.1 {
            best = (i, diff);
        }
    }

    Some(best.0)
}
