//! Model order reduction
//!
//! Entry points are [`Model::fopdt`](crate::Model::fopdt) and
//! [`Model::sopdt`](crate::Model::sopdt). Positive zeros are cancelled by the
//! resolver before any pole is lumped into the delay.

mod approximation;
mod cancellation;
mod resolver;

pub use approximation::Method;
pub use cancellation::{Cancellation, Candidate, Rewrite, DELAY_FACTOR};
pub use resolver::resolve;
