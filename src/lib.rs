//! tfreduce - Transfer Function Order Reduction
//!
//! Reduces a linear transfer function, given as gain, transport delay, poles
//! and zeros in time-constant form, to a first- or second-order-plus-dead-time
//! model for controller tuning.
//!
//! # Architecture
//!
//! - [`Model`]: the transfer function value object
//! - [`reduction`]: positive-zero resolution and the FOPDT/SOPDT approximations
//! - [`config`]: resolver guard rails
//! - [`format`]: plain-text and LaTeX rendering
//!
//! ```
//! use tfreduce::{Method, Model};
//!
//! let model = Model::new(1.0, 5.0, vec![-1.0, -6.0, -3.0], vec![4.0, 1.0, 10.0, 20.0]);
//! let fopdt = model.fopdt(Method::General).unwrap();
//!
//! assert_eq!(fopdt.poles(), &[20.0]);
//! assert_eq!(fopdt.delay(), 30.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod reduction;

pub use config::{ReductionConfig, UnclassifiedPolicy};
pub use error::{ReduceError, Result};
pub use model::Model;
pub use reduction::Method;
