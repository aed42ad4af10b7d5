//! Transfer function model
//!
//! A [`Model`] describes a SISO transfer function in time-constant form:
//!
//! ```text
//! W(s) = K · Π(1 + zᵢ·s) / Π(1 + pᵢ·s) · e^(−d·s)
//! ```
//!
//! Poles and zeros are kept in descending order so that the dominant (largest)
//! pole is always first. The special-rule flag marks models that still carry a
//! positive zero and must be resolved before order reduction.

use crate::error::{ElementKind, ReduceError, Result};

/// Transfer function value object
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    gain: f64,
    delay: f64,
    zeros: Vec<f64>,
    poles: Vec<f64>,
    special_rule: bool,
}

impl Model {
    /// Create a new model
    ///
    /// The delay is stored as its absolute value and both element lists are
    /// sorted descending. Any real input is accepted; reduction later requires
    /// at least one pole.
    ///
    /// # Arguments
    /// * `gain` - Static gain, any sign
    /// * `delay` - Transport delay
    /// * `zeros` - Numerator time constants
    /// * `poles` - Denominator time constants
    pub fn new(gain: f64, delay: f64, mut zeros: Vec<f64>, mut poles: Vec<f64>) -> Self {
        sort_descending(&mut zeros);
        sort_descending(&mut poles);
        let special_rule = contains_positive(&zeros);

        Self {
            gain,
            delay: delay.abs(),
            zeros,
            poles,
            special_rule,
        }
    }

    /// Static gain
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Transport delay (never negative)
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Poles, dominant first
    pub fn poles(&self) -> &[f64] {
        &self.poles
    }

    /// Zeros, largest first
    pub fn zeros(&self) -> &[f64] {
        &self.zeros
    }

    /// Number of poles
    pub fn order(&self) -> usize {
        self.poles.len()
    }

    /// Whether positive zeros must be resolved before reduction
    ///
    /// This is the flag as of the last zero mutation or explicit override.
    pub fn special_rule(&self) -> bool {
        self.special_rule
    }

    /// Whether any zero is currently strictly positive
    pub fn has_positive_zero(&self) -> bool {
        contains_positive(&self.zeros)
    }

    /// Set the static gain
    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
    }

    /// Set the transport delay (stored as its absolute value)
    pub fn set_delay(&mut self, delay: f64) {
        self.delay = delay.abs();
    }

    /// Override the special-rule flag
    pub fn set_special_rule(&mut self, special_rule: bool) {
        self.special_rule = special_rule;
    }

    /// Remove the zero at `index` and return it
    ///
    /// Later zeros shift left and the special-rule flag is recomputed. An
    /// out-of-range index leaves the model untouched.
    pub fn remove_zero(&mut self, index: usize) -> Result<f64> {
        let zero = remove_at(&mut self.zeros, index, ElementKind::Zero)?;
        self.special_rule = contains_positive(&self.zeros);
        Ok(zero)
    }

    /// Remove the pole at `index` and return it
    pub fn remove_pole(&mut self, index: usize) -> Result<f64> {
        remove_at(&mut self.poles, index, ElementKind::Pole)
    }

    /// Append a pole without re-sorting
    ///
    /// The new pole lands at the end of the list even when it is larger than
    /// the poles before it. [`Model::new`] restores the ordering.
    pub fn add_pole(&mut self, pole: f64) {
        self.poles.push(pole);
    }
}

impl Default for Model {
    /// Unit gain, no delay, a single zero at 0 and a single pole at 1
    fn default() -> Self {
        Self::new(1.0, 0.0, vec![0.0], vec![1.0])
    }
}

fn sort_descending(values: &mut [f64]) {
    values.sort_by(|a, b| b.total_cmp(a));
}

fn contains_positive(values: &[f64]) -> bool {
    values.iter().any(|&v| v > 0.0)
}

fn remove_at(values: &mut Vec<f64>, index: usize, kind: ElementKind) -> Result<f64> {
    if index >= values.len() {
        return Err(ReduceError::IndexOutOfBounds {
            kind,
            index,
            len: values.len(),
        });
    }
    Ok(values.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_construction_sorts_descending() {
        let model = Model::new(1.0, 5.0, vec![-1.0, -6.0, -3.0], vec![4.0, 1.0, 10.0, 20.0]);

        assert_eq!(model.poles(), &[20.0, 10.0, 4.0, 1.0]);
        assert_eq!(model.zeros(), &[-1.0, -3.0, -6.0]);
        assert!(!model.special_rule());
    }

    #[test]
    fn test_negative_delay_normalized() {
        let mut model = Model::new(2.0, -3.5, vec![], vec![1.0]);
        assert_eq!(model.delay(), 3.5);

        model.set_delay(-1.0);
        assert_eq!(model.delay(), 1.0);
    }

    #[test]
    fn test_special_rule_on_positive_zero() {
        assert!(Model::new(1.0, 0.0, vec![-2.0, 0.5], vec![1.0]).special_rule());
        // Zero itself is not positive
        assert!(!Model::new(1.0, 0.0, vec![0.0, -1.0], vec![1.0]).special_rule());
        assert!(!Model::new(1.0, 0.0, vec![], vec![1.0]).special_rule());
    }

    #[test]
    fn test_remove_zero_recomputes_flag() {
        let mut model = Model::new(1.0, 0.0, vec![3.0, -1.0], vec![2.0]);
        assert!(model.special_rule());

        let removed = model.remove_zero(0).unwrap();
        assert_eq!(removed, 3.0);
        assert_eq!(model.zeros(), &[-1.0]);
        assert!(!model.special_rule());
    }

    #[test]
    fn test_remove_out_of_bounds_is_atomic() {
        let mut model = Model::new(1.0, 0.0, vec![3.0], vec![2.0, 1.0]);
        let before = model.clone();

        let err = model.remove_pole(2).unwrap_err();
        assert!(matches!(
            err,
            ReduceError::IndexOutOfBounds {
                kind: ElementKind::Pole,
                index: 2,
                len: 2
            }
        ));
        assert!(model.remove_zero(1).is_err());
        assert_eq!(model, before);
    }

    #[test]
    fn test_remove_pole_shifts_left() {
        let mut model = Model::new(1.0, 0.0, vec![], vec![3.0, 2.0, 1.0]);
        assert_eq!(model.remove_pole(1).unwrap(), 2.0);
        assert_eq!(model.poles(), &[3.0, 1.0]);
    }

    #[test]
    fn test_add_pole_appends_unsorted() {
        let mut model = Model::new(1.0, 0.0, vec![], vec![3.0, 1.0]);
        model.add_pole(7.0);
        assert_eq!(model.poles(), &[3.0, 1.0, 7.0]);
        assert_eq!(model.order(), 3);
    }

    #[test]
    fn test_flag_override_and_predicate() {
        let mut model = Model::new(1.0, 0.0, vec![2.0], vec![1.0]);
        model.set_special_rule(false);

        assert!(!model.special_rule());
        assert!(model.has_positive_zero());
    }

    #[test]
    fn test_default_model() {
        let model = Model::default();
        assert_eq!(model.gain(), 1.0);
        assert_eq!(model.delay(), 0.0);
        assert_eq!(model.zeros(), &[0.0]);
        assert_eq!(model.poles(), &[1.0]);
        assert!(!model.special_rule());
    }
}
