//! FOPDT and SOPDT approximations
//!
//! Both approximations keep the dominant poles and lump everything else into
//! the transport delay:
//!
//! - General FOPDT keeps the largest pole and adds every other pole plus the
//!   magnitude of every zero to the delay.
//! - The Skogestad half rule splits the first discarded pole: half goes into
//!   the last kept pole, half into the delay.
//!
//! Models that still carry positive zeros are resolved first (see
//! [`super::resolver`]). The receiver is never modified.

use log::debug;

use super::resolver::resolve;
use crate::config::ReductionConfig;
use crate::error::{ReduceError, Result};
use crate::model::Model;

/// FOPDT approximation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Lump all non-dominant poles into the delay
    #[default]
    General,
    /// Skogestad half rule (needs two poles, otherwise falls back to General)
    Skogestad,
}

impl Model {
    /// First-order-plus-dead-time approximation with the default config
    pub fn fopdt(&self, method: Method) -> Result<Model> {
        self.fopdt_with(method, &ReductionConfig::default())
    }

    /// First-order-plus-dead-time approximation
    ///
    /// Returns a model with a single pole and no zeros.
    ///
    /// # Errors
    /// [`ReduceError::NoPoles`] for a model without poles, or any resolver
    /// error if positive zeros have to be cancelled first.
    pub fn fopdt_with(&self, method: Method, config: &ReductionConfig) -> Result<Model> {
        if self.special_rule() {
            return resolve(self, config)?.fopdt_with(method, config);
        }

        match method {
            Method::General => self.fopdt_general(),
            Method::Skogestad => self.fopdt_skogestad(),
        }
    }

    /// Second-order-plus-dead-time approximation with the default config
    pub fn sopdt(&self) -> Result<Model> {
        self.sopdt_with(&ReductionConfig::default())
    }

    /// Second-order-plus-dead-time approximation (Skogestad half rule)
    ///
    /// With fewer than three poles there is nothing to split, so this
    /// returns the Skogestad FOPDT instead.
    pub fn sopdt_with(&self, config: &ReductionConfig) -> Result<Model> {
        if self.order() < 3 {
            return self.fopdt_with(Method::Skogestad, config);
        }

        if self.special_rule() {
            return resolve(self, config)?.sopdt_with(config);
        }

        let poles = self.poles();
        let delay = self.delay() + poles[2] / 2.0 + poles[3..].iter().sum::<f64>() + self.zero_lag();
        let reduced_poles = vec![poles[0], poles[1] + poles[2] / 2.0];

        debug!(
            "SOPDT: poles {:?} -> {:?}, delay {} -> {}",
            poles,
            reduced_poles,
            self.delay(),
            delay
        );

        Ok(Model::new(self.gain(), delay, Vec::new(), reduced_poles))
    }

    fn fopdt_general(&self) -> Result<Model> {
        let (&dominant, rest) = self
            .poles()
            .split_first()
            .ok_or(ReduceError::NoPoles { operation: "fopdt" })?;

        let delay = self.delay() + rest.iter().sum::<f64>() + self.zero_lag();

        debug!(
            "FOPDT (general): dominant pole {}, delay {} -> {}",
            dominant,
            self.delay(),
            delay
        );

        Ok(Model::new(self.gain(), delay, Vec::new(), vec![dominant]))
    }

    fn fopdt_skogestad(&self) -> Result<Model> {
        let poles = self.poles();
        if poles.len() < 2 {
            return self.fopdt_general();
        }

        let half = poles[1] / 2.0;
        let delay = self.delay() + half + poles[2..].iter().sum::<f64>() + self.zero_lag();
        let pole = poles[0] + half;

        debug!(
            "FOPDT (Skogestad): pole {} -> {}, delay {} -> {}",
            poles[0],
            pole,
            self.delay(),
            delay
        );

        Ok(Model::new(self.gain(), delay, Vec::new(), vec![pole]))
    }

    /// Total zero magnitude folded into the delay
    fn zero_lag(&self) -> f64 {
        self.zeros().iter().map(|z| z.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnclassifiedPolicy;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn fourth_order() -> Model {
        Model::new(1.0, 5.0, vec![-1.0, -6.0, -3.0], vec![4.0, 1.0, 10.0, 20.0])
    }

    #[test]
    fn test_general_fopdt() {
        let reduced = fourth_order().fopdt(Method::General).unwrap();

        assert_relative_eq!(reduced.delay(), 30.0);
        assert_eq!(reduced.poles(), &[20.0]);
        assert!(reduced.zeros().is_empty());
        assert_eq!(reduced.gain(), 1.0);
    }

    #[test]
    fn test_skogestad_fopdt() {
        let reduced = fourth_order().fopdt(Method::Skogestad).unwrap();

        // 5 + 10/2 + 4 + 1 + (1 + 3 + 6)
        assert_relative_eq!(reduced.delay(), 25.0);
        assert_eq!(reduced.poles(), &[25.0]);
        assert!(reduced.zeros().is_empty());
    }

    #[test]
    fn test_sopdt() {
        let reduced = fourth_order().sopdt().unwrap();

        // 5 + 4/2 + 1 + (1 + 3 + 6)
        assert_relative_eq!(reduced.delay(), 18.0);
        assert_eq!(reduced.poles(), &[20.0, 12.0]);
        assert!(reduced.zeros().is_empty());
    }

    #[test]
    fn test_receiver_not_mutated() {
        let model = fourth_order();
        let before = model.clone();

        model.fopdt(Method::General).unwrap();
        model.fopdt(Method::Skogestad).unwrap();
        model.sopdt().unwrap();

        assert_eq!(model, before);
    }

    #[test]
    fn test_skogestad_single_pole_falls_back_to_general() {
        let model = Model::new(2.0, 1.0, vec![-3.0], vec![5.0]);

        let skogestad = model.fopdt(Method::Skogestad).unwrap();
        let general = model.fopdt(Method::General).unwrap();

        assert_eq!(skogestad, general);
        assert_relative_eq!(skogestad.delay(), 4.0);
        assert_eq!(skogestad.poles(), &[5.0]);
    }

    #[test]
    fn test_sopdt_two_poles_uses_skogestad() {
        let model = Model::new(1.0, 1.0, vec![], vec![4.0, 2.0]);
        let reduced = model.sopdt().unwrap();

        assert_eq!(reduced, model.fopdt(Method::Skogestad).unwrap());
        assert_ne!(reduced, model.fopdt(Method::General).unwrap());
        assert_relative_eq!(reduced.delay(), 2.0);
        assert_eq!(reduced.poles(), &[5.0]);
    }

    #[test]
    fn test_general_fopdt_is_idempotent() {
        let once = fourth_order().fopdt(Method::General).unwrap();
        let twice = once.fopdt(Method::General).unwrap();

        assert_eq!(twice.delay(), once.delay());
        assert_eq!(twice.poles(), once.poles());
    }

    #[test]
    fn test_no_poles() {
        let model = Model::new(1.0, 0.0, vec![-1.0], vec![]);

        let err = model.fopdt(Method::General).unwrap_err();
        assert!(matches!(err, ReduceError::NoPoles { operation: "fopdt" }));
        assert!(model.fopdt(Method::Skogestad).is_err());
        assert!(model.sopdt().is_err());
    }

    #[test]
    fn test_fopdt_resolves_positive_zero_first() {
        let model = Model::new(1.0, 0.0, vec![5.0], vec![1.0, 10.0, 20.0, 30.0]);
        let reduced = model.fopdt(Method::General).unwrap();

        // Zero 5 cancels pole 1 (gain x5), then 20 + 10 go into the delay
        assert_relative_eq!(reduced.gain(), 5.0);
        assert_relative_eq!(reduced.delay(), 30.0);
        assert_eq!(reduced.poles(), &[30.0]);
        assert!(!reduced.special_rule());
    }

    #[test]
    fn test_sopdt_resolves_positive_zero_first() {
        let model = Model::new(1.0, 0.0, vec![5.0], vec![1.0, 10.0, 20.0, 30.0]);
        let reduced = model.sopdt().unwrap();

        assert_relative_eq!(reduced.gain(), 5.0);
        assert_relative_eq!(reduced.delay(), 5.0);
        assert_eq!(reduced.poles(), &[30.0, 25.0]);
    }

    #[test]
    fn test_sopdt_resolution_can_drop_to_fopdt() {
        // Three poles until the positive zero cancels one of them
        let model = Model::new(1.0, 0.0, vec![5.0], vec![1.0, 10.0, 20.0]);
        let reduced = model.sopdt().unwrap();

        assert_eq!(reduced.order(), 1);
        assert_relative_eq!(reduced.delay(), 5.0);
        assert_eq!(reduced.poles(), &[25.0]);
    }

    #[test]
    fn test_config_is_forwarded_to_resolver() {
        let model = Model::new(1.0, 0.0, vec![1.0], vec![f64::NAN]);
        let config = ReductionConfig {
            unclassified: UnclassifiedPolicy::Reject,
            ..ReductionConfig::default()
        };

        let err = model.fopdt_with(Method::General, &config).unwrap_err();
        assert_eq!(err.error_code(), "UNCLASSIFIED_CANCELLATION");
    }

    #[test]
    fn test_fopdt_with_many_positive_zeros() {
        let zeros: Vec<f64> = (1..=300).map(f64::from).collect();
        let poles: Vec<f64> = (1..=301).map(|i| f64::from(i) + 0.5).collect();
        let model = Model::new(1.0, 0.0, zeros, poles);

        let reduced = model.fopdt(Method::General).unwrap();
        assert_eq!(reduced.order(), 1);
        assert!(reduced.zeros().is_empty());
    }

    #[test]
    fn test_overridden_flag_skips_resolution() {
        let mut model = Model::new(1.0, 0.0, vec![2.0], vec![3.0, 1.0]);
        model.set_special_rule(false);

        // The positive zero is lumped into the delay like any other zero
        let reduced = model.fopdt(Method::General).unwrap();
        assert_relative_eq!(reduced.delay(), 3.0);
        assert_eq!(reduced.gain(), 1.0);
    }
}
