use thiserror::Error;

/// Configuration for the beetle antennae solver.
///
/// | parameter         | meaning                                      | default |
/// |-------------------|----------------------------------------------|---------|
/// | `eta`             | step decay factor applied every iteration    | `0.95`  |
/// | `sensing_divisor` | `c` in `d0 = step / c`, the probe separation | `5`     |
/// | `eps`             | floor added to the direction norm            | `1e-8`  |
/// | `step`            | initial step size                            | `1`     |
/// | `max_iters`       | iterations run by the drivers                | `100`   |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eta: f64,
    sensing_divisor: f64,
    eps: f64,
    step: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a beetle antennae solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eta must be finite and strictly between 0 and 1")]
    Eta,

    #[error("sensing divisor must be finite and positive")]
    SensingDivisor,

    #[error("eps must be finite and non-negative")]
    Eps,

    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.95, 5.0, 1e-8, 1.0, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `eta` is outside `(0, 1)`, if `sensing_divisor` or
    /// `step` is not positive, if `eps` is negative, or if any value is
    /// non-finite.
    pub fn new(
        eta: f64,
        sensing_divisor: f64,
        eps: f64,
        step: f64,
        max_iters: usize,
    ) -> Result<Self, ConfigError> {
        if !eta.is_finite() || eta <= 0.0 || eta >= 1.0 {
            return Err(ConfigError::Eta);
        }
        if !sensing_divisor.is_finite() || sensing_divisor <= 0.0 {
            return Err(ConfigError::SensingDivisor);
        }
        if !eps.is_finite() || eps < 0.0 {
            return Err(ConfigError::Eps);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            eta,
            sensing_divisor,
            eps,
            step,
            max_iters,
        })
    }

    /// Returns a copy with a different step decay factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `eta` is non-finite or outside `(0, 1)`.
    pub fn with_eta(self, eta: f64) -> Result<Self, ConfigError> {
        Self::new(eta, self.sensing_divisor, self.eps, self.step, self.max_iters)
    }

    /// Returns a copy with a different direction norm floor.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is non-finite or negative.
    pub fn with_eps(self, eps: f64) -> Result<Self, ConfigError> {
        Self::new(self.eta, self.sensing_divisor, eps, self.step, self.max_iters)
    }

    /// Returns a copy with a different initial step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite or not positive.
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        Self::new(self.eta, self.sensing_divisor, self.eps, step, self.max_iters)
    }

    /// Returns a copy with a different sensing divisor.
    ///
    /// # Errors
    ///
    /// Returns an error if `sensing_divisor` is non-finite or not positive.
    pub fn with_sensing_divisor(self, sensing_divisor: f64) -> Result<Self, ConfigError> {
        Self::new(self.eta, sensing_divisor, self.eps, self.step, self.max_iters)
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the step decay factor.
    #[must_use]
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Returns the ratio of step size to probe separation.
    #[must_use]
    pub fn sensing_divisor(&self) -> f64 {
        self.sensing_divisor
    }

    /// Returns the floor added to the direction norm before normalizing.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the initial step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of iterations the drivers run.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config.eta(), 0.95);
        assert_eq!(config.sensing_divisor(), 5.0);
        assert_eq!(config.eps(), 1e-8);
        assert_eq!(config.step(), 1.0);
        assert_eq!(config.max_iters(), 100);
    }

    #[test]
    fn eta_must_be_inside_unit_interval() {
        for eta in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert_eq!(Config::new(eta, 5.0, 1e-8, 1.0, 10), Err(ConfigError::Eta));
        }
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert_eq!(
            Config::new(0.9, 0.0, 1e-8, 1.0, 10),
            Err(ConfigError::SensingDivisor)
        );
        assert_eq!(Config::new(0.9, 5.0, -1e-8, 1.0, 10), Err(ConfigError::Eps));
        assert_eq!(
            Config::new(0.9, 5.0, 1e-8, f64::INFINITY, 10),
            Err(ConfigError::Step)
        );
    }

    #[test]
    fn zero_eps_is_allowed() {
        assert!(Config::new(0.9, 5.0, 0.0, 1.0, 10).is_ok());
    }

    #[test]
    fn builders_revalidate() {
        let config = Config::default().with_step(30.0).unwrap().with_max_iters(300);

        assert_eq!(config.step(), 30.0);
        assert_eq!(config.max_iters(), 300);
        assert_eq!(
            config.with_sensing_divisor(-1.0),
            Err(ConfigError::SensingDivisor)
        );
    }

    #[test]
    fn eta_and_eps_setters_revalidate() {
        let config = Config::default().with_eta(0.5).unwrap().with_eps(0.0).unwrap();

        assert_eq!(config.eta(), 0.5);
        assert_eq!(config.eps(), 0.0);
        assert_eq!(config.step(), 1.0);
        assert_eq!(config.with_eta(1.0), Err(ConfigError::Eta));
        assert_eq!(config.with_eps(f64::NAN), Err(ConfigError::Eps));
    }
}
