use super::Config;

/// Places the probes and the next candidate for one iteration.
///
/// The solver owns sampling, clamping, evaluation, acceptance, and step
/// decay. An update rule only decides where to look. Positions returned here
/// are unclamped; the solver projects them onto the problem bounds.
///
/// [`Antennae`] is the standard rule. Other rules can be swapped in with
/// [`Beetle::with_rule`](super::Beetle::with_rule).
pub trait UpdateRule<const N: usize> {
    /// Returns the `[left, right]` probe positions around `x`.
    fn probes(&self, x: &[f64; N], dir: &[f64; N], step: f64) -> [[f64; N]; 2];

    /// Returns the next candidate position.
    ///
    /// `left` and `right` are the probe scores (lower is better).
    fn advance(
        &self,
        x: &[f64; N],
        dir: &[f64; N],
        step: f64,
        left: f64,
        right: f64,
    ) -> [f64; N];
}

/// The standard antenna-sensing rule.
///
/// Probes sit at `x ± (d0 / 2) · dir` with `d0 = step / c`, and the beetle
/// moves a full step along `dir` toward the lower-scoring antenna:
///
/// ```text
/// candidate = x - step · sign(f(left) - f(right)) · dir
/// ```
///
/// Tied (or incomparable) probes give `sign = 0`, leaving `x` unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antennae {
    sensing_divisor: f64,
}

impl Antennae {
    /// Creates the rule with the given sensing divisor `c`.
    ///
    /// The divisor is expected to be finite and positive, which
    /// [`Config`] guarantees.
    #[must_use]
    pub fn new(sensing_divisor: f64) -> Self {
        Self { sensing_divisor }
    }

    /// Returns the probe separation `d0` for a step size.
    #[must_use]
    pub fn sensing_radius(&self, step: f64) -> f64 {
        step / self.sensing_divisor
    }
}

impl From<&Config> for Antennae {
    fn from(config: &Config) -> Self {
        Self::new(config.sensing_divisor())
    }
}

impl<const N: usize> UpdateRule<N> for Antennae {
    fn probes(&self, x: &[f64; N], dir: &[f64; N], step: f64) -> [[f64; N]; 2] {
        let half = 0.5 * self.sensing_radius(step);
        let left = std::array::from_fn(|i| x[i] + half * dir[i]);
        let right = std::array::from_fn(|i| x[i] - half * dir[i]);
        [left, right]
    }

    fn advance(
        &self,
        x: &[f64; N],
        dir: &[f64; N],
        step: f64,
        left: f64,
        right: f64,
    ) -> [f64; N] {
        let s = sign(left - right);
        std::array::from_fn(|i| x[i] - step * s * dir[i])
    }
}

/// Sign with `sign(0) = 0`; NaN also maps to zero.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
