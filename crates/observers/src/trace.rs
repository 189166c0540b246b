use tracing::Level;

use beetle_core::{Model, Observer, OptimizationProblem};
use beetle_solvers::optimization::beetle_antennae::{Action, Event, Role};

/// Forwards every beetle antennae event to [`tracing`].
///
/// Successful evaluations are logged at the configured level. Failed
/// evaluations are always logged at `WARN`. The observer never returns an
/// action, so it does not change the search.
///
/// # Example
///
/// ```ignore
/// tracing_subscriber::fmt().with_env_filter("beetle=debug").init();
/// let solution = beetle_antennae::minimize(
///     &model, &problem, Start::Random, &config, &mut rng, TraceObserver::default(),
/// )?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    level: Level,
    probes: bool,
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            probes: true,
        }
    }
}

impl TraceObserver {
    /// Creates an observer that logs successful evaluations at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Skips successful probe evaluations, logging only start and candidates.
    #[must_use]
    pub fn without_probes(self) -> Self {
        Self {
            probes: false,
            ..self
        }
    }

    /// Returns the level used for successful evaluations.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

// Callsite metadata is static, so each level needs its own macro expansion.
macro_rules! event_at {
    ($level:expr, $($fields:tt)+) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::error!($($fields)+);
        } else if level == Level::WARN {
            tracing::warn!($($fields)+);
        } else if level == Level::INFO {
            tracing::info!($($fields)+);
        } else if level == Level::DEBUG {
            tracing::debug!($($fields)+);
        } else {
            tracing::trace!($($fields)+);
        }
    }};
}

impl<M, P, const N: usize> Observer<Event<'_, M, P, N>, Action> for TraceObserver
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P, N>) -> Option<Action> {
        let role = role_name(event.role());
        let best = event.best().map_or(f64::NAN, |point| point.objective);

        match event {
            Event::Evaluated { point, .. } => {
                if self.probes || !event.role().is_probe() {
                    event_at!(
                        self.level,
                        role,
                        x = ?point.x,
                        objective = point.objective,
                        best,
                        "evaluated"
                    );
                }
            }
            Event::ModelFailed { x, error, .. } => {
                tracing::warn!(role, x = ?x, best, %error, "model failed");
            }
            Event::ProblemFailed { x, error, .. } => {
                tracing::warn!(role, x = ?x, best, %error, "problem failed");
            }
        }

        None
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Start => "start",
        Role::LeftProbe => "left_probe",
        Role::RightProbe => "right_probe",
        Role::Candidate => "candidate",
    }
}
