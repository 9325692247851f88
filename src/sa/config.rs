//! SA configuration.

use crate::error::TourError;

pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1000.0;
pub const DEFAULT_COOLING_RATE: f64 = 0.9;
pub const DEFAULT_ITERATIONS_PER_TEMPERATURE: usize = 600;
pub const DEFAULT_SEED: u64 = 1;

/// Lowest initial temperature the token parser and `validate` accept.
pub const MIN_INITIAL_TEMPERATURE: f64 = 10.0;

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: after every `iterations_per_temperature` moves
/// the temperature is multiplied by `cooling_rate`, until it drops to
/// `min_temperature` or below.
///
/// # Examples
///
/// ```
/// use u_tour::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.95)
///     .with_iterations_per_temperature(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of moves at each temperature level (`K`).
    pub iterations_per_temperature: usize,

    /// `K` in the acceptance test: a worsening move of size `delta` is
    /// accepted with probability `exp(-delta / (K * T))`. `None` uses
    /// `iterations_per_temperature`; a fractional `K` read from a token is
    /// kept here unrounded.
    pub acceptance_scale: Option<f64>,

    /// The run stops once the temperature is at or below this.
    pub min_temperature: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Seed of the deterministic random generator.
    pub seed: u64,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling_rate: DEFAULT_COOLING_RATE,
            iterations_per_temperature: DEFAULT_ITERATIONS_PER_TEMPERATURE,
            acceptance_scale: None,
            min_temperature: 1.0,
            max_iterations: 0,
            seed: DEFAULT_SEED,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_acceptance_scale(mut self, k: f64) -> Self {
        self.acceptance_scale = Some(k);
        self
    }

    /// Effective `K` of the acceptance test.
    pub fn acceptance_scale(&self) -> f64 {
        self.acceptance_scale
            .unwrap_or(self.iterations_per_temperature as f64)
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of temperature levels a full run goes through, or 0 for an
    /// invalid configuration.
    pub fn temperature_levels(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut t = self.initial_temperature;
        let mut levels = 0;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            levels += 1;
        }
        levels
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TourError> {
        let invalid = |name, reason: String| Err(TourError::InvalidParameter { name, reason });

        if let Err(reason) = check_initial_temperature(self.initial_temperature) {
            return invalid("initial_temperature", reason);
        }
        if let Err(reason) = check_cooling_rate(self.cooling_rate) {
            return invalid("cooling_rate", reason);
        }
        if self.iterations_per_temperature == 0 {
            return invalid("iterations_per_temperature", "must be positive".into());
        }
        if let Some(k) = self.acceptance_scale {
            if !(k.is_finite() && k > 0.0) {
                return invalid(
                    "acceptance_scale",
                    format!("must be finite and positive, got {k}"),
                );
            }
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return invalid("min_temperature", "must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid(
                "min_temperature",
                "must be less than initial_temperature".into(),
            );
        }
        Ok(())
    }
}

pub(crate) fn check_initial_temperature(t: f64) -> Result<f64, String> {
    if t.is_finite() && t >= MIN_INITIAL_TEMPERATURE {
        Ok(t)
    } else {
        Err(format!("must be finite and at least {MIN_INITIAL_TEMPERATURE}, got {t}"))
    }
}

pub(crate) fn check_cooling_rate(rate: f64) -> Result<f64, String> {
    if rate > 0.0 && rate < 1.0 {
        Ok(rate)
    } else {
        Err(format!("must be in (0, 1), got {rate}"))
    }
}

/// Parses `K` as a positive real. Callers round it up for the move count,
/// matching a loop that runs while the counter is below `K`.
pub(crate) fn parse_iterations(token: &str) -> Result<f64, String> {
    let k: f64 = token.parse().map_err(|_| format!("not a number: {token:?}"))?;
    if k.is_finite() && k > 0.0 {
        Ok(k)
    } else {
        Err(format!("must be positive, got {k}"))
    }
}

pub(crate) fn parse_f64(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("not a number: {token:?}"))
}
