//! Engine configuration.

/// Salary below which a salary counts as low.
pub const SALARY_LOW: f64 = 2000.0;

/// Salary threshold separating modest from medium/high expectations.
pub const SALARY_MED: f64 = 4000.0;

/// Default kill-switch threshold for rule firings in one run.
pub const DEFAULT_MAX_ACTIVATIONS: usize = 500;

/// Immutable configuration passed into every run.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvisorConfig {
    /// Upper bound of the low salary band (exclusive).
    pub salary_low: f64,
    /// Upper bound of the medium salary band (exclusive).
    pub salary_med: f64,
    /// Maximum rule firings before the run is aborted.
    pub max_activations: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            salary_low: SALARY_LOW,
            salary_med: SALARY_MED,
            max_activations: DEFAULT_MAX_ACTIVATIONS,
        }
    }
}

impl AdvisorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the low salary threshold.
    #[must_use]
    pub fn with_salary_low(mut self, salary_low: f64) -> Self {
        self.salary_low = salary_low;
        self
    }

    /// Builder method to set the medium salary threshold.
    #[must_use]
    pub fn with_salary_med(mut self, salary_med: f64) -> Self {
        self.salary_med = salary_med;
        self
    }

    /// Builder method to set the kill-switch threshold.
    #[must_use]
    pub fn with_max_activations(mut self, max: usize) -> Self {
        self.max_activations = max;
        self
    }

    /// Classifies a salary expectation against the configured thresholds.
    #[must_use]
    pub fn salary_band(&self, salary: f64) -> SalaryBand {
        if salary < self.salary_low {
            SalaryBand::Low
        } else if salary < self.salary_med {
            SalaryBand::Medium
        } else {
            SalaryBand::High
        }
    }
}

/// Coarse salary classification, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalaryBand {
    /// Below `salary_low`.
    Low,
    /// At least `salary_low`, below `salary_med`.
    Medium,
    /// At least `salary_med`.
    High,
}

impl std::fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}
