use super::{Suite, Verification};

/// Seed used when none is configured, so that runs are reproducible by default.
pub const DEFAULT_SEED: u64 = 0x5eed_6e0d;

/// Builds a verification run according to provided parameters.
///
/// # Examples
///
/// The following example runs the box suite with a thousand trials in
/// each precision and a custom seed.
///
/// ```
/// use simgeom::VerificationBuilder;
/// use simgeom::verify::Suite;
///
/// let reports = VerificationBuilder::new()
///     .trials(1000)
///     .seed(7)
///     .suite(Suite::BoxLine)
///     .build()
///     .run()
///     .expect("Box line intersection is exact");
///
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[0].tally.failed(), 0);
/// ```
pub struct VerificationBuilder {
    trials: u32,
    seed: u64,
    max_failure_rate: f64,
    suites: Vec<Suite>
}

impl VerificationBuilder {
    pub fn new() -> VerificationBuilder {
        VerificationBuilder {
            trials: 100_000,
            seed: DEFAULT_SEED,
            max_failure_rate: 0.01,
            suites: Vec::new()
        }
    }

    /// Sets the amount of random configurations drawn for each suite and precision.
    pub fn trials(mut self, trials: u32) -> VerificationBuilder {
        self.trials = trials;
        self
    }

    pub fn seed(mut self, seed: u64) -> VerificationBuilder {
        self.seed = seed;
        self
    }

    /// Sets the fraction of trials that may go wrong before a suite is
    /// considered failed, `0.01` unless set.
    pub fn max_failure_rate(mut self, max_failure_rate: f64) -> VerificationBuilder {
        assert!(max_failure_rate >= 0.0, "Failure rate cannot be negative");
        self.max_failure_rate = max_failure_rate;
        self
    }

    /// Adds a suite to run. If no suite is added, all of them are run.
    pub fn suite(mut self, suite: Suite) -> VerificationBuilder {
        if !self.suites.contains(&suite) {
            self.suites.push(suite);
        }
        self
    }

    pub fn build(self) -> Verification {
        let suites = if self.suites.is_empty() {
            Suite::all().to_vec()
        } else {
            self.suites
        };

        Verification::new(
            self.trials,
            self.seed,
            self.max_failure_rate,
            suites
        )
    }
}

impl Default for VerificationBuilder {
    fn default() -> VerificationBuilder {
        VerificationBuilder::new()
    }
}
