//! A configured handle over the time- and format-dependent helpers.
//!
//! Most helpers are plain functions and need no setup. [`Toolkit`] exists for
//! the few that read ambient state (the clock, the configured date format),
//! so a binding layer can hold one value and tests can pin the clock.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone};
use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::{date, text};

/// Helpers bound to a [`Config`] and a [`Clock`].
///
/// ```rust
/// use bindkit_core::{Config, FixedClock, Toolkit};
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use std::sync::Arc;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// let toolkit = Toolkit::with_clock(Config::default(), Arc::new(FixedClock(now)));
///
/// assert_eq!(toolkit.time_ago(&(now - TimeDelta::hours(3))), "3 hours ago");
/// ```
#[derive(Clone)]
pub struct Toolkit {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Toolkit {
    /// Create a toolkit reading the system clock.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a toolkit with an explicit clock.
    #[must_use]
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Format `date` with the configured date format.
    #[must_use]
    pub fn format_date<D: Datelike>(&self, date: &D) -> String {
        date::format_date(date, &self.config.format.date_format)
    }

    /// Relative phrase for `date` against this toolkit's clock.
    ///
    /// Dates older than 30 days fall back to the configured date format.
    #[must_use]
    pub fn time_ago<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        date::time_ago_with_format(date, self.clock.now(), &self.config.format.date_format)
    }

    /// A fresh short id from the thread-local RNG.
    ///
    /// Use [`Toolkit::generate_id_with`] for reproducible ids.
    #[must_use]
    pub fn generate_id(&self) -> String {
        text::generate_id()
    }

    /// A short id drawn from `rng`.
    ///
    /// The id counterpart of pinning the clock: a seeded RNG gives the same
    /// id on every run.
    ///
    /// ```rust
    /// use bindkit_core::Toolkit;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let toolkit = Toolkit::default();
    /// let a = toolkit.generate_id_with(&mut StdRng::seed_from_u64(7));
    /// let b = toolkit.generate_id_with(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn generate_id_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        text::generate_id_with(rng)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("config", &self.config)
            .field("now", &self.clock.now())
            .finish()
    }
}
