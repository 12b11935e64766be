//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum time between landing and the next departure (minutes).
    /// Connections tighter than this are rejected.
    pub min_layover_mins: i64,

    /// Maximum time between landing and the next departure (minutes).
    /// Connections longer than this are rejected, and stop the scan of the
    /// remaining departures at that airport.
    pub max_layover_mins: i64,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover_mins: i64, max_layover_mins: i64) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
        }
    }

    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Returns true if a connection with this layover may be taken.
    ///
    /// Both bounds are inclusive.
    pub fn accepts_layover(&self, layover: Duration) -> bool {
        layover >= self.min_layover() && layover <= self.max_layover()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,  // 1 hour
            max_layover_mins: 360, // 6 hours
        }
    }
}
