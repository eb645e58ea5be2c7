//! Clock collaborator
//!
//! History entries are keyed by a locale-formatted calendar day. Only the
//! day key is ever compared, and only by string equality, so the key is
//! opaque past this module.

use chrono::Local;

/// Day-granular clock. `today` returns the current calendar-day key.
pub trait Clock {
    fn today(&self) -> String;
}

/// Real clock: local date rendered as `M/D/YYYY` (e.g. `6/1/2024`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().format("%-m/%-d/%Y").to_string()
    }
}

/// Test clock pinned to a fixed day key.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(day: &str) -> Self {
        Self(day.to_string())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_day_key_shape() {
        let key = SystemClock.today();
        // M/D/YYYY with no zero padding
        let parts: Vec<&str> = key.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert!(!parts[0].starts_with('0'));
        assert!(!parts[1].starts_with('0'));
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new("6/1/2024");
        assert_eq!(clock.today(), "6/1/2024");
        assert_eq!(clock.today(), "6/1/2024");
    }
}
