//! Scanner tuning supplied once at start up.

use embassy_time::Duration;
use hyperkey_common::globals;

/// How long a switch must disagree with its confirmed state before the new state is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Debounce {
    /// Accept after this many consecutive scan passes. Only suitable when the scan rate is fixed.
    Passes(u8),
    /// Accept once the new state has been seen for at least this long.
    Elapsed(Duration),
}

impl Debounce {
    pub const fn from_millis(ms: u16) -> Self {
        Self::Elapsed(Duration::from_millis(ms as u64))
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::from_millis(globals::DEBOUNCE_MS_DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    pub debounce: Debounce,
    /// true when the matrix rows are wired to the driven (output) lines.
    pub row_is_output: bool,
    /// Busy wait after selecting a line and before reading; zero skips the wait.
    pub select_settle: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            debounce: Debounce::default(),
            row_is_output: true,
            select_settle: Duration::from_micros(globals::SELECT_SETTLE_US_DEFAULT as u64),
        }
    }
}

impl ScanConfig {
    pub fn debounce(mut self, debounce: Debounce) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn row_is_output(mut self, row_is_output: bool) -> Self {
        self.row_is_output = row_is_output;
        self
    }

    pub fn select_settle(mut self, select_settle: Duration) -> Self {
        self.select_settle = select_settle;
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod test;
