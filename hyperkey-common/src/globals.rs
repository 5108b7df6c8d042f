//! Default tuning values for the scanner.

/// Time a switch must hold a new contact state before the change is accepted.
pub const DEBOUNCE_MS_DEFAULT: u16 = 5;

/// Time to let a freshly selected row line settle before reading the columns.
pub const SELECT_SETTLE_US_DEFAULT: u16 = 0;
