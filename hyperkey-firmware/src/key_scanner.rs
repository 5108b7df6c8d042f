use embassy_time::{block_for, Instant};
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;

use crate::{
    config::{Debounce, ScanConfig},
    layout::{KeyId, KeyLayout, LayoutError},
    warn,
};

/// Keys that became pressed during one scan pass, in row-major order.
pub type KeyChanges<const N: usize> = Vec<KeyId, N>;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: usize,
    col: usize,
}
impl ScanKey {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.col
    }
}

/// Debounce bookkeeping for one switch.
#[derive(Debug, Clone, Copy)]
struct KeySwitch {
    /// Contact state seen by the latest pass.
    raw: bool,
    /// Confirmed contact state.
    debounced: bool,
    /// Consecutive passes that `raw` has disagreed with `debounced`; 0 when they agree.
    candidate: u8,
    /// When the current disagreement was first seen.
    since: Instant,
}

impl KeySwitch {
    const fn new() -> Self {
        Self {
            raw: false,
            debounced: false,
            candidate: 0,
            since: Instant::from_ticks(0),
        }
    }

    fn observe(&mut self, raw: bool, now: Instant) {
        self.raw = raw;
        if raw == self.debounced {
            self.candidate = 0;
        } else {
            if self.candidate == 0 {
                self.since = now;
            }
            self.candidate = self.candidate.saturating_add(1);
        }
    }

    fn is_confirmed(&self, now: Instant, debounce: Debounce) -> bool {
        self.candidate != 0
            && match debounce {
                Debounce::Passes(n) => self.candidate >= n,
                Debounce::Elapsed(window) => now
                    .checked_duration_since(self.since)
                    .is_some_and(|held| held >= window),
            }
    }

    fn commit(&mut self) {
        self.candidate = 0;
        self.debounced = self.raw;
    }
}

/// Scans a row/column key matrix and reports debounced key presses.
///
/// Output lines are driven low one at a time and the input lines (pulled up) are read; a low
/// input means the switch between the two lines is closed. Release transitions are tracked so
/// that a key can be pressed again but are never reported.
pub struct MatrixScanner<
    'l,
    I: InputPin,
    O: OutputPin,
    const INPUT_N: usize,
    const OUTPUT_N: usize,
    const CHANGES_N: usize,
> {
    input_pins: [I; INPUT_N],
    output_pins: [O; OUTPUT_N],
    layout: KeyLayout<'l>,
    config: ScanConfig,

    /// Switch state indexed by `[output][input]`.
    state: [[KeySwitch; INPUT_N]; OUTPUT_N],
}

impl<
        'l,
        I: InputPin,
        O: OutputPin,
        const INPUT_N: usize,
        const OUTPUT_N: usize,
        const CHANGES_N: usize,
    > MatrixScanner<'l, I, O, INPUT_N, OUTPUT_N, CHANGES_N>
{
    pub fn new(
        input_pins: [I; INPUT_N],
        mut output_pins: [O; OUTPUT_N],
        layout: KeyLayout<'l>,
        config: ScanConfig,
    ) -> Result<Self, LayoutError> {
        let (rows, cols) = if config.row_is_output {
            (OUTPUT_N, INPUT_N)
        } else {
            (INPUT_N, OUTPUT_N)
        };
        if layout.rows() != rows || layout.cols() != cols {
            return Err(LayoutError::RowColMismatch {
                rows: layout.rows(),
                cols: layout.cols(),
            });
        }

        for out in output_pins.iter_mut() {
            let _ = out.set_high();
        }

        Ok(Self {
            input_pins,
            output_pins,
            layout,
            config,
            state: [[KeySwitch::new(); INPUT_N]; OUTPUT_N],
        })
    }

    /// Run one scan pass and return the keys that became pressed during it.
    ///
    /// If more than `CHANGES_N` presses are confirmed in one pass the extra ones stay pending
    /// and are returned by the next call.
    pub fn scan_for_changes(&mut self) -> KeyChanges<CHANGES_N> {
        let now = Instant::now();
        self.sample(now);
        self.settle(now)
    }

    /// Debounced state of the switch at `row`, `col`.
    pub fn is_pressed(&self, row: usize, col: usize) -> bool {
        self.switch_index(ScanKey::new(row, col))
            .and_then(|(o, i)| self.state.get(o).and_then(|s| s.get(i)))
            .is_some_and(|s| s.debounced)
    }

    fn switch_index(&self, key: ScanKey) -> Option<(usize, usize)> {
        let (o, i) = if self.config.row_is_output {
            (key.row(), key.column())
        } else {
            (key.column(), key.row())
        };
        (o < OUTPUT_N && i < INPUT_N).then_some((o, i))
    }

    fn sample(&mut self, now: Instant) {
        let settle = self.config.select_settle;
        for (op, switches) in self.output_pins.iter_mut().zip(self.state.iter_mut()) {
            let _ = op.set_low();
            if settle.as_ticks() != 0 {
                block_for(settle);
            }

            for (ip, s) in self.input_pins.iter_mut().zip(switches.iter_mut()) {
                s.observe(ip.is_low().unwrap_or(false), now);
            }

            let _ = op.set_high();
        }
    }

    fn settle(&mut self, now: Instant) -> KeyChanges<CHANGES_N> {
        let mut changes = KeyChanges::new();
        let debounce = self.config.debounce;

        for row in 0..self.layout.rows() {
            for col in 0..self.layout.cols() {
                let Some((o, i)) = self.switch_index(ScanKey::new(row, col)) else {
                    continue;
                };
                let s = &mut self.state[o][i];
                if !s.is_confirmed(now, debounce) {
                    continue;
                }

                // confirmed means raw disagrees with debounced, so raw is a press
                if s.raw {
                    if let Some(key) = self.layout.key(row, col) {
                        if changes.push(key).is_err() {
                            warn!("Too many key changes; deferring key {}", key);
                            continue;
                        }
                    }
                }

                s.commit();
            }
        }

        changes
    }
}

#[cfg(test)]
#[path = "key_scanner_test.rs"]
mod test;
