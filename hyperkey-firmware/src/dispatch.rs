use embassy_futures::yield_now;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::{
    combo_map::ComboMap, debug, key_reporter::ComboSender, key_scanner::MatrixScanner,
    layout::KeyId, warn,
};

/// Turns newly pressed keys into combinations and flashes a status LED while sending them.
pub struct Dispatcher<'c, S: ComboSender, L: OutputPin> {
    combos: ComboMap<'c>,
    sender: S,
    led: L,
}

impl<'c, S: ComboSender, L: OutputPin> Dispatcher<'c, S, L> {
    pub fn new(combos: ComboMap<'c>, sender: S, mut led: L) -> Self {
        if let Some(key) = combos.find_duplicate() {
            warn!("Key {} has more than one combination; the first is used", key);
        }
        let _ = led.set_low();
        Self {
            combos,
            sender,
            led,
        }
    }

    /// Send the combination for each of `keys` in order; returns how many were sent.
    ///
    /// The LED is lit for the duration when `keys` is not empty and is always left off.
    pub async fn dispatch(&mut self, keys: &[KeyId]) -> usize {
        if !keys.is_empty() {
            let _ = self.led.set_high();
        }

        let mut sent = 0;
        for &key in keys {
            match self.combos.combo(key) {
                Some(codes) => {
                    debug!("key {} pressed", key);
                    self.sender.send_combo(codes).await;
                    sent += 1;
                }
                None => debug!("key {} has no combination", key),
            }
        }

        let _ = self.led.set_low();
        sent
    }

    /// Poll `scanner` forever, dispatching every press it reports.
    pub async fn run<I, O, const INPUT_N: usize, const OUTPUT_N: usize, const CHANGES_N: usize>(
        &mut self,
        scanner: &mut MatrixScanner<'_, I, O, INPUT_N, OUTPUT_N, CHANGES_N>,
    ) -> !
    where
        I: InputPin,
        O: OutputPin,
    {
        loop {
            let keys = scanner.scan_for_changes();
            self.dispatch(&keys).await;
            yield_now().await;
        }
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod test;
