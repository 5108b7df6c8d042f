use embassy_usb::driver::EndpointIn;
use hyperkey_common::keycodes::key_range;

use crate::{add_key_bit, hid::HidWriter, warn};

/// Report id, modifier byte and key bitmap.
pub const KEYBOARD_REPORT_SIZE: usize = crate::KEY_BITS_SIZE + 2;
pub const KEYBOARD_REPORT_ID: u8 = 6;

/// Something that can deliver a key combination to the host.
#[allow(async_fn_in_trait)]
pub trait ComboSender {
    /// Press every code in `codes` at once, then release them all.
    async fn send_combo(&mut self, codes: &[u8]);
}

/// Sends combinations as NKRO keyboard reports.
pub struct Reporter<E: EndpointIn> {
    hid_writer: HidWriter<E, KEYBOARD_REPORT_SIZE>,
    keyboard_report: [u8; KEYBOARD_REPORT_SIZE],
}

impl<E: EndpointIn> Reporter<E> {
    pub fn new(hid_writer: HidWriter<E, KEYBOARD_REPORT_SIZE>) -> Self {
        let mut keyboard_report = [0; KEYBOARD_REPORT_SIZE];
        keyboard_report[0] = KEYBOARD_REPORT_ID;
        Self {
            hid_writer,
            keyboard_report,
        }
    }

    async fn write_keyboard_report(&mut self) {
        if let Err(e) = self.hid_writer.write(&self.keyboard_report).await {
            warn!("Failed to send report: {:?}", e);
        }
    }

    fn add_key(&mut self, key: u8) {
        if key_range::is_modifier(key) {
            self.keyboard_report[1] |= key_range::modifier_bit(key);
        } else if key >= key_range::BASIC_MIN {
            add_key_bit(&mut self.keyboard_report[2..], key);
        } else {
            warn!("Ignoring key code {}", key);
        }
    }

    fn clear(&mut self) {
        self.keyboard_report[1..].fill(0);
    }
}

impl<E: EndpointIn> ComboSender for Reporter<E> {
    async fn send_combo(&mut self, codes: &[u8]) {
        for &code in codes {
            self.add_key(code);
        }
        self.write_keyboard_report().await;

        self.clear();
        self.write_keyboard_report().await;
    }
}

#[cfg(test)]
#[path = "key_reporter_test.rs"]
mod test;
