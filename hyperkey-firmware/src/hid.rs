use embassy_usb::driver::{EndpointError, EndpointIn};

/// Writes input reports of at most `N` bytes to an interrupt IN endpoint.
pub struct HidWriter<E: EndpointIn, const N: usize> {
    ep_in: E,
}

impl<E: EndpointIn, const N: usize> HidWriter<E, N> {
    pub fn new(ep_in: E) -> Self {
        Self { ep_in }
    }

    /// Writes `report` to its interrupt endpoint.
    pub async fn write(&mut self, report: &[u8]) -> Result<(), EndpointError> {
        if report.len() > N {
            return Err(EndpointError::BufferOverflow);
        }

        let max_packet_size = usize::from(self.ep_in.info().max_packet_size);
        let zlp_needed = report.len() < N && report.len().is_multiple_of(max_packet_size);
        for chunk in report.chunks(max_packet_size) {
            self.ep_in.write(chunk).await?;
        }

        if zlp_needed {
            self.ep_in.write(&[]).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "hid_test.rs"]
mod test;
