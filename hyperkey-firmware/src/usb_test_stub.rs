extern crate std;
use core::cell::Cell;
use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel};
use embassy_usb::driver::{
    Endpoint, EndpointAddress, EndpointError, EndpointIn, EndpointInfo, EndpointType,
};
use std::rc::Rc;
use std::vec::Vec;

#[derive(Clone)]
pub struct MessageChannel(Rc<Channel<NoopRawMutex, Vec<u8>, 32>>);
impl MessageChannel {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Everything written so far, oldest first.
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut msgs = Vec::new();
        while let Ok(msg) = self.0.try_receive() {
            msgs.push(msg);
        }
        msgs
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self(Rc::new(Channel::new()))
    }
}

pub struct MyEndpointIn {
    pub messages: MessageChannel,
    pub info: EndpointInfo,
    /// Number of upcoming writes to reject with [EndpointError::Disabled].
    pub fail_writes: Rc<Cell<usize>>,
}
impl MyEndpointIn {
    pub fn with_max_packet_size(max_packet_size: u16) -> Self {
        let mut ep = Self::default();
        ep.info.max_packet_size = max_packet_size;
        ep
    }
}
impl Endpoint for MyEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}
impl EndpointIn for MyEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        let fails = self.fail_writes.get();
        if fails != 0 {
            self.fail_writes.set(fails - 1);
            return Err(EndpointError::Disabled);
        }
        self.messages.0.send(Vec::from(buf)).await;
        Ok(())
    }
}
impl Default for MyEndpointIn {
    fn default() -> Self {
        Self {
            messages: MessageChannel::default(),
            info: EndpointInfo {
                addr: EndpointAddress::from(0x81),
                ep_type: EndpointType::Interrupt,
                max_packet_size: 64,
                interval_ms: 1,
            },
            fail_writes: Rc::new(Cell::new(0)),
        }
    }
}
