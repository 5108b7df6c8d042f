#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_rp::{
    bind_interrupts,
    gpio::{Input, Level, Output, Pull},
    peripherals::USB,
    usb::{Driver, InterruptHandler},
};
use embassy_time::Duration;
use hyperkey_firmware::{
    combo_map::HYPER_COMBOS,
    config::ScanConfig,
    dispatch::Dispatcher,
    key_reporter::Reporter,
    key_scanner::MatrixScanner,
    layout::{KeyId, KeyLayout},
    usb::{Configurator, DeviceInfo, State, UsbBuffers},
};
use hyperkey_macros::matrix_layout;
use static_cell::StaticCell;

// ---------------- User Config ------------------
const LAYOUT: &[[KeyId; COL_COUNT]] = matrix_layout!();

const DEVICE: DeviceInfo = DeviceInfo {
    vendor_id: 0x6e0f,
    product_id: 0x0101,
    manufacturer: "Hyperkey",
    product: "hyperpad",
    serial_number: "hk:0001",
    max_power: 100,
};

// Key switch configuration
const ROW_COUNT: usize = 3;
const COL_COUNT: usize = 4;
const SELECT_SETTLE_US: u64 = 2;
const CHANGES_N: usize = 8;

macro_rules! config_pins {
    (peripherals: $p:ident) => {{
        let input_pins = [
            Input::new($p.PIN_7, Pull::Up),
            Input::new($p.PIN_8, Pull::Up),
            Input::new($p.PIN_9, Pull::Up),
            Input::new($p.PIN_10, Pull::Up),
        ];
        let output_pins = [
            Output::new($p.PIN_4, Level::High),
            Output::new($p.PIN_5, Level::High),
            Output::new($p.PIN_6, Level::High),
        ];
        (input_pins, output_pins)
    }};
}
// ----------- End of user config ----------------

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

static USB_BUFFERS: StaticCell<UsbBuffers> = StaticCell::new();
static USB_CONFIG: StaticCell<Configurator<'static>> = StaticCell::new();
static KEYBOARD_STATE: StaticCell<State<'static>> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let driver = Driver::new(p.USB, Irqs);

    let (input_pins, output_pins) = config_pins!(peripherals: p);
    let led = Output::new(p.PIN_25, Level::Low);

    let usb_buffers: &'static mut UsbBuffers = USB_BUFFERS.init(UsbBuffers::default());
    let usb_config: &'static mut Configurator<'static> = USB_CONFIG.init(DEVICE.usb_configurator());
    let keyboard_state: &'static mut State<'static> = KEYBOARD_STATE.init(State::new());

    let mut usb_builder = usb_config.usb_builder(driver, usb_buffers).unwrap();
    let hid_writer = usb_config.add_keyboard_iface(&mut usb_builder, keyboard_state);
    let mut usb = usb_builder.build();

    let layout = KeyLayout::from_rows(LAYOUT).unwrap();
    let config = ScanConfig::default().select_settle(Duration::from_micros(SELECT_SETTLE_US));
    let mut scanner = MatrixScanner::<_, _, COL_COUNT, ROW_COUNT, CHANGES_N>::new(
        input_pins,
        output_pins,
        layout,
        config,
    )
    .unwrap();

    let mut dispatcher = Dispatcher::new(HYPER_COMBOS, Reporter::new(hid_writer), led);

    #[cfg(feature = "defmt")]
    defmt::info!("hyperpad ready");

    join(usb.run(), dispatcher.run(&mut scanner)).await;
}
