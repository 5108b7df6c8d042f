extern crate std;

use core::{cell::RefCell, task::Waker};
use embassy_time_driver::Driver;
use std::time::SystemTime;

struct TestTimeDriver;

impl Driver for TestTimeDriver {
    fn now(&self) -> u64 {
        NOW.with_borrow(|now| {
            if *now == 0 {
                SystemTime::now()
                    .duration_since(SystemTime::UNIX_EPOCH)
                    .unwrap()
                    .as_micros() as u64
            } else {
                *now
            }
        })
    }

    fn schedule_wake(&self, at: u64, waker: &Waker) {
        NOW.with_borrow_mut(|now| {
            if *now != 0 && at > *now {
                *now = at;
            }
        });

        waker.wake_by_ref();
    }
}

std::thread_local! {
    /// Frozen time in ticks; 0 follows the system clock.
    static NOW: RefCell<u64> = const {RefCell::new(0)};
}

embassy_time_driver::time_driver_impl!(static TIME_DRIVER: TestTimeDriver = TestTimeDriver);

/// Freeze the clock for the current test thread at `t` ticks.
pub fn set_time(t: u64) {
    NOW.with_borrow_mut(|now| *now = t);
}

/// Move the frozen clock forward by `t` ticks.
pub fn advance_time(t: u64) {
    NOW.with_borrow_mut(|now| *now += t);
}
