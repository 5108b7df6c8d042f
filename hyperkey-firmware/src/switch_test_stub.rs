extern crate alloc;
extern crate std;

use alloc::vec;
use core::cell::{Cell, RefCell};
use embedded_hal::digital::{Error, ErrorType, InputPin, OutputPin};
use std::rc::Rc;
use std::vec::Vec;

pub trait Observer {
    fn update(&self, pin: Pin);
}

#[derive(Debug)]
struct KeyMatrixInner {
    /// Indexed `[input * outputs.len() + output]`.
    switches: Vec<bool>,
    inputs: Vec<Pin>,
    outputs: Vec<Pin>,
}

/// Simulated switch matrix. Closing a switch pulls its input line low whenever the output line
/// it sits on is driven low.
#[derive(Clone)]
pub struct KeyMatrix {
    inner: Rc<RefCell<KeyMatrixInner>>,
}
impl KeyMatrix {
    pub fn new(inputs: Vec<Pin>, outputs: Vec<Pin>) -> Self {
        for i in inputs.iter() {
            i.set_level(true);
        }
        let me = Self {
            inner: Rc::new(RefCell::new(KeyMatrixInner {
                switches: vec![false; inputs.len() * outputs.len()],
                inputs,
                outputs,
            })),
        };

        for o in me.inner.borrow().outputs.iter() {
            o.add_observer(Rc::new(me.clone()))
        }

        me
    }

    pub fn down(&self, ipin: usize, opin: usize) {
        self.set_switch(ipin, opin, true);
    }

    pub fn up(&self, ipin: usize, opin: usize) {
        self.set_switch(ipin, opin, false);
    }

    pub fn set_switch(&self, ipin: usize, opin: usize, is_down: bool) {
        {
            let mut inner = self.inner.borrow_mut();
            let idx = ipin * inner.outputs.len() + opin;
            inner.switches[idx] = is_down;
        }
        self.refresh();
    }

    fn refresh(&self) {
        let inner = self.inner.borrow();
        let n = inner.outputs.len();
        for (ipin, p) in inner.inputs.iter().enumerate() {
            let closed = inner
                .outputs
                .iter()
                .enumerate()
                .any(|(opin, o)| o.get_state() == Some(false) && inner.switches[ipin * n + opin]);
            p.set_level(!closed);
        }
    }
}
impl Observer for KeyMatrix {
    fn update(&self, _pin: Pin) {
        self.refresh();
    }
}

#[derive(Debug)]
pub struct TestError;

/// A pin that records its level. Reading a pin that has never been set gives
/// [TestError] so the scanner's handling of read failures can be checked.
#[derive(Clone)]
pub struct Pin(Rc<PinShared>);
impl core::fmt::Debug for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pin")
            .field("n", &self.0.n)
            .field("state", &self.get_state())
            .finish()
    }
}
impl Pin {
    pub fn new(n: u8) -> Self {
        Self(Rc::new(PinShared {
            n,
            observer: RefCell::new(None),
            is_high: Cell::new(None),
            history: RefCell::new(Vec::new()),
        }))
    }

    pub fn get_state(&self) -> Option<bool> {
        self.0.is_high.get()
    }

    /// Every level driven through [OutputPin], oldest first.
    pub fn history(&self) -> Vec<bool> {
        self.0.history.borrow().clone()
    }

    fn set_level(&self, is_high: bool) {
        self.0.is_high.set(Some(is_high));
    }

    fn drive(&self, is_high: bool) {
        self.0.history.borrow_mut().push(is_high);
        if self.get_state() != Some(is_high) {
            self.set_level(is_high);
            let observer = self.0.observer.borrow().clone();
            if let Some(o) = observer {
                o.update(self.clone());
            }
        }
    }

    fn add_observer(&self, observer: Rc<dyn Observer>) {
        *self.0.observer.borrow_mut() = Some(observer);
    }
}

struct PinShared {
    n: u8,
    observer: RefCell<Option<Rc<dyn Observer>>>,
    is_high: Cell<Option<bool>>,
    history: RefCell<Vec<bool>>,
}

impl Error for TestError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for Pin {
    type Error = TestError;
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.get_state().ok_or(TestError)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.get_state().map(|h| !h).ok_or(TestError)
    }
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}
