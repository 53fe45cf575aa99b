use crate::timer::IntervalTimer;
use organ_core::constants::ECG_TICK_INTERVAL_MS;
use organ_core::{WaveformBuffer, WaveformParams};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scrolling ECG trace bound to the page's SVG path.
pub struct EcgTrace {
    buffer: WaveformBuffer,
    path: web::Element,
}

impl EcgTrace {
    pub fn new(path: web::Element, seed: u64) -> Self {
        let trace = Self {
            buffer: WaveformBuffer::new(WaveformParams::default(), seed),
            path,
        };
        trace.draw();
        trace
    }

    pub fn tick(&mut self) {
        self.buffer.tick(js_sys::Date::now());
        self.draw();
    }

    fn draw(&self) {
        if let Err(e) = self.path.set_attribute("d", &self.buffer.render()) {
            log::error!("[ecg] failed to update path: {:?}", e);
        }
    }
}

/// Drive the trace on its fixed interval.
pub fn start(trace: Rc<RefCell<EcgTrace>>) -> anyhow::Result<IntervalTimer> {
    IntervalTimer::start(ECG_TICK_INTERVAL_MS, move || trace.borrow_mut().tick())
}
