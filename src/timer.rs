//! Cancellable host clocks.
//!
//! `IntervalTimer` wraps `setInterval` and `FrameLoop` wraps a self-rescheduling
//! `requestAnimationFrame` callback. Both own their JS closures and stop the
//! host clock on `cancel`/`stop` or when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct IntervalTimer {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            id: Some(id),
            _closure: closure,
        })
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct LoopState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn schedule(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return Ok(());
        };
        let id = window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame failed: {:?}", e))?;
        self.pending.set(Some(id));
        Ok(())
    }
}

/// Per-frame callback loop with an explicit stop.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut step: impl FnMut(f64) + 'static) -> anyhow::Result<Self> {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });
        // The callback only holds a weak handle so dropping the loop frees it.
        let weak = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            step(timestamp);
            if let Err(e) = state.schedule() {
                log::error!("frame loop stopped: {:?}", e);
                state.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(closure);
        state.schedule()?;
        Ok(Self { state })
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
