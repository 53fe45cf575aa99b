use crate::render;
use crate::timer::FrameLoop;
use organ_core::SceneAnimator;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct FrameContext {
    pub animator: Rc<RefCell<SceneAnimator>>,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Animation runs on wall-clock time, independent of the frame timestamp.
        let now_ms = js_sys::Date::now();
        self.animator.borrow_mut().update(now_ms);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let animator = self.animator.borrow();
        match gpu.render(&animator) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}; animating without rendering", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    FrameLoop::start(move |_timestamp| frame_ctx.borrow_mut().frame())
}
