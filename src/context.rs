use crate::cards;
use crate::dom::{self, EventListener};
use crate::ecg::{self, EcgTrace};
use crate::frame::{self, FrameContext};
use crate::menu;
use crate::page::{self, REQUIRED_ELEMENT_IDS};
use crate::timer::{FrameLoop, IntervalTimer};
use organ_core::{SceneAnimator, Subject, SubjectError};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything a mounted viewer owns. Dropping it releases the host clocks and
/// listeners; `teardown` additionally detaches the canvas.
pub struct AppContext {
    document: web::Document,
    animator: Rc<RefCell<SceneAnimator>>,
    canvas: web::HtmlCanvasElement,
    frame_loop: Option<FrameLoop>,
    timers: SmallVec<[IntervalTimer; 4]>,
    listeners: Vec<EventListener>,
    _ecg: Rc<RefCell<EcgTrace>>,
}

impl AppContext {
    pub async fn mount() -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let [container, ecg_path] =
            page::resolve_all(REQUIRED_ELEMENT_IDS, |id| document.get_element_by_id(id))?;

        // From here on the page is modified; failures detach the canvas again.
        let canvas = dom::append_canvas(&document, &container)?;
        match Self::assemble(document, canvas.clone(), ecg_path).await {
            Ok(ctx) => Ok(ctx),
            Err(e) => {
                canvas.remove();
                Err(e)
            }
        }
    }

    async fn assemble(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        ecg_path: web::Element,
    ) -> anyhow::Result<Self> {
        let mut listeners = vec![dom::wire_canvas_resize(&canvas)?];

        let animator = Rc::new(RefCell::new(SceneAnimator::new(
            Subject::default(),
            rand::random(),
        )));
        let trace = Rc::new(RefCell::new(EcgTrace::new(ecg_path, rand::random())));

        let mut timers: SmallVec<[IntervalTimer; 4]> = SmallVec::new();
        timers.push(ecg::start(trace.clone())?);
        timers.extend(cards::start(&document));
        listeners.extend(menu::wire_organ_menu(&document, animator.clone()));

        let gpu = frame::init_gpu(&canvas).await;
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            animator: animator.clone(),
            gpu,
            canvas: canvas.clone(),
        }));
        let frame_loop = frame::start_loop(frame_ctx)?;
        log::info!(
            "[viewer] mounted: {} timers, {} listeners",
            timers.len(),
            listeners.len()
        );

        Ok(Self {
            document,
            animator,
            canvas,
            frame_loop: Some(frame_loop),
            timers,
            listeners,
            _ecg: trace,
        })
    }

    pub fn subject(&self) -> Subject {
        self.animator.borrow().subject()
    }

    pub fn select(&self, tag: &str) -> Result<Subject, SubjectError> {
        let subject = tag.parse::<Subject>()?;
        self.animator.borrow_mut().switch_subject(subject);
        menu::highlight(&self.document, subject);
        Ok(subject)
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Stop every clock, drop the listeners and detach the canvas. Idempotent.
    pub fn teardown(&mut self) {
        let Some(frame_loop) = self.frame_loop.take() else {
            return;
        };
        frame_loop.stop();
        for timer in self.timers.iter_mut() {
            timer.cancel();
        }
        self.timers.clear();
        self.listeners.clear();
        self.canvas.remove();
        log::info!("[viewer] torn down");
    }
}
