#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod cards;
mod constants;
mod context;
mod dom;
mod ecg;
mod frame;
mod menu;
mod page;
mod render;
mod timer;

use context::AppContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);
    log::info!("organ viewer loaded");
    Ok(())
}

/// Build the viewer inside `#heart-3d` and start the ECG and render clocks.
#[wasm_bindgen]
pub async fn mount() -> Result<OrganViewer, JsValue> {
    match AppContext::mount().await {
        Ok(ctx) => Ok(OrganViewer { ctx }),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&format!("{e:#}")))
        }
    }
}

/// Handle returned to the page; owns the running viewer.
#[wasm_bindgen]
pub struct OrganViewer {
    ctx: AppContext,
}

#[wasm_bindgen]
impl OrganViewer {
    /// Switch the displayed organ by tag (`heart`, `brain`, `liver`, `cells`).
    pub fn select(&self, tag: &str) -> Result<(), JsValue> {
        self.ctx
            .select(tag)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn subject(&self) -> String {
        self.ctx.subject().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.ctx.is_mounted()
    }

    pub fn teardown(&mut self) {
        self.ctx.teardown();
    }
}
