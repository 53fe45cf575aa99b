use crate::constants::*;
use crate::dom;
use crate::timer::IntervalTimer;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A recurring style bump on a decorative card.
struct CardPulse {
    selector: &'static str,
    period_ms: i32,
    hold_ms: i32,
    raised: &'static [(&'static str, &'static str)],
    rest: &'static [(&'static str, &'static str)],
}

const PULSES: [CardPulse; 2] = [
    CardPulse {
        selector: BPM_SELECTOR,
        period_ms: BPM_PULSE_PERIOD_MS,
        hold_ms: BPM_PULSE_HOLD_MS,
        raised: BPM_RAISED_STYLE,
        rest: BPM_REST_STYLE,
    },
    CardPulse {
        selector: STAT_CARD_SELECTOR,
        period_ms: STAT_PULSE_PERIOD_MS,
        hold_ms: STAT_PULSE_HOLD_MS,
        raised: STAT_RAISED_STYLE,
        rest: STAT_REST_STYLE,
    },
];

fn apply(el: &web::HtmlElement, style: &[(&str, &str)]) {
    let css = el.style();
    for (name, value) in style {
        _ = css.set_property(name, value);
    }
}

/// Start the pulses for whichever cards exist on the page.
pub fn start(document: &web::Document) -> Vec<IntervalTimer> {
    PULSES
        .iter()
        .filter_map(|pulse| {
            let Some(card) = document
                .query_selector(pulse.selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                log::info!("[cards] {} not present", pulse.selector);
                return None;
            };
            let (hold_ms, raised, rest) = (pulse.hold_ms, pulse.raised, pulse.rest);
            IntervalTimer::start(pulse.period_ms, move || {
                apply(&card, raised);
                let card = card.clone();
                dom::set_timeout(hold_ms, move || apply(&card, rest));
            })
            .map_err(|e| log::warn!("[cards] {:?}", e))
            .ok()
        })
        .collect()
}
