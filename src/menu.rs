use crate::constants::{ORGAN_ITEM_SELECTOR, ORGAN_TAG_ATTR, SELECTED_CLASS};
use crate::dom::{self, EventListener};
use organ_core::{SceneAnimator, Subject};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Attach click handlers to every organ menu item.
///
/// A click marks the item selected (and only that item), then switches the
/// animator to the item's `data-organ` tag. Unknown or missing tags leave the
/// scene unchanged.
pub fn wire_organ_menu(
    document: &web::Document,
    animator: Rc<RefCell<SceneAnimator>>,
) -> Vec<EventListener> {
    let items = Rc::new(dom::elements(document, ORGAN_ITEM_SELECTOR));
    if items.is_empty() {
        log::info!("[menu] no organ items on page");
    }
    items
        .iter()
        .filter_map(|item| {
            let all = items.clone();
            let clicked = item.clone();
            let animator = animator.clone();
            let listener = EventListener::new(item, "click", move |_| {
                mark_selected(&all, &clicked);
                let Some(tag) = clicked.get_attribute(ORGAN_TAG_ATTR) else {
                    log::warn!("[menu] item without {ORGAN_TAG_ATTR}");
                    return;
                };
                match tag.parse::<Subject>() {
                    Ok(subject) => animator.borrow_mut().switch_subject(subject),
                    Err(e) => log::warn!("[menu] {e}"),
                }
            });
            listener
                .map_err(|e| log::warn!("[menu] {:?}", e))
                .ok()
        })
        .collect()
}

/// Reflect a programmatic selection in the menu.
pub fn highlight(document: &web::Document, subject: Subject) {
    let items = dom::elements(document, ORGAN_ITEM_SELECTOR);
    let target = items.iter().find(|el| {
        el.get_attribute(ORGAN_TAG_ATTR)
            .and_then(|t| t.parse::<Subject>().ok())
            == Some(subject)
    });
    if let Some(target) = target {
        mark_selected(&items, target);
    }
}

fn mark_selected(items: &[web::Element], selected: &web::Element) {
    for el in items {
        _ = el.class_list().remove_1(SELECTED_CLASS);
    }
    _ = selected.class_list().add_1(SELECTED_CLASS);
}
