// Host-side tests for required-element resolution at mount time.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod page {
    include!("../src/page.rs");
}

use page::*;
use std::cell::RefCell;

#[test]
fn container_and_ecg_path_are_both_required() {
    assert_eq!(REQUIRED_ELEMENT_IDS, ["heart-3d", "ecg-path"]);
}

#[test]
fn missing_ecg_path_fails_before_anything_is_touched() {
    // Page with the container but no ECG path.
    let mutated = RefCell::new(Vec::new());
    let result = resolve_all(REQUIRED_ELEMENT_IDS, |id| {
        (id == "heart-3d").then(|| id.to_string())
    })
    .map(|[container, _]| mutated.borrow_mut().push(container));

    let Err(err) = result else {
        panic!("resolution should fail without #ecg-path");
    };
    assert_eq!(err, MissingElements(vec!["ecg-path".to_string()]));
    assert_eq!(err.to_string(), "missing required elements: #ecg-path");
    assert!(mutated.borrow().is_empty(), "container used after a failed lookup");
}

#[test]
fn every_absent_id_is_reported() {
    let err = match resolve_all(REQUIRED_ELEMENT_IDS, |_| None::<()>) {
        Ok(_) => panic!("empty page resolved"),
        Err(e) => e,
    };
    assert_eq!(err.0, vec!["heart-3d", "ecg-path"]);
    assert_eq!(
        err.to_string(),
        "missing required elements: #heart-3d, #ecg-path"
    );
}

#[test]
fn all_ids_are_looked_up_before_failing() {
    let mut seen = Vec::new();
    let result = resolve_all(REQUIRED_ELEMENT_IDS, |id| {
        seen.push(id.to_string());
        None::<()>
    });
    assert!(result.is_err());
    assert_eq!(seen, ["heart-3d", "ecg-path"]);
}

#[test]
fn present_elements_come_back_in_lookup_order() {
    let resolved = resolve_all(REQUIRED_ELEMENT_IDS, |id| Some(id.len()));
    assert_eq!(resolved, Ok(["heart-3d".len(), "ecg-path".len()]));
}
