//! Browser-only checks, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use seesaw_engine::persistence::{LocalStorageStore, ObjectStore};
use seesaw_engine::Seesaw;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips() {
    let mut store = LocalStorageStore::open().expect("localStorage available");
    store.save("seesaw-test", "[]").unwrap();
    assert_eq!(store.load("seesaw-test").as_deref(), Some("[]"));
    store.clear("seesaw-test").unwrap();
    assert_eq!(store.load("seesaw-test"), None);
}

#[wasm_bindgen_test]
fn facade_persists_to_local_storage() {
    seesaw_engine::init();
    let mut seesaw = Seesaw::new();
    seesaw.reset();

    let id = seesaw.add_weight(-60.0).unwrap();
    let reloaded = Seesaw::new();

    assert_eq!(reloaded.object_count(), 1);
    assert_eq!(reloaded.core().objects()[0].id(), id);

    seesaw.reset();
}

#[wasm_bindgen_test]
fn invalid_config_is_a_js_error() {
    assert!(Seesaw::with_config_json("{\"damping\": 3}".to_string()).is_err());
}
