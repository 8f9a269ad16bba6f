use std::sync::Once;

use jsx_elements::{backend::*, prelude::*};

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

pub fn create_single(backend: &MemBackend, node: impl Into<NodeLike>) -> MemNode {
    create_element(backend, &node.into())
        .unwrap()
        .and_then(|x| x.into_node())
        .expect("a single node should be created")
}

pub fn create_elem(backend: &MemBackend, node: impl Into<NodeLike>) -> MemElement {
    create_single(backend, node)
        .as_element()
        .expect("an element should be created")
}
