//! Browser entry point.
//!
//! Boot order follows the page: start module initialization, attach the
//! drop target listeners, register the caching worker, then hand the
//! scheduler to the browser's microtask queue.

pub mod dom;
pub mod engine;

use crate::config::{ShellConfig, CONFIG_ELEMENT_ID};
use crate::logging;
use crate::page::Page;
use crate::report::TracingReporter;
use crate::worker::WorkerRegistrar;
use anyhow::{anyhow, Context, Result};
use dom::{DomDragEvent, ElementDisplay, ServiceWorkerRegistrar};
use engine::EngineModule;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget};

/// Human-readable form of a thrown JavaScript value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{value:?}"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        return boot().map_err(|e| JsValue::from_str(&format!("{e:#}")));
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = boot() {
            web_sys::console::error_1(&format!("{e:#}").into());
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn boot() -> Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;
    let config = read_config(&document)?;
    logging::init(&config.log_filter);

    let drop_target = dom::element(&document, &config.drop_target_id)?;
    let display = dom::element(&document, &config.result_display_id)?;
    let registrar = ServiceWorkerRegistrar::from_window(&window)
        .map(|r| Rc::new(r) as Rc<dyn WorkerRegistrar>);

    let (mut page, scheduler) = Page::new(
        config,
        Rc::new(EngineModule),
        Rc::new(ElementDisplay::new(display)),
        registrar,
        Rc::new(TracingReporter),
    );
    page.begin_initialization();
    let page = Rc::new(page);

    let on_drag_over = Rc::clone(&page);
    listen(&drop_target, "dragover", move |event| {
        on_drag_over.handle_drag_over(&DomDragEvent::new(event));
    })?;
    let on_drop = Rc::clone(&page);
    listen(&drop_target, "drop", move |event| {
        let disposition = on_drop.handle_drop(&DomDragEvent::new(event));
        debug!(?disposition, "drop handled");
    })?;

    page.register_worker();

    wasm_bindgen_futures::spawn_local(async move {
        scheduler.run().await;
    });
    Ok(())
}

/// Configuration from the optional JSON config element, else defaults.
fn read_config(document: &Document) -> Result<ShellConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => ShellConfig::from_json(&text),
        None => Ok(ShellConfig::default()),
    }
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<()>
where
    F: FnMut(web_sys::DragEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::DragEvent)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("adding {kind} listener: {}", describe(&e)))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}
