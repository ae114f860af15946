//! DOM event wiring: every browser event becomes a message dispatch.

use resumatch_core::Msg;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DragEvent, Element, HtmlInputElement};

use crate::app::SharedApp;
use crate::dom;
use crate::ui::constants::{ANALYZE_BUTTON, FILE_INPUT, REMOVE_FILE, UPLOAD_AREA};

/// Attaches all listeners. The closures are leaked on purpose; they live as
/// long as the page does.
pub fn install(app: &SharedApp) -> Result<(), JsValue> {
    let document =
        dom::document().ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    let upload_area = require(&document, UPLOAD_AREA)?;
    let file_input: HtmlInputElement = require(&document, FILE_INPUT)?
        .dyn_into()
        .map_err(|_| JsValue::from_str("#resume is not an <input>"))?;
    let remove_button = require(&document, REMOVE_FILE)?;
    let analyze_button = require(&document, ANALYZE_BUTTON)?;

    // Keep the browser from navigating to files dropped outside the zone.
    listen(&document, "dragover", |event| event.prevent_default())?;
    listen(&document, "drop", |event| event.prevent_default())?;

    {
        let app = app.clone();
        listen(&upload_area, "dragenter", move |event| {
            event.prevent_default();
            app.dispatch(Msg::DragStateChanged(true));
        })?;
    }
    {
        let app = app.clone();
        listen(&upload_area, "dragover", move |event| {
            event.prevent_default();
            app.dispatch(Msg::DragStateChanged(true));
        })?;
    }
    {
        let app = app.clone();
        listen(&upload_area, "dragleave", move |event| {
            event.prevent_default();
            app.dispatch(Msg::DragStateChanged(false));
        })?;
    }
    {
        let app = app.clone();
        listen(&upload_area, "drop", move |event| {
            event.prevent_default();
            app.dispatch(Msg::DragStateChanged(false));
            if let Some(file) = dropped_file(&event) {
                app.intake(file);
            }
        })?;
    }
    {
        // A click anywhere in the zone opens the picker.
        let input = file_input.clone();
        listen(&upload_area, "click", move |_event| input.click())?;
    }
    {
        let app = app.clone();
        let input = file_input.clone();
        listen(&file_input, "change", move |_event| {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                app.intake(file);
            }
            // Reset so picking the same file fires change again.
            input.set_value("");
        })?;
    }
    {
        let app = app.clone();
        let input = file_input.clone();
        listen(&remove_button, "click", move |event| {
            // The zone's own click handler would reopen the picker.
            event.stop_propagation();
            input.set_value("");
            app.clear_picked_file();
            app.dispatch(Msg::FileRemoved);
        })?;
    }
    {
        let app = app.clone();
        listen(&analyze_button, "click", move |_event| {
            app.dispatch(Msg::SubmitClicked {
                now_ms: dom::now_ms(),
            });
        })?;
    }

    Ok(())
}

fn require(document: &web_sys::Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("host page has no element #{id}")))
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn dropped_file(event: &web_sys::Event) -> Option<web_sys::File> {
    event
        .dyn_ref::<DragEvent>()?
        .data_transfer()?
        .files()?
        .get(0)
}
