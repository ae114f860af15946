//! Id-based DOM access and the command vocabulary the renderer emits.

use resumatch_core::Severity;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// One mutation against an element of the host page. Rendering produces a
/// batch of these; applying them is the only place the shell touches
/// existing markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    SetText {
        id: &'static str,
        text: String,
    },
    SetHtml {
        id: &'static str,
        html: String,
    },
    SetVisible {
        id: &'static str,
        visible: bool,
    },
    SetEnabled {
        id: &'static str,
        enabled: bool,
    },
    SetClass {
        id: &'static str,
        class: &'static str,
        on: bool,
    },
    SetStyle {
        id: &'static str,
        property: &'static str,
        value: String,
    },
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Looks up an element, logging when the host page is missing it. A missing
/// element skips its command; it never takes the page down.
fn element(id: &str) -> Option<Element> {
    let found = document().and_then(|doc| doc.get_element_by_id(id));
    if found.is_none() {
        app_logging::app_warn!("host page has no element #{id}");
    }
    found
}

pub fn apply(commands: &[UiCommand]) {
    for command in commands {
        apply_one(command);
    }
}

fn apply_one(command: &UiCommand) {
    match command {
        UiCommand::SetText { id, text } => {
            if let Some(el) = element(id) {
                el.set_text_content(Some(text));
            }
        }
        UiCommand::SetHtml { id, html } => {
            if let Some(el) = element(id) {
                el.set_inner_html(html);
            }
        }
        UiCommand::SetVisible { id, visible } => {
            if let Some(el) = element(id) {
                let _ = el.class_list().toggle_with_force("hidden", !visible);
            }
        }
        UiCommand::SetEnabled { id, enabled } => {
            if let Some(el) = element(id) {
                if *enabled {
                    let _ = el.remove_attribute("disabled");
                } else {
                    let _ = el.set_attribute("disabled", "");
                }
            }
        }
        UiCommand::SetClass { id, class, on } => {
            if let Some(el) = element(id) {
                let _ = el.class_list().toggle_with_force(class, *on);
            }
        }
        UiCommand::SetStyle {
            id,
            property,
            value,
        } => {
            if let Some(el) = element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                let _ = el.style().set_property(property, value);
            }
        }
    }
}

/// Milliseconds from the page's monotonic clock.
pub fn now_ms() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0) as u64
}

pub fn scroll_into_view(id: &str) {
    if let Some(el) = element(id) {
        el.scroll_into_view();
    }
}

const TOAST_VISIBLE_MS: i32 = 4000;

/// Appends a transient toast to the page body and schedules its removal.
pub fn show_toast(severity: Severity, message: &str) {
    let Some(doc) = document() else { return };
    let Some(body) = doc.body() else { return };
    let Ok(toast) = doc.create_element("div") else {
        return;
    };

    toast.set_class_name(match severity {
        Severity::Info => "toast toast-info",
        Severity::Success => "toast toast-success",
        Severity::Error => "toast toast-error",
    });
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    let handle = toast.clone();
    let remove = Closure::once(move || handle.remove());
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.as_ref().unchecked_ref(),
            TOAST_VISIBLE_MS,
        );
    }
    // The timeout owns the closure from here.
    remove.forget();
}
