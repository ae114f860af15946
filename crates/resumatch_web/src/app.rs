//! Shell state and the dispatch loop gluing core, client, and DOM together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use resumatch_client::{AnalyzeSettings, Analyzer, HttpAnalyzer};
use resumatch_core::{update, AppState, Msg, Phase, SelectedFile};
use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::{dom, effects, events, ui};

/// Everything the shell owns besides the DOM itself. The raw file handle
/// lives here; the core only ever sees its metadata.
struct App {
    state: AppState,
    picked_file: Option<web_sys::File>,
    analyzer: Rc<dyn Analyzer>,
}

/// Cheap cloneable handle shared by every event closure.
#[derive(Clone)]
pub struct SharedApp {
    inner: Rc<RefCell<App>>,
    frame_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_running: Rc<Cell<bool>>,
}

pub fn boot(endpoint: Option<String>) -> Result<(), JsValue> {
    let settings = match endpoint {
        Some(raw) => {
            let endpoint = Url::parse(&raw)
                .map_err(|err| JsValue::from_str(&format!("invalid endpoint {raw:?}: {err}")))?;
            AnalyzeSettings {
                endpoint,
                ..AnalyzeSettings::default()
            }
        }
        None => AnalyzeSettings::default(),
    };

    let app = SharedApp::new(Rc::new(HttpAnalyzer::new(settings)));
    events::install(&app)?;
    app.render_now();
    app_logging::app_info!("resumatch shell ready");
    Ok(())
}

impl SharedApp {
    pub fn new(analyzer: Rc<dyn Analyzer>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(App {
                state: AppState::new(),
                picked_file: None,
                analyzer,
            })),
            frame_closure: Rc::new(RefCell::new(None)),
            frame_running: Rc::new(Cell::new(false)),
        }
    }

    /// Runs one message through the pure core, renders if anything visible
    /// changed, then executes the requested effects. Effects that finish
    /// later re-enter through their own dispatch call.
    pub fn dispatch(&self, msg: Msg) {
        let (maybe_view, effects) = {
            let mut inner = self.inner.borrow_mut();
            let state = std::mem::take(&mut inner.state);
            let (mut state, effects) = update(state, msg);
            let view = state.view();
            let was_dirty = state.consume_dirty();
            inner.state = state;
            (was_dirty.then_some(view), effects)
        };

        if let Some(view) = maybe_view {
            dom::apply(&ui::render::render(&view));
        }
        effects::run(self, effects);
    }

    /// Unconditional first paint.
    pub fn render_now(&self) {
        let view = self.inner.borrow().state.view();
        dom::apply(&ui::render::render(&view));
    }

    /// Feeds a candidate through the core and keeps the raw handle only if
    /// the core accepted it. A rejected pick must not overwrite the handle
    /// of a selection that is still live.
    pub fn intake(&self, file: web_sys::File) {
        let candidate = SelectedFile {
            name: file.name(),
            size_bytes: file.size() as u64,
            mime_type: file.type_(),
        };
        self.dispatch(Msg::FilePicked {
            name: candidate.name.clone(),
            size_bytes: candidate.size_bytes,
            mime_type: candidate.mime_type.clone(),
        });

        if candidate_accepted(self.inner.borrow().state.selected_file(), &candidate) {
            self.inner.borrow_mut().picked_file = Some(file);
        }
    }

    pub fn clear_picked_file(&self) {
        self.inner.borrow_mut().picked_file = None;
    }

    pub fn picked_file(&self) -> Option<web_sys::File> {
        self.inner.borrow().picked_file.clone()
    }

    pub fn analyzer(&self) -> Rc<dyn Analyzer> {
        self.inner.borrow().analyzer.clone()
    }

    fn is_submitting(&self) -> bool {
        matches!(
            self.inner.borrow().state.phase(),
            Phase::Submitting { .. }
        )
    }

    /// Starts the animation loop if it is not already running. The loop
    /// feeds `FrameTick` into the core and stops itself once the submission
    /// phase ends.
    pub fn start_frame_loop(&self) {
        if self.frame_running.get() {
            return;
        }
        self.frame_running.set(true);

        let handle = self.clone();
        let closure = Closure::wrap(Box::new(move |now: f64| {
            handle.dispatch(Msg::FrameTick { now_ms: now as u64 });
            if handle.is_submitting() {
                if let Some(closure) = handle.frame_closure.borrow().as_ref() {
                    request_frame(closure);
                }
            } else {
                handle.frame_running.set(false);
            }
        }) as Box<dyn FnMut(f64)>);

        *self.frame_closure.borrow_mut() = Some(closure);
        if let Some(closure) = self.frame_closure.borrow().as_ref() {
            request_frame(closure);
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// An accepted candidate becomes the selection verbatim; a rejected one
/// never equals the surviving selection on all three fields.
fn candidate_accepted(selected: Option<&SelectedFile>, candidate: &SelectedFile) -> bool {
    selected.is_some_and(|selected| selected == candidate)
}
