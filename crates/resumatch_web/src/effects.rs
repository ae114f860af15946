//! Executes the effects requested by the core.

use wasm_bindgen_futures::spawn_local;

use resumatch_client::{AnalyzeError, AnalyzeFailure, JobMatch};
use resumatch_core::{
    Effect, MatchRow, Millis, Msg, ScrollTarget, SubmitError, SubmitErrorKind, SubmitOutcome,
};

use crate::app::SharedApp;
use crate::dom;
use crate::ui::constants::{LOADING_SECTION, RESULT_SECTION};

pub fn run(app: &SharedApp, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SubmitResume { submitted_at } => submit_resume(app, submitted_at),
            Effect::Notify { severity, message } => dom::show_toast(severity, &message),
            Effect::ScrollTo { target } => dom::scroll_into_view(match target {
                ScrollTarget::Loading => LOADING_SECTION,
                ScrollTarget::Results => RESULT_SECTION,
            }),
        }
    }
}

/// Reads the stored file and drives the upload. Runs as a spawned task so
/// the completion dispatch never re-enters the one that requested it. The
/// submission stamp rides along so the core can tell whose outcome this is.
fn submit_resume(app: &SharedApp, submitted_at: Millis) {
    app.start_frame_loop();

    let handle = app.clone();
    spawn_local(async move {
        let outcome = upload(&handle).await;
        if let Err(error) = &outcome {
            app_logging::app_warn!(
                "analysis failed: {} ({})",
                error.kind.user_message(),
                error.detail
            );
        }
        handle.dispatch(Msg::AnalysisDone {
            submitted_at,
            outcome,
            now_ms: dom::now_ms(),
        });
    });
}

async fn upload(app: &SharedApp) -> SubmitOutcome {
    let Some(file) = app.picked_file() else {
        return Err(SubmitError {
            kind: SubmitErrorKind::FileUnreadable,
            detail: "no stored file handle".to_owned(),
        });
    };
    let bytes = read_file_bytes(&file).await.map_err(|err| SubmitError {
        kind: SubmitErrorKind::FileUnreadable,
        detail: format!("{err:?}"),
    })?;

    let analyzer = app.analyzer();
    let matches = analyzer
        .analyze(&file.name(), bytes)
        .await
        .map_err(map_failure)?;
    Ok(matches.into_iter().map(map_row).collect())
}

async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn map_row(row: JobMatch) -> MatchRow {
    MatchRow {
        job: row.job,
        percentage: row.percentage,
        level: row.level,
    }
}

/// Maps transport failure classes onto the user-facing taxonomy.
fn map_failure(err: AnalyzeError) -> SubmitError {
    let kind = match err.kind {
        AnalyzeFailure::Network => SubmitErrorKind::CannotConnect,
        AnalyzeFailure::Timeout => SubmitErrorKind::Timeout,
        AnalyzeFailure::HttpStatus(code) if (400..500).contains(&code) => {
            SubmitErrorKind::BadRequest(code)
        }
        AnalyzeFailure::HttpStatus(code) if (500..600).contains(&code) => {
            SubmitErrorKind::ServerError(code)
        }
        AnalyzeFailure::HttpStatus(_) | AnalyzeFailure::InvalidResponse => {
            SubmitErrorKind::MalformedResponse
        }
    };
    SubmitError {
        kind,
        detail: err.message,
    }
}
