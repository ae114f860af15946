use std::time::Duration;

use url::Url;

use crate::{AnalyzeError, AnalyzeFailure, JobMatch};

/// Endpoint of the development backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

/// Multipart field the service reads the upload from.
const RESUME_FIELD: &str = "resume";

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct AnalyzeSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            connect_timeout: Duration::from_secs(10),
            // Analysis runs a language model server-side; give it room.
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Uploads a resume and returns the parsed matches.
///
/// `?Send` because the browser target drives this from a single-threaded
/// executor.
#[async_trait::async_trait(?Send)]
pub trait Analyzer {
    async fn analyze(
        &self,
        file_name: &str,
        pdf_bytes: Vec<u8>,
    ) -> Result<Vec<JobMatch>, AnalyzeError>;
}

/// reqwest-backed [`Analyzer`] speaking the service's multipart protocol.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    settings: AnalyzeSettings,
}

impl HttpAnalyzer {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self { settings }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| AnalyzeError::new(AnalyzeFailure::Network, err.to_string()))
    }

    // The browser's fetch stack owns connection handling; the builder knobs
    // above do not exist on this target.
    #[cfg(target_arch = "wasm32")]
    fn build_client(&self) -> Result<reqwest::Client, AnalyzeError> {
        Ok(reqwest::Client::new())
    }
}

#[async_trait::async_trait(?Send)]
impl Analyzer for HttpAnalyzer {
    async fn analyze(
        &self,
        file_name: &str,
        pdf_bytes: Vec<u8>,
    ) -> Result<Vec<JobMatch>, AnalyzeError> {
        let byte_len = pdf_bytes.len();
        let part = reqwest::multipart::Part::bytes(pdf_bytes)
            .file_name(file_name.to_owned())
            .mime_str(PDF_MIME)
            .map_err(|err| AnalyzeError::new(AnalyzeFailure::Network, err.to_string()))?;
        let form = reqwest::multipart::Form::new().part(RESUME_FIELD, part);

        app_logging::app_info!(
            "analyze: posting {byte_len} bytes as {file_name:?} to {}",
            self.settings.endpoint
        );

        let client = self.build_client()?;
        let response = client
            .post(self.settings.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.bytes().await {
                Ok(body) => service_error_detail(status, &body),
                Err(_) => status.to_string(),
            };
            app_logging::app_warn!("analyze: service answered {status}: {detail}");
            return Err(AnalyzeError::new(
                AnalyzeFailure::HttpStatus(status.as_u16()),
                detail,
            ));
        }

        let body = response.bytes().await.map_err(map_send_error)?;
        let matches: Vec<JobMatch> = serde_json::from_slice(&body).map_err(|err| {
            app_logging::app_warn!("analyze: unparseable response body: {err}");
            AnalyzeError::new(AnalyzeFailure::InvalidResponse, err.to_string())
        })?;

        app_logging::app_info!("analyze: received {} matches", matches.len());
        Ok(matches)
    }
}

fn map_send_error(err: reqwest::Error) -> AnalyzeError {
    if err.is_timeout() {
        return AnalyzeError::new(AnalyzeFailure::Timeout, err.to_string());
    }
    AnalyzeError::new(AnalyzeFailure::Network, err.to_string())
}

/// The service reports failures as `{"error": "..."}`; fall back to the
/// status line when the body is anything else.
fn service_error_detail(status: reqwest::StatusCode, body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_slice::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| status.to_string())
}
