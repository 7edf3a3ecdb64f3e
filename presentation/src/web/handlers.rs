//! HTTP routes: the page, the form submit and a health probe

use super::page::{NoticeKind, PageView};
use super::state::AppState;
use crate::progress::LogProgress;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    response::Html,
    routing::get,
};
use summarizer_application::AnalyzeVideoInput;
use summarizer_domain::{ApiKey, VideoFormat};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const MISSING_VIDEO: &str = "Please upload a video file to begin analysis";
const MISSING_API_KEY: &str = "Please enter your Gemini API key in the sidebar";

/// Build the router. Uploads are not size limited.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", get(index).post(analyze))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(
        PageView::new(&state.title, &state.model)
            .with_notice(NoticeKind::Info, MISSING_VIDEO)
            .render(),
    )
}

async fn health() -> &'static str {
    "ok"
}

struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

/// Fields of the analyze form
#[derive(Default)]
struct AnalyzeForm {
    api_key: String,
    query: String,
    video: Option<UploadedFile>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = AnalyzeForm::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "api_key" => form.api_key = field.text().await?,
                "query" => form.query = field.text().await?,
                "video" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file was picked.
                    if !file_name.is_empty() {
                        form.video = Some(UploadedFile {
                            file_name,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }
        Ok(form)
    }
}

async fn analyze(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let page = PageView::new(&state.title, &state.model);
    let form = match AnalyzeForm::read(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!("Could not read form: {}", e);
            return Html(
                page.with_notice(NoticeKind::Error, format!("Could not read the upload: {}", e))
                    .render(),
            );
        }
    };

    let page = page.with_query(&form.query);
    Html(run_analysis(&state, form, page).await.render())
}

async fn run_analysis(state: &AppState, form: AnalyzeForm, page: PageView) -> PageView {
    let Some(video) = form.video else {
        return page.with_notice(NoticeKind::Info, MISSING_VIDEO);
    };
    if let Err(e) = VideoFormat::from_file_name(&video.file_name) {
        return page.with_notice(NoticeKind::Warning, e.to_string());
    }
    let Ok(api_key) = ApiKey::parse(&form.api_key) else {
        return page.with_notice(NoticeKind::Warning, MISSING_API_KEY);
    };

    let use_case = match state.backend.use_case(api_key) {
        Ok(use_case) => use_case,
        Err(e) => {
            warn!("Could not build analysis: {}", e);
            return page.with_notice(
                NoticeKind::Error,
                format!("An error occurred during analysis: {}", e),
            );
        }
    };

    // Writing a large upload to disk must not stall the runtime workers.
    let UploadedFile { file_name, bytes } = video;
    let size = bytes.len();
    let backend = state.backend.clone();
    let name = file_name.clone();
    let staged = tokio::task::spawn_blocking(move || backend.stage(&name, &bytes))
        .await
        .unwrap_or_else(|join| Err(join.into()));
    let staged = match staged {
        Ok(staged) => staged,
        Err(e) => {
            warn!(file = %file_name, "Could not stage upload: {}", e);
            return page.with_notice(
                NoticeKind::Error,
                format!("An error occurred during analysis: {}", e),
            );
        }
    };

    info!(file = %file_name, bytes = size, "Analyzing upload");
    match use_case
        .execute(AnalyzeVideoInput::new(staged, form.query), &LogProgress)
        .await
    {
        Ok(outcome) => page.with_answer(&outcome.answer),
        Err(e) if e.is_warning() => page.with_notice(NoticeKind::Warning, e.user_message()),
        Err(e) => page.with_notice(NoticeKind::Error, e.user_message()),
    }
}
