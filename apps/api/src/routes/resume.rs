//! Resume endpoints: assembled HTML, the assembly report, and PDF export.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::assembly::{assemble, Assembly};
use crate::errors::AppError;
use crate::filters::FilterConfig;
use crate::models::profile::Profile;
use crate::render::wrap_document;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeQuery {
    pub preset: Option<String>,
    /// 10–100; out-of-range values are clamped, not rejected.
    pub density: Option<u32>,
    /// Recency window in years; 0 or absent = unbounded.
    pub timeframe: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub preset: Option<String>,
    pub density: Option<u32>,
    pub timeframe: Option<u32>,
    pub filename: Option<String>,
}

fn run_assembly(
    state: &AppState,
    preset: Option<&str>,
    density: Option<u32>,
    timeframe: Option<u32>,
) -> Result<(Profile, Assembly), AppError> {
    let density = density.unwrap_or(100).min(u8::MAX as u32) as u8;
    let config = FilterConfig::current(density, timeframe.unwrap_or(0));
    debug!(
        density = config.density,
        timeframe = config.timeframe_years,
        preset = preset.unwrap_or("-"),
        "Assembling resume"
    );
    let profile = state
        .store
        .load_profile()
        .map_err(|e| AppError::Profile(format!("{e:#}")))?;
    let assembly = assemble(&profile, &state.store.presets_dir, preset, &config);
    Ok((profile, assembly))
}

fn document_title(profile: &Profile) -> String {
    profile
        .basic_info
        .name
        .clone()
        .unwrap_or_else(|| "Resume".to_string())
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(query): Query<ResumeQuery>,
) -> Result<Html<String>, AppError> {
    let (profile, assembly) =
        run_assembly(&state, query.preset.as_deref(), query.density, query.timeframe)?;
    let (css, css_source) = state.store.resolve_css(query.preset.as_deref());
    debug!(?css_source, "Stylesheet resolved");
    Ok(Html(wrap_document(
        &document_title(&profile),
        &assembly.html,
        &css,
    )))
}

/// GET /api/v1/resume/report
pub async fn handle_get_report(
    State(state): State<AppState>,
    Query(query): Query<ResumeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (_, assembly) =
        run_assembly(&state, query.preset.as_deref(), query.density, query.timeframe)?;
    Ok(Json(assembly.report))
}

/// POST /api/v1/resume/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(request): Json<PdfRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (profile, assembly) = run_assembly(
        &state,
        request.preset.as_deref(),
        request.density,
        request.timeframe,
    )?;
    let (css, css_source) = state.store.resolve_css(request.preset.as_deref());
    debug!(?css_source, "Stylesheet resolved");
    let document = wrap_document(&document_title(&profile), &assembly.html, &css);

    let pdf = state.pdf.html_to_pdf(&document).await?;

    let filename = request.filename.unwrap_or_else(|| "resume.pdf".to_string());
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, pdf))
}
