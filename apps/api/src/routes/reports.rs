use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::content::clock::LocalParts;
use crate::content::composer::personalize;
use crate::content::locale::Lang;
use crate::content::packages::{build_package, grounding_text, PackageKind};
use crate::content::prompts::{report_prompt, REPORT_SYSTEM};
use crate::content::tables::{gemstone_for, mantra_for, Sign};
use crate::content::weekly::compose_week;
use crate::errors::{AppError, ValidJson};
use crate::llm_client::prompts::with_fidelity;
use crate::models::brand::BrandConfig;
use crate::models::user::UserProfile;
use crate::render::brand::resolve_logo;
use crate::render::documents::{
    daily_document, gemstone_document, mantra_document, package_document, weekly_document,
    ReportContext,
};
use crate::render::fonts::FontLibrary;
use crate::render::{render_pdf, ReportDocument};
use crate::routes::daily::{load_daily, parse_lang, parse_sign, resolve_day};
use crate::state::AppState;

/// Body shared by every `/report/*` route. `package` and `notes` are read by
/// `/report/generate` only.
#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    pub sign: Option<String>,
    pub lang: Option<String>,
    pub date: Option<String>,
    pub user: Option<UserProfile>,
    pub brand: Option<BrandConfig>,
    pub package: Option<String>,
    pub notes: Option<String>,
}

struct Parsed {
    sign: Sign,
    lang: Lang,
    day: LocalParts,
}

impl ReportRequest {
    /// Validates the body. The language falls back to English when no font can
    /// draw the requested one.
    fn parse(&self, fonts: &FontLibrary) -> Result<Parsed, AppError> {
        Ok(Parsed {
            sign: parse_sign(self.sign.as_deref())?,
            lang: fonts.render_lang(parse_lang(self.lang.as_deref())?),
            day: resolve_day(self.date.as_deref())?,
        })
    }
}

fn context<'a>(state: &'a AppState, req: &'a ReportRequest, lang: Lang) -> ReportContext<'a> {
    ReportContext {
        lang,
        brand_name: req
            .brand
            .as_ref()
            .map(|b| b.name_or(&state.config.app_name))
            .unwrap_or(&state.config.app_name),
        user: req.user.as_ref(),
    }
}

/// Resolves the logo, renders on the blocking pool, and wraps the bytes.
async fn pdf_response(
    state: &AppState,
    req: &ReportRequest,
    document: ReportDocument,
    lang: Lang,
    filename: String,
) -> Result<Response, AppError> {
    let logo = resolve_logo(req.brand.as_ref(), &state.http).await;
    let bytes = render_pdf(document, lang, &state.fonts, logo).await?;
    info!(file = %filename, bytes = bytes.len(), "report rendered");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// POST /report/from-daily
pub async fn handle_from_daily(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ReportRequest>,
) -> Result<Response, AppError> {
    let Parsed { sign, lang, day } = req.parse(&state.fonts)?;
    let entry = load_daily(&state, sign, lang, &day).await;
    let content = personalize(entry.rich, req.user.as_ref());
    let document = daily_document(&content, &context(&state, &req, lang));
    let filename = format!("{}-daily-{}.pdf", sign.id(), day.date_key);
    pdf_response(&state, &req, document, lang, filename).await
}

/// POST /report/weekly
pub async fn handle_weekly(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ReportRequest>,
) -> Result<Response, AppError> {
    let Parsed { sign, lang, day } = req.parse(&state.fonts)?;
    let week = compose_week(sign, lang, &day, req.user.as_ref());
    let document = weekly_document(&week, &context(&state, &req, lang));
    let filename = format!("{}-weekly-{}.pdf", sign.id(), week.start_date);
    pdf_response(&state, &req, document, lang, filename).await
}

/// POST /report/gemstone
pub async fn handle_gemstone(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ReportRequest>,
) -> Result<Response, AppError> {
    let Parsed { sign, lang, .. } = req.parse(&state.fonts)?;
    let document = gemstone_document(&gemstone_for(sign, lang), &context(&state, &req, lang));
    let filename = format!("{}-gemstone.pdf", sign.id());
    pdf_response(&state, &req, document, lang, filename).await
}

/// POST /report/mantra
pub async fn handle_mantra(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ReportRequest>,
) -> Result<Response, AppError> {
    let Parsed { sign, lang, .. } = req.parse(&state.fonts)?;
    let document = mantra_document(&mantra_for(sign, lang), &context(&state, &req, lang));
    let filename = format!("{}-mantra.pdf", sign.id());
    pdf_response(&state, &req, document, lang, filename).await
}

/// POST /report/generate
///
/// The narrative is written in English from the English baseline, then carried
/// into the requested language. Without a narrative the baseline stands alone.
pub async fn handle_generate(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ReportRequest>,
) -> Result<Response, AppError> {
    let Parsed { sign, lang, day } = req.parse(&state.fonts)?;
    let kind = req
        .package
        .as_deref()
        .ok_or_else(|| AppError::Validation("package is required".to_string()))?
        .parse::<PackageKind>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let content = build_package(kind, sign, lang, &day, req.user.as_ref());
    let narrative = write_narrative(&state, kind, sign, &day, &req).await;
    let narrative = match narrative {
        Some(text) if lang != Lang::En => Some(state.polish.translate_with_glossary(&text, lang).await),
        other => other,
    };
    let notes = match req.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(notes) => Some(state.polish.translate(notes, lang).await),
        None => None,
    };

    let document = package_document(
        &content,
        narrative.as_deref(),
        notes.as_deref(),
        &context(&state, &req, lang),
    );
    let filename = format!("{}-{}.pdf", sign.id(), kind);
    pdf_response(&state, &req, document, lang, filename).await
}

/// LLM narrative grounded in the English baseline. `None` on any failure.
async fn write_narrative(
    state: &AppState,
    kind: PackageKind,
    sign: Sign,
    day: &LocalParts,
    req: &ReportRequest,
) -> Option<String> {
    if !state.llm.is_configured() {
        return None;
    }
    let baseline = build_package(kind, sign, Lang::En, day, req.user.as_ref());
    let prompt = report_prompt(
        &grounding_text(&baseline, Lang::En),
        Lang::En,
        req.notes.as_deref(),
    );
    let system = with_fidelity(REPORT_SYSTEM);
    let call = state.llm.complete(&prompt, &system);
    match tokio::time::timeout(state.config.polish_deadline, call).await {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            warn!(package = %kind, error = %e, "narrative failed, using baseline only");
            None
        }
        Err(_) => {
            warn!(package = %kind, "narrative missed its deadline, using baseline only");
            None
        }
    }
}
