use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::{CacheKey, CachedDaily};
use crate::content::clock::{
    days_between, parts_for_date, today, LocalParts, MAX_YEAR, MIN_YEAR,
};
use crate::content::composer::{compose_base, personalize, DailyContent, VedicTimings};
use crate::content::locale::Lang;
use crate::content::tables::Sign;
use crate::errors::{AppError, ValidJson, ValidQuery};
use crate::models::user::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub sign: Option<String>,
    pub lang: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DailyRequest {
    pub sign: Option<String>,
    pub lang: Option<String>,
    pub date: Option<String>,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResponse {
    pub date: String,
    pub sign: Sign,
    pub lang: Lang,
    pub text: String,
    pub vedic: VedicTimings,
    pub generated_at: DateTime<Utc>,
    pub rich: DailyContent,
}

impl DailyResponse {
    fn new(entry: CachedDaily, user: Option<&UserProfile>) -> Self {
        let rich = personalize(entry.rich, user);
        Self {
            date: entry.date,
            sign: entry.sign,
            lang: entry.lang,
            text: rich.text.clone(),
            vedic: rich.vedic_timings.clone(),
            generated_at: entry.generated_at,
            rich,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request parsing shared with the report routes
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn parse_sign(raw: Option<&str>) -> Result<Sign, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("sign is required".to_string()))?;
    raw.parse::<Sign>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

pub(crate) fn parse_lang(raw: Option<&str>) -> Result<Lang, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Lang::default()),
        Some(code) => code
            .parse::<Lang>()
            .map_err(|e| AppError::Validation(e.to_string())),
    }
}

/// The requested calendar day, or today in IST.
pub(crate) fn resolve_day(raw: Option<&str>) -> Result<LocalParts, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(today()),
        Some(date) => parts_for_date(date).ok_or_else(|| {
            AppError::Validation(format!(
                "date must be YYYY-MM-DD between {MIN_YEAR} and {MAX_YEAR}, got '{date}'"
            ))
        }),
    }
}

/// Days either side of today whose records are polished and cached.
pub(crate) const CACHE_WINDOW_DAYS: i64 = 31;

pub(crate) fn in_cache_window(parts: &LocalParts) -> bool {
    days_between(&today(), parts).abs() <= CACHE_WINDOW_DAYS
}

/// Cached anonymous record for the day, composing and polishing it on a miss.
/// Days outside the cache window are composed fresh and left unpolished.
pub(crate) async fn load_daily(
    state: &AppState,
    sign: Sign,
    lang: Lang,
    parts: &LocalParts,
) -> CachedDaily {
    if !in_cache_window(parts) {
        debug!(date = %parts.date_key, sign = %sign, "outside cache window, composing uncached");
        return CachedDaily::new(compose_base(sign, lang, parts));
    }

    let key = CacheKey::new(parts.date_key.clone(), sign, lang);
    if let Some(hit) = state.cache.get(&key).await {
        return hit;
    }

    let mut rich = compose_base(sign, lang, parts);
    rich.text = state.polish.polish(&rich.text, lang).await;
    let entry = CachedDaily::new(rich);
    state.cache.put(entry.clone()).await;
    info!(date = %key.date, sign = %sign, lang = %lang, "composed daily record");
    entry
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /daily?sign=&lang=&date=
pub async fn handle_get_daily(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<DailyQuery>,
) -> Result<Json<DailyResponse>, AppError> {
    let sign = parse_sign(query.sign.as_deref())?;
    let lang = parse_lang(query.lang.as_deref())?;
    let parts = resolve_day(query.date.as_deref())?;

    let entry = load_daily(&state, sign, lang, &parts).await;
    Ok(Json(DailyResponse::new(entry, None)))
}

/// POST /daily
pub async fn handle_post_daily(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DailyRequest>,
) -> Result<Json<DailyResponse>, AppError> {
    let sign = parse_sign(req.sign.as_deref())?;
    let lang = parse_lang(req.lang.as_deref())?;
    let parts = resolve_day(req.date.as_deref())?;

    let entry = load_daily(&state, sign, lang, &parts).await;
    Ok(Json(DailyResponse::new(entry, req.user.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::clock::parts_from_date;

    #[test]
    fn test_parse_sign_validates() {
        assert_eq!(parse_sign(Some(" Leo ")).unwrap(), Sign::Leo);
        assert!(matches!(parse_sign(None), Err(AppError::Validation(_))));
        assert!(matches!(parse_sign(Some("pluto")), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_lang_defaults_to_english() {
        assert_eq!(parse_lang(None).unwrap(), Lang::En);
        assert_eq!(parse_lang(Some("hi")).unwrap(), Lang::Hi);
        assert!(parse_lang(Some("fr")).is_err());
    }

    #[test]
    fn test_resolve_day_rejects_bad_dates() {
        assert_eq!(resolve_day(Some("2025-07-04")).unwrap().date_key, "2025-07-04");
        assert!(resolve_day(Some("04/07/2025")).is_err());
        assert!(matches!(
            resolve_day(Some("+262142-12-31")),
            Err(AppError::Validation(_))
        ));
        assert!(resolve_day(None).is_ok());
    }

    #[test]
    fn test_cache_window_is_centered_on_today() {
        let now = today();
        let shifted = |days| parts_from_date(now.date + chrono::Duration::days(days));
        assert!(in_cache_window(&now));
        assert!(in_cache_window(&shifted(CACHE_WINDOW_DAYS)));
        assert!(in_cache_window(&shifted(-CACHE_WINDOW_DAYS)));
        assert!(!in_cache_window(&shifted(CACHE_WINDOW_DAYS + 1)));
        assert!(!in_cache_window(&shifted(-400)));
    }
}
