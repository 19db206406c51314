//! Weekly rollup: seven consecutive daily records plus a persona focus line.

use chrono::Duration;
use serde::Serialize;

use crate::content::clock::{parts_from_date, LocalParts};
use crate::content::composer::{compose_base, personalize, DailyContent};
use crate::content::locale::Lang;
use crate::content::tables::Sign;
use crate::models::user::UserProfile;

pub const DAYS_PER_WEEK: i64 = 7;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyContent {
    pub sign: Sign,
    pub lang: Lang,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DailyContent>,
    pub focus: String,
}

/// Focus tip for the user's persona, or the general one.
pub fn focus_line(lang: Lang, user: Option<&UserProfile>) -> &'static str {
    let res = lang.resources();
    user.and_then(|u| u.persona)
        .map(|p| res.persona_focus[p.index()])
        .unwrap_or(res.general_focus)
}

/// Composes seven days starting at `start`. Each day is seeded independently, so
/// day N of this week equals the standalone daily record for that date. Days past
/// the end of the calendar are left out.
pub fn compose_week(
    sign: Sign,
    lang: Lang,
    start: &LocalParts,
    user: Option<&UserProfile>,
) -> WeeklyContent {
    let days: Vec<DailyContent> = (0..DAYS_PER_WEEK)
        .filter_map(|offset| start.date.checked_add_signed(Duration::days(offset)))
        .map(parts_from_date)
        .map(|parts| personalize(compose_base(sign, lang, &parts), user))
        .collect();

    let end_date = days
        .last()
        .map(|d| d.date.clone())
        .unwrap_or_else(|| start.date_key.clone());

    WeeklyContent {
        sign,
        lang,
        start_date: start.date_key.clone(),
        end_date,
        days,
        focus: focus_line(lang, user).to_string(),
    }
}
