//! Package baselines: deterministic content behind the report endpoints.
//!
//! Each package has a structured form (rendered to PDF) and a plain-text grounding
//! form (handed to the LLM so factual fields survive any rewording).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::clock::LocalParts;
use crate::content::composer::{compose_base, personalize, DailyContent};
use crate::content::locale::Lang;
use crate::content::selector::{hash_key, pick};
use crate::content::tables::{gemstone_for, mantra_for, GemstoneAdvice, MantraAdvice, Sign};
use crate::content::weekly::{compose_week, focus_line, WeeklyContent};
use crate::models::user::UserProfile;

const ROADMAP_MONTHS: u32 = 12;
const ROADMAP_COLOR_SALT: u32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Daily,
    Weekly,
    Gemstone,
    Mantra,
    #[serde(alias = "roadmap", alias = "year")]
    Yearly,
}

#[derive(Debug, Error)]
#[error("unknown package: {0}")]
pub struct UnknownPackage(pub String);

impl FromStr for PackageKind {
    type Err = UnknownPackage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(PackageKind::Daily),
            "weekly" => Ok(PackageKind::Weekly),
            "gemstone" | "gem" => Ok(PackageKind::Gemstone),
            "mantra" => Ok(PackageKind::Mantra),
            "yearly" | "roadmap" | "year" => Ok(PackageKind::Yearly),
            other => Err(UnknownPackage(other.to_string())),
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageKind::Daily => "daily",
            PackageKind::Weekly => "weekly",
            PackageKind::Gemstone => "gemstone",
            PackageKind::Mantra => "mantra",
            PackageKind::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOutlook {
    /// `YYYY-MM`
    pub month_key: String,
    pub label: String,
    pub theme: String,
    pub lucky_color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRoadmap {
    pub sign: Sign,
    pub lang: Lang,
    pub months: Vec<MonthOutlook>,
    pub focus: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "package", rename_all = "lowercase")]
pub enum PackageContent {
    Daily(DailyContent),
    Weekly(WeeklyContent),
    Gemstone(GemstoneAdvice),
    Mantra(MantraAdvice),
    Yearly(YearlyRoadmap),
}

/// Twelve months starting with the month of `start`.
pub fn compose_roadmap(
    sign: Sign,
    lang: Lang,
    start: &LocalParts,
    user: Option<&UserProfile>,
) -> YearlyRoadmap {
    let res = lang.resources();
    let first = NaiveDate::from_ymd_opt(start.date.year(), start.date.month(), 1)
        .unwrap_or(start.date);

    let months = (0..ROADMAP_MONTHS)
        .filter_map(|offset| first.checked_add_months(chrono::Months::new(offset)))
        .map(|month| {
            let month_key = month.format("%Y-%m").to_string();
            let seed = hash_key(&format!("{}|{}", sign.id(), month_key));
            MonthOutlook {
                label: format!("{} {}", res.month_names[month.month0() as usize], month.year()),
                theme: pick(res.monthly_themes, seed)
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                lucky_color: pick(res.colors, seed.wrapping_add(ROADMAP_COLOR_SALT))
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
                month_key,
            }
        })
        .collect();

    YearlyRoadmap {
        sign,
        lang,
        months,
        focus: focus_line(lang, user).to_string(),
    }
}

/// Builds the deterministic content for a package.
pub fn build_package(
    kind: PackageKind,
    sign: Sign,
    lang: Lang,
    today: &LocalParts,
    user: Option<&UserProfile>,
) -> PackageContent {
    match kind {
        PackageKind::Daily => PackageContent::Daily(personalize(compose_base(sign, lang, today), user)),
        PackageKind::Weekly => PackageContent::Weekly(compose_week(sign, lang, today, user)),
        PackageKind::Gemstone => PackageContent::Gemstone(gemstone_for(sign, lang)),
        PackageKind::Mantra => PackageContent::Mantra(mantra_for(sign, lang)),
        PackageKind::Yearly => PackageContent::Yearly(compose_roadmap(sign, lang, today, user)),
    }
}

/// Plain-text rendering used to ground LLM narratives.
pub fn grounding_text(content: &PackageContent, lang: Lang) -> String {
    let l = &lang.resources().labels;
    match content {
        PackageContent::Daily(daily) => daily.text.clone(),
        PackageContent::Weekly(week) => {
            let mut out = format!("{}: {} – {}\n", l.week_of, week.start_date, week.end_date);
            for day in &week.days {
                out.push_str(&format!(
                    "{}: {} {}: {}. {}: {}.\n",
                    day.date,
                    day.opening_line,
                    l.opportunities,
                    day.opportunities.join("; "),
                    l.rahu_kaal,
                    day.vedic_timings.rahu_kaal
                ));
            }
            out.push_str(&format!("{}: {}", l.focus, week.focus));
            out
        }
        PackageContent::Gemstone(gem) => {
            let mut out = format!(
                "{}: {}\n{}: {}\n{}: {}\n{}: {}",
                l.ruling_planet,
                gem.planet_name,
                l.primary_gem,
                gem.primary,
                l.alternate_gem,
                gem.alternate,
                l.how_to_wear,
                gem.wearing
            );
            if let Some(caveat) = gem.caveat {
                out.push_str(&format!("\n{}: {}", l.caveat, caveat));
            }
            out
        }
        PackageContent::Mantra(m) => format!(
            "{}: {}\n{}: {}\n{}: {}",
            l.ruling_planet, m.planet_name, l.seed_mantra, m.mantra, l.recitations, m.recitations
        ),
        PackageContent::Yearly(road) => {
            let mut out = String::new();
            for month in &road.months {
                out.push_str(&format!(
                    "{}: {} ({}: {})\n",
                    month.label, month.theme, l.lucky_color, month.lucky_color
                ));
            }
            out.push_str(&format!("{}: {}", l.focus, road.focus));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::clock::parts_for_date;

    #[test]
    fn test_package_kind_parsing() {
        assert_eq!("Gemstone".parse::<PackageKind>().unwrap(), PackageKind::Gemstone);
        assert_eq!("roadmap".parse::<PackageKind>().unwrap(), PackageKind::Yearly);
        assert!("tarot".parse::<PackageKind>().is_err());
        let kind: PackageKind = serde_json::from_str("\"mantra\"").unwrap();
        assert_eq!(kind, PackageKind::Mantra);
    }

    #[test]
    fn test_roadmap_covers_twelve_months_across_year_end() {
        let start = parts_for_date("2025-10-19").unwrap();
        let road = compose_roadmap(Sign::Aries, Lang::En, &start, None);
        assert_eq!(road.months.len(), 12);
        assert_eq!(road.months[0].month_key, "2025-10");
        assert_eq!(road.months[0].label, "October 2025");
        assert_eq!(road.months[3].month_key, "2026-01");
        assert_eq!(road.months[11].month_key, "2026-09");
    }

    #[test]
    fn test_roadmap_is_deterministic() {
        let start = parts_for_date("2025-10-19").unwrap();
        let a = compose_roadmap(Sign::Libra, Lang::Hi, &start, None);
        let b = compose_roadmap(Sign::Libra, Lang::Hi, &start, None);
        let themes = |r: &YearlyRoadmap| r.months.iter().map(|m| m.theme.clone()).collect::<Vec<_>>();
        assert_eq!(themes(&a), themes(&b));
    }

    #[test]
    fn test_gemstone_grounding_mentions_caveat_for_aquarius() {
        let today = parts_for_date("2025-07-04").unwrap();
        let content = build_package(PackageKind::Gemstone, Sign::Aquarius, Lang::En, &today, None);
        let text = grounding_text(&content, Lang::En);
        assert!(text.contains("Amethyst"));
        assert!(text.contains("Caution:"));
    }

    #[test]
    fn test_daily_grounding_is_legacy_text() {
        let today = parts_for_date("2025-07-04").unwrap();
        let content = build_package(PackageKind::Daily, Sign::Leo, Lang::En, &today, None);
        assert!(grounding_text(&content, Lang::En).starts_with("**Leo • 4th Jul 2025**"));
    }

    #[test]
    fn test_mantra_grounding_keeps_count() {
        let today = parts_for_date("2025-07-04").unwrap();
        let content = build_package(PackageKind::Mantra, Sign::Leo, Lang::En, &today, None);
        let text = grounding_text(&content, Lang::En);
        assert!(text.contains("Om Hraam Hreem Hraum Sah Suryaya Namah"));
        assert!(text.contains("108"));
    }
}
