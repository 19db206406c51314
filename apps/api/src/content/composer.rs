//! Content Composer: assembles the daily record from seeds, tables and locale pools.
//!
//! Flow: local parts → seed → leads/bullets/colour picks → weekday tables →
//!       observance check → legacy text. Personalization (named greeting, birthday)
//!       is applied on top by `personalize` so the cached base stays anonymous.
//!
//! Every step is pure. Composition cannot fail for a parsed `Sign` and `Lang`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::clock::{display_date, header_date, to_local_parts, LocalParts};
use crate::content::locale::Lang;
use crate::content::selector::{hash_key, pick, pick_n};
use crate::content::tables::{observance_for, ruling_pair, time_windows, Sign, TimeWindows};
use crate::models::user::UserProfile;

/// Stride applied to the sign index when picking the opening line.
const LEAD_SIGN_STRIDE: u32 = 7;
const OPPORTUNITY_SALT: u32 = 101;
const CAUTION_SALT: u32 = 211;
const COLOR_SALT: u32 = 307;
const BULLETS_PER_LIST: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The four named windows, serialized with stable keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicTimings {
    pub rahu_kaal: String,
    pub yamaganda: String,
    pub gulika_kaal: String,
    pub abhijit_muhurat: String,
}

impl From<&TimeWindows> for VedicTimings {
    fn from(w: &TimeWindows) -> Self {
        Self {
            rahu_kaal: w.rahu_kaal.to_string(),
            yamaganda: w.yamaganda.to_string(),
            gulika_kaal: w.gulika_kaal.to_string(),
            abhijit_muhurat: w.abhijit_muhurat.to_string(),
        }
    }
}

impl VedicTimings {
    /// `(label, window)` pairs in display order.
    pub fn labelled(&self, lang: Lang) -> [(&'static str, &str); 4] {
        let l = &lang.resources().labels;
        [
            (l.rahu_kaal, self.rahu_kaal.as_str()),
            (l.yamaganda, self.yamaganda.as_str()),
            (l.gulika_kaal, self.gulika_kaal.as_str()),
            (l.abhijit_muhurat, self.abhijit_muhurat.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulingPair {
    pub name: String,
    pub ritual: String,
}

/// Birthday and/or observance for the day. Absent entirely when neither applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub birthday: Option<String>,
    pub observance: Option<String>,
}

/// One composed daily record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyContent {
    pub date: String,
    pub sign: Sign,
    pub lang: Lang,
    pub weekday_index: u8,
    pub seed: u32,
    pub header: String,
    pub greeting: String,
    pub opening_line: String,
    pub lucky_color: String,
    pub lucky_number: u8,
    pub opportunities: Vec<String>,
    pub cautions: Vec<String>,
    pub remedy: String,
    pub vedic_timings: VedicTimings,
    pub ruling_pair: RulingPair,
    pub special_day: Option<SpecialDay>,
    pub policy_disclaimer: String,
    /// Flattened markdown-like rendering for plain-text consumers.
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Seed for a record: FNV-1a of `"{YYYY-MM}|{sign}|{YYYY-MM-DD}"`.
pub fn daily_seed(sign: Sign, parts: &LocalParts) -> u32 {
    hash_key(&format!(
        "{}|{}|{}",
        parts.year_month(),
        sign.id(),
        parts.date_key
    ))
}

/// `((dayOfMonth + signIndex) mod 9) + 1`, always in 1..=9.
pub fn lucky_number(day_of_month: u32, sign: Sign) -> u8 {
    ((day_of_month + sign.index() as u32) % 9 + 1) as u8
}

/// Composes and personalizes the record for `instant`.
pub fn compose(
    sign: Sign,
    lang: Lang,
    instant: DateTime<Utc>,
    user: Option<&UserProfile>,
) -> DailyContent {
    let base = compose_base(sign, lang, &to_local_parts(instant));
    personalize(base, user)
}

/// Deterministic, anonymous record for a calendar day. This is what gets cached.
pub fn compose_base(sign: Sign, lang: Lang, parts: &LocalParts) -> DailyContent {
    let res = lang.resources();
    let seed = daily_seed(sign, parts);
    let sign_offset = (sign.index() as u32).wrapping_mul(LEAD_SIGN_STRIDE);

    let opening_line = pick(res.leads, seed.wrapping_add(sign_offset))
        .copied()
        .unwrap_or_default()
        .to_string();
    let opportunities = to_owned(pick_n(
        res.opportunities,
        BULLETS_PER_LIST,
        seed.wrapping_add(OPPORTUNITY_SALT),
    ));
    let cautions = to_owned(pick_n(
        res.cautions,
        BULLETS_PER_LIST,
        seed.wrapping_add(CAUTION_SALT),
    ));
    let lucky_color = pick(res.colors, seed.wrapping_add(COLOR_SALT))
        .copied()
        .unwrap_or_default()
        .to_string();

    let weekday = parts.weekday_index as usize % 7;
    let (pair_name, ritual) = ruling_pair(parts.weekday_index, lang);

    let special_day = observance_for(parts.month_day(), lang).map(|name| SpecialDay {
        birthday: None,
        observance: Some(res.observance_message.replace("{name}", name)),
    });

    let mut content = DailyContent {
        date: parts.date_key.clone(),
        sign,
        lang,
        weekday_index: parts.weekday_index,
        seed,
        header: header_date(parts.date, lang),
        greeting: res.greeting.to_string(),
        opening_line,
        lucky_color,
        lucky_number: lucky_number(parts.day_of_month(), sign),
        opportunities,
        cautions,
        remedy: res.remedies[weekday].to_string(),
        vedic_timings: VedicTimings::from(time_windows(parts.weekday_index)),
        ruling_pair: RulingPair {
            name: pair_name.to_string(),
            ritual: ritual.to_string(),
        },
        special_day,
        policy_disclaimer: res.disclaimer.to_string(),
        text: String::new(),
    };
    content.text = render_legacy_text(&content);
    content
}

/// Applies request-scoped user details: named greeting and birthday match.
///
/// The birthday line is appended to `text` so plain-text consumers see it too.
pub fn personalize(mut content: DailyContent, user: Option<&UserProfile>) -> DailyContent {
    let Some(user) = user else {
        return content;
    };
    let res = content.lang.resources();

    if let Some(name) = user.display_name() {
        content.greeting = res.greeting_named.replace("{name}", name);
    }

    let today_md = content.date.get(5..).unwrap_or_default();
    if user.birth_month_day().as_deref() == Some(today_md) {
        let message = match user.display_name() {
            Some(name) => res.birthday_named.replace("{name}", name),
            None => res.birthday.to_string(),
        };
        content.text.push_str(&format!("\n\n**{message}**"));
        let special = content.special_day.get_or_insert(SpecialDay {
            birthday: None,
            observance: None,
        });
        special.birthday = Some(message);
    }

    content
}

fn to_owned(items: Vec<&'static str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

/// Markdown-like flattening kept for plain-text clients.
pub fn render_legacy_text(c: &DailyContent) -> String {
    let res = c.lang.resources();
    let l = &res.labels;
    let date_label = chrono::NaiveDate::parse_from_str(&c.date, "%Y-%m-%d")
        .map(|d| display_date(d, c.lang))
        .unwrap_or_else(|_| c.date.clone());

    let mut out = format!(
        "**{} • {}**\n{}\n\n{}\n\n**{}**\n",
        c.sign.display_name(c.lang),
        date_label,
        c.header,
        c.opening_line,
        l.opportunities
    );
    for item in &c.opportunities {
        out.push_str(&format!("- {item}\n"));
    }
    out.push_str(&format!("\n**{}**\n", l.cautions));
    for item in &c.cautions {
        out.push_str(&format!("- {item}\n"));
    }
    out.push_str(&format!("\n**{}**: {}\n", l.remedy, c.remedy));
    out.push_str(&format!(
        "**{}**: {} · **{}**: {}\n",
        l.lucky_color, c.lucky_color, l.lucky_number, c.lucky_number
    ));
    let windows = c
        .vedic_timings
        .labelled(c.lang)
        .iter()
        .map(|(label, window)| format!("{label} {window}"))
        .collect::<Vec<_>>()
        .join(" · ");
    out.push_str(&format!("**{}**: {}\n", l.vedic_timings, windows));
    out.push_str(&format!(
        "**{}**: {} ({})\n",
        l.ruling_pair, c.ruling_pair.name, c.ruling_pair.ritual
    ));
    if let Some(observance) = c.special_day.as_ref().and_then(|s| s.observance.as_ref()) {
        out.push_str(&format!("**{}**: {}\n", l.special_day, observance));
    }
    out.push_str(&format!("\n_{}_", c.policy_disclaimer));
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::clock::parts_for_date;
    use crate::content::tables::ALL_SIGNS;
    use std::collections::HashSet;

    fn base(sign: Sign, lang: Lang, date: &str) -> DailyContent {
        compose_base(sign, lang, &parts_for_date(date).unwrap())
    }

    fn user_with_dob(dob: &str) -> UserProfile {
        UserProfile {
            name: Some("Asha".to_string()),
            dob: Some(dob.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_composition_is_byte_stable() {
        for lang in [Lang::En, Lang::Hi] {
            let a = base(Sign::Leo, lang, "2025-07-04");
            let b = base(Sign::Leo, lang, "2025-07-04");
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_vec(&a).unwrap(),
                serde_json::to_vec(&b).unwrap()
            );
        }
    }

    #[test]
    fn test_seed_uses_month_salted_key() {
        let parts = parts_for_date("2025-07-04").unwrap();
        assert_eq!(daily_seed(Sign::Leo, &parts), hash_key("2025-07|leo|2025-07-04"));
    }

    #[test]
    fn test_same_day_of_month_in_different_months_changes_seed() {
        let july = base(Sign::Virgo, Lang::En, "2025-07-14");
        let august = base(Sign::Virgo, Lang::En, "2025-08-14");
        assert_ne!(july.seed, august.seed);
    }

    #[test]
    fn test_month_rotation_usually_changes_phrases() {
        let mut differing = 0;
        for sign in ALL_SIGNS {
            let jan = base(sign, Lang::En, "2025-01-10");
            let feb = base(sign, Lang::En, "2025-02-10");
            if (&jan.opening_line, &jan.opportunities, &jan.cautions)
                != (&feb.opening_line, &feb.opportunities, &feb.cautions)
            {
                differing += 1;
            }
        }
        assert!(differing >= 10, "only {differing}/12 signs rotated phrases");
    }

    #[test]
    fn test_bullets_are_three_distinct() {
        for sign in ALL_SIGNS {
            for day in 1..=28 {
                let c = base(sign, Lang::En, &format!("2025-03-{day:02}"));
                assert_eq!(c.opportunities.len(), 3);
                assert_eq!(c.cautions.len(), 3);
                let opp: HashSet<_> = c.opportunities.iter().collect();
                let cau: HashSet<_> = c.cautions.iter().collect();
                assert_eq!(opp.len(), 3);
                assert_eq!(cau.len(), 3);
            }
        }
    }

    #[test]
    fn test_selection_follows_salted_seeds() {
        let c = base(Sign::Leo, Lang::En, "2025-07-04");
        let res = Lang::En.resources();
        let expected_lead = pick(res.leads, c.seed.wrapping_add(4 * 7)).unwrap();
        assert_eq!(c.opening_line, *expected_lead);
        let expected_opps = pick_n(res.opportunities, 3, c.seed.wrapping_add(101));
        assert_eq!(c.opportunities, to_owned(expected_opps));
        let expected_color = pick(res.colors, c.seed.wrapping_add(307)).unwrap();
        assert_eq!(c.lucky_color, *expected_color);
    }

    #[test]
    fn test_lucky_number_always_in_range() {
        for sign in ALL_SIGNS {
            for day in 1..=31 {
                let n = lucky_number(day, sign);
                assert!((1..=9).contains(&n), "{sign} day {day} gave {n}");
            }
        }
        assert_eq!(lucky_number(4, Sign::Leo), 9);
        assert_eq!(lucky_number(5, Sign::Leo), 1);
    }

    #[test]
    fn test_remedy_and_windows_follow_weekday() {
        // 2025-07-04 is a Friday.
        let c = base(Sign::Aries, Lang::En, "2025-07-04");
        assert_eq!(c.weekday_index, 5);
        assert_eq!(c.remedy, Lang::En.resources().remedies[5]);
        assert_eq!(c.vedic_timings.rahu_kaal, "10:30–12:00");
        assert_eq!(c.ruling_pair.name, "Goddess Lakshmi – Venus");
    }

    #[test]
    fn test_birthday_match_sets_birthday() {
        let c = personalize(
            base(Sign::Cancer, Lang::En, "2025-07-04"),
            Some(&user_with_dob("1990-07-04")),
        );
        let special = c.special_day.expect("birthday should produce a special day");
        assert!(special.birthday.unwrap().contains("Asha"));
        assert!(special.observance.is_none());
        assert_eq!(c.greeting, "Namaste, Asha!");
        assert!(c.text.contains("Happy birthday, Asha!"));
    }

    #[test]
    fn test_observance_without_birthday() {
        let c = personalize(
            base(Sign::Cancer, Lang::En, "2025-01-26"),
            Some(&user_with_dob("1990-07-04")),
        );
        let special = c.special_day.expect("Republic Day is an observance");
        assert!(special.birthday.is_none());
        assert!(special.observance.unwrap().contains("Republic Day"));
    }

    #[test]
    fn test_plain_day_has_no_special_day() {
        let c = personalize(
            base(Sign::Cancer, Lang::En, "2025-03-17"),
            Some(&user_with_dob("1990-07-04")),
        );
        assert!(c.special_day.is_none());
    }

    #[test]
    fn test_birthday_on_observance_combines_both() {
        let c = personalize(
            base(Sign::Leo, Lang::En, "2025-08-15"),
            Some(&user_with_dob("2001-08-15")),
        );
        let special = c.special_day.unwrap();
        assert!(special.birthday.is_some());
        assert!(special.observance.is_some());
    }

    #[test]
    fn test_personalize_without_user_is_identity() {
        let c = base(Sign::Leo, Lang::En, "2025-07-04");
        assert_eq!(personalize(c.clone(), None), c);
    }

    #[test]
    fn test_legacy_text_header_line() {
        let c = base(Sign::Leo, Lang::En, "2025-07-04");
        assert!(c.text.starts_with("**Leo • 4th Jul 2025**\nFRIDAY, 4 JULY 2025"));
        assert!(c.text.contains("Rahu Kaal 10:30–12:00"));
        let hi = base(Sign::Leo, Lang::Hi, "2025-07-04");
        assert!(hi.text.starts_with("**सिंह • 4 जुलाई 2025**"));
    }

    #[test]
    fn test_compose_from_instant_uses_ist_date() {
        use chrono::TimeZone;
        // 20:00 UTC on the 3rd is already the 4th in IST.
        let instant = Utc.with_ymd_and_hms(2025, 7, 3, 20, 0, 0).unwrap();
        let c = compose(Sign::Leo, Lang::En, instant, None);
        assert_eq!(c.date, "2025-07-04");
    }
}
