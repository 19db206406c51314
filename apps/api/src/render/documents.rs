//! Builders from composed content to `ReportDocument`.

use chrono::NaiveDate;

use crate::content::clock::display_date;
use crate::content::composer::DailyContent;
use crate::content::locale::Lang;
use crate::content::packages::{PackageContent, YearlyRoadmap};
use crate::content::tables::{GemstoneAdvice, MantraAdvice, Sign};
use crate::content::weekly::WeeklyContent;
use crate::models::user::UserProfile;
use crate::render::{ReportDocument, Section};

/// Request-scoped presentation inputs shared by every builder.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub lang: Lang,
    pub brand_name: &'a str,
    pub user: Option<&'a UserProfile>,
}

impl ReportContext<'_> {
    fn header_lines(&self) -> Vec<String> {
        let l = &self.lang.resources().labels;
        let mut lines = Vec::new();
        if let Some(user) = self.user {
            if let Some(name) = user.display_name() {
                lines.push(format!("{}: {}", l.prepared_for, name));
            }
            if let Some(birth) = user.birth_summary() {
                lines.push(format!("{}: {}", l.birth_details, birth));
            }
        }
        lines
    }

    fn footer(&self) -> Option<String> {
        Some(format!(
            "{} · {}",
            self.brand_name,
            self.lang.resources().disclaimer
        ))
    }

    fn title(&self, sign: Sign, title: &str) -> String {
        format!("{} • {}", sign.display_name(self.lang), title)
    }
}

fn date_label(date_key: &str, lang: Lang) -> String {
    NaiveDate::parse_from_str(date_key, "%Y-%m-%d")
        .map(|d| display_date(d, lang))
        .unwrap_or_else(|_| date_key.to_string())
}

/// Splits free text into paragraphs on blank lines, dropping markdown emphasis.
pub fn paragraphs_from_text(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| {
            p.lines()
                .map(|l| l.trim().trim_start_matches("- ").replace("**", "").replace('_', ""))
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn daily_document(day: &DailyContent, ctx: &ReportContext<'_>) -> ReportDocument {
    let l = &ctx.lang.resources().labels;
    let mut header_lines = vec![day.header.clone()];
    header_lines.extend(ctx.header_lines());

    let mut sections = vec![
        Section::new(day.greeting.clone()).paragraph(day.opening_line.clone()),
        Section::new(l.opportunities).bullets(day.opportunities.iter().cloned()),
        Section::new(l.cautions).bullets(day.cautions.iter().cloned()),
        Section::new(l.remedy)
            .paragraph(day.remedy.clone())
            .bullet(format!("{}: {}", l.lucky_color, day.lucky_color))
            .bullet(format!("{}: {}", l.lucky_number, day.lucky_number)),
        Section::new(l.vedic_timings).bullets(
            day.vedic_timings
                .labelled(ctx.lang)
                .iter()
                .map(|(label, window)| format!("{label}: {window}")),
        ),
        Section::new(l.ruling_pair)
            .paragraph(day.ruling_pair.name.clone())
            .bullet(format!("{}: {}", l.ritual, day.ruling_pair.ritual)),
    ];

    if let Some(special) = &day.special_day {
        sections.push(
            Section::new(l.special_day).bullets(
                [special.birthday.as_ref(), special.observance.as_ref()]
                    .into_iter()
                    .flatten()
                    .cloned(),
            ),
        );
    }

    ReportDocument {
        title: ctx.title(day.sign, l.daily_title),
        subtitle: Some(date_label(&day.date, ctx.lang)),
        header_lines,
        sections,
        footer: ctx.footer(),
    }
}

pub fn weekly_document(week: &WeeklyContent, ctx: &ReportContext<'_>) -> ReportDocument {
    let res = ctx.lang.resources();
    let l = &res.labels;

    let mut sections: Vec<Section> = week
        .days
        .iter()
        .map(|day| {
            let weekday = res.weekday_names[day.weekday_index as usize % 7];
            Section::new(format!("{weekday}, {}", date_label(&day.date, ctx.lang)))
                .paragraph(day.opening_line.clone())
                .bullet(format!("{}: {}", l.opportunities, day.opportunities.join("; ")))
                .bullet(format!(
                    "{}: {} · {}: {}",
                    l.lucky_color, day.lucky_color, l.lucky_number, day.lucky_number
                ))
                .bullet(format!("{}: {}", l.rahu_kaal, day.vedic_timings.rahu_kaal))
                .bullet(format!("{}: {}", l.remedy, day.remedy))
        })
        .collect();
    sections.push(Section::new(l.focus).paragraph(week.focus.clone()));

    ReportDocument {
        title: ctx.title(week.sign, l.weekly_title),
        subtitle: Some(format!(
            "{} {} – {}",
            l.week_of,
            date_label(&week.start_date, ctx.lang),
            date_label(&week.end_date, ctx.lang)
        )),
        header_lines: ctx.header_lines(),
        sections,
        footer: ctx.footer(),
    }
}

pub fn gemstone_document(gem: &GemstoneAdvice, ctx: &ReportContext<'_>) -> ReportDocument {
    let res = ctx.lang.resources();
    let l = &res.labels;

    let mut advice = Section::new(l.primary_gem)
        .paragraph(gem.primary)
        .bullet(format!("{}: {}", l.alternate_gem, gem.alternate))
        .bullet(format!("{}: {}", l.how_to_wear, gem.wearing));
    if let Some(caveat) = gem.caveat {
        advice = advice.bullet(format!("{}: {}", l.caveat, caveat));
    }

    ReportDocument {
        title: ctx.title(gem.sign, l.gemstone_title),
        subtitle: Some(format!("{}: {}", l.ruling_planet, gem.planet_name)),
        header_lines: ctx.header_lines(),
        sections: vec![advice, Section::new(l.note).bullets(res.gemstone_notes)],
        footer: ctx.footer(),
    }
}

pub fn mantra_document(mantra: &MantraAdvice, ctx: &ReportContext<'_>) -> ReportDocument {
    let res = ctx.lang.resources();
    let l = &res.labels;

    ReportDocument {
        title: ctx.title(mantra.sign, l.mantra_title),
        subtitle: Some(format!("{}: {}", l.ruling_planet, mantra.planet_name)),
        header_lines: ctx.header_lines(),
        sections: vec![
            Section::new(l.seed_mantra)
                .paragraph(mantra.mantra)
                .bullet(format!("{}: {}", l.recitations, mantra.recitations)),
            Section::new(l.practice).bullets(res.mantra_practice),
        ],
        footer: ctx.footer(),
    }
}

pub fn yearly_document(road: &YearlyRoadmap, ctx: &ReportContext<'_>) -> ReportDocument {
    let l = &ctx.lang.resources().labels;

    let mut sections: Vec<Section> = road
        .months
        .iter()
        .map(|month| {
            Section::new(month.label.clone())
                .paragraph(month.theme.clone())
                .bullet(format!("{}: {}", l.lucky_color, month.lucky_color))
        })
        .collect();
    sections.push(Section::new(l.focus).paragraph(road.focus.clone()));

    let subtitle = match (road.months.first(), road.months.last()) {
        (Some(first), Some(last)) => Some(format!("{} – {}", first.label, last.label)),
        _ => None,
    };

    ReportDocument {
        title: ctx.title(road.sign, l.yearly_title),
        subtitle,
        header_lines: ctx.header_lines(),
        sections,
        footer: ctx.footer(),
    }
}

/// Baseline document for a package, with the LLM narrative and the reader's notes
/// placed ahead of the structured sections when present.
pub fn package_document(
    content: &PackageContent,
    narrative: Option<&str>,
    notes: Option<&str>,
    ctx: &ReportContext<'_>,
) -> ReportDocument {
    let mut doc = match content {
        PackageContent::Daily(day) => daily_document(day, ctx),
        PackageContent::Weekly(week) => weekly_document(week, ctx),
        PackageContent::Gemstone(gem) => gemstone_document(gem, ctx),
        PackageContent::Mantra(mantra) => mantra_document(mantra, ctx),
        PackageContent::Yearly(road) => yearly_document(road, ctx),
    };

    let l = &ctx.lang.resources().labels;
    let mut lead = Vec::new();
    if let Some(notes) = notes.map(str::trim).filter(|n| !n.is_empty()) {
        lead.push(Section::new(l.notes).paragraph(notes));
    }
    if let Some(narrative) = narrative {
        let paragraphs = paragraphs_from_text(narrative);
        if !paragraphs.is_empty() {
            lead.push(Section {
                heading: l.insights.to_string(),
                paragraphs,
                bullets: Vec::new(),
            });
        }
    }
    doc.sections.splice(0..0, lead);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::clock::parts_for_date;
    use crate::content::composer::compose_base;
    use crate::content::packages::{build_package, PackageKind};
    use crate::content::tables::{gemstone_for, mantra_for};

    fn ctx(user: Option<&UserProfile>) -> ReportContext<'_> {
        ReportContext {
            lang: Lang::En,
            brand_name: "Astro-Baba",
            user,
        }
    }

    #[test]
    fn test_daily_document_has_timings_and_footer() {
        let day = compose_base(Sign::Leo, Lang::En, &parts_for_date("2025-07-04").unwrap());
        let doc = daily_document(&day, &ctx(None));
        assert_eq!(doc.title, "Leo • Daily Horoscope");
        assert_eq!(doc.subtitle.as_deref(), Some("4th Jul 2025"));
        let timings = doc.sections.iter().find(|s| s.heading == "Vedic timings").unwrap();
        assert_eq!(timings.bullets.len(), 4);
        assert!(timings.bullets[0].starts_with("Rahu Kaal: 10:30–12:00"));
        assert!(doc.footer.unwrap().starts_with("Astro-Baba · "));
    }

    #[test]
    fn test_header_lines_include_user() {
        let user = UserProfile {
            name: Some("Asha".to_string()),
            dob: Some("1990-07-04".to_string()),
            place: Some("Pune".to_string()),
            ..Default::default()
        };
        let day = compose_base(Sign::Leo, Lang::En, &parts_for_date("2025-07-04").unwrap());
        let doc = daily_document(&day, &ctx(Some(&user)));
        assert!(doc.header_lines.contains(&"Prepared for: Asha".to_string()));
        assert!(doc.header_lines.iter().any(|l| l.contains("Pune")));
    }

    #[test]
    fn test_gemstone_document_carries_aquarius_caveat() {
        let doc = gemstone_document(&gemstone_for(Sign::Aquarius, Lang::En), &ctx(None));
        assert!(doc.sections[0].bullets.iter().any(|b| b.starts_with("Caution: ")));
    }

    #[test]
    fn test_mantra_document_lists_recitations() {
        let doc = mantra_document(&mantra_for(Sign::Leo, Lang::En), &ctx(None));
        assert!(doc.sections[0].bullets.contains(&"Recitations: 108".to_string()));
    }

    #[test]
    fn test_package_document_puts_narrative_first() {
        let today = parts_for_date("2025-07-04").unwrap();
        let content = build_package(PackageKind::Yearly, Sign::Virgo, Lang::En, &today, None);
        let doc = package_document(
            &content,
            Some("**A year of growth.**\n\nPace yourself."),
            Some("Career change?"),
            &ctx(None),
        );
        assert_eq!(doc.sections[0].heading, "Your notes");
        assert_eq!(doc.sections[1].heading, "Insights");
        assert_eq!(doc.sections[1].paragraphs, vec!["A year of growth.", "Pace yourself."]);
        // 12 months + focus follow.
        assert_eq!(doc.sections.len(), 2 + 13);
    }

    #[test]
    fn test_paragraphs_from_text_flattens_markdown() {
        let paragraphs = paragraphs_from_text("**Leo • 4th Jul 2025**\nFRIDAY\n\n- one\n- two\n\n\n");
        assert_eq!(paragraphs, vec!["Leo • 4th Jul 2025 FRIDAY", "one two"]);
    }
}
