//! Fixed astrological tables.
//!
//! The time-window literals are user-facing domain data (12-hour day, sunrise at
//! 06:00) and must not be recomputed. Localized names live in `content::locale`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::locale::Lang;

// ────────────────────────────────────────────────────────────────────────────
// Signs and planets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Canonical zodiac order; a sign's position here is its `index()`.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

#[derive(Debug, Error)]
#[error("unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl Sign {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase identifier used in seeds, cache keys and JSON.
    pub fn id(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }

    pub fn display_name(self, lang: Lang) -> &'static str {
        lang.resources().sign_names[self.index()]
    }

    pub fn ruling_planet(self) -> Planet {
        match self {
            Sign::Aries | Sign::Scorpio => Planet::Mars,
            Sign::Taurus | Sign::Libra => Planet::Venus,
            Sign::Gemini | Sign::Virgo => Planet::Mercury,
            Sign::Cancer => Planet::Moon,
            Sign::Leo => Planet::Sun,
            Sign::Sagittarius | Sign::Pisces => Planet::Jupiter,
            Sign::Capricorn | Sign::Aquarius => Planet::Saturn,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Sign {
    type Err = UnknownSign;

    /// Accepts the English id in any case, or the localized display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| {
                sign.id() == needle
                    || [Lang::En, Lang::Hi]
                        .iter()
                        .any(|l| sign.display_name(*l).to_lowercase() == needle)
            })
            .ok_or_else(|| UnknownSign(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self, lang: Lang) -> &'static str {
        lang.resources().planets[self.index()].name
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Weekday tables
// ────────────────────────────────────────────────────────────────────────────

/// The four named daily windows for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindows {
    pub rahu_kaal: &'static str,
    pub yamaganda: &'static str,
    pub gulika_kaal: &'static str,
    pub abhijit_muhurat: &'static str,
}

/// Midday window, identical on every weekday.
pub const ABHIJIT_MUHURAT: &str = "11:36–12:24";

/// Indexed by weekday, Sunday = 0.
pub const TIME_WINDOWS: [TimeWindows; 7] = [
    TimeWindows {
        rahu_kaal: "16:30–18:00",
        yamaganda: "12:00–13:30",
        gulika_kaal: "15:00–16:30",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "07:30–09:00",
        yamaganda: "10:30–12:00",
        gulika_kaal: "13:30–15:00",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "15:00–16:30",
        yamaganda: "09:00–10:30",
        gulika_kaal: "12:00–13:30",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "12:00–13:30",
        yamaganda: "07:30–09:00",
        gulika_kaal: "10:30–12:00",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "13:30–15:00",
        yamaganda: "06:00–07:30",
        gulika_kaal: "09:00–10:30",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "10:30–12:00",
        yamaganda: "15:00–16:30",
        gulika_kaal: "07:30–09:00",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
    TimeWindows {
        rahu_kaal: "09:00–10:30",
        yamaganda: "13:30–15:00",
        gulika_kaal: "06:00–07:30",
        abhijit_muhurat: ABHIJIT_MUHURAT,
    },
];

/// Planet ruling each weekday, Sunday = 0.
pub const WEEKDAY_RULERS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

pub fn time_windows(weekday_index: u8) -> &'static TimeWindows {
    &TIME_WINDOWS[weekday_index as usize % 7]
}

/// Deity/planet pair name and ritual suggestion for a weekday.
pub fn ruling_pair(weekday_index: u8, lang: Lang) -> (&'static str, &'static str) {
    let res = lang.resources();
    let idx = weekday_index as usize % 7;
    (res.ruling_pairs[idx], res.rituals[idx])
}

// ────────────────────────────────────────────────────────────────────────────
// Gemstones and mantras
// ────────────────────────────────────────────────────────────────────────────

/// Recitation count for every seed mantra.
pub const MANTRA_RECITATIONS: u32 = 108;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GemstoneAdvice {
    pub sign: Sign,
    pub planet: Planet,
    pub planet_name: &'static str,
    pub primary: &'static str,
    pub alternate: &'static str,
    pub wearing: &'static str,
    pub caveat: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MantraAdvice {
    pub sign: Sign,
    pub planet: Planet,
    pub planet_name: &'static str,
    pub mantra: &'static str,
    pub recitations: u32,
}

pub fn gemstone_for(sign: Sign, lang: Lang) -> GemstoneAdvice {
    let res = lang.resources();
    let planet = sign.ruling_planet();
    let text = &res.planets[planet.index()];

    // Aquarius wears Amethyst rather than Saturn's Blue Sapphire.
    if sign == Sign::Aquarius {
        let over = &res.aquarius_gem;
        return GemstoneAdvice {
            sign,
            planet,
            planet_name: text.name,
            primary: over.primary_gem,
            alternate: over.alternate_gem,
            wearing: text.wearing,
            caveat: Some(over.caveat),
        };
    }

    GemstoneAdvice {
        sign,
        planet,
        planet_name: text.name,
        primary: text.primary_gem,
        alternate: text.alternate_gem,
        wearing: text.wearing,
        caveat: None,
    }
}

pub fn mantra_for(sign: Sign, lang: Lang) -> MantraAdvice {
    let planet = sign.ruling_planet();
    let text = &lang.resources().planets[planet.index()];
    MantraAdvice {
        sign,
        planet,
        planet_name: text.name,
        mantra: text.mantra,
        recitations: MANTRA_RECITATIONS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed-date observances
// ────────────────────────────────────────────────────────────────────────────

/// `MM-DD` keys; the position is the index into `Resources::observances`.
pub const OBSERVANCES: [&str; 7] = ["01-01", "01-26", "03-08", "06-21", "08-15", "10-02", "11-14"];

pub fn observance_for(month_day: &str, lang: Lang) -> Option<&'static str> {
    OBSERVANCES
        .iter()
        .position(|md| *md == month_day)
        .map(|idx| lang.resources().observances[idx])
}
