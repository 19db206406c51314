use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse occupational category used to flavor focus tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[serde(alias = "self-employed", alias = "business")]
    SelfEmployed,
    #[serde(alias = "salaried", alias = "job")]
    Employed,
    Homemaker,
    Student,
    #[serde(alias = "not-working", alias = "retired", alias = "unemployed")]
    NotWorking,
}

impl Persona {
    /// Position in `Resources::persona_focus`.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Request-scoped user details. Never persisted or cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    /// Date of birth; `YYYY-MM-DD`, `DD-MM-YYYY` or `DD/MM/YYYY`.
    pub dob: Option<String>,
    /// Time of birth, free-form (`HH:MM`).
    pub tob: Option<String>,
    pub place: Option<String>,
    pub persona: Option<Persona>,
}

const DOB_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

impl UserProfile {
    /// Trimmed, non-empty name.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        let raw = self.dob.as_deref()?.trim();
        DOB_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }

    /// `MM-DD` of the date of birth, for birthday matching.
    pub fn birth_month_day(&self) -> Option<String> {
        self.birth_date().map(|d| d.format("%m-%d").to_string())
    }

    /// One-line birth summary for report headers.
    pub fn birth_summary(&self) -> Option<String> {
        let parts: Vec<&str> = [self.dob.as_deref(), self.tob.as_deref(), self.place.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_birth_month_day_accepts_common_formats() {
        for dob in ["1990-07-04", "04-07-1990", "04/07/1990"] {
            let user = UserProfile {
                dob: Some(dob.to_string()),
                ..Default::default()
            };
            assert_eq!(user.birth_month_day().as_deref(), Some("07-04"), "{dob}");
        }
    }

    #[test]
    fn test_birth_month_day_rejects_garbage() {
        let user = UserProfile {
            dob: Some("sometime in July".to_string()),
            ..Default::default()
        };
        assert!(user.birth_month_day().is_none());
    }

    #[test]
    fn test_display_name_ignores_blank() {
        let user = UserProfile {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(user.display_name().is_none());
    }

    #[test]
    fn test_persona_aliases() {
        let user: UserProfile = serde_json::from_value(json!({
            "name": "Asha",
            "persona": "self-employed"
        }))
        .unwrap();
        assert_eq!(user.persona, Some(Persona::SelfEmployed));
        let student: Persona = serde_json::from_value(json!("student")).unwrap();
        assert_eq!(student.index(), 3);
    }

    #[test]
    fn test_birth_summary_joins_present_parts() {
        let user = UserProfile {
            dob: Some("1990-07-04".to_string()),
            place: Some("Jaipur".to_string()),
            ..Default::default()
        };
        assert_eq!(user.birth_summary().as_deref(), Some("1990-07-04 · Jaipur"));
    }
}
