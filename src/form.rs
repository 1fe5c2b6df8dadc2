//! Form state: the three user-editable input fields.
//!
//! Values are stored exactly as typed. Nothing here validates or trims;
//! the generation gate in [`crate::session`] is the only place that looks
//! at emptiness.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RoadmapError;

/// Identifies one of the form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Experience,
    Skills,
    TargetRole,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Experience, Field::Skills, Field::TargetRole];

    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            Field::Experience => "experience",
            Field::Skills => "skills",
            Field::TargetRole => "targetRole",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Experience => "Years of Experience",
            Field::Skills => "Skills (comma separated)",
            Field::TargetRole => "Target Role",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Experience => "e.g., 3",
            Field::Skills => "e.g., Java, Spring, MySQL",
            Field::TargetRole => "e.g., Senior Backend Engineer",
        }
    }

    /// Whether a typed character is accepted by this field's input control.
    ///
    /// The experience control behaves like a numeric input. This is a
    /// key-level filter only; [`FormData::update`] accepts any string.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Field::Experience => c.is_ascii_digit() || c == '.',
            Field::Skills | Field::TargetRole => !c.is_control(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Field::Experience),
            "skills" => Ok(Field::Skills),
            "targetRole" | "target_role" => Ok(Field::TargetRole),
            other => Err(RoadmapError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}

/// Parse a `name=value` assignment such as `targetRole=Staff Engineer`.
///
/// Only the first `=` splits; the value may be empty or contain `=`.
pub fn parse_assignment(s: &str) -> Result<(Field, String), RoadmapError> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| RoadmapError::MalformedAssignment {
            input: s.to_string(),
        })?;
    Ok((name.trim().parse()?, value.to_string()))
}

/// Current values of the three input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub experience: String,
    pub skills: String,
    pub target_role: String,
}

impl FormData {
    pub fn new(
        experience: impl Into<String>,
        skills: impl Into<String>,
        target_role: impl Into<String>,
    ) -> Self {
        Self {
            experience: experience.into(),
            skills: skills.into(),
            target_role: target_role.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Experience => &self.experience,
            Field::Skills => &self.skills,
            Field::TargetRole => &self.target_role,
        }
    }

    /// Set one field, leaving the others untouched
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Experience => &mut self.experience,
            Field::Skills => &mut self.skills,
            Field::TargetRole => &mut self.target_role,
        };
        *slot = value.into();
    }

    /// Fields that are the empty string. Whitespace counts as content.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let form = FormData::default();
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());
        assert!(!form.is_complete());
    }

    #[test]
    fn update_touches_only_named_field() {
        let mut form = FormData::new("3", "Rust", "Staff Engineer");
        form.update(Field::Skills, "Go, Rust");
        assert_eq!(form.experience, "3");
        assert_eq!(form.skills, "Go, Rust");
        assert_eq!(form.target_role, "Staff Engineer");

        form.update(Field::TargetRole, "");
        assert_eq!(form.missing_fields(), vec![Field::TargetRole]);
    }

    #[test]
    fn whitespace_only_is_not_missing() {
        let form = FormData::new(" ", "\t", "  ");
        assert!(form.is_complete());
    }

    #[test]
    fn update_accepts_non_numeric_experience() {
        let mut form = FormData::default();
        form.update(Field::Experience, "ten");
        assert_eq!(form.get(Field::Experience), "ten");
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("experience".parse::<Field>().unwrap(), Field::Experience);
        assert_eq!("targetRole".parse::<Field>().unwrap(), Field::TargetRole);
        assert_eq!("target_role".parse::<Field>().unwrap(), Field::TargetRole);
        let err = "salary".parse::<Field>().unwrap_err();
        assert!(err.to_string().contains("salary"));
    }

    #[test]
    fn assignments_split_on_first_equals() {
        let (field, value) = parse_assignment("targetRole=Staff Engineer").unwrap();
        assert_eq!(field, Field::TargetRole);
        assert_eq!(value, "Staff Engineer");

        let (field, value) = parse_assignment("skills=a=b").unwrap();
        assert_eq!(field, Field::Skills);
        assert_eq!(value, "a=b");

        let (_, value) = parse_assignment("experience=").unwrap();
        assert_eq!(value, "");

        assert!(parse_assignment("salary=100").is_err());
        assert!(matches!(
            parse_assignment("experience"),
            Err(RoadmapError::MalformedAssignment { .. })
        ));
    }

    #[test]
    fn experience_control_is_numeric() {
        assert!(Field::Experience.accepts('7'));
        assert!(Field::Experience.accepts('.'));
        assert!(!Field::Experience.accepts('x'));
        assert!(Field::Skills.accepts(','));
        assert!(!Field::TargetRole.accepts('\n'));
    }

    #[test]
    fn serializes_with_wire_names() {
        let form = FormData::new("3", "Java", "Lead");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["targetRole"], "Lead");
    }
}
