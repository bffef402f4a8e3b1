//! Application data model
//!
//! Types for a candidacy submitted through the join-us form: the fixed
//! enumerations offered by the form, the editable draft, and the validated
//! insert payload sent to the `applications` table.

use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Year of study offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum YearOfStudy {
    #[display("1st Year")]
    #[serde(rename = "1st Year")]
    First,
    #[display("2nd Year")]
    #[serde(rename = "2nd Year")]
    Second,
    #[display("3rd Year")]
    #[serde(rename = "3rd Year")]
    Third,
    #[display("4th Year")]
    #[serde(rename = "4th Year")]
    Fourth,
}

impl YearOfStudy {
    pub const ALL: [YearOfStudy; 4] = [
        YearOfStudy::First,
        YearOfStudy::Second,
        YearOfStudy::Third,
        YearOfStudy::Fourth,
    ];
}

impl FromStr for YearOfStudy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|year| year.to_string() == s)
            .ok_or_else(|| ValidationError::InvalidYear(s.to_string()))
    }
}

/// Track an applicant can pick as first or second preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Track {
    Programming,
    Electrical,
    Mechanical,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Programming, Track::Electrical, Track::Mechanical];
}

impl FromStr for Track {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|track| track.to_string() == s)
            .ok_or_else(|| ValidationError::InvalidTrack(s.to_string()))
    }
}

/// Local validation failures. None of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(DraftField),

    #[error("Unknown year of study: {0}")]
    InvalidYear(String),

    #[error("Unknown preference: {0}")]
    InvalidTrack(String),

    #[error("First and second preferences must be different.")]
    SamePreference,
}

/// Editable fields of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    YearOfStudy,
    Course,
    RegisterNumber,
    Department,
    FirstPreference,
    SecondPreference,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "Full name",
            DraftField::YearOfStudy => "Year of study",
            DraftField::Course => "Course",
            DraftField::RegisterNumber => "Register number",
            DraftField::Department => "Department",
            DraftField::FirstPreference => "First preference",
            DraftField::SecondPreference => "Second preference",
        };
        f.write_str(label)
    }
}

/// Form values as typed by the applicant.
///
/// Selects start empty, so every field is kept as raw text until
/// [`ApplicationDraft::validate`] turns the draft into a [`NewApplication`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub name: String,
    pub year_of_study: String,
    pub course: String,
    pub register_number: String,
    pub department: String,
    pub first_preference: String,
    pub second_preference: String,
}

impl ApplicationDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::YearOfStudy => &self.year_of_study,
            DraftField::Course => &self.course,
            DraftField::RegisterNumber => &self.register_number,
            DraftField::Department => &self.department,
            DraftField::FirstPreference => &self.first_preference,
            DraftField::SecondPreference => &self.second_preference,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::YearOfStudy => self.year_of_study = value,
            DraftField::Course => self.course = value,
            DraftField::RegisterNumber => self.register_number = value,
            DraftField::Department => self.department = value,
            DraftField::FirstPreference => self.first_preference = value,
            DraftField::SecondPreference => self.second_preference = value,
        }
    }

    /// Tracks still selectable as second preference
    pub fn second_preference_options(&self) -> Vec<Track> {
        Track::ALL
            .into_iter()
            .filter(|track| track.to_string() != self.first_preference)
            .collect()
    }

    /// Check the draft and build the insert payload.
    ///
    /// The preference check runs first so that picking the same track twice
    /// is reported as such even when other fields are still blank.
    pub fn validate(&self) -> Result<NewApplication, ValidationError> {
        if !self.first_preference.is_empty() && self.first_preference == self.second_preference {
            return Err(ValidationError::SamePreference);
        }

        let required = |field: DraftField| -> Result<String, ValidationError> {
            let value = self.get(field).trim();
            if value.is_empty() {
                Err(ValidationError::MissingField(field))
            } else {
                Ok(value.to_string())
            }
        };

        let application = NewApplication {
            name: required(DraftField::Name)?,
            year_of_study: required(DraftField::YearOfStudy)?.parse()?,
            course: required(DraftField::Course)?,
            register_number: required(DraftField::RegisterNumber)?,
            department: required(DraftField::Department)?,
            first_preference: required(DraftField::FirstPreference)?.parse()?,
            second_preference: required(DraftField::SecondPreference)?.parse()?,
        };
        application.validate()?;
        Ok(application)
    }
}

/// Insert payload for the `applications` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub year_of_study: YearOfStudy,
    pub course: String,
    pub register_number: String,
    pub department: String,
    pub first_preference: Track,
    pub second_preference: Track,
}

impl NewApplication {
    /// Same payload with surrounding whitespace stripped from the text fields
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            course: self.course.trim().to_string(),
            register_number: self.register_number.trim().to_string(),
            department: self.department.trim().to_string(),
            ..self
        }
    }

    /// Invariants that must hold for any payload, wherever it was built
    pub fn validate(&self) -> Result<(), ValidationError> {
        let text_fields = [
            (DraftField::Name, &self.name),
            (DraftField::Course, &self.course),
            (DraftField::RegisterNumber, &self.register_number),
            (DraftField::Department, &self.department),
        ];
        if let Some((field, _)) = text_fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }

        if self.first_preference == self.second_preference {
            return Err(ValidationError::SamePreference);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ApplicationDraft {
        ApplicationDraft {
            name: "Asha Rao".to_string(),
            year_of_study: "2nd Year".to_string(),
            course: "B.Tech CSE".to_string(),
            register_number: "RA2211003010042".to_string(),
            department: "Computer Science".to_string(),
            first_preference: "Programming".to_string(),
            second_preference: "Electrical".to_string(),
        }
    }

    #[test]
    fn test_year_labels_round_trip_through_from_str() {
        for year in YearOfStudy::ALL {
            assert_eq!(year.to_string().parse::<YearOfStudy>(), Ok(year));
        }
        assert_eq!(YearOfStudy::Third.to_string(), "3rd Year");
    }

    #[test]
    fn test_unknown_track_is_rejected() {
        assert_eq!(
            "Software".parse::<Track>(),
            Err(ValidationError::InvalidTrack("Software".to_string()))
        );
    }

    #[test]
    fn test_valid_draft_builds_payload() {
        let application = filled_draft().validate().unwrap();

        assert_eq!(application.name, "Asha Rao");
        assert_eq!(application.year_of_study, YearOfStudy::Second);
        assert_eq!(application.first_preference, Track::Programming);
        assert_eq!(application.second_preference, Track::Electrical);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut draft = filled_draft();
        draft.set(DraftField::RegisterNumber, "  RA22  ");

        let application = draft.validate().unwrap();
        assert_eq!(application.register_number, "RA22");
    }

    #[test]
    fn test_same_preference_is_rejected() {
        let mut draft = filled_draft();
        draft.set(DraftField::SecondPreference, "Programming");

        assert_eq!(draft.validate(), Err(ValidationError::SamePreference));
    }

    #[test]
    fn test_same_preference_reported_before_missing_fields() {
        let draft = ApplicationDraft {
            first_preference: "Mechanical".to_string(),
            second_preference: "Mechanical".to_string(),
            ..Default::default()
        };

        assert_eq!(draft.validate(), Err(ValidationError::SamePreference));
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut draft = filled_draft();
        draft.set(DraftField::Course, "   ");

        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField(DraftField::Course))
        );
    }

    #[test]
    fn test_unselected_year_is_missing() {
        let mut draft = filled_draft();
        draft.set(DraftField::YearOfStudy, "");

        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField(DraftField::YearOfStudy))
        );
    }

    #[test]
    fn test_second_preference_options_exclude_first() {
        let mut draft = ApplicationDraft::default();
        assert_eq!(draft.second_preference_options().len(), 3);

        draft.set(DraftField::FirstPreference, "Electrical");
        assert_eq!(
            draft.second_preference_options(),
            vec![Track::Programming, Track::Mechanical]
        );
    }

    #[test]
    fn test_payload_serializes_with_column_names() {
        let application = filled_draft().validate().unwrap();
        let json = serde_json::to_value(&application).unwrap();

        assert_eq!(json["year_of_study"], "2nd Year");
        assert_eq!(json["register_number"], "RA2211003010042");
        assert_eq!(json["first_preference"], "Programming");
        assert_eq!(json["second_preference"], "Electrical");
    }

    #[test]
    fn test_payload_validate_rejects_equal_preferences() {
        let mut application = filled_draft().validate().unwrap();
        application.second_preference = application.first_preference;

        assert_eq!(application.validate(), Err(ValidationError::SamePreference));
    }
}
