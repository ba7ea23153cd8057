use std::str::FromStr;

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::AppError;

const MAX_TITLE_LENGTH: u64 = 120;

static LEADING_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4})").expect("leading year pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    #[display("work")]
    Work,
    #[display("education")]
    Education,
}

impl FromStr for ExperienceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(ExperienceType::Work),
            "education" => Ok(ExperienceType::Education),
            _ => Err(AppError::InvalidInput(format!("Unknown experience type: {}", s))),
        }
    }
}

/// A position or degree on the timeline. `end_date == None` means ongoing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Vec<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
}

impl Experience {
    /// Year parsed from the front of `start_date` ("2022", "2019-06", ...).
    pub fn start_year(&self) -> Option<i32> {
        parse_leading_year(&self.start_date)
    }
}

/// Most recent start year first. Entries without a parsable year go last and
/// ties keep their original order.
pub fn sort_by_start_year_desc(experiences: &mut [Experience]) {
    experiences.sort_by(|a, b| b.start_year().cmp(&a.start_year()));
}

fn parse_leading_year(date: &str) -> Option<i32> {
    LEADING_YEAR
        .captures(date)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
}

fn validate_start_date(start_date: &str) -> Result<(), ValidationError> {
    if parse_leading_year(start_date).is_some() {
        return Ok(());
    }

    let mut error = ValidationError::new("start_date_format");
    error.message = Some("Start date must begin with a four-digit year".into());
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Company must be between 1 and 120 characters"))]
    pub company: String,

    #[serde(default)]
    pub location: Option<String>,

    #[validate(custom(function = "validate_start_date"))]
    pub start_date: String,

    #[serde(default)]
    pub end_date: Option<String>,

    #[validate(length(min = 1, message = "At least one description entry is required"))]
    pub description: Vec<String>,

    #[serde(default)]
    pub technologies: Option<Vec<String>>,

    #[serde(rename = "type")]
    pub kind: ExperienceType,
}

impl NewExperience {
    pub fn into_experience(self, id: Uuid) -> Experience {
        Experience {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            technologies: self.technologies,
            kind: self.kind,
        }
    }
}
