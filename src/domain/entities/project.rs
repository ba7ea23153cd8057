use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;

const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[display("ai")]
    Ai,
    #[display("web")]
    Web,
}

impl FromStr for ProjectCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(ProjectCategory::Ai),
            "web" => Ok(ProjectCategory::Web),
            _ => Err(AppError::InvalidInput(format!("Unknown project category: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH, message = "Description must be between 1 and 500 characters"))]
    pub description: String,

    #[serde(default)]
    pub long_description: Option<String>,

    pub category: ProjectCategory,

    #[validate(length(min = 1, message = "At least one technology is required"))]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Option<Vec<String>>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    #[validate(url(message = "Invalid GitHub URL"))]
    pub github_url: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Invalid demo URL"))]
    pub demo_url: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_featured")]
    pub featured: bool,
}

impl NewProject {
    pub fn into_project(self, id: Uuid, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            long_description: self.long_description,
            category: self.category,
            technologies: self.technologies,
            features: self.features,
            tags: self.tags,
            github_url: self.github_url,
            demo_url: self.demo_url,
            image_url: self.image_url,
            featured: self.featured,
            created_at,
        }
    }
}

/// Older clients send the flag as the strings `"true"` / `"false"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeaturedFlag {
    Flag(bool),
    Legacy(String),
}

fn deserialize_featured<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<FeaturedFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(FeaturedFlag::Flag(flag)) => Ok(flag),
        Some(FeaturedFlag::Legacy(text)) => match text.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!(
                "featured must be true or false, got {:?}",
                other
            ))),
        },
    }
}
