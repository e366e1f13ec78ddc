use std::borrow::Cow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{PLACEHOLDER_PREVIEW_URL, PLACEHOLDER_THUMBNAIL_URL};

// ───── Constants ──────────────────────────────────────────────────────
const MIN_TITLE_LENGTH: u64 = 3;
const MAX_TITLE_LENGTH: u64 = 100;
const MIN_SHORT_DESCRIPTION_LENGTH: u64 = 10;
const MAX_SHORT_DESCRIPTION_LENGTH: u64 = 200;
const MIN_LONG_DESCRIPTION_LENGTH: u64 = 20;
const MAX_LONG_DESCRIPTION_LENGTH: u64 = 2000;
const MIN_CATEGORY_LENGTH: u64 = 2;
const MAX_CATEGORY_LENGTH: u64 = 50;
const MAX_TECHNOLOGY_LENGTH: usize = 50;

// ───── Database Models ───────────────────────────────────────────────

/// Raw row of the `projects` table. The `data` column is a schema-less
/// JSONB document; nothing about its fields is guaranteed until it has
/// passed through [`ProjectDocument::from_value`].
#[derive(Debug, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Typed intermediate between the stored JSON and the canonical entity.
/// Extraction is lenient field by field: wrong types and missing keys
/// degrade to defaults instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDocument {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub project_url: Option<String>,
    pub source_code_url: Option<String>,
    pub download_url: Option<String>,
}

impl ProjectDocument {
    pub fn from_value(value: &Value) -> Self {
        ProjectDocument {
            title: text_field(value, "title"),
            short_description: text_field(value, "shortDescription"),
            long_description: text_field(value, "longDescription"),
            category: text_field(value, "category"),
            technologies: technologies_field(value),
            thumbnail_url: link_field(value, "thumbnailUrl"),
            preview_url: link_field(value, "previewUrl"),
            project_url: link_field(value, "projectUrl"),
            source_code_url: link_field(value, "sourceCodeUrl"),
            download_url: link_field(value, "downloadUrl"),
        }
    }
}

fn text_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional links never survive as empty strings: absent, non-string, or
/// blank all collapse to `None` so "not set" stays unambiguous.
fn link_field(doc: &Value, key: &str) -> Option<String> {
    doc.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Tolerates the legacy storage shape where technologies were written as a
/// comma-joined string instead of an array.
fn technologies_field(doc: &Value) -> Vec<String> {
    match doc.get("technologies") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(joined)) => split_technologies(joined),
        _ => Vec::new(),
    }
}

pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ───── Canonical Entity ─────────────────────────────────────────────

/// A portfolio entry with every field populated. The only way to build one
/// from stored data is through [`Project::from_row`], which is what makes
/// the in-memory shape trustworthy despite the schema-less store.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub thumbnail_url: String,
    pub preview_url: String,
    pub project_url: Option<String>,
    pub source_code_url: Option<String>,
    pub download_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn from_row(row: ProjectRow) -> Self {
        let doc = ProjectDocument::from_value(&row.data);
        Project::from_parts(row.id, doc, row.created_at, row.updated_at)
    }

    pub fn from_parts(
        id: Uuid,
        doc: ProjectDocument,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Project {
            id,
            title: doc.title,
            short_description: doc.short_description,
            long_description: doc.long_description,
            category: doc.category,
            technologies: doc.technologies,
            thumbnail_url: doc
                .thumbnail_url
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL_URL.to_string()),
            preview_url: doc
                .preview_url
                .unwrap_or_else(|| PLACEHOLDER_PREVIEW_URL.to_string()),
            project_url: doc.project_url,
            source_code_url: doc.source_code_url,
            download_url: doc.download_url,
            created_at,
            updated_at,
        }
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project::from_row(row)
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreatedResponse {
    pub id: Uuid,
    pub admin_url: String,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Admin form payload as posted by the UI. Technologies arrive as one
/// comma-separated string and are normalized during conversion to
/// [`ProjectInput`].
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    #[validate(length(
        min = MIN_TITLE_LENGTH,
        max = MAX_TITLE_LENGTH,
        message = "Title must be between 3 and 100 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = MIN_SHORT_DESCRIPTION_LENGTH,
        max = MAX_SHORT_DESCRIPTION_LENGTH,
        message = "Short description must be between 10 and 200 characters"
    ))]
    pub short_description: String,

    #[validate(length(
        min = MIN_LONG_DESCRIPTION_LENGTH,
        max = MAX_LONG_DESCRIPTION_LENGTH,
        message = "Long description must be between 20 and 2000 characters"
    ))]
    pub long_description: String,

    #[validate(length(
        min = MIN_CATEGORY_LENGTH,
        max = MAX_CATEGORY_LENGTH,
        message = "Category must be between 2 and 50 characters"
    ))]
    pub category: String,

    #[validate(custom(function = "validate_technologies_csv"))]
    pub technologies: String,

    #[validate(custom(function = "validate_required_url"))]
    pub thumbnail_url: String,

    #[validate(custom(function = "validate_required_url"))]
    pub preview_url: String,

    #[validate(custom(function = "validate_optional_url"))]
    pub project_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub source_code_url: Option<String>,

    #[validate(custom(function = "validate_optional_url"))]
    pub download_url: Option<String>,
}

/// Normalized, validated write shape. Serializes to the camelCase document
/// stored in the JSONB column.
#[derive(Debug, Clone, Serialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: String,

    #[validate(custom(function = "validate_technologies"))]
    pub technologies: Vec<String>,

    pub thumbnail_url: String,
    pub preview_url: String,

    // Unset links serialize as explicit nulls so a JSONB merge on update
    // clears them instead of leaving a stale value behind.
    pub project_url: Option<String>,
    pub source_code_url: Option<String>,
    pub download_url: Option<String>,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_required_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(new_validation_error("url_required", "This URL is required"));
    }
    validate_url(url)
}

/// Empty string means "unset" on optional link fields; it is accepted here
/// and normalized away during conversion.
pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Ok(());
    }
    validate_url(url)
}

pub fn validate_technologies_csv(raw: &str) -> Result<(), ValidationError> {
    validate_technologies(&split_technologies(raw))
}

pub fn validate_technologies(technologies: &[String]) -> Result<(), ValidationError> {
    if technologies.is_empty() {
        return Err(new_validation_error(
            "technologies_empty",
            "Please enter at least one valid technology",
        ));
    }
    for tech in technologies {
        if tech.len() > MAX_TECHNOLOGY_LENGTH {
            return Err(new_validation_error(
                "technology_too_long",
                "Each technology must not exceed 50 characters",
            ));
        }
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

fn normalize_optional_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<ProjectForm> for ProjectInput {
    type Error = ValidationErrors;

    fn try_from(form: ProjectForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let input = ProjectInput {
            title: form.title,
            short_description: form.short_description,
            long_description: form.long_description,
            category: form.category,
            technologies: split_technologies(&form.technologies),
            thumbnail_url: form.thumbnail_url,
            preview_url: form.preview_url,
            project_url: normalize_optional_url(form.project_url),
            source_code_url: normalize_optional_url(form.source_code_url),
            download_url: normalize_optional_url(form.download_url),
        };

        input.validate()?;
        Ok(input)
    }
}
