use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use showcase_backend::constants::{PLACEHOLDER_PREVIEW_URL, PLACEHOLDER_THUMBNAIL_URL};
use showcase_backend::entities::project::{Project, ProjectDocument, ProjectRow};

#[test]
fn missing_thumbnail_maps_to_placeholder() {
    let doc = ProjectDocument::from_value(&json!({
        "title": "Demo",
        "previewUrl": "https://x/b.png"
    }));
    let project = Project::from_parts(Uuid::new_v4(), doc, Utc::now(), Utc::now());

    assert_eq!(project.thumbnail_url, PLACEHOLDER_THUMBNAIL_URL);
    assert_eq!(project.preview_url, "https://x/b.png");
}

#[test]
fn missing_preview_maps_to_placeholder() {
    let doc = ProjectDocument::from_value(&json!({"title": "Demo"}));
    let project = Project::from_parts(Uuid::new_v4(), doc, Utc::now(), Utc::now());

    assert_eq!(project.preview_url, PLACEHOLDER_PREVIEW_URL);
}

#[test]
fn legacy_comma_joined_technologies_are_split() {
    let doc = ProjectDocument::from_value(&json!({
        "technologies": "React, Firebase"
    }));

    assert_eq!(doc.technologies, vec!["React", "Firebase"]);
}

#[test]
fn technologies_array_entries_are_trimmed_and_filtered() {
    let doc = ProjectDocument::from_value(&json!({
        "technologies": [" React ", "", "Firebase", 42]
    }));

    assert_eq!(doc.technologies, vec!["React", "Firebase"]);
}

#[test]
fn missing_technologies_default_to_empty() {
    let doc = ProjectDocument::from_value(&json!({"title": "Demo"}));
    assert!(doc.technologies.is_empty());
}

#[test]
fn wrong_typed_fields_degrade_to_defaults() {
    let doc = ProjectDocument::from_value(&json!({
        "title": 42,
        "shortDescription": null,
        "technologies": 7
    }));

    assert_eq!(doc.title, "");
    assert_eq!(doc.short_description, "");
    assert!(doc.technologies.is_empty());
}

#[test]
fn blank_optional_links_map_to_none() {
    let doc = ProjectDocument::from_value(&json!({
        "projectUrl": "",
        "sourceCodeUrl": "   ",
        "downloadUrl": null
    }));

    assert_eq!(doc.project_url, None);
    assert_eq!(doc.source_code_url, None);
    assert_eq!(doc.download_url, None);
}

#[test]
fn fully_populated_row_maps_to_canonical_project() {
    let id = Uuid::new_v4();
    let created_at = Utc::now();
    let updated_at = Utc::now();

    let row = ProjectRow {
        id,
        data: json!({
            "title": "Demo",
            "shortDescription": "A demo project showcase",
            "longDescription": "This is a longer description of at least twenty characters.",
            "category": "Web",
            "technologies": ["React", "Firebase"],
            "thumbnailUrl": "https://x/a.png",
            "previewUrl": "https://x/b.png",
            "sourceCodeUrl": "https://github.com/someone/demo"
        }),
        created_at,
        updated_at,
    };

    let project = Project::from_row(row);

    assert_eq!(project.id, id);
    assert_eq!(project.title, "Demo");
    assert_eq!(project.short_description, "A demo project showcase");
    assert_eq!(project.category, "Web");
    assert_eq!(project.technologies, vec!["React", "Firebase"]);
    assert_eq!(project.thumbnail_url, "https://x/a.png");
    assert_eq!(
        project.source_code_url.as_deref(),
        Some("https://github.com/someone/demo")
    );
    assert_eq!(project.project_url, None);
    assert_eq!(project.download_url, None);
    assert_eq!(project.created_at, created_at);
    assert_eq!(project.updated_at, updated_at);
}

#[test]
fn empty_document_still_maps_without_panicking() {
    let project = Project::from_parts(
        Uuid::new_v4(),
        ProjectDocument::from_value(&json!({})),
        Utc::now(),
        Utc::now(),
    );

    assert_eq!(project.title, "");
    assert!(project.technologies.is_empty());
    assert_eq!(project.thumbnail_url, PLACEHOLDER_THUMBNAIL_URL);
}
