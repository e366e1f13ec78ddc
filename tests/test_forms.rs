use showcase_backend::entities::project::ProjectForm;

pub fn valid_form() -> ProjectForm {
    ProjectForm {
        title: "Demo".to_string(),
        category: "Web".to_string(),
        short_description: "A demo project showcase".to_string(),
        long_description: "This is a longer description of at least twenty characters.".to_string(),
        technologies: "React, Firebase".to_string(),
        thumbnail_url: "https://x/a.png".to_string(),
        preview_url: "https://x/b.png".to_string(),
        project_url: None,
        source_code_url: None,
        download_url: None,
    }
}
