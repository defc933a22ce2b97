//! Catalog construction, lookup and loading from TOML.

mod common;

use common::*;
use portfolio::catalog::{HeroMedia, SiteInfo};

fn site_of(catalog: &Catalog) -> SiteInfo {
    catalog.site().clone()
}

#[test]
fn test_builtin_catalog_has_two_projects_and_four_skill_groups() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.projects().len(), 2);
    assert_eq!(catalog.skills().len(), 4);
    assert_eq!(catalog.about_paragraphs().len(), 3);
    assert_eq!(catalog.site().brand, "ramanadesign.tech");
}

#[test]
fn test_builtin_catalog_passes_validation() -> anyhow::Result<()> {
    let builtin = Catalog::builtin();
    let validated = Catalog::new(
        builtin.projects().to_vec(),
        builtin.skills().to_vec(),
        builtin.about_text(),
        site_of(&builtin),
    )?;
    for project in builtin.projects() {
        assert_eq!(validated.project(&project.id), builtin.project(&project.id));
        assert_eq!(builtin.project(&project.id), Lookup::Found(project));
    }
    Ok(())
}

#[test]
fn test_lookup_distinguishes_found_and_missing() {
    let catalog = Catalog::builtin();
    let found = catalog.project("flavor-filter").found().expect("flavor-filter exists");
    assert_eq!(found.title, "Flavor Filter");
    assert_eq!(catalog.project("Flavor-Filter"), Lookup::NotFound);
    assert_eq!(catalog.project(""), Lookup::NotFound);
}

#[test]
fn test_duplicate_project_ids_are_rejected() {
    let builtin = Catalog::builtin();
    let mut projects = builtin.projects().to_vec();
    projects.push(projects[0].clone());

    let result = Catalog::new(
        projects,
        builtin.skills().to_vec(),
        builtin.about_text(),
        site_of(&builtin),
    );
    match result {
        Err(CatalogError::DuplicateProject(id)) => assert_eq!(id, "smriti"),
        other => panic!("expected duplicate error, got {:?}", other),
    }
}

#[test]
fn test_empty_project_id_is_rejected() {
    let builtin = Catalog::builtin();
    let mut projects = builtin.projects().to_vec();
    projects[1].id.clear();

    let result = Catalog::new(projects, Vec::new(), "", site_of(&builtin));
    assert!(matches!(result, Err(CatalogError::EmptyProjectId(1))));
}

#[test]
fn test_loads_catalog_from_toml_file() -> anyhow::Result<()> {
    let file = write_catalog_file(SAMPLE_CATALOG);
    let catalog = Catalog::load(file.path())?;

    let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "beta"]);
    assert_eq!(
        catalog.about_paragraphs(),
        ["First paragraph continues here.", "Second paragraph."]
    );
    assert_eq!(catalog.site().contact.tel_href(), "tel:442079460000");
    assert_eq!(catalog.skills()[0].items, ["Rust", "Go"]);

    let alpha = catalog.project("alpha").found().expect("alpha exists");
    assert_eq!(alpha.video_url, None);
    assert_eq!(
        alpha.hero_media(),
        HeroMedia::Image {
            src: "https://example.dev/a-hero.png"
        }
    );
    let beta = catalog.project("beta").found().expect("beta exists");
    assert_eq!(
        beta.hero_media(),
        HeroMedia::Video {
            src: "https://example.dev/b.mp4",
            poster: "https://example.dev/b-hero.png"
        }
    );

    Ok(())
}

#[test]
fn test_toml_with_duplicate_ids_fails_validation() {
    let duplicated = SAMPLE_CATALOG.replace("id = \"beta\"", "id = \"alpha\"");
    let result = Catalog::from_toml_str(&duplicated);
    assert!(matches!(result, Err(CatalogError::DuplicateProject(id)) if id == "alpha"));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let result = Catalog::from_toml_str("about = ");
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let result = Catalog::load(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}
