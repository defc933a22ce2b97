mod builtin;
mod model;

use std::{collections::HashMap, path::Path};

use serde::Deserialize;

pub use model::{ContactInfo, Hero, HeroMedia, Project, SiteInfo, SkillGroup, SocialLink};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate project id `{0}`")]
    DuplicateProject(String),
    #[error("project at position {0} has an empty id")]
    EmptyProjectId(usize),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result of looking a project up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Project),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a Project> {
        match self {
            Lookup::Found(project) => Some(project),
            Lookup::NotFound => None,
        }
    }
}

/// Immutable content the views render from.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
    skills: Vec<SkillGroup>,
    about: String,
    site: SiteInfo,
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    about: String,
    site: SiteInfo,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skills: Vec<SkillGroup>,
}

impl Catalog {
    pub fn new(
        projects: Vec<Project>,
        skills: Vec<SkillGroup>,
        about: impl Into<String>,
        site: SiteInfo,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if project.id.is_empty() {
                return Err(CatalogError::EmptyProjectId(position));
            }
            if index.insert(project.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(Self {
            projects,
            index,
            skills,
            about: about.into(),
            site,
        })
    }

    /// The content the site ships with.
    pub fn builtin() -> Self {
        let projects = builtin::projects();
        let index: HashMap<String, usize> = projects
            .iter()
            .enumerate()
            .map(|(position, project)| (project.id.clone(), position))
            .collect();
        debug_assert_eq!(index.len(), projects.len(), "duplicate built-in project id");
        Self {
            index,
            projects,
            skills: builtin::skills(),
            about: builtin::ABOUT_TEXT.to_string(),
            site: builtin::site(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.projects, file.skills, file.about, file.site)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.as_ref().display(),
            projects = catalog.projects.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Projects in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn about_text(&self) -> &str {
        &self.about
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub fn project(&self, id: &str) -> Lookup<'_> {
        match self.index.get(id) {
            Some(&position) => Lookup::Found(&self.projects[position]),
            None => Lookup::NotFound,
        }
    }

    /// About text split on blank lines. Lines inside a paragraph are joined with a space.
    pub fn about_paragraphs(&self) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in self.about.lines().map(str::trim) {
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }
        paragraphs
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
