//! Portfolio projects.

use crate::i18n::Catalog;
use serde::{Deserialize, Serialize};

/// Catalog namespace of project UI strings and descriptions.
pub const PROJECTS_NAMESPACE: &str = "Projects";

/// Number of featured projects shown on the home page.
pub const FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Display name; project names are not translated.
    pub title: String,
    /// Key under `Projects.descriptions`.
    pub description_key: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn description(&self, catalog: &Catalog) -> String {
        catalog
            .namespace(PROJECTS_NAMESPACE)
            .t(&format!("descriptions.{}", self.description_key))
    }

    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| t == technology)
    }
}

/// All projects in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    pub const fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// First `limit` featured projects.
    pub fn featured(&self, limit: usize) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).take(limit).collect()
    }

    /// Distinct technologies in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut technologies: Vec<&str> = Vec::new();
        for tech in self.projects.iter().flat_map(|p| &p.technologies) {
            if !technologies.contains(&tech.as_str()) {
                technologies.push(tech);
            }
        }
        technologies
    }

    /// Projects using `technology`; `None` selects all.
    pub fn filter_by_tech(&self, technology: Option<&str>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| technology.is_none_or(|tech| p.uses(tech)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(id: &str, techs: &[&str], featured: bool) -> Project {
        Project {
            id: id.into(),
            title: id.to_uppercase(),
            description_key: id.into(),
            technologies: techs.iter().map(|t| (*t).to_string()).collect(),
            image: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            featured,
        }
    }

    fn registry() -> ProjectRegistry {
        ProjectRegistry::new(vec![
            project("talentbridge", &["Next.js", "TypeScript"], true),
            project("marketio", &["React.js", "Firebase"], true),
            project("melco", &["Next.js", "EmailJS"], false),
            project("fly", &["Next.js"], true),
            project("mars", &["React.js"], true),
        ])
    }

    #[test]
    fn test_featured_limited_in_order() {
        let featured: Vec<_> = registry()
            .featured(FEATURED_LIMIT)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(featured, ["talentbridge", "marketio", "fly"]);
    }

    #[test]
    fn test_technologies_unique() {
        assert_eq!(
            registry().technologies(),
            ["Next.js", "TypeScript", "React.js", "Firebase", "EmailJS"]
        );
    }

    #[test]
    fn test_filter_by_tech() {
        let registry = registry();
        assert_eq!(registry.filter_by_tech(None).len(), 5);
        let next: Vec<_> = registry
            .filter_by_tech(Some("Next.js"))
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(next, ["talentbridge", "melco", "fly"]);
        assert!(registry.filter_by_tech(Some("Vue")).is_empty());
    }

    #[test]
    fn test_description_from_catalog() {
        let catalog = Catalog::from_value(
            "en",
            json!({ "Projects": { "descriptions": { "melco": "Industrial site" } } }),
        )
        .unwrap();
        let registry = registry();
        assert_eq!(registry.get("melco").unwrap().description(&catalog), "Industrial site");
        assert_eq!(
            registry.get("fly").unwrap().description(&catalog),
            "Projects.descriptions.fly"
        );
    }
}
