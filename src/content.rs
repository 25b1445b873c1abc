//! Static content catalog
//!
//! Everything the terminal can show lives in `data/portfolio.json`, embedded
//! at compile time and deserialized once per thread. The commands only ever
//! read from it.

use chrono::NaiveDate;
use serde::Deserialize;
use std::cell::OnceCell;

const PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub motto: Option<String>,
    pub prompt_user: String,
    pub prompt_host: String,
    pub email: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub repo: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
}

impl BlogPost {
    /// Parsed publication date. Malformed dates sort last.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub years: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub blogs: Vec<BlogPost>,
    pub services: Vec<Service>,
    pub resume: Resume,
}

impl Catalog {
    fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(PORTFOLIO_JSON)
    }

    /// Blog posts sorted newest-first.
    pub fn blogs_by_date(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.blogs.iter().collect();
        posts.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        posts
    }

    pub fn blog(&self, id: u32) -> Option<&BlogPost> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Case-insensitive lookup by project title.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(name))
    }

    pub fn project_titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }
}

thread_local! {
    static CATALOG: OnceCell<Catalog> = const { OnceCell::new() };
}

/// Run `f` against the embedded catalog. Parsing only happens once per
/// thread; the embedded JSON failing to parse is a build defect.
pub fn with<R>(f: impl FnOnce(&Catalog) -> R) -> R {
    CATALOG.with(|cell| {
        let catalog = cell.get_or_init(|| Catalog::load().expect("embedded portfolio data is valid"));
        f(catalog)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads() {
        with(|c| {
            assert!(!c.profile.name.is_empty());
            assert!(!c.projects.is_empty());
            assert!(!c.blogs.is_empty());
            assert!(!c.services.is_empty());
        });
    }

    #[test]
    fn blogs_sorted_newest_first() {
        with(|c| {
            let posts = c.blogs_by_date();
            for pair in posts.windows(2) {
                assert!(pair[0].parsed_date() >= pair[1].parsed_date());
            }
        });
    }

    #[test]
    fn project_lookup_is_case_insensitive() {
        with(|c| {
            let title = c.projects[0].title.clone();
            assert!(c.project(&title.to_lowercase()).is_some());
            assert!(c.project(&title.to_uppercase()).is_some());
            assert!(c.project("definitely-not-a-project").is_none());
        });
    }

    #[test]
    fn blog_lookup_by_id() {
        with(|c| {
            assert!(c.blog(1).is_some());
            assert!(c.blog(9999).is_none());
        });
    }
}
