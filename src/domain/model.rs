use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project grouping shown on the filter bar.
///
/// `All` is the "no filtering" selection. Strings outside the known set are
/// kept as `Other` and compare by exact text, so an unknown selection simply
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    All,
    ECommerce,
    Saas,
    Design,
    Mobile,
    Other(String),
}

impl Category {
    /// Named categories in filter-bar order, excluding `All`.
    pub const NAMED: [Category; 4] = [
        Category::ECommerce,
        Category::Saas,
        Category::Design,
        Category::Mobile,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::All => "All",
            Category::ECommerce => "E-commerce",
            Category::Saas => "SaaS",
            Category::Design => "Design",
            Category::Mobile => "Mobile",
            Category::Other(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "All" => Category::All,
            "E-commerce" => Category::ECommerce,
            "SaaS" => Category::Saas,
            "Design" => Category::Design,
            "Mobile" => Category::Mobile,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(alias = "liveUrl")]
    pub live_url: String,
    #[serde(alias = "githubUrl")]
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
}

/// Detail page for a single project, keyed by the project slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(alias = "heroImage")]
    pub hero_image: String,
    pub challenge: String,
    pub approach: String,
    pub outcome: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(alias = "liveUrl")]
    pub live_url: String,
    #[serde(alias = "githubUrl")]
    pub github_url: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub features: Vec<Feature>,
    pub testimonial: Option<Testimonial>,
    pub gallery: Vec<String>,
}

/// Skill bar on the about section; `level` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Landing page identity: who the site is about and how the hero animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub roles: Vec<String>,
    #[serde(default = "default_role_interval_ms")]
    pub role_interval_ms: u64,
    #[serde(default = "default_typewriter_speed_ms")]
    pub typewriter_speed_ms: u64,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Timeline entries, newest first as written.
    #[serde(default)]
    pub experience: Vec<Experience>,
}

fn default_role_interval_ms() -> u64 {
    3000
}

fn default_typewriter_speed_ms() -> u64 {
    100
}
