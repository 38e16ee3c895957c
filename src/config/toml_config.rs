use crate::domain::model::{Category, CaseStudy, Profile, Project};
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Full site content as written in `portfolio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, alias = "caseStudies")]
    pub case_studies: BTreeMap<String, CaseStudy>,
}

impl PortfolioConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::info!("Loading portfolio from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        tracing::debug!(
            projects = config.projects.len(),
            case_studies = config.case_studies.len(),
            "portfolio parsed"
        );
        Ok(config)
    }

    /// 替換環境變數 (例如 ${GITHUB_USER})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FolioError::InvalidConfigValueError {
            field: "env_substitution".to_string(),
            value: String::new(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Listed projects that have no detail page.
    pub fn projects_without_case_study(&self) -> Vec<&str> {
        self.projects
            .iter()
            .filter(|p| !self.case_studies.contains_key(&p.id))
            .map(|p| p.id.as_str())
            .collect()
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.profile.role_interval_ms)
    }

    pub fn typewriter_speed(&self) -> Duration {
        Duration::from_millis(self.profile.typewriter_speed_ms)
    }
}

impl Validate for PortfolioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_non_empty_list("profile.roles", &self.profile.roles)?;
        validation::validate_positive_number(
            "profile.role_interval_ms",
            self.profile.role_interval_ms,
            1,
        )?;
        validation::validate_positive_number(
            "profile.typewriter_speed_ms",
            self.profile.typewriter_speed_ms,
            1,
        )?;

        for skill in &self.profile.skills {
            validation::validate_non_empty_string("profile.skills.name", &skill.name)?;
            validation::validate_range(
                &format!("profile.skills.{}.level", skill.name),
                skill.level,
                0,
                100,
            )?;
        }
        for entry in &self.profile.experience {
            validation::validate_non_empty_string("profile.experience.title", &entry.title)?;
        }

        validation::validate_unique_ids(
            "projects.id",
            self.projects.iter().map(|p| p.id.as_str()),
        )?;
        for project in &self.projects {
            validation::validate_url(&format!("projects.{}.live_url", project.id), &project.live_url)?;
            validation::validate_url(
                &format!("projects.{}.github_url", project.id),
                &project.github_url,
            )?;
            if project.category.is_all() {
                return Err(FolioError::InvalidConfigValueError {
                    field: format!("projects.{}.category", project.id),
                    value: project.category.to_string(),
                    reason: "'All' is reserved for the unfiltered view".to_string(),
                });
            }
            if let Category::Other(name) = &project.category {
                tracing::warn!(
                    project = %project.id,
                    category = %name,
                    "project category is not on the filter bar"
                );
            }
        }

        for id in self.projects_without_case_study() {
            tracing::warn!(project = %id, "project has no case study; its detail page will be missing");
        }

        for (slug, study) in &self.case_studies {
            validation::validate_url(&format!("case_studies.{}.live_url", slug), &study.live_url)?;
            validation::validate_url(
                &format!("case_studies.{}.github_url", slug),
                &study.github_url,
            )?;
            validation::validate_non_empty_list(
                &format!("case_studies.{}.gallery", slug),
                &study.gallery,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        name = "Ada"
        headline = "Hello, I'm Ada"
        roles = ["Developer", "Designer"]

        [[projects]]
        id = "shopdive"
        title = "ShopDive"
        description = "Store"
        category = "E-commerce"
        tags = ["Rust"]
        image = "/shopdive.png"
        live_url = "https://shopdive.example.com"
        github_url = "https://github.com/ada/shopdive"
        featured = true
    "#;

    #[test]
    fn test_defaults_for_intervals() {
        let config = PortfolioConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.role_interval(), Duration::from_millis(3000));
        assert_eq!(config.typewriter_speed(), Duration::from_millis(100));
        assert!(config.case_studies.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("FOLIO_TEST_GH_USER", "ada-l");
        let content = MINIMAL.replace("github.com/ada", "github.com/${FOLIO_TEST_GH_USER}");
        let config = PortfolioConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.projects[0].github_url, "https://github.com/ada-l/shopdive");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let content = MINIMAL.replace("Store", "${FOLIO_TEST_SURELY_UNSET}");
        let config = PortfolioConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.projects[0].description, "${FOLIO_TEST_SURELY_UNSET}");
    }

    #[test]
    fn test_empty_roles_fail_validation() {
        let content = MINIMAL.replace(r#"roles = ["Developer", "Designer"]"#, "roles = []");
        let config = PortfolioConfig::from_toml_str(&content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FolioError::InvalidConfigValueError { field, .. }) if field == "profile.roles"
        ));
    }

    #[test]
    fn test_all_category_is_reserved() {
        let content = MINIMAL.replace(r#"category = "E-commerce""#, r#"category = "All""#);
        let config = PortfolioConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_projects_without_case_study_are_listed() {
        let config = PortfolioConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.projects_without_case_study(), vec!["shopdive"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_skills_and_experience() {
        let content = MINIMAL.replace(
            "[[projects]]",
            r#"[[profile.skills]]
        name = "Backend Development"
        level = 90

        [[profile.experience]]
        year = "2024"
        title = "Full-Stack Developer"
        company = "Freelance"
        description = "Client work"
        technologies = ["Rust"]

        [[projects]]"#,
        );
        let config = PortfolioConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.profile.skills[0].level, 90);
        assert_eq!(config.profile.experience[0].company, "Freelance");
        assert!(config.validate().is_ok());

        let over = content.replace("level = 90", "level = 120");
        let config = PortfolioConfig::from_toml_str(&over).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FolioError::InvalidConfigValueError { field, .. })
                if field == "profile.skills.Backend Development.level"
        ));
    }

    #[test]
    fn test_bad_toml_is_reported() {
        assert!(matches!(
            PortfolioConfig::from_toml_str("[profile"),
            Err(FolioError::TomlError(_))
        ));
    }
}
