use crate::config::toml_config::PortfolioConfig;
use crate::core::carousel::GalleryCarousel;
use crate::core::filter::CategoryFilter;
use crate::core::hero::HeroView;
use crate::core::rotator::RoleRotator;
use crate::core::typewriter::TypewriterRevealer;
use crate::domain::model::{CaseStudy, Profile, Project};
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::Validate;

/// Loaded, validated site content. Interactive units are built fresh per call
/// so each view owns its own state.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: PortfolioConfig,
}

impl Catalog {
    pub fn new(config: PortfolioConfig) -> Result<Self> {
        config.validate()?;
        tracing::info!(
            "Catalog ready: {} projects, {} case studies",
            config.projects.len(),
            config.case_studies.len()
        );
        Ok(Self { config })
    }

    pub fn profile(&self) -> &Profile {
        &self.config.profile
    }

    pub fn projects(&self) -> &[Project] {
        &self.config.projects
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.config.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn slugs(&self) -> Vec<&str> {
        // BTreeMap keys are already sorted
        self.config.case_studies.keys().map(String::as_str).collect()
    }

    pub fn case_study(&self, slug: &str) -> Result<&CaseStudy> {
        self.config
            .case_studies
            .get(slug)
            .ok_or_else(|| FolioError::NotFound {
                slug: slug.to_string(),
            })
    }

    pub fn filter(&self) -> CategoryFilter<'_> {
        CategoryFilter::new(&self.config.projects)
    }

    pub fn gallery(&self, slug: &str) -> Result<GalleryCarousel> {
        GalleryCarousel::new(self.case_study(slug)?.gallery.iter().cloned())
    }

    pub fn role_rotator(&self) -> Result<RoleRotator> {
        RoleRotator::new(self.config.profile.roles.iter().cloned(), self.config.role_interval())
    }

    pub fn headline_typewriter(&self) -> Result<TypewriterRevealer> {
        TypewriterRevealer::new(
            self.config.profile.headline.clone(),
            self.config.typewriter_speed(),
        )
    }

    pub fn hero(&self) -> Result<HeroView> {
        Ok(HeroView::new(self.role_rotator()?, self.headline_typewriter()?))
    }
}
