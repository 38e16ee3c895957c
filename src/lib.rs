pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::PortfolioConfig;
pub use crate::core::{
    carousel::GalleryCarousel, catalog::Catalog, filter::CategoryFilter, hero::HeroView,
    rotator::RoleRotator, typewriter::TypewriterRevealer,
};
pub use domain::model::{Category, Project};
pub use domain::ports::Animated;
pub use utils::error::{FolioError, Result};
