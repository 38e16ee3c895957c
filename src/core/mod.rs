pub mod carousel;
pub mod catalog;
pub mod cycle;
pub mod filter;
pub mod hero;
pub mod rotator;
pub mod scheduler;
pub mod typewriter;

pub use crate::domain::model::{CaseStudy, Category, Profile, Project};
pub use crate::domain::ports::Animated;
pub use crate::utils::error::Result;
