use crate::core::rotator::RoleRotator;
use crate::core::typewriter::TypewriterRevealer;
use crate::domain::ports::Animated;
use serde::Serialize;

/// Render-ready snapshot of the landing page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroFrame {
    pub headline: String,
    pub headline_complete: bool,
    pub role: String,
}

/// Landing page animations. Both timers live exactly as long as the view:
/// `unmount` or dropping the view stops them.
#[derive(Debug)]
pub struct HeroView {
    rotator: RoleRotator,
    typewriter: TypewriterRevealer,
}

impl HeroView {
    pub fn new(rotator: RoleRotator, typewriter: TypewriterRevealer) -> Self {
        Self {
            rotator,
            typewriter,
        }
    }

    pub fn mount(&mut self) {
        tracing::debug!("hero mounted");
        self.rotator.start();
        self.typewriter.start();
    }

    pub fn unmount(&mut self) {
        self.rotator.stop();
        self.typewriter.stop();
        tracing::debug!("hero unmounted");
    }

    pub fn is_animating(&self) -> bool {
        self.rotator.is_running() || self.typewriter.is_running()
    }

    pub fn frame(&self) -> HeroFrame {
        HeroFrame {
            headline: self.typewriter.revealed(),
            headline_complete: self.typewriter.is_complete(),
            role: self.rotator.current(),
        }
    }

    pub fn rotator(&self) -> &RoleRotator {
        &self.rotator
    }

    pub fn typewriter_mut(&mut self) -> &mut TypewriterRevealer {
        &mut self.typewriter
    }
}

impl Drop for HeroView {
    fn drop(&mut self) {
        self.unmount();
    }
}
