//! Profile image load-failure recovery

use std::sync::Arc;

use crate::config::PortfolioConfig;
use crate::error::CoreError;
use crate::traits::{AvatarService, PageSurface};
use crate::types::{ElementId, PageLayout};

/// Which source the profile image is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSource {
    #[default]
    Original,
    Fallback,
    /// The fallback failed too; nothing more is tried
    Exhausted,
}

/// Swaps a broken profile image for a generated avatar, once
pub struct ProfileImageController {
    image: ElementId,
    seed: String,
    avatar: Arc<dyn AvatarService>,
    source: ImageSource,
}

impl ProfileImageController {
    #[must_use]
    pub fn new(
        layout: &PageLayout,
        config: &PortfolioConfig,
        avatar: Arc<dyn AvatarService>,
    ) -> Self {
        Self {
            image: layout.profile_image.clone(),
            seed: config.owner_name.clone(),
            avatar,
            source: ImageSource::Original,
        }
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    /// The image failed to load
    ///
    /// Returns the fallback address when one was applied. A failing fallback
    /// is only logged.
    pub fn on_error(&mut self, surface: &mut dyn PageSurface) -> Option<String> {
        let src = surface.attribute(&self.image, "src").unwrap_or_default();
        let err = CoreError::AssetLoadFailed {
            asset: src,
            message: "image failed to load".to_string(),
        };

        match self.source {
            ImageSource::Original => {
                log::warn!("{err}, using generated avatar");
                let url = self.avatar.avatar_url(&self.seed);
                surface.set_attribute(&self.image, "src", &url);
                self.source = ImageSource::Fallback;
                Some(url)
            }
            ImageSource::Fallback => {
                log::warn!("{err}, fallback avatar unavailable");
                self.source = ImageSource::Exhausted;
                None
            }
            ImageSource::Exhausted => None,
        }
    }
}
