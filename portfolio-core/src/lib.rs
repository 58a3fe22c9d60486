//! Portfolio Core Library
//!
//! Provides the interaction logic behind the single-page portfolio site, including:
//! - View activation (active section and navigation highlighting)
//! - Entrance reveal of animatable elements
//! - Contact form validation and the submission state machine
//! - Smooth-scroll navigation, decorative effects and profile image recovery
//!
//! This library is platform-independent: the page is reached through the
//! [`PageSurface`] trait and the form backend through [`ContactBackend`],
//! so the same controllers drive the in-memory [`Document`] used by the
//! terminal host and any browser binding.

pub mod config;
pub mod document;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::PortfolioConfig;
pub use document::Document;
pub use error::{CoreError, CoreResult, FieldError};
pub use services::{
    ContactFormController, EffectsController, NavigationController, PageControllers,
    ProfileImageController, RevealWatcher, ViewActivationController,
};
pub use traits::{AvatarService, ContactBackend, PageSurface};
