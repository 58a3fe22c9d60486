//! Page and collaborator abstraction trait definition

mod avatar_service;
mod contact_backend;
mod page_surface;

pub use avatar_service::{AvatarService, UiAvatarsService};
pub use contact_backend::{ContactBackend, SimulatedContactBackend};
pub use page_surface::PageSurface;
