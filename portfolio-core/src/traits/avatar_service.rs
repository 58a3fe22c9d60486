//! Avatar fallback service Trait

/// Avatar service Trait
///
/// Given a seed string, returns the address of a displayable image. Used as
/// the recovery source when the profile picture fails to load.
pub trait AvatarService: Send + Sync {
    fn avatar_url(&self, seed: &str) -> String;
}

/// `ui-avatars.com` initials avatar
#[derive(Debug, Clone)]
pub struct UiAvatarsService {
    size: u32,
    background: String,
    color: String,
}

impl UiAvatarsService {
    #[must_use]
    pub fn new(size: u32, background: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            size,
            background: background.into(),
            color: color.into(),
        }
    }
}

impl Default for UiAvatarsService {
    fn default() -> Self {
        Self::new(200, "7c4dff", "ffffff")
    }
}

impl AvatarService for UiAvatarsService {
    fn avatar_url(&self, seed: &str) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}&size={}&background={}&color={}",
            urlencoding::encode(seed.trim()),
            self.size,
            self.background,
            self.color
        )
    }
}
