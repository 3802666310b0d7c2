use serde::{Deserialize, Serialize};

use crate::model::Username;

/// A vertex of the [crate::FriendGraph].
///
/// The `username` is fixed once the profile is tracked by a graph. The `profile_image` is an
/// opaque reference (usually a URL) that can change at any time via
/// [crate::FriendGraph::set_profile_image].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    username: Username,
    name: String,
    #[serde(default)]
    profile_image: Option<String>,
}

impl Profile {
    pub fn new(username: impl Into<Username>, name: impl ToString) -> Self {
        Self {
            username: username.into(),
            name: name.to_string(),
            profile_image: None,
        }
    }

    pub fn with_image(mut self, profile_image: impl ToString) -> Self {
        self.profile_image = Some(profile_image.to_string());
        self
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    pub(crate) fn set_profile_image(&mut self, profile_image: Option<String>) {
        self.profile_image = profile_image;
    }
}
