// Authentication state - the signed-in user's profile as handed to us
use serde::{Deserialize, Serialize};

/// Profile fields reported by the identity provider. Every field may be missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// URI of the avatar image (https://, file://, ...)
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarSource<'a> {
    Default,
    Uri(&'a str),
}

pub struct AuthState {
    initial: Option<UserProfile>,
    profile: Option<UserProfile>,
}

impl AuthState {
    pub fn new(profile: Option<UserProfile>) -> Self {
        Self {
            initial: profile.clone(),
            profile,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.field(|p| p.display_name.as_deref())
    }

    pub fn email(&self) -> &str {
        self.field(|p| p.email.as_deref())
    }

    pub fn avatar(&self) -> AvatarSource<'_> {
        match self.field(|p| p.avatar.as_deref()) {
            "" => AvatarSource::Default,
            uri => AvatarSource::Uri(uri),
        }
    }

    /// First letter of the display name, used on the default avatar.
    pub fn initial(&self) -> Option<char> {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }

    pub fn sign_in(&mut self, profile: UserProfile) {
        tracing::info!(email = profile.email.as_deref().unwrap_or(""), "signed in");
        self.profile = Some(profile);
    }

    pub fn sign_out(&mut self) {
        if self.profile.take().is_some() {
            tracing::info!("signed out");
        }
    }

    pub fn reset(&mut self) {
        self.profile = self.initial.clone();
    }

    fn field<'a>(&'a self, get: impl Fn(&'a UserProfile) -> Option<&'a str>) -> &'a str {
        self.profile
            .as_ref()
            .and_then(get)
            .map(str::trim)
            .unwrap_or("")
    }
}
