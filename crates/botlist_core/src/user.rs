//! User profile model.

use crate::Snowflake;
use serde::{Deserialize, Serialize};

/// A platform user's profile.
///
/// Response body of a user fetch. The role flags are independent booleans; a
/// user can hold any combination of them. The `mod` wire key is a Rust
/// keyword and is exposed as `moderator`.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct User {
    /// Snowflake id of the user.
    id: Snowflake,
    /// Username of the user.
    username: String,
    /// Discriminator of the user.
    discriminator: String,
    /// CDN hash of the avatar shown when the user has none of their own.
    #[serde(rename = "defAvatar")]
    def_avatar: String,
    /// Admin status of the user.
    admin: bool,
    /// Website moderator status of the user.
    #[serde(rename = "webMod")]
    web_mod: bool,
    /// Moderator status of the user.
    #[serde(rename = "mod")]
    moderator: bool,
    /// Certified developer status of the user.
    #[serde(rename = "certifiedDev")]
    certified_dev: bool,
    /// Supporter status of the user.
    supporter: bool,

    /// Avatar hash of the user's avatar. Nullable on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    avatar: Option<String>,
    /// Banner image url of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    banner: Option<String>,
    /// Bio of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    bio: Option<String>,
    /// Custom hex color of the user. Not guaranteed to be valid hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    color: Option<String>,
    /// Linked social handles of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    social: Option<UserSocials>,
}

impl User {
    /// CDN url of the user's avatar, falling back to the default avatar when
    /// the user has none of their own.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash),
            None => format!(
                "https://cdn.discordapp.com/embed/avatars/{}.png",
                self.def_avatar
            ),
        }
    }
}

/// A user's linked social handles.
///
/// All fields are plain usernames, never urls; `youtube` is a channel id.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct UserSocials {
    /// Github username of the user.
    github: String,
    /// Instagram username of the user.
    instagram: String,
    /// Reddit username of the user.
    reddit: String,
    /// Twitter username of the user.
    twitter: String,
    /// Youtube channel id of the user.
    youtube: String,
}
