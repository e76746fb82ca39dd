//! Bot profile model.

use crate::{Snowflake, Validate};
use botlist_error::{ValidationError, ValidationErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed bot's public profile.
///
/// This is the response body of a bot profile fetch, and the element type of
/// a search response's `results`. Wire names that are not snake_case keep
/// their exact spelling through `#[serde(rename)]`; optional fields are
/// omitted on re-serialization rather than emitted as `null`.
///
/// The first entry of `owners` is the primary owner by platform convention.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Bot {
    /// Snowflake id of the bot.
    id: Snowflake,
    /// Snowflake client id of the bot.
    #[serde(rename = "clientid")]
    client_id: Snowflake,
    /// Username of the bot.
    username: String,
    /// Discriminator of the bot.
    discriminator: String,
    /// CDN hash of the avatar shown when the bot has none of its own.
    #[serde(rename = "defAvatar")]
    def_avatar: String,
    /// Command prefix of the bot.
    prefix: String,
    /// Short description of the bot.
    #[serde(rename = "shortdesc")]
    short_desc: String,
    /// Library the bot was written with. Legacy field, no longer populated
    /// upstream, but still delivered in every payload.
    lib: String,
    /// When the bot was approved for listing.
    date: DateTime<Utc>,
    /// Total upvotes the bot has.
    points: u64,
    /// Upvotes the bot has this month.
    #[serde(rename = "monthlyPoints")]
    monthly_points: u64,
    /// Certified status of the bot.
    #[serde(rename = "certifiedBot")]
    certified: bool,
    /// Snowflakes of the bot owners. First entry is the primary owner.
    owners: Vec<Snowflake>,
    /// Listing tags of the bot.
    tags: Vec<String>,

    /// Custom invite url of the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    invite: Option<String>,
    /// Website url of the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    website: Option<String>,
    /// Link to the bot's github repo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    github: Option<String>,
    /// Long description. Can contain HTML and/or Markdown.
    #[serde(rename = "longdesc", default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    long_desc: Option<String>,
    /// Avatar hash of the bot's avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    avatar: Option<String>,
    /// Support server invite code of the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    support: Option<String>,
    /// Vanity url of the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    vanity: Option<String>,
    /// Guild id for the donatebot setup. A plain string on the wire, not a
    /// snowflake.
    #[serde(
        rename = "donatebotguildid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(default)]
    donate_bot_guild_id: Option<String>,
    /// Full url to the bot's banner image. Nullable on the wire.
    #[serde(rename = "bannerUrl", default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    banner_url: Option<String>,
    /// Guilds featured on the bot page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    guilds: Option<Vec<Snowflake>>,
    /// Servers the bot is in, per shard. Nullable on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    shards: Option<Vec<u64>>,
    /// Servers the bot is in according to posted stats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    server_count: Option<u64>,
    /// Shards the bot has according to posted stats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    shard_count: Option<u64>,
}

impl Bot {
    /// The primary owner: the first entry of `owners` by platform convention.
    pub fn primary_owner(&self) -> Option<&Snowflake> {
        self.owners.first()
    }

    /// CDN url of the bot's avatar, falling back to the default avatar when
    /// the bot has none of its own. The wire carries hashes, not urls.
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

impl Validate for Bot {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.owners.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyOwners));
        }
        // The platform does not guarantee posted stats agree with the shard
        // list; check rather than assume.
        if let (Some(shards), Some(server_count)) = (&self.shards, self.server_count) {
            let sum: u64 = shards.iter().sum();
            if sum != server_count {
                return Err(ValidationError::new(ValidationErrorKind::ShardSumMismatch {
                    expected: server_count,
                    actual: sum,
                }));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Bot {
        BotBuilder::default()
            .id(Snowflake::new(264811613708746752))
            .client_id(Snowflake::new(264811613708746752))
            .username("Luca")
            .discriminator("1375")
            .def_avatar("6debd47ed13483642cf09e832ed0bc1b")
            .prefix("-")
            .short_desc("An example bot")
            .lib("")
            .date("2017-04-26T18:08:17.125Z".parse::<DateTime<Utc>>().unwrap())
            .points(1000_u64)
            .monthly_points(32_u64)
            .certified(false)
            .owners(vec![Snowflake::new(129908908096487424)])
            .tags(vec!["music".to_string(), "moderation".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let json = r#"{
            "defAvatar": "6debd47ed13483642cf09e832ed0bc1b",
            "shortdesc": "An example bot",
            "prefix": "-",
            "lib": "",
            "clientid": "264811613708746752",
            "id": "264811613708746752",
            "discriminator": "1375",
            "username": "Luca",
            "date": "2017-04-26T18:08:17.125Z",
            "monthlyPoints": 32,
            "points": 1000,
            "certifiedBot": false,
            "owners": ["129908908096487424"],
            "tags": ["music", "moderation"]
        }"#;

        let bot: Bot = serde_json::from_str(json).unwrap();
        assert_eq!(bot.username(), "Luca");
        assert_eq!(bot.id().get(), 264811613708746752);
        assert_eq!(bot.avatar(), &None);
        assert_eq!(bot.server_count(), &None);
        assert_eq!(
            bot.primary_owner().unwrap().get(),
            129908908096487424
        );
    }

    #[test]
    fn test_absent_fields_stay_absent_on_reserialize() {
        let bot = fixture();
        let value = serde_json::to_value(&bot).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("avatar"));
        assert!(!object.contains_key("server_count"));
        assert!(!object.contains_key("bannerUrl"));
        assert!(object.contains_key("defAvatar"));
    }

    #[test]
    fn test_empty_owners_fails_validation() {
        let bot = BotBuilder::default()
            .id(Snowflake::new(1))
            .client_id(Snowflake::new(1))
            .username("x")
            .discriminator("0000")
            .def_avatar("hash")
            .prefix("!")
            .short_desc("d")
            .lib("")
            .date(Utc::now())
            .points(0_u64)
            .monthly_points(0_u64)
            .certified(false)
            .owners(Vec::new())
            .tags(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(bot.validate().is_err());
    }

    #[test]
    fn test_shard_sum_mismatch_fails_validation() {
        let mut bot = fixture();
        bot.shards = Some(vec![100, 100]);
        bot.server_count = Some(300);
        let err = bot.validate().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::ShardSumMismatch {
                expected: 300,
                actual: 200
            }
        );

        bot.server_count = Some(200);
        assert!(bot.validate().is_ok());
    }

    #[test]
    fn test_avatar_url_falls_back_to_default() {
        let mut bot = fixture();
        assert!(bot.avatar_url().contains("embed/avatars"));
        bot.avatar = Some("a_1241e38".to_string());
        assert!(bot.avatar_url().contains("avatars/264811613708746752/a_1241e38"));
    }
}
