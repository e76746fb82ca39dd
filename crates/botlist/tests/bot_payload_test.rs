//! Tests for full bot profile payloads.

use botlist::{Bot, Validate};

/// A realistic profile payload with every optional field populated.
const FULL_BOT: &str = r#"{
    "defAvatar": "6debd47ed13483642cf09e832ed0bc1b",
    "invite": "https://discord.com/oauth2/authorize?client_id=264811613708746752",
    "website": "https://lucabot.example",
    "github": "https://github.com/example/luca",
    "longdesc": "A **longer** description with markdown.",
    "shortdesc": "An example bot",
    "prefix": "-",
    "lib": "discord.js",
    "clientid": "264811613708746752",
    "avatar": "7edcc4c6fbb0b23762455ca139f0e1c9",
    "id": "264811613708746752",
    "discriminator": "1375",
    "username": "Luca",
    "date": "2017-04-26T18:08:17.125Z",
    "guilds": ["417962459810160642"],
    "shards": [1620, 1635, 1595],
    "monthlyPoints": 32,
    "points": 1000,
    "certifiedBot": true,
    "owners": ["129908908096487424", "140862798832861184"],
    "tags": ["music", "moderation"],
    "server_count": 4850,
    "support": "KYZsaFb",
    "shard_count": 3,
    "bannerUrl": "https://lucabot.example/banner.png",
    "vanity": "luca",
    "donatebotguildid": "417962459810160642"
}"#;

#[test]
fn test_full_payload_decodes() {
    let bot: Bot = serde_json::from_str(FULL_BOT).unwrap();

    assert_eq!(bot.username(), "Luca");
    assert_eq!(bot.id().get(), 264811613708746752);
    assert_eq!(bot.client_id().get(), 264811613708746752);
    assert_eq!(bot.date().timestamp(), 1493230097);
    assert_eq!(bot.owners().len(), 2);
    assert_eq!(bot.primary_owner().unwrap().get(), 129908908096487424);
    assert_eq!(bot.shards().as_ref().unwrap().len(), 3);
    assert_eq!(bot.server_count(), &Some(4850));
    assert!(*bot.certified());
    assert_eq!(bot.vanity().as_deref(), Some("luca"));
}

#[test]
fn test_full_payload_validates() {
    let bot: Bot = serde_json::from_str(FULL_BOT).unwrap();
    // 1620 + 1635 + 1595 == 4850, so posted stats agree with the shard list.
    assert!(bot.validate().is_ok());
}

#[test]
fn test_round_trip_preserves_wire_names() {
    let bot: Bot = serde_json::from_str(FULL_BOT).unwrap();
    let value = serde_json::to_value(&bot).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("clientid"));
    assert!(object.contains_key("defAvatar"));
    assert!(object.contains_key("shortdesc"));
    assert!(object.contains_key("monthlyPoints"));
    assert!(object.contains_key("certifiedBot"));
    assert!(object.contains_key("donatebotguildid"));
    assert!(!object.contains_key("client_id"));
    assert!(!object.contains_key("monthly_points"));

    let back: Bot = serde_json::from_value(value).unwrap();
    assert_eq!(back, bot);
}

#[test]
fn test_non_numeric_id_rejected() {
    let json = FULL_BOT.replace("\"264811613708746752\"", "\"luca\"");
    let result: Result<Bot, _> = serde_json::from_str(&json);
    assert!(result.is_err());
}

#[test]
fn test_avatar_url_uses_hash() {
    let bot: Bot = serde_json::from_str(FULL_BOT).unwrap();
    assert_eq!(
        bot.avatar_url(),
        "https://cdn.discordapp.com/avatars/264811613708746752/7edcc4c6fbb0b23762455ca139f0e1c9.png"
    );
}
