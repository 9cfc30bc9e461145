//! Configuration loading and validation against real TOML files.

use scratchcard::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[tokio::test]
async fn load_full_config_file() {
    let file = write_config(
        r#"
        [game]
        title = "LUCKY TICKET"
        fallback_name = "Anonymous"

        [[prizes]]
        id = "50_coins"
        weight = 0.5
        payout = 50

        [[prizes]]
        id = "no_prize"
        weight = 0.5
        payout = 0

        [animation]
        enabled = false
        cover_line_delay_ms = 10
        reveal_line_delay_ms = 10

        [logging]
        level = "debug"
        "#,
    );
    let config = Config::load(file.path().to_str().unwrap())
        .await
        .expect("config loads");
    assert_eq!(config.game.title, "LUCKY TICKET");
    assert_eq!(config.prizes.len(), 2);
    assert!(!config.animation.enabled);
    assert!(config.animation.cover_delay().is_zero());

    let table = config.validate().expect("table is valid");
    assert_eq!(table.payout("50_coins"), Some(50));
    assert_eq!(table.payout("no_prize"), Some(0));
}

#[tokio::test]
async fn missing_file_is_an_error() {
    let err = Config::load("/nonexistent/scratchcard-config.toml")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[tokio::test]
async fn malformed_toml_is_an_error() {
    let file = write_config("[game\ntitle = ");
    let err = Config::load(file.path().to_str().unwrap())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[tokio::test]
async fn create_default_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let path_str = path.to_str().unwrap();

    Config::create_default(path_str).await.expect("write default");
    let config = Config::load(path_str).await.expect("reload default");
    let table = config.validate().expect("default validates");
    assert_eq!(table.entries().len(), 4);
    assert!(table.is_normalized());
}

#[tokio::test]
async fn negative_weight_in_file_fails_validation() {
    let file = write_config(
        r#"
        [game]
        title = "BAD TABLE"
        fallback_name = "Nobody"

        [[prizes]]
        id = "a"
        weight = -0.5
        payout = 10

        [[prizes]]
        id = "no_prize"
        weight = 1.5
        payout = 0
        "#,
    );
    let config = Config::load(file.path().to_str().unwrap())
        .await
        .expect("parses fine");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("invalid prize configuration"));
}

#[tokio::test]
async fn prize_order_from_file_is_preserved() {
    let file = write_config(
        r#"
        [game]
        title = "ORDERED"
        fallback_name = "Nobody"

        [[prizes]]
        id = "z_first"
        weight = 0.3
        payout = 5

        [[prizes]]
        id = "a_second"
        weight = 0.2
        payout = 10

        [[prizes]]
        id = "no_prize"
        weight = 0.5
        payout = 0
        "#,
    );
    let config = Config::load(file.path().to_str().unwrap())
        .await
        .expect("config loads");
    let table = config.validate().expect("valid");
    let ids: Vec<&str> = table.entries().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["z_first", "a_second", "no_prize"]);
}
