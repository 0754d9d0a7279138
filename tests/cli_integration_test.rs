#![cfg(feature = "cli")]

use anyhow::Result;
use small_utils::utils::validation::Validate;
use small_utils::{Command, CommandRunner, UtilsConfig, UtilsError};
use tempfile::TempDir;

const CONFIG: &str = r#"
[logging]
verbose = false

[random]
seed = 99

[[brands]]
name = "email"
kind = "string"
pattern = "${SMALL_UTILS_IT_EMAIL_PATTERN}"
error_message = "Invalid email address"

[[brands]]
name = "percent"
kind = "number"
min = 0
max = 100
"#;

fn load(dir: &TempDir) -> Result<UtilsConfig> {
    std::env::set_var("SMALL_UTILS_IT_EMAIL_PATTERN", "^[^@]+@[^@]+$");
    let path = dir.path().join("utils.toml");
    std::fs::write(&path, CONFIG)?;
    let config = UtilsConfig::from_file(&path)?;
    config.validate()?;
    Ok(config)
}

#[tokio::test]
async fn test_check_against_configured_brands() -> Result<()> {
    let dir = TempDir::new()?;
    let config = load(&dir)?;
    let mut runner = CommandRunner::new(&config)?;

    let out = runner
        .run(&Command::Check {
            brand: "email".to_string(),
            value: "admin@example.com".to_string(),
            message: None,
        })
        .await?;
    assert_eq!(out, "\"admin@example.com\"");

    let err = runner
        .run(&Command::Check {
            brand: "email".to_string(),
            value: "a@b@c".to_string(),
            message: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, UtilsError::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "Invalid email address");

    let err = runner
        .run(&Command::Check {
            brand: "percent".to_string(),
            value: "150".to_string(),
            message: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Value does not match the brand criteria: 150");
    Ok(())
}

#[tokio::test]
async fn test_unknown_brand_is_config_error() -> Result<()> {
    let dir = TempDir::new()?;
    let config = load(&dir)?;
    let mut runner = CommandRunner::new(&config)?;

    let err = runner
        .run(&Command::Check {
            brand: "phone".to_string(),
            value: "123".to_string(),
            message: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, UtilsError::ConfigError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_seeded_pick_is_reproducible() -> Result<()> {
    let dir = TempDir::new()?;
    let config = load(&dir)?;
    let values: Vec<String> = (0..10).map(|i| i.to_string()).collect();

    let mut first = CommandRunner::new(&config)?;
    let mut second = CommandRunner::new(&config)?;
    for _ in 0..5 {
        let a = first.run(&Command::Pick { values: values.clone() }).await?;
        let b = second.run(&Command::Pick { values: values.clone() }).await?;
        assert_eq!(a, b);
    }
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = UtilsConfig::from_file("/definitely/not/here/utils.toml").unwrap_err();
    assert!(matches!(err, UtilsError::IoError(_)));
}
