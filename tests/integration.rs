// SPDX-License-Identifier: MPL-2.0
use inline_lens::config::{self, Config, GeneralConfig};
use inline_lens::i18n::fluent::I18n;
use tempfile::tempdir;

fn config_with_language(language: &str) -> Config {
    Config {
        general: GeneralConfig {
            language: Some(language.to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    config::save_to_path(&config_with_language("en-US"), &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config::save_to_path(&config_with_language("fr"), &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn cli_language_overrides_config() {
    let i18n = I18n::new(Some("fr".to_string()), &config_with_language("en-US"));
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn every_english_key_is_translated_in_french() {
    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    let fr = I18n::new(Some("fr".to_string()), &Config::default());
    for key in [
        "app-title",
        "document-intro",
        "document-loading",
        "gallery-close",
        "gallery-edit",
        "gallery-cancel",
        "gallery-apply-save",
        "gallery-saving",
        "permission-dialog-title",
        "permission-dialog-body",
        "notification-export-success",
        "notification-export-permission-denied",
    ] {
        assert!(!en.tr(key).starts_with("MISSING"), "en-US lacks {key}");
        assert!(!fr.tr(key).starts_with("MISSING"), "fr lacks {key}");
    }
}

#[test]
fn page_counter_formats_arguments() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let counter = i18n.tr_with_args("gallery-page-counter", &[("current", "2"), ("total", "3")]);
    assert_eq!(counter, "2 / 3");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let i18n = I18n::new(Some("xx-YY".to_string()), &config_with_language("zz"));
    let current = i18n.current_locale().to_string();
    assert!(i18n
        .available_locales
        .iter()
        .any(|locale| locale.to_string() == current));
}
