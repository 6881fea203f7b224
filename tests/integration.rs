// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config};
use iced_gallery::domain::row::RowList;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::list;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(
        i18n_fr.tr("error-download-decode"),
        "Le fichier téléchargé n'est pas une image"
    );
}

#[test]
fn network_settings_round_trip_through_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut config = Config::default();
    config.network.user_agent = Some("GalleryTest/1.0".to_string());
    config.network.redirect_limit = Some(3);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.network.user_agent(), "GalleryTest/1.0");
    assert_eq!(loaded.network.redirect_limit(), 3);
}

#[test]
fn every_english_key_has_a_french_translation() {
    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    let fr = I18n::new(Some("fr".to_string()), &Config::default());
    for key in [
        "app-name",
        "list-title",
        "detail-back",
        "detail-downloading",
        "error-download-title",
        "error-download-read",
        "error-download-decode",
        "error-download-ok",
        "notification-config-load-error",
        "notification-client-error",
        "notification-dismiss",
    ] {
        assert!(!en.tr(key).starts_with("MISSING"), "en-US lacks {key}");
        assert!(!fr.tr(key).starts_with("MISSING"), "fr lacks {key}");
    }
}

#[test]
fn builtin_rows_expose_expected_navigation() {
    let rows = RowList::builtin();
    assert_eq!(rows.count(), 2);
    assert_eq!(rows.row_at(0).title(), "Guinea pig");
    assert!(!list::is_navigable(rows.row_at(0)));
    assert!(list::thumbnail_url(rows.row_at(0)).is_some());

    let zoomable = rows.row_at(1);
    assert_eq!(zoomable.title(), "Large satellite photo");
    let full = list::full_url(zoomable).expect("full url should parse");
    assert_eq!(full.host_str(), Some("www.dropbox.com"));
}

#[test]
#[should_panic(expected = "out of range")]
fn row_at_out_of_range_panics() {
    let rows = RowList::builtin();
    let _ = rows.row_at(rows.count());
}
