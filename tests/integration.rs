// SPDX-License-Identifier: MPL-2.0
use iced_mosaic::config::{self, Config};
use iced_mosaic::gallery::{CategoryFilter, Direction, GalleryController, ItemId};
use iced_mosaic::i18n::fluent::I18n;
use iced_mosaic::manifest;
use iced_mosaic::media;
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MANIFEST: &str = r#"
title = "Holiday"

[[item]]
label = "Mountain"
category = "nature"
image = "images/mountain.png"

[[item]]
label = "Harbor"
category = "city"
image = "images/harbor.png"

[[item]]
label = "Lake"
category = "nature"
image = "images/lake.png"
"#;

fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create image directory");
    }
    let image = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
    image.save(path).expect("failed to write png");
}

#[test]
fn test_gallery_open_filter_and_browse() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join(manifest::MANIFEST_FILE), MANIFEST).expect("write manifest");

    let gallery = manifest::load(dir.path()).expect("gallery should load");
    assert_eq!(gallery.title.as_deref(), Some("Holiday"));

    let mut controller = GalleryController::new(gallery.collection);
    assert_eq!(controller.view_state().visible.len(), 3);

    // Filter down to nature, then browse it in the lightbox with wrap-around.
    controller.set_filter(CategoryFilter::Only("nature".to_string()));
    assert_eq!(controller.view_state().visible.len(), 2);

    controller.open_at(ItemId(0));
    {
        let view = controller.view_state();
        let modal = view.modal.expect("lightbox should be open");
        assert_eq!(modal.item.label, "Mountain");
        assert_eq!(modal.counter(), "1 / 2");
        assert!(modal.nav_enabled());
    }

    controller.step(Direction::Next);
    {
        let view = controller.view_state();
        let modal = view.modal.expect("lightbox should stay open");
        assert_eq!(modal.item.label, "Lake");
        assert_eq!(modal.counter(), "2 / 2");
    }

    // Stepping past the end wraps back to the first visible item.
    controller.step(Direction::Next);
    assert_eq!(
        controller
            .view_state()
            .modal
            .expect("lightbox should stay open")
            .item
            .id,
        ItemId(0)
    );

    controller.close();
    assert!(controller.view_state().modal.is_none());
}

#[test]
fn test_filtered_out_press_does_not_open_the_lightbox() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join(manifest::MANIFEST_FILE), MANIFEST).expect("write manifest");
    let gallery = manifest::load(dir.path()).expect("gallery should load");

    let mut controller = GalleryController::new(gallery.collection);
    controller.set_filter(CategoryFilter::Only("nature".to_string()));

    // Harbor is city, hidden by the filter; the press must be ignored.
    controller.open_at(ItemId(1));
    assert!(controller.view_state().modal.is_none());
}

#[test]
fn test_manifest_paths_decode_through_the_image_pipeline() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join(manifest::MANIFEST_FILE), MANIFEST).expect("write manifest");
    write_png(&dir.path().join("images/mountain.png"), 6, 4);

    let gallery = manifest::load(dir.path()).expect("gallery should load");
    let mountain = &gallery.collection.items()[0];

    let data = media::load_image(&mountain.image).expect("decode should succeed");
    assert_eq!(data.width, 6);
    assert_eq!(data.height, 4);

    // Harbor was declared but never written to disk; decoding it fails
    // without affecting the loaded gallery.
    let harbor = &gallery.collection.items()[1];
    assert!(media::load_image(&harbor.image).is_err());
}

#[tokio::test]
async fn test_off_thread_decode_matches_the_sync_path() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("sample.png");
    write_png(&path, 8, 5);

    let sync_data = media::load_image(&path).expect("sync decode should succeed");
    let async_data = media::load_image_off_thread(path.clone())
        .await
        .expect("off-thread decode should succeed");

    assert_eq!(async_data.width, sync_data.width);
    assert_eq!(async_data.height, sync_data.height);

    let (returned_path, result) = media::load_image_for_prefetch(path.clone()).await;
    assert_eq!(returned_path, path);
    assert!(result.is_ok());
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        grid_cell_size: None,
        prefetch_enabled: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        grid_cell_size: None,
        prefetch_enabled: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
