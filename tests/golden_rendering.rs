use std::fs;
use std::path::PathBuf;

use realones_icon::{FontCandidates, FontPair, IconConfig, Label};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn fixture_config() -> IconConfig {
    IconConfig {
        fonts: FontCandidates {
            dir: PathBuf::from("tests/fixtures/fonts"),
            pairs: vec![FontPair::new("DejaVuSans.ttf", "DejaVuSerif-Italic.ttf")],
        },
        ..Default::default()
    }
}

#[test]
fn golden_icon_matches_fixture() {
    let icon = realones_icon::render_icon(&fixture_config()).expect("render icon");
    let digest = icon.sha256_hex();

    let expected_path = golden_path("icon-dejavu.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "rendered icon does not match golden");
}

/// The decorative layer alone: circles composited and flattened, no labels.
/// Pinned on the raw RGB buffer so the digest does not depend on the PNG
/// encoder.
#[test]
fn golden_circles_match_fixture() {
    let config = IconConfig {
        first_label: Label::new("", 220.0),
        second_label: Label::new("", 200.0),
        ..fixture_config()
    };
    let fonts = realones_icon::fonts::resolve(&config.fonts).expect("fixture fonts");
    let img = realones_icon::rendering::render_image(&config, &fonts);
    assert_eq!(img.dimensions(), (1024, 1024));
    let digest = hex::encode(Sha256::digest(img.as_raw()));

    let expected_path = golden_path("circles-raw.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "circle layer does not match golden");

    // both alpha levels blend to fixed tints over the background
    assert_eq!(img.get_pixel(1023, 0).0, [205, 232, 248]);
    assert_eq!(img.get_pixel(0, 490).0, [216, 237, 249]);
}
