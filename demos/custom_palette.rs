//! Custom palette example - renders a dark variant of the icon

use realones_icon::{FontCandidates, FontPair, IconConfig, OutputTarget, Palette};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::temp_dir().join("realones-icon-demo");
    std::fs::create_dir_all(&out_dir)?;

    let config = IconConfig {
        palette: Palette {
            background: [18, 28, 42],
            circle: [40, 70, 110],
            first_text: [232, 244, 252],
            second_text: [74, 155, 184],
        },
        fonts: FontCandidates {
            dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/fonts").into(),
            pairs: vec![FontPair::new("DejaVuSans.ttf", "DejaVuSerif-Italic.ttf")],
        },
        outputs: vec![
            OutputTarget::new("Dark icon", out_dir.join("icon-dark.png")),
            OutputTarget::new("Dark adaptive icon", out_dir.join("adaptive-icon-dark.png")),
        ],
        ..Default::default()
    };

    let first = realones_icon::create_icon(&config)?;
    println!("Done! First output: {}", first.display());

    Ok(())
}
