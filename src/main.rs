use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use realones_icon::IconConfig;

/// Render the REALones app icon and write it to the icon and adaptive-icon paths.
#[derive(Parser, Debug)]
#[command(name = "realones-icon", version, about)]
struct Cli {
    /// JSON file overriding any subset of the built-in icon settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the candidate font files
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Path for the regular app icon
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path for the adaptive icon
    #[arg(long)]
    adaptive_output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn icon_config(&self) -> anyhow::Result<IconConfig> {
        let mut config = match &self.config {
            Some(path) => IconConfig::from_json_file(path)?,
            None => IconConfig::default(),
        };
        if let Some(dir) = &self.font_dir {
            config.fonts.dir = dir.clone();
        }
        for (index, path) in [&self.output, &self.adaptive_output].into_iter().enumerate() {
            let Some(path) = path else { continue };
            let target = config
                .outputs
                .get_mut(index)
                .with_context(|| format!("config has no output target #{} to override", index + 1))?;
            target.path = path.clone();
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.icon_config()?;
    realones_icon::create_icon(&config).context("icon generation failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::parse_from(["realones-icon"]);
        assert_eq!(cli.icon_config().unwrap(), IconConfig::default());
    }

    #[test]
    fn flags_override_paths() {
        let cli = Cli::parse_from([
            "realones-icon",
            "--font-dir",
            "/fonts",
            "--adaptive-output",
            "/tmp/adaptive.png",
        ]);
        let cfg = cli.icon_config().unwrap();
        assert_eq!(cfg.fonts.dir, PathBuf::from("/fonts"));
        assert_eq!(cfg.outputs[0].path, PathBuf::from("assets/icon-new.png"));
        assert_eq!(cfg.outputs[1].path, PathBuf::from("/tmp/adaptive.png"));
    }
}
