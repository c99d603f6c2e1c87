use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub max_depth: Option<u16>,
    pub threads: Option<u16>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub render_settings: Vec<RenderSettings>,
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let mut input = String::new();
    File::open(filepath.as_ref())
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.as_ref().to_string_lossy()))?;
    let config: TOMLConfig = toml::from_str(&input).context("failed to parse config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_literal() {
        let input = r#"
            default_scene_file = "data/scenes/demo.toml"

            [[render_settings]]
            filename = "demo"
            max_depth = 5
            threads = 4
            resolution = { width = 640, height = 480 }
        "#;
        let config: TOMLConfig = toml::from_str(input).unwrap();
        assert_eq!(config.default_scene_file, "data/scenes/demo.toml");
        assert_eq!(config.render_settings.len(), 1);
        let settings = &config.render_settings[0];
        assert_eq!(settings.resolution.width, 640);
        assert_eq!(settings.max_depth, Some(5));
    }
}
