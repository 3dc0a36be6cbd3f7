use crate::render::{AnimationSettings, FrameTemplate, RendererConfig};
use crate::IgraphError;
use std::path::{Path, PathBuf};

impl Default for RendererConfig {
    fn default() -> Self {
        RendererConfig {
            dot: PathBuf::from("dot"),
            convert: PathBuf::from("convert"),
        }
    }
}

impl RendererConfig {
    /// Read a configuration from a JSON object like `{"dot": "/usr/bin/dot"}`.
    pub fn from_json_str(json: &str) -> Result<RendererConfig, IgraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<RendererConfig, IgraphError> {
        let json = std::fs::read_to_string(path)?;
        RendererConfig::from_json_str(&json)
    }
}

impl Default for AnimationSettings {
    /// Frames `tmp*.jpg`, half a second per frame, repeated forever.
    fn default() -> Self {
        AnimationSettings {
            template: FrameTemplate {
                template: "tmp*.jpg".to_string(),
                counter: 3,
            },
            delay: 50,
            repeat: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{AnimationSettings, FrameTemplate, RendererConfig};
    use std::convert::TryFrom;
    use std::path::PathBuf;

    #[test]
    fn config_from_json() {
        let config = RendererConfig::from_json_str(r#"{"dot": "/opt/graphviz/bin/dot"}"#).unwrap();
        assert_eq!(PathBuf::from("/opt/graphviz/bin/dot"), config.dot);
        assert_eq!(PathBuf::from("convert"), config.convert);

        assert_eq!(RendererConfig::default(), RendererConfig::from_json_str("{}").unwrap());

        let err = RendererConfig::from_json_str(r#"{"dto": "dot"}"#).unwrap_err();
        assert!(matches!(err, crate::IgraphError::Config(_)));
    }

    #[test]
    fn config_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("renderer.json");
        std::fs::write(&path, r#"{"convert": "magick"}"#).unwrap();
        let config = RendererConfig::from_json_file(&path).unwrap();
        assert_eq!(PathBuf::from("magick"), config.convert);

        let err = RendererConfig::from_json_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, crate::IgraphError::Io(_)));
    }

    #[test]
    fn default_animation_settings() {
        let settings = AnimationSettings::default();
        assert_eq!(FrameTemplate::try_from("tmp*.jpg").unwrap(), settings.template);
        assert_eq!(50, settings.delay);
        assert_eq!(0, settings.repeat);
    }
}
