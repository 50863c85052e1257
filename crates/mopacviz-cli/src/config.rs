use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use mopacviz::core::io::viewer::ViewerOptions;
use mopacviz::workflows::config::{ConvertConfig, ConvertConfigBuilder, DEFAULT_HTML_PATH};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "xyz-path")]
    xyz_path: Option<PathBuf>,
    #[serde(rename = "html-path")]
    html_path: Option<PathBuf>,
    #[serde(rename = "csv-path")]
    csv_path: Option<PathBuf>,
    #[serde(rename = "xyz-comment")]
    xyz_comment: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialViewerConfig {
    title: Option<String>,
    #[serde(rename = "background-color")]
    background_color: Option<String>,
    #[serde(rename = "library-url")]
    library_url: Option<String>,
    #[serde(rename = "sphere-scale")]
    sphere_scale: Option<f64>,
    #[serde(rename = "label-prefix")]
    label_prefix: Option<String>,
    #[serde(rename = "label-font-size")]
    label_font_size: Option<u32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConvertConfig {
    output: Option<PartialOutputConfig>,
    viewer: Option<PartialViewerConfig>,
}

impl PartialConvertConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the configuration file named by the arguments, if any.
    pub fn load(args: &ConvertArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ConvertArgs) -> Result<ConvertConfig> {
        self.apply_set_values(&args.set_values)?;

        let output = self.output.take().unwrap_or_default();
        let viewer = self.viewer.take().unwrap_or_default();

        let html_path = if args.no_html {
            None
        } else {
            Some(
                args.html
                    .clone()
                    .or(output.html_path)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_PATH)),
            )
        };

        let mut builder = ConvertConfigBuilder::new()
            .input_path(args.input.clone())
            .html_path(html_path)
            .csv_path(args.csv.clone().or(output.csv_path))
            .viewer_options(Self::merge_viewer(viewer, args)?);
        if let Some(path) = args.xyz.clone().or(output.xyz_path) {
            builder = builder.xyz_path(path);
        }
        if let Some(comment) = output.xyz_comment {
            builder = builder.xyz_comment(comment);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_viewer(partial: PartialViewerConfig, args: &ConvertArgs) -> Result<ViewerOptions> {
        let defaults = ViewerOptions::default();

        let sphere_scale = partial.sphere_scale.unwrap_or(defaults.sphere_scale);
        if !(sphere_scale.is_finite() && sphere_scale > 0.0) {
            return Err(CliError::Config(format!(
                "`viewer.sphere-scale` must be a positive number, got {}",
                sphere_scale
            )));
        }
        let label_font_size = partial.label_font_size.unwrap_or(defaults.label_font_size);
        if label_font_size == 0 {
            return Err(CliError::Config(
                "`viewer.label-font-size` must be greater than zero".to_string(),
            ));
        }

        Ok(ViewerOptions {
            title: args.title.clone().or(partial.title).unwrap_or(defaults.title),
            background_color: partial
                .background_color
                .unwrap_or(defaults.background_color),
            library_url: partial.library_url.unwrap_or(defaults.library_url),
            comment: defaults.comment,
            sphere_scale,
            label_prefix: partial.label_prefix.unwrap_or(defaults.label_prefix),
            label_font_size,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "output.xyz-path" => {
                    self.output_mut().xyz_path = Some(PathBuf::from(value_str));
                }
                "output.html-path" => {
                    self.output_mut().html_path = Some(PathBuf::from(value_str));
                }
                "output.csv-path" => {
                    self.output_mut().csv_path = Some(PathBuf::from(value_str));
                }
                "output.xyz-comment" => {
                    self.output_mut().xyz_comment = Some(value_str.to_string());
                }
                "viewer.title" => {
                    self.viewer_mut().title = Some(value_str.to_string());
                }
                "viewer.background-color" => {
                    self.viewer_mut().background_color = Some(value_str.to_string());
                }
                "viewer.library-url" => {
                    self.viewer_mut().library_url = Some(value_str.to_string());
                }
                "viewer.label-prefix" => {
                    self.viewer_mut().label_prefix = Some(value_str.to_string());
                }
                "viewer.sphere-scale" => {
                    self.viewer_mut().sphere_scale = Some(parse_value(key, value_str, "float")?);
                }
                "viewer.label-font-size" => {
                    self.viewer_mut().label_font_size =
                        Some(parse_value(key, value_str, "integer")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn output_mut(&mut self) -> &mut PartialOutputConfig {
        self.output.get_or_insert_with(Default::default)
    }

    fn viewer_mut(&mut self) -> &mut PartialViewerConfig {
        self.viewer.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use once_cell::sync::Lazy;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    static TEST_DIR: Lazy<TempDir> = Lazy::new(|| tempdir().expect("Failed to create temp dir"));

    fn write_config_file(name: &str, content: &str) -> PathBuf {
        let file_path = TEST_DIR.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn convert_args(extra: &[&str]) -> ConvertArgs {
        let mut args = vec!["mopacviz", "convert", "-i", "job.out"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Convert(args) => args,
            _ => panic!("Expected 'convert' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let args = convert_args(&[]);
        let config = PartialConvertConfig::load(&args)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("job.out"));
        assert_eq!(config.output.xyz_path, PathBuf::from("molecule.xyz"));
        assert_eq!(config.output.html_path, Some(PathBuf::from("molecule.html")));
        assert_eq!(config.output.csv_path, None);
        assert_eq!(config.viewer, ViewerOptions::default());
    }

    #[test]
    fn file_values_are_loaded() {
        let config_path = write_config_file(
            "file_values.toml",
            r#"
            [output]
            xyz-path = "final.xyz"
            html-path = "final.html"
            xyz-comment = "Optimized with PM7"

            [viewer]
            title = "Benzene"
            sphere-scale = 0.25
            label-font-size = 10
            "#,
        );
        let args = convert_args(&["-c", config_path.to_str().unwrap()]);
        let config = PartialConvertConfig::load(&args)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.output.xyz_path, PathBuf::from("final.xyz"));
        assert_eq!(config.output.html_path, Some(PathBuf::from("final.html")));
        assert_eq!(config.output.xyz_comment, "Optimized with PM7");
        assert_eq!(config.viewer.title, "Benzene");
        assert_eq!(config.viewer.sphere_scale, 0.25);
        assert_eq!(config.viewer.label_font_size, 10);
        assert_eq!(config.viewer.label_prefix, "Mulliken");
    }

    #[test]
    fn cli_args_override_set_values_and_file_values() {
        let config_path = write_config_file(
            "override.toml",
            r#"
            [output]
            xyz-path = "from-file.xyz"

            [viewer]
            title = "From file"
            "#,
        );
        let args = convert_args(&[
            "-c",
            config_path.to_str().unwrap(),
            "-o",
            "from-cli.xyz",
            "-S",
            "output.xyz-path=from-set.xyz",
            "-S",
            "viewer.title=From set",
            "--no-html",
        ]);
        let config = PartialConvertConfig::load(&args)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.output.xyz_path, PathBuf::from("from-cli.xyz"));
        assert_eq!(config.viewer.title, "From set");
        assert_eq!(config.output.html_path, None);
    }

    #[test]
    fn set_values_parse_typed_fields() {
        let args = convert_args(&[
            "-S",
            "viewer.sphere-scale=0.4",
            "-S",
            "viewer.label-font-size=14",
            "-S",
            "output.csv-path=atoms.csv",
        ]);
        let config = PartialConvertConfig::default()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.viewer.sphere_scale, 0.4);
        assert_eq!(config.viewer.label_font_size, 14);
        assert_eq!(config.output.csv_path, Some(PathBuf::from("atoms.csv")));
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in [
            "viewer.sphere-scale=big",
            "viewer.unknown=1",
            "no-equals-sign",
            "viewer.sphere-scale=-1",
            "viewer.label-font-size=0",
        ] {
            let args = convert_args(&["-S", bad]);
            let result = PartialConvertConfig::default().merge_with_cli(&args);
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let config_path = write_config_file(
            "unknown.toml",
            r#"
            [viewer]
            colour = "red"
            "#,
        );
        let result = PartialConvertConfig::from_file(&config_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
