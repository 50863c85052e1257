use crate::core::io::viewer::ViewerOptions;
use crate::core::io::xyz::DEFAULT_XYZ_COMMENT;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_XYZ_PATH: &str = "molecule.xyz";
pub const DEFAULT_HTML_PATH: &str = "molecule.html";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub xyz_path: PathBuf,
    pub xyz_comment: String,
    /// `None` disables the viewer document.
    pub html_path: Option<PathBuf>,
    /// `None` disables the CSV charge table.
    pub csv_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            xyz_path: PathBuf::from(DEFAULT_XYZ_PATH),
            xyz_comment: DEFAULT_XYZ_COMMENT.to_string(),
            html_path: Some(PathBuf::from(DEFAULT_HTML_PATH)),
            csv_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input_path: PathBuf,
    pub output: OutputConfig,
    pub viewer: ViewerOptions,
}

#[derive(Default)]
pub struct ConvertConfigBuilder {
    input_path: Option<PathBuf>,
    xyz_path: Option<PathBuf>,
    xyz_comment: Option<String>,
    html_path: Option<Option<PathBuf>>,
    csv_path: Option<PathBuf>,
    viewer: Option<ViewerOptions>,
}

impl ConvertConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }

    pub fn xyz_path(mut self, path: PathBuf) -> Self {
        self.xyz_path = Some(path);
        self
    }

    pub fn xyz_comment(mut self, comment: String) -> Self {
        self.xyz_comment = Some(comment);
        self
    }

    /// Sets the viewer document path; `None` disables the document.
    pub fn html_path(mut self, path: Option<PathBuf>) -> Self {
        self.html_path = Some(path);
        self
    }

    pub fn csv_path(mut self, path: Option<PathBuf>) -> Self {
        self.csv_path = path;
        self
    }

    pub fn viewer_options(mut self, options: ViewerOptions) -> Self {
        self.viewer = Some(options);
        self
    }

    pub fn build(self) -> Result<ConvertConfig, ConfigError> {
        let defaults = OutputConfig::default();
        Ok(ConvertConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output: OutputConfig {
                xyz_path: self.xyz_path.unwrap_or(defaults.xyz_path),
                xyz_comment: self.xyz_comment.unwrap_or(defaults.xyz_comment),
                html_path: self.html_path.unwrap_or(defaults.html_path),
                csv_path: self.csv_path,
            },
            viewer: self.viewer.unwrap_or_default(),
        })
    }
}
