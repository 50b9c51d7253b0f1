use crate::domain::model::ReportFormat;
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TITLE: &str = "Secret Code Generator (Caesar Cipher)";
pub const DEFAULT_DESCRIPTION: &str = "This document includes the source code of the cipher, \
the interactive loop and its input validation, an explanation, and sample outputs for the Secret \
Code Generator. The program encodes and decodes messages with a Caesar cipher, preserves case, \
ignores non-letters, and wraps around the alphabet.";

/// 沒有設定 samples 時使用
pub const DEFAULT_SAMPLES: [(&str, i64); 3] = [
    ("Hello, World!", 3),
    ("Zebra-493", 2),
    ("attack AT DAWN!", 5),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub samples: Vec<SampleConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub title: String,
    pub description: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    pub message: String,
    pub shift: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_path: String,
    pub filename: String,
    pub formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: "./report".to_string(),
            filename: "secret_code_report".to_string(),
            formats: vec!["markdown".to_string()],
            compression: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: String,
}

impl ReportConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CipherError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CipherError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CipherError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("report.title", &self.report.title)?;
        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_non_empty_string("output.filename", &self.output.filename)?;

        if self.output.formats.is_empty() {
            return Err(CipherError::ConfigValidationError {
                field: "output.formats".to_string(),
                message: "At least one output format is required".to_string(),
            });
        }
        self.formats()?;

        if let Some(archive) = self.archive_filename() {
            validation::validate_extension("output.compression.filename", archive, "zip")?;
        }

        Ok(())
    }

    /// 重複的格式只保留第一次出現
    pub fn formats(&self) -> Result<Vec<ReportFormat>> {
        let mut formats = Vec::new();
        for raw in &self.output.formats {
            let format = raw.parse::<ReportFormat>()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }

    pub fn samples(&self) -> Vec<(String, i64)> {
        if self.samples.is_empty() {
            DEFAULT_SAMPLES
                .iter()
                .map(|(message, shift)| (message.to_string(), *shift))
                .collect()
        } else {
            self.samples
                .iter()
                .map(|s| (s.message.clone(), s.shift))
                .collect()
        }
    }

    pub fn output_path(&self) -> &str {
        &self.output.output_path
    }

    /// 只有 compression.enabled 時才回傳壓縮檔名
    pub fn archive_filename(&self) -> Option<&str> {
        self.output
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
