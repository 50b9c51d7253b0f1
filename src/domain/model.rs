use crate::utils::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Encode,
    Decode,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = CipherError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "e" => Ok(MenuChoice::Encode),
            "d" => Ok(MenuChoice::Decode),
            "x" => Ok(MenuChoice::Exit),
            _ => Err(CipherError::InvalidChoice {
                input: raw.to_string(),
            }),
        }
    }
}

/// One worked example embedded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub message: String,
    pub shift: i64,
    pub encoded: String,
    pub decoded: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_at: String,
    pub description: String,
    pub how_it_works: Vec<String>,
    pub source_listing: String,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Markdown,
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 4] = [
        ReportFormat::Markdown,
        ReportFormat::Text,
        ReportFormat::Json,
        ReportFormat::Csv,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportFormat {
    type Err = CipherError;

    fn from_str(raw: &str) -> Result<Self> {
        let wanted = raw.trim().to_lowercase();
        ReportFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| CipherError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: raw.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    ReportFormat::ALL.map(|f| f.name()).join(", ")
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_is_case_insensitive() {
        assert_eq!(" E ".parse::<MenuChoice>().unwrap(), MenuChoice::Encode);
        assert_eq!("d".parse::<MenuChoice>().unwrap(), MenuChoice::Decode);
        assert_eq!("X\n".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_menu_choice_rejects_words() {
        assert!("encode".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("Markdown".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("csv".parse::<ReportFormat>().unwrap().extension(), "csv");

        let err = "pdf".parse::<ReportFormat>().unwrap_err();
        assert!(err.to_string().contains("markdown, text, json, csv"));
    }
}
