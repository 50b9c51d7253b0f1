use crate::config::toml_config::{ReportConfig, DEFAULT_DESCRIPTION, DEFAULT_SAMPLES, DEFAULT_TITLE};
use crate::core::render::render;
use crate::domain::model::{Report, ReportFormat, Sample};
use crate::domain::ports::{Cipher, Storage};
use crate::utils::error::Result;
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// 報告內嵌的程式碼：加密核心、互動迴圈、輸入驗證
const SOURCE_FILES: [(&str, &str); 3] = [
    ("src/core/cipher.rs", include_str!("cipher.rs")),
    ("src/core/session.rs", include_str!("session.rs")),
    ("src/utils/validation.rs", include_str!("../utils/validation.rs")),
];
const TEST_MODULE_MARKER: &str = "#[cfg(test)]";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const HOW_IT_WORKS: [&str; 5] = [
    "Each letter is shifted by a user-provided integer (positive or negative).",
    "Uppercase and lowercase letters are handled separately to preserve case.",
    "Non-letter characters (spaces, punctuation, digits) are left unchanged.",
    "Wrap-around uses modulo arithmetic to stay within 26 letters.",
    "Input validation re-prompts on invalid menu choices and non-integer shifts.",
];

/// Source of the cipher, the interactive loop and the shift parser as
/// compiled into this binary, each without its tests.
pub fn source_listing() -> String {
    SOURCE_FILES
        .iter()
        .map(|(path, source)| format!("// ---- {} ----\n{}", path, without_tests(source)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn without_tests(source: &str) -> &str {
    match source.find(TEST_MODULE_MARKER) {
        Some(idx) => source[..idx].trim_end(),
        None => source.trim_end(),
    }
}

pub struct ReportBuilder<C: Cipher> {
    cipher: C,
    title: String,
    description: String,
    samples: Vec<(String, i64)>,
}

impl<C: Cipher> ReportBuilder<C> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            samples: DEFAULT_SAMPLES
                .iter()
                .map(|(message, shift)| (message.to_string(), *shift))
                .collect(),
        }
    }

    pub fn from_config(cipher: C, config: &ReportConfig) -> Self {
        Self {
            cipher,
            title: config.report.title.clone(),
            description: config.report.description.clone(),
            samples: config.samples(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// 每個範例都先加密再解密，decoded 一定等於原文
    pub fn samples(&self) -> Vec<Sample> {
        self.samples
            .iter()
            .map(|(message, shift)| {
                let encoded = self.cipher.encode(message, *shift);
                let decoded = self.cipher.decode(&encoded, *shift);
                Sample {
                    message: message.clone(),
                    shift: *shift,
                    encoded,
                    decoded,
                }
            })
            .collect()
    }

    pub fn build(&self) -> Report {
        self.build_at(Local::now().naive_local())
    }

    pub fn build_at(&self, generated_at: NaiveDateTime) -> Report {
        Report {
            title: self.title.clone(),
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            description: self.description.clone(),
            how_it_works: HOW_IT_WORKS.iter().map(|s| s.to_string()).collect(),
            source_listing: source_listing(),
            samples: self.samples(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    pub written: Vec<String>,
    pub fallback_used: bool,
    pub archive: Option<String>,
}

pub struct ReportWriter<S: Storage> {
    storage: S,
    filename: String,
    archive: Option<String>,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S, filename: impl Into<String>) -> Self {
        Self {
            storage,
            filename: filename.into(),
            archive: None,
        }
    }

    pub fn with_archive(mut self, archive: Option<String>) -> Self {
        self.archive = archive;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn file_name(&self, format: ReportFormat) -> String {
        format!("{}.{}", self.filename, format.extension())
    }

    /// Writes every requested format.
    ///
    /// A failing non-text format is logged and replaced by the plain-text
    /// report; only a failure of the plain-text report itself is returned.
    pub fn write(&self, report: &Report, formats: &[ReportFormat]) -> Result<ReportOutcome> {
        let mut outcome = ReportOutcome::default();
        let mut bundle: Vec<(String, Vec<u8>)> = Vec::new();

        for &format in formats {
            let name = self.file_name(format);
            match self.write_format(report, format, &name) {
                Ok(data) => {
                    tracing::debug!("Wrote {} report ({} bytes)", format, data.len());
                    outcome.written.push(name.clone());
                    bundle.push((name, data));
                }
                Err(e) if format == ReportFormat::Text => return Err(e),
                Err(e) => {
                    tracing::warn!("⚠️ {} report failed, falling back to text: {}", format, e);
                    outcome.fallback_used = true;
                }
            }
        }

        let text_name = self.file_name(ReportFormat::Text);
        if outcome.fallback_used && !outcome.written.contains(&text_name) {
            let data = self.write_format(report, ReportFormat::Text, &text_name)?;
            tracing::info!("📝 Plain-text fallback written to {}", text_name);
            outcome.written.push(text_name.clone());
            bundle.push((text_name, data));
        }

        if let Some(archive) = &self.archive {
            let zip_data = build_archive(&bundle)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive, &zip_data)?;
            outcome.archive = Some(archive.clone());
        }

        Ok(outcome)
    }

    fn write_format(&self, report: &Report, format: ReportFormat, name: &str) -> Result<Vec<u8>> {
        let data = render(report, format)?;
        self.storage.write_file(name, &data)?;
        Ok(data)
    }
}

fn build_archive(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for (name, data) in files {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }

    // 完成並取回底層 Vec<u8>
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cipher::ShiftCipher;
    use crate::utils::error::CipherError;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 指定副檔名的寫入會失敗
    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
        failing_extensions: Vec<&'static str>,
    }

    impl MockStorage {
        fn new(failing_extensions: Vec<&'static str>) -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
                failing_extensions,
            }
        }

        fn names(&self) -> Vec<String> {
            let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
            names.sort();
            names
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                CipherError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.failing_extensions.iter().any(|ext| path.ends_with(ext)) {
                return Err(CipherError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("cannot write {}", path),
                )));
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn fixed_report() -> Report {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        ReportBuilder::new(ShiftCipher).build_at(at)
    }

    #[test]
    fn test_source_listing_excludes_tests() {
        let listing = source_listing();
        assert!(listing.contains("pub fn transform(message: &str, shift: i64) -> String"));
        assert!(listing.contains("pub struct ShiftCipher;"));
        assert!(listing.contains("// ---- src/core/session.rs ----"));
        assert!(listing.contains("pub fn run(&mut self) -> Result<SessionSummary>"));
        assert!(listing.contains("pub fn parse_shift(raw: &str) -> Result<i64>"));
        assert!(!listing.contains(TEST_MODULE_MARKER));
        assert!(!listing.contains("fn test_encode_known_messages"));
        assert!(!listing.contains("fn run_script"));
    }

    #[test]
    fn test_builder_defaults() {
        let report = fixed_report();
        assert_eq!(report.title, DEFAULT_TITLE);
        assert_eq!(report.generated_at, "2026-10-19 09:30:00");
        assert_eq!(report.how_it_works.len(), HOW_IT_WORKS.len());

        let encoded: Vec<&str> = report.samples.iter().map(|s| s.encoded.as_str()).collect();
        assert_eq!(encoded, vec!["Khoor, Zruog!", "Bgdtc-493", "fyyfhp FY IFBS!"]);
        assert!(report.samples.iter().all(|s| s.decoded == s.message));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ReportConfig::from_toml_str(
            r#"
[[samples]]
message = "XYZ"
shift = 2
"#,
        )
        .unwrap();
        let report = ReportBuilder::from_config(ShiftCipher, &config)
            .with_title("Custom")
            .build();
        assert_eq!(report.title, "Custom");
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].encoded, "ZAB");
    }

    #[test]
    fn test_write_all_formats() {
        let writer = ReportWriter::new(MockStorage::new(vec![]), "report");
        let outcome = writer.write(&fixed_report(), &ReportFormat::ALL).unwrap();

        assert!(!outcome.fallback_used);
        assert_eq!(outcome.written.len(), 4);
        assert_eq!(
            writer.storage().names(),
            vec!["report.csv", "report.json", "report.md", "report.txt"]
        );
    }

    #[test]
    fn test_failed_markdown_falls_back_to_text() {
        let writer = ReportWriter::new(MockStorage::new(vec![".md"]), "report");
        let outcome = writer
            .write(&fixed_report(), &[ReportFormat::Markdown, ReportFormat::Json])
            .unwrap();

        assert!(outcome.fallback_used);
        assert_eq!(outcome.written, vec!["report.json", "report.txt"]);

        let text = writer.storage().read_file("report.txt").unwrap();
        assert!(String::from_utf8(text).unwrap().contains("Encoded: Khoor, Zruog!"));
    }

    #[test]
    fn test_fallback_not_duplicated_when_text_requested() {
        let writer = ReportWriter::new(MockStorage::new(vec![".json"]), "report");
        let outcome = writer
            .write(&fixed_report(), &[ReportFormat::Json, ReportFormat::Text])
            .unwrap();

        assert!(outcome.fallback_used);
        assert_eq!(outcome.written, vec!["report.txt"]);
    }

    #[test]
    fn test_text_failure_is_returned() {
        let writer = ReportWriter::new(MockStorage::new(vec![".md", ".txt"]), "report");
        let result = writer.write(&fixed_report(), &[ReportFormat::Markdown]);
        assert!(matches!(result, Err(CipherError::IoError(_))));
    }

    #[test]
    fn test_archive_bundles_written_files() {
        let writer = ReportWriter::new(MockStorage::new(vec![]), "report")
            .with_archive(Some("report.zip".to_string()));
        let outcome = writer
            .write(&fixed_report(), &[ReportFormat::Markdown, ReportFormat::Csv])
            .unwrap();

        assert_eq!(outcome.archive.as_deref(), Some("report.zip"));

        let zip_data = writer.storage().read_file("report.zip").unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(names, vec!["report.csv", "report.md"]);
    }
}
