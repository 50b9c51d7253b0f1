//! Renders a [`Report`] into each supported output format.

use crate::domain::model::{Report, ReportFormat, Sample};
use crate::utils::error::{CipherError, Result};

pub const TEXT_RULE_WIDTH: usize = 60;

pub fn render(report: &Report, format: ReportFormat) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Markdown => Ok(render_markdown(report).into_bytes()),
        ReportFormat::Text => Ok(render_text(report).into_bytes()),
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(report)?),
        ReportFormat::Csv => render_csv(&report.samples),
    }
}

/// `Message / Shift / Encoded / Decoded` blocks separated by a blank line.
pub fn sample_blocks(samples: &[Sample]) -> String {
    samples
        .iter()
        .map(|s| {
            format!(
                "Message: {}\nShift: {}\nEncoded: {}\nDecoded: {}\n",
                s.message, s.shift, s.encoded, s.decoded
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_markdown(report: &Report) -> String {
    let samples = sample_blocks(&report.samples);
    let source_fence = code_fence(&report.source_listing);
    let sample_fence = code_fence(&samples);

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!("_Generated on: {}_\n\n", report.generated_at));
    out.push_str(&format!("{}\n\n", report.description));

    out.push_str("## How It Works\n\n");
    for line in &report.how_it_works {
        out.push_str(&format!("- {}\n", line));
    }

    out.push_str("\n## Source Listing\n\n");
    out.push_str(&format!(
        "{fence}rust\n{}\n{fence}\n",
        report.source_listing,
        fence = source_fence
    ));

    out.push_str("\n## Sample Outputs\n\n");
    out.push_str(&format!("{fence}text\n{}{fence}\n", samples, fence = sample_fence));
    out
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.title));
    out.push_str(&format!("{}\n", "=".repeat(TEXT_RULE_WIDTH)));
    out.push_str(&format!("Generated on: {}\n\n", report.generated_at));

    out.push_str("Description:\n");
    out.push_str(&format!("{}\n\n", report.description));

    out.push_str("How It Works:\n");
    for line in &report.how_it_works {
        out.push_str(&format!("- {}\n", line));
    }

    out.push_str("\nSource Code:\n\n");
    out.push_str(&report.source_listing);
    out.push_str("\n\nSample Outputs:\n\n");
    out.push_str(&sample_blocks(&report.samples));
    out
}

fn render_csv(samples: &[Sample]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["message", "shift", "encoded", "decoded"])?;
    for s in samples {
        let shift = s.shift.to_string();
        wtr.write_record([
            s.message.as_str(),
            shift.as_str(),
            s.encoded.as_str(),
            s.decoded.as_str(),
        ])?;
    }

    wtr.into_inner().map_err(|e| CipherError::RenderError {
        format: ReportFormat::Csv.to_string(),
        message: e.to_string(),
    })
}

/// 圍欄要比內容裡最長的連續反引號多一個
fn code_fence(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}
