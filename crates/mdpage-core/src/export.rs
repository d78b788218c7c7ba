//! Markdown file export: read, convert, lay out, render, write.
//!
//! This is the only part of the crate that touches the filesystem. A missing
//! input is reported as [`ExportError::NotFound`] rather than a panic so
//! callers can show the message to the user.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::config::PageSetup;
use crate::error::ExportError;
use crate::layout::layout;
use crate::parser::Parser;
use crate::render::Renderer;

/// Document kind the export is labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    LessonPlan,
    Test,
    ThematicPlan,
    Report,
    Assignment,
    LabWork,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::LessonPlan,
        TemplateKind::Test,
        TemplateKind::ThematicPlan,
        TemplateKind::Report,
        TemplateKind::Assignment,
        TemplateKind::LabWork,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::LessonPlan => "lesson-plan",
            TemplateKind::Test => "test",
            TemplateKind::ThematicPlan => "thematic-plan",
            TemplateKind::Report => "report",
            TemplateKind::Assignment => "assignment",
            TemplateKind::LabWork => "lab-work",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ExportError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to export and how.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub input: PathBuf,
    /// Defaults to [`default_output_path`] when unset.
    pub output: Option<PathBuf>,
    pub page: PageSetup,
    pub template: Option<TemplateKind>,
}

impl ExportRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            page: PageSetup::default(),
            template: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.page = page;
        self
    }

    pub fn with_template(mut self, template: TemplateKind) -> Self {
        self.template = Some(template);
        self
    }
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output: PathBuf,
    pub renderer: &'static str,
    pub template: Option<TemplateKind>,
    pub elements: usize,
    pub tables: usize,
    pub bytes: usize,
}

impl ExportReport {
    /// Output size in KiB, rounded to the nearest integer.
    pub fn size_kib(&self) -> usize {
        (self.bytes + 512) / 1024
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exported: {}", self.output.display())?;
        match self.template {
            Some(kind) => writeln!(f, "Template: {}", kind)?,
            None => writeln!(f, "Template: standard")?,
        }
        writeln!(f, "Format:   {}", self.renderer)?;
        writeln!(f, "Elements: {} ({} tables)", self.elements, self.tables)?;
        write!(f, "Size:     {} KiB", self.size_kib())
    }
}

/// Output path next to the input, with the extension swapped.
///
/// If swapping would land on the input itself, the extension is appended
/// instead so the source is never overwritten.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let swapped = input.with_extension(extension);
    if swapped != input {
        return swapped;
    }
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Export a Markdown file through the given renderer.
pub fn export_file(
    request: &ExportRequest,
    renderer: &dyn Renderer,
) -> Result<ExportReport, ExportError> {
    let input = request.input.as_path();
    if !input.exists() {
        return Err(ExportError::NotFound(input.to_path_buf()));
    }

    let markdown = std::fs::read_to_string(input).map_err(|source| ExportError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    request.page.validate()?;

    let document = Parser::new().parse(&markdown);
    let page_layout = layout(&document.elements, &request.page);
    let bytes = renderer.render(&page_layout)?;

    let output = match &request.output {
        Some(path) => path.clone(),
        None => default_output_path(input, renderer.extension()),
    };

    std::fs::write(&output, &bytes).map_err(|source| ExportError::Write {
        path: output.clone(),
        source,
    })?;

    info!(
        "exported {} -> {} ({} bytes, {})",
        input.display(),
        output.display(),
        bytes.len(),
        renderer.name()
    );

    Ok(ExportReport {
        output,
        renderer: renderer.name(),
        template: request.template,
        elements: document.len(),
        tables: document.table_count(),
        bytes: bytes.len(),
    })
}
