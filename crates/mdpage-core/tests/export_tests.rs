//! Integration tests for the export pipeline

use std::fs;
use std::path::Path;

use mdpage_core::{
    default_output_path, export_file, ExportError, ExportRequest, JsonRenderer, PageSetup,
    TemplateKind, TextRenderer,
};
use tempfile::TempDir;

const LESSON: &str = "# Lesson\n\nIntro with **bold**.\n\n| Stage | Time |\n|---|---|\n| Start | 5 |\n\n- task one\n- task two\n";

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Output Path Tests
// ============================================================================

#[test]
fn test_default_output_path_swaps_extension() {
    assert_eq!(
        default_output_path(Path::new("notes/plan.md"), "json"),
        Path::new("notes/plan.json")
    );
    assert_eq!(
        default_output_path(Path::new("plan"), "txt"),
        Path::new("plan.txt")
    );
}

#[test]
fn test_default_output_path_never_overwrites_input() {
    assert_eq!(
        default_output_path(Path::new("data.json"), "json"),
        Path::new("data.json.json")
    );
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_export_missing_file() {
    let request = ExportRequest::new("/definitely/not/here.md");
    let err = export_file(&request, &TextRenderer).unwrap_err();
    assert!(matches!(err, ExportError::NotFound(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_export_json_default_path() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "lesson.md", LESSON);

    let report = export_file(&ExportRequest::new(&input), &JsonRenderer { pretty: true }).unwrap();

    assert_eq!(report.output, dir.path().join("lesson.json"));
    assert_eq!(report.elements, 5);
    assert_eq!(report.tables, 1);
    assert_eq!(report.renderer, "json");

    let written = fs::read(&report.output).unwrap();
    assert_eq!(written.len(), report.bytes);
    let value: serde_json::Value = serde_json::from_slice(&written).unwrap();
    assert_eq!(value["blocks"][2]["type"], "table");
    assert_eq!(value["blocks"][2]["rows"][0][0]["bold"], true);
}

#[test]
fn test_export_text_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "lesson.md", LESSON);
    let output = dir.path().join("out.txt");

    let request = ExportRequest::new(&input)
        .with_output(&output)
        .with_template(TemplateKind::LessonPlan);
    let report = export_file(&request, &TextRenderer).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("Lesson\n======\n"));
    assert!(text.contains("| Stage | Time |"));
    assert!(text.contains("• task two"));

    let summary = report.to_string();
    assert!(summary.contains("Template: lesson-plan"));
    assert!(summary.contains(&output.display().to_string()));
}

#[test]
fn test_export_rejects_invalid_page() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "a.md", "# A");
    let page = PageSetup {
        content_width: 0,
        ..PageSetup::default()
    };

    let err = export_file(&ExportRequest::new(&input).with_page(page), &TextRenderer).unwrap_err();
    assert!(matches!(err, ExportError::Config(_)));
}

#[test]
fn test_export_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "empty.md", "");

    let report = export_file(&ExportRequest::new(&input), &TextRenderer).unwrap();
    assert_eq!(report.elements, 0);
    assert_eq!(report.bytes, 0);
    assert_eq!(report.size_kib(), 0);
}

#[test]
fn test_export_write_failure() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "a.md", "# A");
    let output = dir.path().join("missing-dir").join("out.txt");

    let err = export_file(&ExportRequest::new(&input).with_output(output), &TextRenderer)
        .unwrap_err();
    assert!(matches!(err, ExportError::Write { .. }));
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_template_kinds_parse() {
    for kind in TemplateKind::ALL {
        assert_eq!(kind.as_str().parse::<TemplateKind>().unwrap(), kind);
    }
    assert!(matches!(
        "essay".parse::<TemplateKind>(),
        Err(ExportError::UnknownTemplate(_))
    ));
}
