//! Python bindings for the mdpage converter.

use mdpage_core::{
    convert as core_convert, outline as core_outline, parse_inlines, DocumentElement,
    ListKind as CoreListKind, RunStyle as CoreRunStyle, StyledRun as CoreStyledRun,
};
use pyo3::prelude::*;
use pyo3::types::PyList;

// ============================================================================
// Enums
// ============================================================================

/// Inline style of a run.
#[pyclass(frozen, eq, eq_int, name = "RunStyle")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyRunStyle {
    Plain,
    Bold,
    Italic,
    Code,
}

impl From<CoreRunStyle> for PyRunStyle {
    fn from(s: CoreRunStyle) -> Self {
        match s {
            CoreRunStyle::Plain => PyRunStyle::Plain,
            CoreRunStyle::Bold => PyRunStyle::Bold,
            CoreRunStyle::Italic => PyRunStyle::Italic,
            CoreRunStyle::Code => PyRunStyle::Code,
        }
    }
}

/// List marker family.
#[pyclass(frozen, eq, eq_int, name = "ListKind")]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PyListKind {
    Bullet,
    Numbered,
}

impl From<CoreListKind> for PyListKind {
    fn from(k: CoreListKind) -> Self {
        match k {
            CoreListKind::Bullet => PyListKind::Bullet,
            CoreListKind::Numbered => PyListKind::Numbered,
        }
    }
}

// ============================================================================
// Element types
// ============================================================================

/// A run of text with one inline style.
#[pyclass(frozen, get_all, name = "StyledRun")]
#[derive(Clone)]
pub struct PyStyledRun {
    pub text: String,
    pub style: PyRunStyle,
}

#[pymethods]
impl PyStyledRun {
    fn __repr__(&self) -> String {
        format!("StyledRun({:?}, {:?})", self.text, self.style)
    }
}

impl From<CoreStyledRun<'_>> for PyStyledRun {
    fn from(run: CoreStyledRun<'_>) -> Self {
        PyStyledRun {
            text: run.text.into_owned(),
            style: run.style.into(),
        }
    }
}

/// Section heading.
#[pyclass(frozen, get_all, name = "Heading")]
pub struct PyHeading {
    pub level: u8,
    pub text: String,
}

#[pymethods]
impl PyHeading {
    fn __repr__(&self) -> String {
        format!("Heading({}, {:?})", self.level, self.text)
    }
}

/// Text paragraph.
#[pyclass(frozen, get_all, name = "Paragraph")]
pub struct PyParagraph {
    pub runs: Vec<PyStyledRun>,
}

#[pymethods]
impl PyParagraph {
    fn __repr__(&self) -> String {
        format!("Paragraph(runs={})", self.runs.len())
    }
}

/// List item.
#[pyclass(frozen, get_all, name = "ListItem")]
pub struct PyListItem {
    pub kind: PyListKind,
    pub level: u8,
    pub runs: Vec<PyStyledRun>,
}

#[pymethods]
impl PyListItem {
    fn __repr__(&self) -> String {
        format!(
            "ListItem({:?}, level={}, runs={})",
            self.kind,
            self.level,
            self.runs.len()
        )
    }
}

/// Pipe table. The first row is the header.
#[pyclass(frozen, get_all, name = "Table")]
pub struct PyTable {
    pub rows: Vec<Vec<String>>,
}

#[pymethods]
impl PyTable {
    fn __repr__(&self) -> String {
        format!("Table(rows={})", self.rows.len())
    }

    #[getter]
    fn columns(&self) -> usize {
        mdpage_core::ast::column_count(&self.rows)
    }
}

fn convert_runs(runs: Vec<CoreStyledRun<'_>>) -> Vec<PyStyledRun> {
    runs.into_iter().map(PyStyledRun::from).collect()
}

fn convert_element(py: Python<'_>, element: DocumentElement<'_>) -> PyResult<PyObject> {
    let object = match element {
        DocumentElement::Heading { level, text } => Py::new(
            py,
            PyHeading {
                level,
                text: text.into_owned(),
            },
        )?
        .into_any(),
        DocumentElement::Paragraph { runs } => Py::new(
            py,
            PyParagraph {
                runs: convert_runs(runs),
            },
        )?
        .into_any(),
        DocumentElement::ListItem { kind, level, runs } => Py::new(
            py,
            PyListItem {
                kind: kind.into(),
                level,
                runs: convert_runs(runs),
            },
        )?
        .into_any(),
        DocumentElement::Table { rows } => Py::new(
            py,
            PyTable {
                rows: rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|c| c.into_owned()).collect())
                    .collect(),
            },
        )?
        .into_any(),
    };
    Ok(object)
}

// ============================================================================
// Module functions
// ============================================================================

/// Convert Markdown text into a list of document elements.
///
/// Args:
///     text: Markdown source
///
/// Returns:
///     list[Heading | Paragraph | ListItem | Table]
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn convert(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let list = PyList::empty(py);
    for element in core_convert(text) {
        list.append(convert_element(py, element)?)?;
    }
    Ok(list.into())
}

/// Outline labels: "H1: ...", "H2: ...", "H3: ..." and "TABLE".
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn outline(text: &str) -> Vec<String> {
    core_outline(text)
}

/// Split one line into styled runs.
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn tokenize(text: &str) -> Vec<PyStyledRun> {
    convert_runs(parse_inlines(text))
}

// ============================================================================
// Module
// ============================================================================

/// mdpage - Markdown to paginated document elements.
#[pymodule]
fn pymdpage(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRunStyle>()?;
    m.add_class::<PyListKind>()?;
    m.add_class::<PyStyledRun>()?;
    m.add_class::<PyHeading>()?;
    m.add_class::<PyParagraph>()?;
    m.add_class::<PyListItem>()?;
    m.add_class::<PyTable>()?;
    m.add_function(wrap_pyfunction!(convert, m)?)?;
    m.add_function(wrap_pyfunction!(outline, m)?)?;
    m.add_function(wrap_pyfunction!(tokenize, m)?)?;
    Ok(())
}
