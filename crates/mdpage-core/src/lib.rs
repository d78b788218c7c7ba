//! # mdpage core
//!
//! Converts a practical Markdown subset into an ordered sequence of typed,
//! styled document elements ready for a paginated word-processor renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdpage_core::{convert, DocumentElement, RunStyle};
//!
//! let elements = convert("# Lesson\n\nSolve **all** tasks.");
//! assert_eq!(elements.len(), 2);
//!
//! if let DocumentElement::Paragraph { runs } = &elements[1] {
//!     assert_eq!(runs[1].style, RunStyle::Bold);
//! }
//! ```
//!
//! ## Supported syntax
//!
//! - Headings `#`, `##`, `###`
//! - Bullet (`-`, `*`) and numbered (`1.`) list items, nested by indentation
//! - Pipe tables with an optional separator row
//! - Inline `**bold**`, `*italic*` and `` `code` ``
//!
//! Anything else degrades to a plain paragraph. Conversion never fails.
//!
//! ## Rendering
//!
//! [`layout()`] maps elements onto a styled page model driven by
//! [`PageSetup`], and a [`Renderer`] turns that model into bytes.
//! [`export_file`] wires the whole pipeline to the filesystem.

pub mod ast;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod inline;
pub mod layout;
pub mod lexer;
pub mod outline;
pub mod parser;
pub mod render;
pub mod table;

pub use ast::{runs_to_markdown, Document, DocumentElement, ListKind, RunStyle, StyledRun};
pub use classify::{classify, LineClass};
pub use config::PageSetup;
pub use error::{ConfigError, ExportError, RenderError};
pub use export::{default_output_path, export_file, ExportReport, ExportRequest, TemplateKind};
pub use inline::parse_inlines;
pub use layout::{layout, PageLayout};
pub use outline::{outline, outline_entries, OutlineEntry};
pub use parser::{convert, Parser};
pub use render::{JsonRenderer, Renderer, TextRenderer};
pub use table::{split_cells, TableAccumulator};
