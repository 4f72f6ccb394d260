//! Course content and static page rendering.
//!
//! Purpose
//! - Model the lesson pages as plain data (`Page` of `Block`s) so they can be
//!   checked in tests and rendered without a browser.
//! - Keep typesetting out of the crate: formulas stay TeX, with a lenient
//!   policy for malformed source (`site::render_formula`).
//!
//! Layout
//! - `routes`: paths, sidebar labels, output files.
//! - `blocks`: callouts, formulas, inline markup.
//! - `lessons`: the content itself.
//! - `site`: HTML documents.

pub mod blocks;
pub mod lessons;
pub mod routes;
pub mod site;

pub use blocks::{parse_inline, Block, CalloutKind, Formula, FormulaError, Inline, MathMode};
pub use lessons::{page, pages, Page};
pub use routes::Route;
pub use site::{render_page, render_site};
