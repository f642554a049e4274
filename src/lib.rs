//! swelldoc — class documentation from annotated JavaScript comment blocks.
//!
//! The library holds the extraction pipeline and the output helpers; the
//! `swelldoc` binary wires them to the command line.

pub mod discover;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod toc;

pub use error::{DocError, MalformedPolicy};
pub use model::DocumentModel;
pub use parser::parse_file;
