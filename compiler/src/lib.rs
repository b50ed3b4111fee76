pub mod cursor;
pub mod error;
pub mod render;
pub mod span;
pub mod synchronizer;

pub use error::{CompileError, DiagnosticError};
pub use render::{Format, Rendered, Style, render};
pub use synchronizer::{Options, compile, compile_with_options};
