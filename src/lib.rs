pub mod ast;
pub mod dialect;
pub mod error;
pub mod render;

pub use dialect::Dialect;
pub use error::{RenderError, Result};
pub use render::Renderer;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::dialect::{Dialect, SqlGenerator};
    pub use crate::error::{RenderError, Result};
    pub use crate::render::{CustomFunction, Renderer};
}
