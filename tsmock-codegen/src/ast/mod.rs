//! TypeScript AST builders for the statements of a mock file.

mod consts;
mod imports;

pub use consts::Const;
pub use imports::Import;
