pub mod args;
pub mod batch;
pub mod editor;
pub mod lsp;
pub mod meta;
pub mod syntax;
