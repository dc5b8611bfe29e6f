pub mod text_loader;
pub mod toml_loader;

pub use text_loader::{load_all_text_documents, load_text_document, SourceDocument};
pub use toml_loader::load_deck;
