pub mod deck;
pub mod loaders;
pub mod question;
pub mod subject;

pub use deck::QuizDeck;
pub use loaders::{load_all_text_documents, load_deck, load_text_document, SourceDocument};
pub use question::Question;
pub use subject::Subject;
