pub mod deck_writer;
pub mod subject_classifier;
pub mod warn_writer;

pub use deck_writer::{DeckWriter, OutputFormat};
pub use subject_classifier::{classify_subject, latin_density, score_subjects};
pub use warn_writer::WarnWriter;
