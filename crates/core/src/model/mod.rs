mod deck;
mod labels;
mod word;

pub use deck::Deck;
pub use labels::{LanguageLabels, LabelsError};
pub use word::{WordPair, WordPairError};
