#![forbid(unsafe_code)]

pub mod csv_files;
pub mod repository;

pub use csv_files::CsvDeckFiles;
pub use repository::{
    DeckOrigin, DeckStore, InMemoryStore, LoadedDeck, Storage, StorageError,
};
