#![warn(clippy::pedantic)]

pub mod catalog;
pub mod concurrent;
pub mod config;
pub mod error;
pub mod game_data;
pub mod loader;

pub use catalog::{Dataset, DatasetKind};
pub use concurrent::load_all_concurrent;
pub use config::LoaderConfig;
pub use error::LoadError;
pub use game_data::GameData;
pub use loader::{decode_dataset, load, load_all, load_from};
