//! ambrosia-core - Core library for Ambrosia
//!
//! This crate contains the recipe model, the line-oriented recipe text format,
//! the folder-backed recipe repository, the search engine, and the settings
//! store used by Ambrosia front ends.

pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod search;
pub mod storage;
pub mod util;

pub use error::{Error, Result};
pub use models::{Recipe, RecipeDraft, Settings};
