//! Core library: configuration, image loading, prompt building and the two similarity scorers.

pub mod config;
pub mod error;
pub mod image_similarity;
pub mod images;
pub mod models;
pub mod prompt;
pub mod text_similarity;
