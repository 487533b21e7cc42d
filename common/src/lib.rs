//! Shared types for the DineSafe dashboard: restaurant records, document
//! decoding, card view models and configuration.

pub mod config;
pub mod document;
pub mod fragments;
pub mod restaurant;

pub use document::{Document, DocumentHandle};
pub use restaurant::Restaurant;
