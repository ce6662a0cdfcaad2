//! Core library exports for the catalog service.
//!
//! This crate exposes the category domain model, the persistence
//! capabilities it is stored through, and the use cases built on both.

#[cfg(feature = "cli")]
pub mod cli;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod repository;
pub mod services;
#[cfg(feature = "cli")]
pub mod settings;
