#![warn(clippy::all, missing_docs)]

//! Core domain logic for the season predictor.
//!
//! This crate hosts the catalog loader, the prediction form model and its
//! derived option lists, player suggestions, validation, and the submission
//! handler that writes records to the remote store. The terminal UI and any
//! future frontends drive it through these types.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod record;
pub mod store;
pub mod submit;

pub use catalog::CatalogLoader;
pub use crate::config::AppConfig;
pub use error::{CatalogError, ConfigError, StoreError, SubmitRejected, ValidationError};
pub use form::{team_options, Autocomplete, Field, FieldKind, PredictionForm, TeamGroup};
pub use models::{Catalog, Player, PlayerCatalog, TeamCatalog};
pub use record::SubmissionRecord;
pub use store::{PredictionStore, SupabaseStore};
pub use submit::{SubmissionHandler, SubmissionStatus};
