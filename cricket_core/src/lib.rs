//! # cricket_core - Cricket Catalog Engine
//!
//! `cricket_core` holds everything about the cricket catalog that is not
//! drawing pixels: the record type, the attribute category bands, the JSON
//! file store, the entry form state machine and the display model. The GUI
//! and CLI crates are thin shells over it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_core::category::Category;
//! use cricket_core::form::{save_form, FormState};
//! use cricket_core::record::Attribute;
//! use cricket_core::store::load_crickets;
//! use cricket_core::display::render_groups;
//! use std::path::Path;
//!
//! let path = Path::new("crickets.json");
//!
//! let mut form = FormState::new();
//! form.name = "A".to_string();
//! form.size = "中".to_string();
//! form.select_category(Attribute::Attack, Category::High);
//! save_form(&mut form, path)?;
//!
//! let groups = render_groups(&load_crickets(path)?);
//! # Ok::<(), cricket_core::errors::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`] - The `Cricket` record, size classes and attribute names
//! - [`category`] - Category bands, canonical values, classification
//! - [`store`] - Whole-file load/append/replace/remove/move
//! - [`form`] - Entry form state and save
//! - [`display`] - Size tab grouping and attribute colors
//! - [`config`] - File locations
//! - [`logging`] - tracing subscriber setup
//! - [`errors`] - Structured error types

pub mod category;
pub mod config;
pub mod display;
pub mod errors;
pub mod form;
pub mod logging;
pub mod record;
pub mod store;

// Re-export commonly used types at crate root for convenience
pub use category::Category;
pub use config::CatalogConfig;
pub use errors::{CatalogError, CatalogResult};
pub use form::{FormMode, FormState};
pub use record::{Attribute, Cricket, SizeClass};
pub use store::{load_crickets, save_crickets, Direction};
