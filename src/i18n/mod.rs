//! Internationalization (i18n) module: the localization store.
//!
//! All localized content for the portfolio lives here, keyed by language.
//! The store is immutable `'static` data; nothing at runtime writes to it.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages, their
//!   metadata and which one is the fallback
//! - `language`: Closed `Language` enum with parsing from codes and locales
//! - `translations`: The content records for each language
//! - `validator`: Consistency checks run at startup
//!
//! # Example
//!
//! ```rust
//! use portfolio_site::i18n::{for_language, Language};
//!
//! let english = Language::from_code("en").unwrap();
//! let content = for_language(english);
//! assert_eq!(content.nav.about, "About");
//! ```

mod language;
mod registry;
pub mod translations;
mod validator;

pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translations::{for_language, Project, ProjectCategory, Translation};
pub use validator::{TranslationValidator, ValidationReport};
