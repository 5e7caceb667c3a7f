//! # vnuser-core
//!
//! Turns Vietnamese personal names into deterministic, collision-free usernames
//! and splices them back into the source table.
//!
//! This crate provides:
//! - Tone-mark removal and name normalization
//! - Base username derivation (`Phạm Thanh Tùng` -> `tungpt`)
//! - Per-run conflict resolution with numeric suffixes
//! - Optional email composition and domain checks
//! - Row-aligned name extraction and drift-free column insertion
//!
//! ```
//! use vnuser_core::{process_names_to_emails, ProcessingOptions};
//!
//! let results = process_names_to_emails(
//!     &["Trần Phương Thảo", "Tạ Phương Thảo"],
//!     &ProcessingOptions::with_emails("acme.com"),
//! );
//! assert_eq!(results[0].final_username, "thaotp");
//! assert_eq!(results[1].final_username, "thaotp1");
//! assert_eq!(results[1].email.as_deref(), Some("thaotp1@acme.com"));
//! ```

/// Conflict resolution for base usernames.
pub mod assign;
/// Sheet and column introspection.
pub mod describe;
/// Email composition and domain validation.
pub mod email;
/// Error types and result aliases.
pub mod error;
/// Row-aligned name extraction.
pub mod extract;
/// Shared data types.
pub mod model;
/// End-to-end pipeline entry points.
pub mod pipeline;
/// Column insertion into the source grid.
pub mod splice;
/// Preview statistics.
pub mod summary;
/// Tone-mark removal.
pub mod tone;
/// Base username derivation.
pub mod username;
/// Step navigation for interactive front ends.
pub mod wizard;

pub use assign::UniqueAssigner;
pub use describe::{describe_columns, describe_worksheets, find_column, ColumnDescriptor, WorksheetDescriptor};
pub use email::{compose_email, is_valid_domain};
pub use error::{VnUserError, VnUserResult};
pub use extract::{extract_names, NameRecord};
pub use model::{ProcessingConfig, ProcessingOptions, UsernameResult};
pub use pipeline::{
    build_output_grid, compute_usernames, generate_unique_usernames, process_book, process_document,
    process_names_to_emails, process_parsed_document, sample_vietnamese_names, validate_config, ProcessedDocument,
};
pub use splice::{splice_columns, EMAIL_HEADER, USERNAME_HEADER};
pub use summary::ProcessingSummary;
pub use tone::{normalize, remove_tone_marks};
pub use username::{convert_name_to_username, format_username};
pub use wizard::WizardStep;
