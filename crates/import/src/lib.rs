//! `motordesk-import` — CSV bulk import of the motor catalog.
//!
//! Parsing is pure: [`parse_csv`] turns a text blob into motors plus a count of
//! skipped rows. Replacing the live catalog with the result is the caller's job.

pub mod error;
pub mod normalize;
pub mod parse;
pub mod separator;
pub mod template;

pub use error::ImportError;
pub use normalize::{normalize_price, parse_price, parse_stock};
pub use parse::{ParsedCatalog, parse_csv};
pub use separator::detect_separator;
pub use template::{TEMPLATE_FILE_NAME, TEMPLATE_HEADER, export, template};
