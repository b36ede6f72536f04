//! Product page metadata extraction.
//!
//! Given a URL, [`PageScraper`] retrieves the document and derives a
//! normalized [`PageMeta`] record: title, description and image drawn from
//! Open Graph tags, with plain-markup fallbacks for pages that carry none.

pub mod error;
pub mod meta;
pub mod parse;
pub mod scrape;

pub use error::{FetchError, Result};
pub use meta::PageMeta;
pub use parse::parse_meta;
pub use scrape::PageScraper;
