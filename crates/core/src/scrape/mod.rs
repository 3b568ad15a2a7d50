//! Download page scraping.
//!
//! Each catalog record references one or more "download pages" on the
//! mirror site. Scraping one page yields the labeled details block and
//! one stream candidate per direct link anchor.

mod page;
mod types;

pub use page::{candidates_from_page, size_to_mb, HttpPageScraper, PageScraper};
pub use types::*;
