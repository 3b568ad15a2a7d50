//! Core of the MoviesDA Stremio add-on: catalog lookup, fuzzy title
//! matching, download page scraping and stream aggregation.

pub mod catalog;
pub mod config;
pub mod matcher;
pub mod resolver;
pub mod scrape;
pub mod streams;
pub mod testing;

pub use catalog::{CatalogError, JsonCatalog, MovieRecord};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ResolverConfig, ScraperConfig, ServerConfig,
};
pub use matcher::{similarity, MATCH_THRESHOLD};
pub use resolver::{ImdbTitleSource, TitleSource};
pub use scrape::{
    candidates_from_page, size_to_mb, HttpPageScraper, PageDetails, PageScraper, ScrapeError,
};
pub use streams::{BehaviorHints, Stream, StreamAggregator, StreamCandidate};
