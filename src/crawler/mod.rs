//! HTTP transport for roster pages

pub mod fetcher;

pub use fetcher::SiteFetcher;
