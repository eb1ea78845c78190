//! quire: a static site generator for directory trees of Markdown.
//!
//! A build walks the content root into a [`content::ContentTree`], renders
//! every node through one of three templates, writes the pages and emits a
//! sitemap. See [`pipeline::run`].

pub mod cli;
pub mod config;
pub mod content;
pub mod front_matter;
pub mod markdown;
pub mod pipeline;
pub mod server;
pub mod sitemap;
pub mod template;
pub mod utils;

pub use config::SiteConfig;
pub use pipeline::{build_site, BuildContext, BuildSummary, PipelineError};
pub use utils::error::{SiteError, SiteResult};
