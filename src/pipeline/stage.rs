use std::fmt;

use thiserror::Error;

use crate::utils::error::SiteError;

/// Steps of a build, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PrepareOutput,
    BuildContent,
    RenderTemplates,
    WriteOutput,
    EmitSitemap,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::PrepareOutput,
        Stage::BuildContent,
        Stage::RenderTemplates,
        Stage::WriteOutput,
        Stage::EmitSitemap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::PrepareOutput => "prepare-output",
            Stage::BuildContent => "build-content",
            Stage::RenderTemplates => "render-templates",
            Stage::WriteOutput => "write-output",
            Stage::EmitSitemap => "emit-sitemap",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A build that stopped at `stage`
#[derive(Debug, Error)]
#[error("stage '{stage}' failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: SiteError,
}
