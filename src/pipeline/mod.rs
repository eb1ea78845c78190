//! Build orchestration.
//!
//! A build is a fixed sequence of stages run on the calling thread. The
//! first failure stops the run; partial output is left on disk.

mod context;
mod stage;
mod stages;

pub use context::{BuildContext, BuildSummary};
pub use stage::{PipelineError, Stage};

use std::time::Instant;

use log::{debug, error, info};

use crate::config::SiteConfig;
use crate::utils::error::SiteResult;

type StageFn = fn(&mut BuildContext, &mut BuildSummary) -> SiteResult<()>;

fn stage_fn(stage: Stage) -> StageFn {
    match stage {
        Stage::PrepareOutput => stages::prepare_output,
        Stage::BuildContent => stages::build_content,
        Stage::RenderTemplates => stages::render_templates,
        Stage::WriteOutput => stages::write_output,
        Stage::EmitSitemap => stages::emit_sitemap,
    }
}

/// Run every stage against `ctx`, consuming it
pub fn run(mut ctx: BuildContext) -> Result<BuildSummary, PipelineError> {
    let start = Instant::now();
    let mut summary = BuildSummary::default();

    for stage in Stage::ALL {
        debug!("Stage {} started", stage);
        if let Err(source) = stage_fn(stage)(&mut ctx, &mut summary) {
            let err = PipelineError { stage, source };
            error!("{}", err);
            return Err(err);
        }
        debug!("Stage {} finished", stage);
    }

    summary.elapsed = start.elapsed();
    info!("Build complete: {}", summary);
    Ok(summary)
}

/// Build the site described by `config` with a fresh context
pub fn build_site(config: SiteConfig) -> Result<BuildSummary, PipelineError> {
    run(BuildContext::new(config))
}
