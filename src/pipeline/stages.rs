use log::{debug, info, warn};

use crate::content::{self, NodeId, NodeKind};
use crate::pipeline::context::{BuildContext, BuildSummary};
use crate::sitemap;
use crate::template::{render_node, TemplateRole};
use crate::utils::error::SiteResult;
use crate::utils::fs::{copy_tree, create_directory, write_file};

/// Create the output root and copy static assets into it
pub fn prepare_output(ctx: &mut BuildContext, summary: &mut BuildSummary) -> SiteResult<()> {
    let output = &ctx.config.output_dir;
    create_directory(output)?;

    if let Some(assets) = &ctx.config.assets_dir {
        if assets.is_dir() {
            summary.assets = copy_tree(assets, output)?;
            debug!("Copied {} assets from {}", summary.assets, assets.display());
        } else {
            warn!("Assets directory does not exist: {}", assets.display());
        }
    }
    Ok(())
}

pub fn build_content(ctx: &mut BuildContext, summary: &mut BuildSummary) -> SiteResult<()> {
    ctx.tree = content::build(&ctx.config.content_dir)?;
    summary.sections = ctx.tree.section_count();
    Ok(())
}

/// Replace every node's body with its fully templated page
pub fn render_templates(ctx: &mut BuildContext, _summary: &mut BuildSummary) -> SiteResult<()> {
    let homepage = ctx.tree.homepage();

    if let Some(home) = homepage {
        let listing = homepage_listing(ctx);
        ctx.tree.attach_listing(home, listing);
    }

    let ids: Vec<NodeId> = ctx.tree.node_ids().collect();
    for id in ids {
        let is_homepage = Some(id) == homepage;
        let role = TemplateRole::for_node(ctx.tree.node(id), is_homepage);

        if !is_homepage && ctx.tree.node(id).kind == NodeKind::Section {
            if let Some(section) = section_of(ctx, id) {
                let listing = content::section_listing(&ctx.tree, section);
                ctx.tree.attach_listing(id, listing);
            }
        }

        let html = render_node(&ctx.tree, id, role, &mut ctx.templates)?;
        debug!("Rendered {} with {} template", ctx.tree.node(id).url, role);

        let node = ctx.tree.node_mut(id);
        node.rendered_body = html;
        node.attached_listing = None;
    }
    Ok(())
}

/// Every published ordinary page of the site, newest first
fn homepage_listing(ctx: &BuildContext) -> Vec<NodeId> {
    let homepage = ctx.tree.homepage();
    content::flatten(&ctx.tree)
        .into_iter()
        .filter(|id| Some(*id) != homepage)
        .filter(|id| {
            let node = ctx.tree.node(*id);
            node.kind == NodeKind::Page && !node.draft
        })
        .collect()
}

fn section_of(ctx: &BuildContext, index: NodeId) -> Option<content::SectionId> {
    let path = ctx.tree.node(index).section_path.as_deref()?;
    ctx.tree.section_by_path(path)
}

/// Persist each rendered node under the output root
pub fn write_output(ctx: &mut BuildContext, summary: &mut BuildSummary) -> SiteResult<()> {
    let shadowed = ctx.tree.shadowed_root_index();

    for id in ctx.tree.node_ids() {
        let node = ctx.tree.node(id);
        if Some(id) == shadowed {
            warn!(
                "Skipping root {}: the homepage owns {}",
                node.source_filename, node.output_path
            );
            continue;
        }

        let path = ctx.config.output_dir.join(&node.output_path);
        write_file(&path, &node.rendered_body)?;
        debug!("Wrote {}", path.display());
        summary.pages += 1;
    }

    info!("Wrote {} pages to {}", summary.pages, ctx.config.output_dir.display());
    Ok(())
}

pub fn emit_sitemap(ctx: &mut BuildContext, summary: &mut BuildSummary) -> SiteResult<()> {
    let entries = sitemap::project(&ctx.tree, &ctx.config.hostname);
    sitemap::write_sitemap(&ctx.config.output_dir, &entries)?;
    summary.sitemap_entries = entries.len();
    Ok(())
}
