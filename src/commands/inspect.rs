use serde_json::json;

use crate::config::ProjectPaths;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::probe;

// `path` and `exists` only derive paths; loading settings could scaffold the
// dotfile and change the answer.

pub fn path(ctx: &AppContext) -> AppResult<()> {
    let paths = ProjectPaths::new(ctx.base_path.clone(), &ctx.template)?;
    let text = paths.settings_file().display().to_string();
    ctx.output.emit(
        &text,
        &json!({
            "settings_path": text,
            "manifest_path": paths.manifest_file().display().to_string(),
            "template_path": paths.template_file().display().to_string(),
        }),
    )
}

pub fn exists(ctx: &AppContext) -> AppResult<()> {
    let paths = ProjectPaths::new(ctx.base_path.clone(), &ctx.template)?;
    let exists = probe::file_exists(paths.settings_file());
    let text = if exists { "yes" } else { "no" };
    ctx.output.emit(text, &json!({ "exists": exists }))
}

pub fn source(ctx: &AppContext) -> AppResult<()> {
    let project = ctx.project()?;
    let source = project.source();
    let text = format!("{source:?}").to_lowercase();
    ctx.output.emit(&text, &json!({ "source": source }))
}
