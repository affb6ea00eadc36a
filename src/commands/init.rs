use serde_json::json;

use crate::config::ProjectSettings;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let project = ProjectSettings::reset_from_template(ctx.base_path.clone(), &ctx.template)?;

    let settings_path = project.settings_path().display().to_string();
    let template_path = project.template_path().display().to_string();
    let text = format!("created {settings_path} from {template_path}");
    ctx.output.emit(
        &text,
        &json!({
            "settings_path": settings_path,
            "template_path": template_path,
            "settings": project.get_all_settings(),
        }),
    )
}
