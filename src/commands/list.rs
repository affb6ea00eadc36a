use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let project = ctx.project()?;
    let settings = project.get_all_settings();

    if ctx.output.mode() == OutputMode::Text {
        if settings.is_empty() {
            println!("0 settings");
            return Ok(());
        }

        let mut keys: Vec<_> = settings.keys().collect();
        keys.sort();
        for key in keys {
            println!("{key} = {}", settings[key.as_str()]);
        }

        return Ok(());
    }

    let text = format!("{} settings", settings.len());
    ctx.output.emit(&text, settings)
}
