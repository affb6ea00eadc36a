use serde_json::Value;

use crate::cli::{ReplaceArgs, SetArgs, UnsetArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

pub fn run(ctx: &AppContext, args: SetArgs) -> AppResult<()> {
    let mut project = ctx.project()?;
    let value = parse_value(&args.value);
    project.set_setting(args.key.clone(), value.clone());
    project.save()?;

    let text = format!("{} = {}", args.key, value);
    ctx.output.emit(&text, &value)
}

pub fn unset(ctx: &AppContext, args: UnsetArgs) -> AppResult<()> {
    let mut project = ctx.project()?;
    let removed = project.remove_setting(&args.key);
    if removed.is_some() {
        project.save()?;
    }

    let text = match removed {
        Some(_) => format!("removed {}", args.key),
        None => format!("{} was not set", args.key),
    };
    ctx.output.emit(&text, &removed.unwrap_or(Value::Null))
}

pub fn replace(ctx: &AppContext, args: ReplaceArgs) -> AppResult<()> {
    let settings = match serde_json::from_str(&args.settings)? {
        Value::Object(settings) => settings,
        _ => {
            return Err(AppError::InvalidInput(
                "replacement settings must be a json object".to_string(),
            ));
        }
    };

    let mut project = ctx.project()?;
    project.set_all_settings(settings);
    project.save()?;

    let all = project.get_all_settings();
    let text = format!("{} settings written", all.len());
    ctx.output.emit(&text, all)
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
