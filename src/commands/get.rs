use serde_json::{Value, json};

use crate::cli::GetArgs;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: GetArgs) -> AppResult<()> {
    let project = ctx.project()?;
    // An explicit `null` is a set value; only a missing key reports "not set".
    let Some(value) = project.get_setting(&args.key) else {
        let text = format!("{} is not set", args.key);
        return ctx
            .output
            .emit(&text, &json!({ "key": args.key, "set": false }));
    };

    let text = match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    ctx.output.emit(&text, value)
}
