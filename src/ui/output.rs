use apk_deploy::config::{ConfigWarning, EnvWarning};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Unknown config keys: `warning` events in JSON mode, stderr otherwise.
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    for w in warnings {
        if ui.json {
            let _ = json::emit(serde_json::json!({
                "event": "warning",
                "kind": "config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        } else {
            eprintln!("{}", render_config_warning(ui, w));
        }
    }
}

/// Rejected `APK_DEPLOY_*` values, rendered like config key warnings.
pub fn print_env_warnings(ui: &UiContext, warnings: &[EnvWarning]) {
    for w in warnings {
        if ui.json {
            let _ = json::emit(serde_json::json!({
                "event": "warning",
                "kind": "env",
                "var": w.var,
                "value": w.value,
                "suggestion": w.suggestion,
                "valid_values": w.valid_values,
            }));
        } else {
            eprintln!("{}", render_env_warning(ui, w));
        }
    }
}

fn render_env_warning(ui: &UiContext, w: &EnvWarning) -> String {
    format!(
        "{} {}\n   Valid values: {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        w,
        w.valid_values.join(", ")
    )
}

fn render_config_warning(ui: &UiContext, w: &ConfigWarning) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        Icon::Warning.colored(ui.color, ui.unicode),
        w.key,
        location
    );
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    out
}

/// Report a fatal error: an `error` event in JSON mode, stderr otherwise.
pub fn print_error(ui: &UiContext, err: &anyhow::Error) {
    if ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        }));
        return;
    }

    eprintln!(
        "\n{} {}\n",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(err.to_string()).render(ui.color)
    );
}
