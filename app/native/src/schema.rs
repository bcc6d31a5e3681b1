//! JSON Schema generation for layout and configuration files.

use crate::config::ZoneSnapConfig;
use crate::zones::Layout;

const SCHEMA_BASE_URL: &str = "https://raw.githubusercontent.com/zonesnap/zonesnap/main/schemas";

fn with_id(mut schema: schemars::Schema, file: &str) -> schemars::Schema {
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(format!("{SCHEMA_BASE_URL}/{file}")));
    }
    schema
}

/// Generates the JSON Schema for layout files.
#[must_use]
pub fn generate_layout_schema() -> schemars::Schema {
    with_id(schemars::schema_for!(Layout), "layout.schema.json")
}

/// Generates the JSON Schema for the configuration file.
#[must_use]
pub fn generate_config_schema() -> schemars::Schema {
    with_id(schemars::schema_for!(ZoneSnapConfig), "config.schema.json")
}

/// Pretty-printed layout schema.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_layout_schema()).unwrap_or_default()
}

/// Pretty-printed configuration schema.
#[must_use]
pub fn print_config_schema() -> String {
    serde_json::to_string_pretty(&generate_config_schema()).unwrap_or_default()
}
