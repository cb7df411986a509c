// ABOUTME: Request body shape validation for create and rename endpoints
// ABOUTME: Produces the fixed-format 422 messages for malformed input

use serde_json::{json, Map, Value};

use swatchbook_palettes::PaletteCreateInput;

pub const PROJECT_BODY_FORMAT: &str = "{name: <String>}";

pub const PALETTE_BODY_FORMAT: &str = "{name: <String>, color_one: <String>, \
     color_two: <String>, color_three: <String>, color_four: <String>, \
     color_five: <String>}";

pub const COLOR_FILTER_MESSAGE: &str =
    "Color must be a 6 character hex code without the leading #";

pub fn missing_property(format: &str, field: &str) -> String {
    format!("Expected body format {format}. You're missing the required {field} property")
}

pub fn invalid_property(format: &str, field: &str) -> String {
    format!("Expected body format {format}. {field} is not a valid property")
}

/// A well-formed color filter is exactly six hex digits, no leading `#`
pub fn is_hex_fragment(fragment: &str) -> bool {
    fragment.len() == 6 && fragment.chars().all(|c| c.is_ascii_hexdigit())
}

/// Fetch a field that must be present as a non-empty string
fn required_string<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Validate a project create body: `name` must be present
pub fn parse_project_body(body: &Value) -> Result<String, String> {
    let name = body
        .as_object()
        .and_then(|obj| required_string(obj, "name"))
        .ok_or_else(|| missing_property(PROJECT_BODY_FORMAT, "name"))?;

    Ok(name.to_string())
}

/// Validate a rename body: exactly `{name}`, nothing else
pub fn parse_rename_body(body: &Value) -> Result<String, String> {
    let obj = body
        .as_object()
        .ok_or_else(|| missing_property(PROJECT_BODY_FORMAT, "name"))?;

    let name = required_string(obj, "name")
        .ok_or_else(|| missing_property(PROJECT_BODY_FORMAT, "name"))?
        .to_string();

    if let Some(extra) = obj.keys().find(|key| key.as_str() != "name") {
        return Err(invalid_property(PROJECT_BODY_FORMAT, extra));
    }

    Ok(name)
}

/// Validate a palette create body. The project id arrives via the request
/// path and is injected before the presence checks, so the required-field
/// enumeration reports it last, matching the documented order.
pub fn parse_palette_body(body: Value, projects_id: i64) -> Result<PaletteCreateInput, String> {
    let mut obj = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    obj.insert("projects_id".to_string(), json!(projects_id));

    let missing = |field: &str| missing_property(PALETTE_BODY_FORMAT, field);

    let name = required_string(&obj, "name").ok_or_else(|| missing("name"))?;
    let color_one = required_string(&obj, "color_one").ok_or_else(|| missing("color_one"))?;
    let color_two = required_string(&obj, "color_two").ok_or_else(|| missing("color_two"))?;
    let color_three =
        required_string(&obj, "color_three").ok_or_else(|| missing("color_three"))?;
    let color_four = required_string(&obj, "color_four").ok_or_else(|| missing("color_four"))?;
    let color_five = required_string(&obj, "color_five").ok_or_else(|| missing("color_five"))?;
    let projects_id = obj
        .get("projects_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| missing("projects_id"))?;

    Ok(PaletteCreateInput {
        name: name.to_string(),
        color_one: color_one.to_string(),
        color_two: color_two.to_string(),
        color_three: color_three.to_string(),
        color_four: color_four.to_string(),
        color_five: color_five.to_string(),
        projects_id,
    })
}
