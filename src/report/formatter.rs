use crate::detect::Classification;
use crate::error::Result;

/// Title printed above the detection table.
pub const TABLE_TITLE: &str = "Piper Detection Report";

const PLACEHOLDER: &str = "-";

/// Format a classification as a three-row table (Types, Framework, Deploy).
///
/// Absent or empty values are shown as `-`.
pub fn format_table(classification: &Classification) -> String {
    let types = classification
        .types()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let rows = [
        ("Types", non_empty(types)),
        ("Framework", optional(classification.framework())),
        ("Deploy", optional(classification.deploy())),
    ];

    let mut output = String::new();
    output.push_str(TABLE_TITLE);
    output.push('\n');
    output.push_str(&format!("  {:<10} {}\n", "KEY", "VALUE"));
    output.push_str(&format!("  {:-<10} {:-<20}\n", "", ""));

    for (key, value) in rows {
        output.push_str(&format!("  {:<10} {}\n", key, value));
    }

    output
}

/// Format a classification as JSON.
pub fn format_json(classification: &Classification, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(classification)?
    } else {
        serde_json::to_string(classification)?
    };
    Ok(json)
}

fn non_empty(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}
