use crate::renderer::TreeRenderer;
use crate::value::Value;
use crate::DEFAULT_INDENT;

pub const WRAPPER_OPEN: &str = "<div style='background: white;border:3px grey solid;'><div></div><pre>";
pub const WRAPPER_CLOSE: &str = "</pre></div>";

/// Replaces every HTML-significant character with its entity.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Dump of `value` escaped and wrapped for embedding in an HTML page.
pub fn pre_dump(value: &Value) -> String {
    pre_dump_indented(value, DEFAULT_INDENT)
}

pub fn pre_dump_indented(value: &Value, indent_unit: &str) -> String {
    let dump = TreeRenderer::default().render(value, indent_unit);
    format!("{}{}{}", WRAPPER_OPEN, escape_html(&dump), WRAPPER_CLOSE)
}
