//! Schema.org structured data detection.
//!
//! A page "has schema" when it carries at least one JSON-LD block or microdata
//! `itemtype`. Types are collected from JSON-LD `@type` (including entries
//! nested under `@graph`) and from the last path segment of `itemtype` URLs.

use serde_json::Value;

use super::html::HtmlDocument;

/// Structured data found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredData {
    /// Number of `<script type="application/ld+json">` blocks (parseable or not)
    pub json_ld_blocks: usize,
    /// Number of elements carrying `itemtype`
    pub microdata_items: usize,
    /// Schema.org types, deduplicated, in order of appearance
    pub schema_types: Vec<String>,
}

impl StructuredData {
    pub fn has_schema(&self) -> bool {
        self.json_ld_blocks > 0 || self.microdata_items > 0
    }
}

/// Extracts structured data from a parsed document.
///
/// Invalid JSON in a JSON-LD block still counts as a block; it only contributes
/// no types.
pub fn extract_structured_data(document: &HtmlDocument) -> StructuredData {
    let blocks = document.json_ld_blocks();
    let item_types = document.item_types();

    let mut schema_types = Vec::new();
    for block in &blocks {
        match serde_json::from_str::<Value>(block.trim()) {
            Ok(value) => collect_types(&value, &mut schema_types),
            Err(e) => log::debug!("Ignoring unparseable JSON-LD block: {e}"),
        }
    }
    for item_type in &item_types {
        // https://schema.org/Product -> Product
        let name = item_type.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        push_unique(&mut schema_types, name);
    }

    StructuredData {
        json_ld_blocks: blocks.len(),
        microdata_items: item_types.len(),
        schema_types,
    }
}

fn collect_types(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| collect_types(item, out)),
        Value::Object(obj) => {
            match obj.get("@type") {
                Some(Value::String(t)) => push_unique(out, t),
                Some(Value::Array(types)) => types
                    .iter()
                    .filter_map(Value::as_str)
                    .for_each(|t| push_unique(out, t)),
                _ => {}
            }
            if let Some(graph) = obj.get("@graph") {
                collect_types(graph, out);
            }
        }
        _ => {}
    }
}

fn push_unique(out: &mut Vec<String>, schema_type: &str) {
    let schema_type = schema_type.trim();
    if !schema_type.is_empty() && !out.iter().any(|t| t == schema_type) {
        out.push(schema_type.to_string());
    }
}
