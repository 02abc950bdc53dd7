//! Read-only projection of a selected record into labeled sections.
//!
//! Missing and falsy values render as `"N/A"`; the number zero is a real value
//! and renders as `"0"`.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use doclist::Record;
use serde_json::Value;

pub const NOT_AVAILABLE: &str = "N/A";

/// Avatar background palette.
const AVATAR_COLORS: [&str; 8] = [
    "#F87171", "#60A5FA", "#34D399", "#FBBF24", "#A78BFA", "#F472B6", "#FCD34D", "#38BDF8",
];

/// Keys tried, in order, when an array item or nested object needs a label.
const ITEM_LABEL_KEYS: [&str; 3] = ["guardian_name", "name", "title"];

/// One labeled field in a detail section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub field: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailSection {
    /// Grid of label/value pairs.
    Fields { heading: &'static str, fields: &'static [DetailField] },
    /// One line per item of an array field.
    List { heading: &'static str, field: &'static str },
}

/// How a record type is presented in the detail dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailLayout {
    /// Joined with spaces to form the heading.
    pub title_fields: &'static [&'static str],
    pub subtitle_fields: &'static [&'static str],
    pub initial_field: &'static str,
    pub image_field: &'static str,
    pub sections: &'static [DetailSection],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Avatar {
    pub image_url: Option<String>,
    pub initial: String,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectedSection {
    Fields { heading: &'static str, rows: Vec<(&'static str, String)> },
    List { heading: &'static str, items: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDetail {
    pub id: String,
    pub title: String,
    pub subtitles: Vec<String>,
    pub avatar: Avatar,
    pub sections: Vec<ProjectedSection>,
}

/// Render a field value for display.
#[must_use]
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => NOT_AVAILABLE.to_owned(),
        Some(Value::Bool(true)) => "true".to_owned(),
        Some(Value::Number(n)) => display_number(n),
        Some(Value::String(s)) if s.is_empty() => NOT_AVAILABLE.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            let labels = list_items(items);
            if labels.is_empty() { NOT_AVAILABLE.to_owned() } else { labels.join(", ") }
        }
        Some(obj @ Value::Object(_)) => item_label(obj),
    }
}

/// Integral floats render without a fractional part so `0.0` reads as `"0"`.
fn display_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract().abs() < f64::EPSILON && f.abs() < 1e15 {
                return format!("{f:.0}");
            }
        }
    }
    n.to_string()
}

fn item_label(item: &Value) -> String {
    match item {
        Value::Object(map) => ITEM_LABEL_KEYS
            .iter()
            .find_map(|key| map.get(*key).filter(|v| !is_blank(v)))
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |v| display_value(Some(v))),
        other => display_value(Some(other)),
    }
}

fn list_items(items: &[Value]) -> Vec<String> {
    items.iter().filter(|v| !v.is_null()).map(item_label).collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Find a record on the current page by id.
#[must_use]
pub fn resolve_selection<'a>(rows: &'a [Record], id: &str) -> Option<&'a Record> {
    rows.iter().find(|r| r.id() == id)
}

/// Deterministic avatar color for a record id.
#[must_use]
pub fn avatar_color(id: &str) -> &'static str {
    // FNV-1a keeps the choice stable across renders and hydration.
    let hash = id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, b| (acc ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3));
    let idx = usize::try_from(hash % AVATAR_COLORS.len() as u64).unwrap_or(0);
    AVATAR_COLORS[idx]
}

#[must_use]
pub fn avatar(record: &Record, layout: &DetailLayout) -> Avatar {
    Avatar {
        image_url: record.get_str(layout.image_field).map(str::to_owned),
        initial: record
            .get_str(layout.initial_field)
            .and_then(|s| s.chars().next())
            .map(String::from)
            .unwrap_or_default(),
        color: avatar_color(record.id()),
    }
}

/// Space-joined display values, e.g. first and last name.
#[must_use]
pub fn joined_display(record: &Record, fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| display_value(record.get(f)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Project a record through a layout.
#[must_use]
pub fn project(record: &Record, layout: &DetailLayout) -> RecordDetail {
    let sections = layout
        .sections
        .iter()
        .map(|section| match *section {
            DetailSection::Fields { heading, fields } => ProjectedSection::Fields {
                heading,
                rows: fields
                    .iter()
                    .map(|f| (f.label, display_value(record.get(f.field))))
                    .collect(),
            },
            DetailSection::List { heading, field } => {
                let items = match record.get(field) {
                    Some(Value::Array(items)) => list_items(items),
                    _ => Vec::new(),
                };
                let items = if items.is_empty() { vec![NOT_AVAILABLE.to_owned()] } else { items };
                ProjectedSection::List { heading, items }
            }
        })
        .collect();

    RecordDetail {
        id: record.id().to_owned(),
        title: joined_display(record, layout.title_fields),
        subtitles: layout
            .subtitle_fields
            .iter()
            .map(|f| display_value(record.get(f)))
            .collect(),
        avatar: avatar(record, layout),
        sections,
    }
}
