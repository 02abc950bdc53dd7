use serde_json::json;

use crate::{
    ErrorEnvelope, Filter, ListEnvelope, ListError, ListQuery, MethodEnvelope, OrderBy, Record, resource_path,
};

fn student_query(limit_start: u32, limit: u32, filters: Vec<Filter>) -> ListQuery {
    ListQuery {
        fields: vec!["name".to_owned(), "student_name".to_owned()],
        filters,
        limit_start,
        limit,
        order_by: Some(OrderBy::newest_first()),
    }
}

fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
}

// =============================================================
// Record
// =============================================================

#[test]
fn record_takes_id_from_name_key() {
    let record = Record::from_value(json!({ "name": "EDU-STU-0001", "city": "Pune" })).unwrap();
    assert_eq!(record.id(), "EDU-STU-0001");
    assert_eq!(record.get("city"), Some(&json!("Pune")));
    assert_eq!(record.get("name"), Some(&json!("EDU-STU-0001")));
}

#[test]
fn record_falls_back_to_id_key() {
    let record = Record::from_value(json!({ "id": 42, "first_name": "Ada" })).unwrap();
    assert_eq!(record.id(), "42");
}

#[test]
fn record_with_null_name_uses_id_key() {
    let record = Record::from_value(json!({ "name": null, "id": "s-1" })).unwrap();
    assert_eq!(record.id(), "s-1");
}

#[test]
fn record_without_identifier_is_rejected() {
    let err = Record::from_value(json!({ "first_name": "Ada" })).unwrap_err();
    assert!(matches!(err, ListError::InvalidRecord(_)));
}

#[test]
fn record_with_empty_or_nested_identifier_is_rejected() {
    assert!(Record::from_value(json!({ "name": "" })).is_err());
    assert!(Record::from_value(json!({ "name": { "x": 1 } })).is_err());
    assert!(Record::from_value(json!({ "id": 1.5 })).is_err());
}

#[test]
fn record_from_non_object_is_rejected() {
    let err = Record::from_value(json!(["a"])).unwrap_err();
    assert_eq!(err, ListError::InvalidRecord("expected object, got array".to_owned()));
}

#[test]
fn record_serializes_back_to_flat_object() {
    let raw = json!({ "name": "S1", "pincode": 411001, "guardians": [] });
    let record = Record::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&record).unwrap(), raw);
}

#[test]
fn get_str_skips_empty_and_non_string_values() {
    let record = Record::from_value(json!({ "name": "S1", "city": "", "pincode": 5 })).unwrap();
    assert_eq!(record.get_str("name"), Some("S1"));
    assert_eq!(record.get_str("city"), None);
    assert_eq!(record.get_str("pincode"), None);
    assert_eq!(record.get_str("missing"), None);
}

// =============================================================
// Query encoding
// =============================================================

#[test]
fn prefix_filter_serializes_as_like_triple() {
    let filter = Filter::prefix("student_name", "Joh");
    assert_eq!(serde_json::to_value(&filter).unwrap(), json!(["student_name", "like", "Joh%"]));
}

#[test]
fn query_pairs_include_offset_limit_and_order() {
    let query = student_query(40, 20, vec![Filter::prefix("student_name", "Jo")]);
    let pairs = query.to_query_pairs();
    assert_eq!(pair(&pairs, "limit_start"), Some("40"));
    assert_eq!(pair(&pairs, "limit_page_length"), Some("20"));
    assert_eq!(pair(&pairs, "order_by"), Some("creation desc"));
    assert_eq!(pair(&pairs, "fields"), Some(r#"["name","student_name"]"#));
    assert_eq!(pair(&pairs, "filters"), Some(r#"[["student_name","like","Jo%"]]"#));
}

#[test]
fn query_pairs_omit_empty_filters() {
    let query = student_query(0, 20, Vec::new());
    let pairs = query.to_query_pairs();
    assert_eq!(pair(&pairs, "filters"), None);
    assert_eq!(pair(&pairs, "limit_start"), Some("0"));
}

#[test]
fn order_by_renders_descending_field() {
    let order = OrderBy { field: "modified".to_owned() };
    assert_eq!(order.render(), "modified desc");
}

#[test]
fn resource_path_encodes_spaces() {
    assert_eq!(resource_path("Student"), "/api/resource/Student");
    assert_eq!(resource_path(" Student Group "), "/api/resource/Student%20Group");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn list_envelope_decodes_records_in_order() {
    let body = r#"{"data":[{"name":"S2"},{"name":"S1"}]}"#;
    let records = ListEnvelope::decode(body).unwrap();
    let ids: Vec<&str> = records.iter().map(Record::id).collect();
    assert_eq!(ids, vec!["S2", "S1"]);
}

#[test]
fn list_envelope_without_data_is_empty() {
    assert!(ListEnvelope::decode("{}").unwrap().is_empty());
}

#[test]
fn list_envelope_with_invalid_record_fails_decode() {
    let err = ListEnvelope::decode(r#"{"data":[{"city":"x"}]}"#).unwrap_err();
    assert!(matches!(err, ListError::Decode(msg) if msg.contains("missing `name` field")));
}

#[test]
fn error_envelope_prefers_server_messages() {
    let inner = serde_json::to_string(&json!({ "message": "No permission for Student" })).unwrap();
    let server_messages = serde_json::to_string(&vec![inner]).unwrap();
    let body = json!({
        "exc_type": "PermissionError",
        "exception": "frappe.exceptions.PermissionError",
        "_server_messages": server_messages,
    });
    let envelope: ErrorEnvelope = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.summary().as_deref(), Some("No permission for Student"));
}

#[test]
fn error_envelope_falls_back_through_fields() {
    let envelope: ErrorEnvelope = serde_json::from_value(json!({ "exc_type": "DoesNotExistError" })).unwrap();
    assert_eq!(envelope.summary().as_deref(), Some("DoesNotExistError"));

    let envelope: ErrorEnvelope = serde_json::from_value(json!({ "message": "Not found" })).unwrap();
    assert_eq!(envelope.summary().as_deref(), Some("Not found"));
}

#[test]
fn from_response_uses_envelope_or_default_message() {
    let err = ListError::from_response(403, r#"{"exc_type":"PermissionError"}"#);
    assert_eq!(err, ListError::Status { status: 403, message: "PermissionError".to_owned() });

    let err = ListError::from_response(502, "<html>bad gateway</html>");
    assert_eq!(err, ListError::Status { status: 502, message: "server error".to_owned() });
    assert_eq!(err.to_string(), "server returned 502: server error");
}

#[test]
fn method_envelope_decodes_message() {
    let body: MethodEnvelope<String> = serde_json::from_str(r#"{"message":"Logged In"}"#).unwrap();
    assert_eq!(body.message, "Logged In");
}
