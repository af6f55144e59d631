use serde::Deserialize;
use serde_json::Value;

/// One result row: column name to scalar value, as emitted by the backend.
pub type Row = serde_json::Map<String, Value>;

/// Response body of the ask endpoint.
///
/// A 2xx body may still carry `error` when the question could not be turned
/// into runnable SQL (or the generated SQL was refused); that is a soft,
/// displayable warning and the remaining fields are not meaningful. Every
/// field defaults so both shapes decode.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct AskResult {
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Row>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Renders one cell value for display: strings bare, null blank, everything
/// else via its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let body = r#"{
            "sql": "SELECT * FROM api_customer",
            "columns": ["id", "name"],
            "data": [{"id": 1, "name": "Abebe"}],
            "error": null
        }"#;
        let result: AskResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.sql, "SELECT * FROM api_customer");
        assert_eq!(result.columns, vec!["id", "name"]);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.error, None);
        assert_eq!(result.data[0].get("name"), Some(&Value::from("Abebe")));
    }

    #[test]
    fn soft_error_body_decodes_with_defaults() {
        let body = r#"{"error": "Could not parse query", "sql": "DROP TABLE x"}"#;
        let result: AskResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.error.as_deref(), Some("Could not parse query"));
        assert!(result.columns.is_empty());
        assert!(result.data.is_empty());
    }

    #[test]
    fn cell_rendering() {
        assert_eq!(display_value(&Value::from("Adama")), "Adama");
        assert_eq!(display_value(&Value::from(3)), "3");
        assert_eq!(display_value(&Value::from(4.25)), "4.25");
        assert_eq!(display_value(&Value::Bool(true)), "true");
        assert_eq!(display_value(&Value::Null), "");
    }
}
