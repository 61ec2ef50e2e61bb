use serde::Serialize;
use serde_json::Value;

/// One row of `editable_list_by_version`, as returned to the caller.
///
/// The columns are opaque to this service: they are read as JSON and passed
/// through untouched. A NULL column is `None` and serializes as `null`, so the
/// response always carries exactly these four keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
pub struct EditableListRow {
    pub editable_list: Option<Value>,
    pub entry_to_iterate: Option<Value>,
    pub iterator_editable_list: Option<Value>,
    pub table_names: Option<Value>,
}
