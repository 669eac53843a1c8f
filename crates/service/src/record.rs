use serde_json::Value;

/// One stored entity as a schema-less field/value mapping.
///
/// The shape of a record is whatever the client sent, except for the
/// reserved `id` field which the stores always control.
pub type Record = serde_json::Map<String, Value>;

pub const ID_FIELD: &str = "id";

/// The record's `id`, if present and a string.
pub fn id_of(record: &Record) -> Option<&str> {
    record.get(ID_FIELD).and_then(Value::as_str)
}

/// Force the record's `id` to the given value, overwriting any client value.
pub fn set_id(record: &mut Record, id: &str) {
    record.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
}

/// Field-by-field overwrite of `fields` onto `target`.
/// Fields absent from `fields` are left untouched.
pub fn overlay(target: &mut Record, fields: Record) {
    for (key, value) in fields {
        target.insert(key, value);
    }
}
