mod account;
mod campaign_send;
mod contact;
mod deal;

pub use account::Account;
pub use campaign_send::CampaignSend;
pub use contact::Contact;
pub use deal::Deal;

use crate::value::Value;
use serde::Serialize;

///
/// FieldValues
///
/// Runtime field access by wire name. Every allow-listed field of an entity
/// must be reachable here; `None` means the field does not exist on the row.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}

///
/// Record
///
/// Row-shaped object the executor can evaluate and materialize. The JSON
/// projection is what preview responses return to the caller.
///

pub trait Record: FieldValues {
    fn to_json(&self) -> serde_json::Value;
}

impl<T: FieldValues + Serialize> Record for T {
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn text_list(items: &[String]) -> Value {
    Value::List(items.iter().cloned().map(Value::Text).collect())
}

fn opt_text(value: Option<&String>) -> Value {
    value.map_or(Value::Null, |text| Value::Text(text.clone()))
}

fn opt_timestamp(value: Option<crate::types::Timestamp>) -> Value {
    value.map_or(Value::Null, Value::Timestamp)
}
