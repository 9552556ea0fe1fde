use crate::{
    model::{FieldValues, opt_timestamp},
    types::Timestamp,
    value::Value,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Deal
///
/// A pipeline opportunity attached to an account.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Ulid,
    pub account_id: Ulid,
    pub name: String,
    pub stage: String,
    pub amount: f64,
    pub probability: f64,
    pub closed: bool,
    pub created_at: Timestamp,
    pub expected_close_at: Option<Timestamp>,
}

impl FieldValues for Deal {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => Value::Ulid(self.id),
            "accountId" => Value::Ulid(self.account_id),
            "name" => Value::Text(self.name.clone()),
            "stage" => Value::Text(self.stage.clone()),
            "amount" => Value::Float(self.amount),
            "probability" => Value::Float(self.probability),
            "closed" => Value::Bool(self.closed),
            "createdAt" => Value::Timestamp(self.created_at),
            "expectedCloseAt" => opt_timestamp(self.expected_close_at),
            _ => return None,
        };

        Some(value)
    }
}
