use crate::{
    model::{FieldValues, opt_text, opt_timestamp, text_list},
    types::Timestamp,
    value::Value,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Contact
///
/// A person in the CRM: lead, subscriber, or customer contact.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Ulid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub status: String,
    pub lifecycle_stage: String,
    pub engagement_score: i64,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub last_activity_at: Option<Timestamp>,
}

impl FieldValues for Contact {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => Value::Ulid(self.id),
            "firstName" => Value::Text(self.first_name.clone()),
            "lastName" => Value::Text(self.last_name.clone()),
            "email" => opt_text(self.email.as_ref()),
            "status" => Value::Text(self.status.clone()),
            "lifecycleStage" => Value::Text(self.lifecycle_stage.clone()),
            "engagementScore" => Value::Int(self.engagement_score),
            "tags" => text_list(&self.tags),
            "createdAt" => Value::Timestamp(self.created_at),
            "lastActivityAt" => opt_timestamp(self.last_activity_at),
            _ => return None,
        };

        Some(value)
    }
}
