use crate::{model::FieldValues, types::Timestamp, value::Value};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// CampaignSend
///
/// One email campaign delivery to one contact.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSend {
    pub id: Ulid,
    pub contact_id: Ulid,
    pub campaign: String,
    pub channel: String,
    pub opened: bool,
    pub clicked: bool,
    pub sent_at: Timestamp,
}

impl FieldValues for CampaignSend {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => Value::Ulid(self.id),
            "contactId" => Value::Ulid(self.contact_id),
            "campaign" => Value::Text(self.campaign.clone()),
            "channel" => Value::Text(self.channel.clone()),
            "opened" => Value::Bool(self.opened),
            "clicked" => Value::Bool(self.clicked),
            "sentAt" => Value::Timestamp(self.sent_at),
            _ => return None,
        };

        Some(value)
    }
}
