use crate::{
    model::{FieldValues, opt_text},
    types::Timestamp,
    value::Value,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Account
///
/// A company the CRM tracks; contacts and deals hang off accounts.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Ulid,
    pub name: String,
    pub domain: Option<String>,
    pub industry: Option<String>,
    pub status: String,
    pub employee_count: i64,
    pub annual_revenue: f64,
    pub created_at: Timestamp,
}

impl FieldValues for Account {
    fn get_value(&self, field: &str) -> Option<Value> {
        let value = match field {
            "id" => Value::Ulid(self.id),
            "name" => Value::Text(self.name.clone()),
            "domain" => opt_text(self.domain.as_ref()),
            "industry" => opt_text(self.industry.as_ref()),
            "status" => Value::Text(self.status.clone()),
            "employeeCount" => Value::Int(self.employee_count),
            "annualRevenue" => Value::Float(self.annual_revenue),
            "createdAt" => Value::Timestamp(self.created_at),
            _ => return None,
        };

        Some(value)
    }
}
