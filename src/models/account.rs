use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::models::Entity;

/// Represents one customer account record.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Account {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

fn required_string(data: &Value, field: &str) -> Result<String, AppError> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("Invalid Account: missing {}", field)))
}

impl Entity for Account {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn deserialize(data: &Value) -> Result<Self, AppError> {
        if !data.is_object() {
            return Err(AppError::Validation(
                "Invalid Account: body of request contained bad or no data".to_string(),
            ));
        }

        let name = required_string(data, "name")?;
        let email = required_string(data, "email")?;
        let address = required_string(data, "address")?;
        let phone_number = data
            .get("phone_number")
            .and_then(Value::as_str)
            .map(str::to_string);

        let date_joined = match data.get("date_joined") {
            None | Some(Value::Null) => Local::now().date_naive(),
            Some(Value::String(raw)) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("Invalid Account: invalid date_joined [{}]", raw))
            })?,
            Some(other) => {
                return Err(AppError::Validation(format!(
                    "Invalid Account: invalid date_joined [{}]",
                    other
                )))
            }
        };

        Ok(Account {
            id: None,
            name,
            email,
            address,
            phone_number,
            date_joined,
        })
    }

    fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "address": self.address,
            "phone_number": self.phone_number,
            "date_joined": self.date_joined.format("%Y-%m-%d").to_string(),
        })
    }
}
