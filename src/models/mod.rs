mod account;

pub use account::Account;

use serde_json::Value;

use crate::errors::AppError;

/// Capability set shared by every persistable record type: an optional
/// store-assigned identifier plus a JSON (de)serialization contract.
/// The persistence gateway is written against this trait, not against
/// any concrete entity.
pub trait Entity: Sized {
    /// `None` until the store assigns an identifier on create.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Build a validated entity from an untyped JSON payload. The returned
    /// entity never carries an identifier.
    fn deserialize(data: &Value) -> Result<Self, AppError>;

    /// Render the entity as a flat JSON object with every field present.
    fn serialize(&self) -> Value;
}
