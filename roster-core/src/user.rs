//! User records as delivered by the member feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ListError, ListResult};
use crate::ids::UserId;

/// One member as delivered by the feed.
///
/// Fields the table does not know about are kept in `extra` so a record
/// serializes back to the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity key, unique within a load.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact address.
    #[serde(default)]
    pub email: String,
    /// Free text; the feed uses `admin` and `member`.
    #[serde(default)]
    pub role: String,
    /// Any other keys of the feed object.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UserRecord {
    /// A record with no extra fields.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Committed value of a named field.
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::Id => self.id.as_str(),
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Role => &self.role,
        }
    }

    /// Overwrite an editable field. The id is the identity key and is
    /// never rewritten.
    pub fn set_field(&mut self, field: UserField, value: String) -> ListResult<()> {
        match field {
            UserField::Id => return Err(ListError::FieldNotEditable(field)),
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Role => self.role = value,
        }
        Ok(())
    }
}

/// The named columns of the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    /// The record id. Never editable.
    Id,
    /// Display name.
    Name,
    /// Contact address.
    Email,
    /// Access role, shown as free text.
    Role,
}

impl UserField {
    /// Fields consulted by the search filter.
    pub const SEARCHABLE: [UserField; 4] =
        [Self::Id, Self::Name, Self::Email, Self::Role];

    /// Fields that can be changed inline.
    pub const EDITABLE: [UserField; 3] = [Self::Name, Self::Email, Self::Role];

    /// Whether the field is in [`UserField::EDITABLE`].
    pub fn is_editable(&self) -> bool {
        Self::EDITABLE.contains(self)
    }

    /// Lowercase key, as used in serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Role => "role",
        }
    }

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            UserField::Id => "ID",
            UserField::Name => "Name",
            UserField::Email => "Email",
            UserField::Role => "Role",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_record_and_keeps_unknown_fields() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":"4","name":"Dana","email":"dana@example.com","role":"member","team":"ops"}"#,
        )
        .unwrap();

        assert_eq!(record.id, UserId::from("4"));
        assert_eq!(record.field(UserField::Email), "dana@example.com");
        assert_eq!(record.extra.get("team"), Some(&serde_json::json!("ops")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["team"], "ops");
        assert_eq!(back["id"], "4");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let record: UserRecord = serde_json::from_str(r#"{"id":9}"#).unwrap();
        assert_eq!(record.id.as_str(), "9");
        assert!(record.name.is_empty());
        assert!(record.role.is_empty());
    }

    #[test]
    fn id_is_not_settable() {
        let mut record = UserRecord::new("1", "A", "a@x.io", "admin");
        assert_eq!(
            record.set_field(UserField::Id, "2".into()),
            Err(ListError::FieldNotEditable(UserField::Id))
        );
        record.set_field(UserField::Role, "member".into()).unwrap();
        assert_eq!(record.role, "member");
    }
}
