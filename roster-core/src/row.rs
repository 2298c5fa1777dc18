//! Table rows: a committed [`UserRecord`] plus transient edit state.
//!
//! A row is either [`RowMode::Viewing`] or [`RowMode::Editing`]. While
//! editing, changes go to an [`EditBuffer`] and only reach the record on
//! commit. Transitions are crate-private; [`crate::UserListState`] drives
//! them so it can keep at most one row in edit mode.

use std::collections::BTreeMap;

use crate::error::{ListError, ListResult};
use crate::ids::UserId;
use crate::user::{UserField, UserRecord};

/// Whether a row shows its values or edit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Values shown as text.
    #[default]
    Viewing,
    /// Editable fields shown as inputs bound to the buffer.
    Editing,
}

/// Pending field values for a row in edit mode. Holds only the fields the
/// user actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    fields: BTreeMap<UserField, String>,
}

impl EditBuffer {
    /// Buffered value of `field`, if it was changed.
    pub fn get(&self, field: UserField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Number of changed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No field has been changed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn set(&mut self, field: UserField, value: String) {
        self.fields.insert(field, value);
    }

    fn clear(&mut self) {
        self.fields.clear();
    }

    fn take(&mut self) -> BTreeMap<UserField, String> {
        std::mem::take(&mut self.fields)
    }
}

/// A record as the table holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct UiRow {
    record: UserRecord,
    mode: RowMode,
    edits: EditBuffer,
}

impl From<UserRecord> for UiRow {
    fn from(record: UserRecord) -> Self {
        Self::new(record)
    }
}

impl UiRow {
    /// A fresh row in viewing mode.
    pub fn new(record: UserRecord) -> Self {
        Self {
            record,
            mode: RowMode::Viewing,
            edits: EditBuffer::default(),
        }
    }

    /// Id of the underlying record.
    pub fn id(&self) -> &UserId {
        &self.record.id
    }

    /// The committed values.
    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Consume the row, dropping any uncommitted edits.
    pub fn into_record(self) -> UserRecord {
        self.record
    }

    /// Current edit state.
    pub fn mode(&self) -> RowMode {
        self.mode
    }

    /// Shorthand for `mode() == RowMode::Editing`.
    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    /// Uncommitted changes; empty unless editing.
    pub fn edits(&self) -> &EditBuffer {
        &self.edits
    }

    /// Value shown in an edit input: the buffered value if the field was
    /// touched, else the committed one. An empty buffered value is shown
    /// as empty.
    pub fn display_value(&self, field: UserField) -> &str {
        self.edits
            .get(field)
            .unwrap_or_else(|| self.record.field(field))
    }

    pub(crate) fn begin_edit(&mut self) {
        self.mode = RowMode::Editing;
    }

    /// Leave edit mode without committing.
    pub(crate) fn abandon_edit(&mut self) {
        if self.is_editing() {
            log::debug!(
                "Abandoning {} uncommitted edit(s) on user {}",
                self.edits.len(),
                self.record.id
            );
        }
        self.mode = RowMode::Viewing;
        self.edits.clear();
    }

    pub(crate) fn buffer_edit(
        &mut self,
        field: UserField,
        value: String,
    ) -> ListResult<()> {
        if !self.is_editing() {
            return Err(ListError::NotEditing(self.record.id.clone()));
        }
        if !field.is_editable() {
            return Err(ListError::FieldNotEditable(field));
        }
        self.edits.set(field, value);
        Ok(())
    }

    /// Merge buffered edits into the record and return to viewing.
    /// Returns the fields that were written.
    pub(crate) fn commit(&mut self) -> ListResult<Vec<UserField>> {
        if !self.is_editing() {
            return Err(ListError::NotEditing(self.record.id.clone()));
        }
        let mut written = Vec::with_capacity(self.edits.len());
        for (field, value) in self.edits.take() {
            self.record.set_field(field, value)?;
            written.push(field);
        }
        self.mode = RowMode::Viewing;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> UiRow {
        UiRow::new(UserRecord::new("1", "Aaron", "aaron@mailinator.com", "member"))
    }

    #[test]
    fn buffering_requires_edit_mode() {
        let mut row = row();
        assert_eq!(
            row.buffer_edit(UserField::Name, "x".into()),
            Err(ListError::NotEditing(UserId::from("1")))
        );
    }

    #[test]
    fn commit_writes_only_buffered_fields() {
        let mut row = row();
        row.begin_edit();
        row.buffer_edit(UserField::Email, "new@mailinator.com".into())
            .unwrap();

        assert_eq!(row.display_value(UserField::Email), "new@mailinator.com");
        assert_eq!(row.record().email, "aaron@mailinator.com");

        let written = row.commit().unwrap();
        assert_eq!(written, vec![UserField::Email]);
        assert_eq!(row.record().email, "new@mailinator.com");
        assert_eq!(row.record().name, "Aaron");
        assert!(row.edits().is_empty());
        assert_eq!(row.mode(), RowMode::Viewing);
    }

    #[test]
    fn empty_buffered_value_is_displayed_and_committed() {
        let mut row = row();
        row.begin_edit();
        row.buffer_edit(UserField::Role, String::new()).unwrap();
        assert_eq!(row.display_value(UserField::Role), "");
        row.commit().unwrap();
        assert_eq!(row.record().role, "");
    }

    #[test]
    fn abandon_drops_buffer() {
        let mut row = row();
        row.begin_edit();
        row.buffer_edit(UserField::Name, "Erin".into()).unwrap();
        row.abandon_edit();
        assert!(!row.is_editing());
        assert!(row.edits().is_empty());
        assert_eq!(row.record().name, "Aaron");
    }
}
