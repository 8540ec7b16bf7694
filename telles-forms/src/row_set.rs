//! Anchor-driven row controller for bulk signup and reset forms.
//!
//! Row 0 is the anchor. Whenever one of its shared fields changes, every
//! other row is brought back in line: synchronized fields receive the
//! anchor's value verbatim, prefix fields receive its first four UTF-16 code
//! units (only when that prefix is non-empty), and independent fields are
//! left alone.

use crate::error::FormError;
use crate::row::{utf16_prefix, Row, RowId};
use crate::schema::{FieldName, PageSchema, SyncPolicy};
use crate::snapshot::{Snapshot, SnapshotStore};
use std::collections::BTreeMap;

/// Number of UTF-16 code units copied for prefix-propagated fields.
pub const PREFIX_LEN: usize = 4;

/// Vertical overflow of the row container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    Clipped,
    Scrollable,
}

impl ScrollMode {
    pub fn for_row_count(count: usize) -> Self {
        if count > 1 {
            ScrollMode::Scrollable
        } else {
            ScrollMode::Clipped
        }
    }

    /// Value for the container's `overflow-y` style.
    pub fn overflow_y(&self) -> &'static str {
        match self {
            ScrollMode::Clipped => "hidden",
            ScrollMode::Scrollable => "auto",
        }
    }
}

/// Ordered rows of one form. Never empty; the first row is the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    schema: PageSchema,
    rows: Vec<Row>,
    next_id: u64,
    scroll_mode: ScrollMode,
}

impl RowSet {
    /// A set holding just a blank anchor row.
    pub fn new(schema: PageSchema) -> Self {
        let anchor = Row::blank(RowId(0), &schema);
        Self {
            schema,
            rows: vec![anchor],
            next_id: 1,
            scroll_mode: ScrollMode::Clipped,
        }
    }

    pub fn schema(&self) -> &PageSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn anchor(&self) -> &Row {
        &self.rows[0]
    }

    pub fn is_anchor(&self, id: RowId) -> bool {
        self.anchor().id() == id
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll_mode
    }

    fn next_row_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a row seeded from the anchor and return its handle.
    pub fn add_row(&mut self) -> RowId {
        let id = self.next_row_id();
        let mut row = Row::blank(id, &self.schema);
        let anchor = &self.rows[0];
        for field in self.schema.with_policy(SyncPolicy::Synchronized) {
            row.set(field, anchor.get(field));
        }
        self.rows.push(row);
        self.propagate_anchor();
        self.recompute_scroll_mode();
        log::debug!("added row {} ({} rows)", id.0, self.rows.len());
        id
    }

    /// Remove a non-anchor row.
    pub fn remove_row(&mut self, id: RowId) -> Result<Row, FormError> {
        if self.is_anchor(id) {
            return Err(FormError::AnchorRemoval);
        }
        let pos = self
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or(FormError::UnknownRow(id))?;
        let removed = self.rows.remove(pos);
        self.recompute_scroll_mode();
        log::debug!("removed row {} ({} rows)", id.0, self.rows.len());
        Ok(removed)
    }

    /// Push the anchor's shared values into every other row.
    ///
    /// Returns the number of field values that changed.
    pub fn propagate_anchor(&mut self) -> usize {
        let Some((anchor, others)) = self.rows.split_first_mut() else {
            return 0;
        };
        let mut changed = 0;
        for spec in self.schema.fields() {
            let source = anchor.get(spec.name);
            let value = match spec.policy {
                SyncPolicy::Synchronized => source.to_string(),
                SyncPolicy::PrefixPropagated => {
                    let prefix = utf16_prefix(source, PREFIX_LEN);
                    // an empty anchor never clears rows that already have a value
                    if prefix.is_empty() {
                        continue;
                    }
                    prefix
                }
                SyncPolicy::Independent => continue,
            };
            for row in others.iter_mut() {
                if row.set(spec.name, &value) {
                    changed += 1;
                }
            }
        }
        changed
    }

    pub fn recompute_scroll_mode(&mut self) {
        self.scroll_mode = ScrollMode::for_row_count(self.rows.len());
    }

    /// Edit one field of one row.
    ///
    /// Anchor edits to shared fields propagate immediately. Synchronized
    /// fields of other rows are read-only.
    pub fn set_value(&mut self, id: RowId, field: FieldName, value: &str) -> Result<(), FormError> {
        let policy = self
            .schema
            .policy(field)
            .ok_or_else(|| FormError::UnknownField(field.form_name()))?;
        let is_anchor = self.is_anchor(id);
        if !is_anchor && policy == SyncPolicy::Synchronized {
            return Err(FormError::FieldLocked(field));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(FormError::UnknownRow(id))?;
        row.set(field, value);
        if is_anchor && policy != SyncPolicy::Independent {
            self.propagate_anchor();
        }
        Ok(())
    }

    /// Fill the anchor's academic year if it is still empty.
    pub fn autofill_academic_year(&mut self, year: i32) -> bool {
        if !self.schema.contains(FieldName::AcademicYear)
            || !self.anchor().get(FieldName::AcademicYear).is_empty()
        {
            return false;
        }
        let anchor = self.anchor().id();
        match self.set_value(anchor, FieldName::AcademicYear, &year.to_string()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("academic year autofill skipped: {e}");
                false
            }
        }
    }

    /// Submitted `(name[], value)` pairs, row by row in column order.
    pub fn form_entries(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .flat_map(|row| {
                self.schema
                    .fields()
                    .iter()
                    .map(move |spec| (spec.name.form_name(), row.get(spec.name).to_string()))
            })
            .collect()
    }

    /// First required field left empty, scanning rows in order.
    pub fn validate_required(&self) -> Result<(), FormError> {
        for (index, row) in self.rows.iter().enumerate() {
            for spec in self.schema.fields().iter().filter(|s| s.required) {
                if row.get(spec.name).trim().is_empty() {
                    return Err(FormError::MissingRequired {
                        row: index,
                        field: spec.name,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(
            self.rows
                .iter()
                .map(|row| {
                    row.values()
                        .map(|(field, value)| (field.form_name(), value.to_string()))
                        .collect::<BTreeMap<_, _>>()
                })
                .collect(),
        )
    }

    /// Replace every row with rows materialized from `snapshot`.
    ///
    /// Fields the schema does not know are dropped. An empty snapshot leaves
    /// a single blank anchor.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.rows.clear();
        for entry in &snapshot.0 {
            let id = self.next_row_id();
            let mut row = Row::blank(id, &self.schema);
            for (name, value) in entry {
                match FieldName::parse(name) {
                    Some(field) if row.has(field) => {
                        row.set(field, value);
                    }
                    _ => log::debug!("snapshot field {name} not in template, dropped"),
                }
            }
            self.rows.push(row);
        }
        if self.rows.is_empty() {
            let id = self.next_row_id();
            self.rows.push(Row::blank(id, &self.schema));
        }
        self.recompute_scroll_mode();
    }

    pub fn save_snapshot(&self, store: &mut dyn SnapshotStore, key: &str) -> anyhow::Result<()> {
        let json = self.snapshot().to_json()?;
        store.save(key, &json)?;
        log::debug!("saved {} rows under {key}", self.rows.len());
        Ok(())
    }

    /// Restore from `store`. Returns false, changing nothing, when no
    /// snapshot is stored.
    pub fn restore_snapshot(&mut self, store: &dyn SnapshotStore, key: &str) -> anyhow::Result<bool> {
        let Some(raw) = store.load(key)? else {
            return Ok(false);
        };
        let snapshot = Snapshot::from_json(&raw)?;
        self.restore(&snapshot);
        log::info!("restored {} rows from {key}", self.rows.len());
        Ok(true)
    }

    pub fn clear_snapshot(store: &mut dyn SnapshotStore, key: &str) -> anyhow::Result<()> {
        store.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{MemoryStore, DEFAULT_SNAPSHOT_KEY};

    fn signup() -> RowSet {
        RowSet::new(PageSchema::student_signup())
    }

    fn anchor_id(set: &RowSet) -> RowId {
        set.anchor().id()
    }

    #[test]
    fn test_new_set_has_only_the_anchor() {
        let set = signup();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert_eq!(set.scroll_mode(), ScrollMode::Clipped);
    }

    #[test]
    fn test_add_row_copies_student_id_prefix() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::StudentId, "2024001").unwrap();
        let id = set.add_row();
        assert_eq!(set.len(), 2);
        assert_eq!(set.row(id).unwrap().get(FieldName::StudentId), "2024");
        assert_eq!(set.scroll_mode(), ScrollMode::Scrollable);
    }

    #[test]
    fn test_add_row_copies_synchronized_fields_verbatim() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::AcademicYear, "2025").unwrap();
        set.set_value(anchor, FieldName::Department, "情報システム科").unwrap();
        set.set_value(anchor, FieldName::CourseYears, "2").unwrap();
        set.set_value(anchor, FieldName::Fullname, "山田太郎").unwrap();
        let id = set.add_row();
        let row = set.row(id).unwrap();
        assert_eq!(row.get(FieldName::AcademicYear), "2025");
        assert_eq!(row.get(FieldName::Department), "情報システム科");
        assert_eq!(row.get(FieldName::CourseYears), "2");
        assert_eq!(row.get(FieldName::Fullname), "");
        assert_eq!(row.get(FieldName::Password), "");
    }

    #[test]
    fn test_propagate_department_to_second_row() {
        let mut set = signup();
        let second = set.add_row();
        assert_eq!(set.row(second).unwrap().get(FieldName::Department), "");
        // edit the anchor directly so only the explicit call propagates
        set.rows[0].set(FieldName::Department, "IT");
        assert_eq!(set.propagate_anchor(), 1);
        assert_eq!(set.row(second).unwrap().get(FieldName::Department), "IT");
    }

    #[test]
    fn test_empty_anchor_prefix_does_not_clear_rows() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::Number, "1234567").unwrap();
        let second = set.add_row();
        assert_eq!(set.row(second).unwrap().get(FieldName::Number), "1234");

        set.set_value(anchor, FieldName::Number, "").unwrap();
        assert_eq!(set.row(second).unwrap().get(FieldName::Number), "1234");
    }

    #[test]
    fn test_empty_synchronized_anchor_value_is_copied() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::Classroom, "A").unwrap();
        let second = set.add_row();
        set.set_value(anchor, FieldName::Classroom, "").unwrap();
        assert_eq!(set.row(second).unwrap().get(FieldName::Classroom), "");
    }

    #[test]
    fn test_non_anchor_prefix_fields_stay_editable() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::StudentId, "2024001").unwrap();
        let second = set.add_row();
        set.set_value(second, FieldName::StudentId, "2024017").unwrap();
        assert_eq!(set.row(second).unwrap().get(FieldName::StudentId), "2024017");

        // a later anchor edit wins again
        set.set_value(anchor, FieldName::StudentId, "2025001").unwrap();
        assert_eq!(set.row(second).unwrap().get(FieldName::StudentId), "2025");
    }

    #[test]
    fn test_independent_fields_never_propagate() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        let second = set.add_row();
        set.set_value(second, FieldName::Fullname, "佐藤").unwrap();
        set.set_value(anchor, FieldName::Fullname, "山田").unwrap();
        assert_eq!(set.row(second).unwrap().get(FieldName::Fullname), "佐藤");
    }

    #[test]
    fn test_synchronized_fields_locked_on_other_rows() {
        let mut set = signup();
        let second = set.add_row();
        assert_eq!(
            set.set_value(second, FieldName::Department, "IT"),
            Err(FormError::FieldLocked(FieldName::Department))
        );
    }

    #[test]
    fn test_set_value_unknown_field_and_row() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        assert_eq!(
            set.set_value(anchor, FieldName::NewPassword, "x"),
            Err(FormError::UnknownField("new_password[]".to_string()))
        );
        assert_eq!(
            set.set_value(RowId(99), FieldName::Fullname, "x"),
            Err(FormError::UnknownRow(RowId(99)))
        );
    }

    #[test]
    fn test_propagate_is_idempotent_after_add() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::StudentId, "2024001").unwrap();
        set.set_value(anchor, FieldName::Password, "pass9999").unwrap();
        set.set_value(anchor, FieldName::Department, "IT").unwrap();
        set.add_row();
        set.add_row();
        let before = set.clone();
        assert_eq!(set.propagate_anchor(), 0);
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_second_row_clips_scroll() {
        let mut set = signup();
        let second = set.add_row();
        let removed = set.remove_row(second).unwrap();
        assert_eq!(removed.id(), second);
        assert_eq!(set.len(), 1);
        assert_eq!(set.scroll_mode(), ScrollMode::Clipped);
        assert_eq!(set.scroll_mode().overflow_y(), "hidden");
    }

    #[test]
    fn test_remove_anchor_is_rejected() {
        let mut set = signup();
        set.add_row();
        let anchor = anchor_id(&set);
        assert_eq!(set.remove_row(anchor), Err(FormError::AnchorRemoval));
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.remove_row(RowId(42)).unwrap_err(),
            FormError::UnknownRow(RowId(42))
        );
    }

    #[test]
    fn test_row_ids_are_not_reused() {
        let mut set = signup();
        let a = set.add_row();
        set.remove_row(a).unwrap();
        let b = set.add_row();
        assert_ne!(a, b);
    }

    #[test]
    fn test_autofill_academic_year_only_when_empty() {
        let mut set = signup();
        let second = set.add_row();
        assert!(set.autofill_academic_year(2025));
        assert_eq!(set.anchor().get(FieldName::AcademicYear), "2025");
        assert_eq!(set.row(second).unwrap().get(FieldName::AcademicYear), "2025");
        assert!(!set.autofill_academic_year(2030));
        assert_eq!(set.anchor().get(FieldName::AcademicYear), "2025");

        let mut reset = RowSet::new(PageSchema::password_reset());
        assert!(!reset.autofill_academic_year(2025));
    }

    #[test]
    fn test_form_entries_are_row_major() {
        let mut set = RowSet::new(PageSchema::password_reset());
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::Id, "s1").unwrap();
        let second = set.add_row();
        set.set_value(second, FieldName::Id, "s2").unwrap();
        let ids: Vec<_> = set
            .form_entries()
            .into_iter()
            .filter(|(name, _)| name == "id[]")
            .map(|(_, v)| v)
            .collect();
        assert_eq!(ids, vec!["s1", "s2"]);
        assert_eq!(set.form_entries().len(), 10);
        // reset rows do not inherit anything
        assert_eq!(set.row(second).unwrap().get(FieldName::Classroom), "");
    }

    #[test]
    fn test_validate_required_reports_first_gap() {
        let mut set = RowSet::new(PageSchema::password_reset());
        let anchor = anchor_id(&set);
        for field in [
            FieldName::Id,
            FieldName::Classroom,
            FieldName::Number,
            FieldName::Fullname,
            FieldName::NewPassword,
        ] {
            set.set_value(anchor, field, "x").unwrap();
        }
        assert_eq!(set.validate_required(), Ok(()));
        set.add_row();
        assert_eq!(
            set.validate_required(),
            Err(FormError::MissingRequired {
                row: 1,
                field: FieldName::Id
            })
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut set = signup();
        let anchor = anchor_id(&set);
        set.set_value(anchor, FieldName::AcademicYear, "2025").unwrap();
        set.set_value(anchor, FieldName::StudentId, "2024001").unwrap();
        set.set_value(anchor, FieldName::Fullname, "山田").unwrap();
        let second = set.add_row();
        set.set_value(second, FieldName::Fullname, "佐藤").unwrap();
        set.set_value(second, FieldName::Number, "12345").unwrap();

        let mut store = MemoryStore::new();
        set.save_snapshot(&mut store, DEFAULT_SNAPSHOT_KEY).unwrap();

        let mut restored = signup();
        assert!(restored
            .restore_snapshot(&store, DEFAULT_SNAPSHOT_KEY)
            .unwrap());
        assert_eq!(restored.len(), set.len());
        for (a, b) in restored.rows().iter().zip(set.rows()) {
            assert_eq!(a.values().collect::<Vec<_>>(), b.values().collect::<Vec<_>>());
        }
        assert_eq!(restored.scroll_mode(), ScrollMode::Scrollable);
    }

    #[test]
    fn test_restore_drops_fields_missing_from_template() {
        let mut signup_set = signup();
        let anchor = anchor_id(&signup_set);
        signup_set
            .set_value(anchor, FieldName::StudentId, "2024001")
            .unwrap();
        signup_set
            .set_value(anchor, FieldName::Classroom, "B")
            .unwrap();
        let snapshot = signup_set.snapshot();

        let mut reset = RowSet::new(PageSchema::password_reset());
        reset.restore(&snapshot);
        assert_eq!(reset.len(), 1);
        assert!(!reset.anchor().has(FieldName::StudentId));
        assert_eq!(reset.anchor().get(FieldName::Classroom), "B");
    }

    #[test]
    fn test_restore_without_snapshot_is_noop() {
        let mut set = signup();
        set.add_row();
        let before = set.clone();
        let store = MemoryStore::new();
        assert!(!set.restore_snapshot(&store, DEFAULT_SNAPSHOT_KEY).unwrap());
        assert_eq!(set, before);
    }

    #[test]
    fn test_restore_malformed_snapshot_keeps_rows() {
        let mut set = signup();
        set.add_row();
        let mut store = MemoryStore::new();
        store.save(DEFAULT_SNAPSHOT_KEY, "[{").unwrap();
        assert!(set.restore_snapshot(&store, DEFAULT_SNAPSHOT_KEY).is_err());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_restore_empty_snapshot_keeps_one_row() {
        let mut set = signup();
        set.add_row();
        set.restore(&Snapshot::default());
        assert_eq!(set.len(), 1);
        assert_eq!(set.scroll_mode(), ScrollMode::Clipped);
    }

    #[test]
    fn test_clear_snapshot() {
        let set = signup();
        let mut store = MemoryStore::new();
        set.save_snapshot(&mut store, "k").unwrap();
        RowSet::clear_snapshot(&mut store, "k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
