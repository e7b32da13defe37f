//! Records with an identity, and keyed collections of them.

/// A record identified by a key that survives edits to its other fields.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Find the record keyed by `id`.
pub fn find_by_id<'a, E: Entity>(records: &'a [E], id: &E::Id) -> Option<&'a E> {
    records.iter().find(|r| r.id() == id)
}

/// Replace the record with the same id in place, or append it.
///
/// Returns `true` when the record was appended.
pub fn upsert<E: Entity>(records: &mut Vec<E>, record: E) -> bool {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            false
        }
        None => {
            records.push(record);
            true
        }
    }
}

/// Collapse records sharing an id. The last one wins and takes the position
/// of the first.
pub fn dedup_by_id<E: Entity>(records: impl IntoIterator<Item = E>) -> Vec<E> {
    let mut unique = Vec::new();
    for record in records {
        upsert(&mut unique, record);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(u32, &'static str);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.0
        }
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let mut rows = vec![Row(1, "a"), Row(2, "b")];
        assert!(!upsert(&mut rows, Row(1, "c")));
        assert!(upsert(&mut rows, Row(3, "d")));
        assert_eq!(rows, vec![Row(1, "c"), Row(2, "b"), Row(3, "d")]);
    }

    #[test]
    fn dedup_keeps_first_position_and_last_value() {
        let rows = dedup_by_id(vec![Row(1, "a"), Row(2, "b"), Row(1, "c")]);
        assert_eq!(rows, vec![Row(1, "c"), Row(2, "b")]);
        assert_eq!(find_by_id(&rows, &2), Some(&Row(2, "b")));
        assert_eq!(find_by_id(&rows, &9), None);
    }
}
