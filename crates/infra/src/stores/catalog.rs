use thiserror::Error;

use motordesk_catalog::{Motor, initial_motors, search};
use motordesk_core::{DomainError, Entity, MotorCode, dedup_by_id, find_by_id, upsert};
use motordesk_import::{ImportError, parse_csv};

use crate::kv::{KeyValueStore, StoreError, keys, load_json, save_json};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("a motor with code '{0}' already exists")]
    DuplicateCode(MotorCode),

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of a successful CSV import.
///
/// `imported` counts accepted rows; rows sharing a code collapse into one
/// catalog entry (last row wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped_rows: usize,
}

/// Why an import left the catalog unchanged.
#[derive(Debug, Error)]
pub enum ImportFailure {
    #[error(transparent)]
    Parse(#[from] ImportError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The motor catalog, persisted under `app_motors`.
#[derive(Debug)]
pub struct CatalogStore<S> {
    kv: S,
    motors: Vec<Motor>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Load the persisted catalog; a store that never held one is seeded with
    /// the built-in motors. Stored rows sharing a code collapse (last wins);
    /// a blank stored code fails the load.
    pub fn open(kv: S) -> Result<Self, StoreError> {
        let motors = match load_json::<Vec<Motor>, _>(&kv, keys::APP_MOTORS)? {
            Some(stored) => {
                let stored_len = stored.len();
                let motors = dedup_by_id(stored);
                if motors.len() != stored_len {
                    tracing::warn!(
                        stored = stored_len,
                        kept = motors.len(),
                        "duplicate motor codes collapsed on load"
                    );
                }
                tracing::debug!(count = motors.len(), "catalog loaded");
                motors
            }
            None => {
                let seed = initial_motors();
                save_json(&kv, keys::APP_MOTORS, &seed)?;
                tracing::info!(count = seed.len(), "catalog seeded");
                seed
            }
        };
        Ok(Self { kv, motors })
    }

    pub fn list(&self) -> &[Motor] {
        &self.motors
    }

    pub fn len(&self) -> usize {
        self.motors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motors.is_empty()
    }

    pub fn get(&self, code: &MotorCode) -> Option<&Motor> {
        find_by_id(&self.motors, code)
    }

    pub fn contains(&self, code: &MotorCode) -> bool {
        self.get(code).is_some()
    }

    pub fn search(&self, term: &str) -> Vec<&Motor> {
        search(&self.motors, term)
    }

    /// Append a new motor. Fails on a code already present.
    pub fn add(&mut self, motor: Motor) -> Result<(), CatalogError> {
        motor.validate()?;
        if self.contains(&motor.code) {
            tracing::warn!(code = %motor.code, "duplicate motor code rejected");
            return Err(CatalogError::DuplicateCode(motor.code));
        }
        let code = motor.code.clone();
        let mut next = self.motors.clone();
        next.push(motor);
        self.commit(next)?;
        tracing::info!(code = %code, "motor added");
        Ok(())
    }

    /// Replace the motor with the same code, or append it when absent.
    pub fn update(&mut self, motor: Motor) -> Result<(), CatalogError> {
        motor.validate()?;
        let code = motor.code.clone();
        let mut next = self.motors.clone();
        let inserted = upsert(&mut next, motor);
        self.commit(next)?;
        tracing::info!(code = %code, inserted, "motor updated");
        Ok(())
    }

    /// Remove the motor with `code`. Absent codes are a no-op.
    pub fn delete(&mut self, code: &MotorCode) -> Result<(), CatalogError> {
        let next: Vec<Motor> = self
            .motors
            .iter()
            .filter(|m| m.id() != code)
            .cloned()
            .collect();
        let removed = next.len() != self.motors.len();
        self.commit(next)?;
        tracing::info!(code = %code, removed, "motor deleted");
        Ok(())
    }

    /// Discard the catalog and persist `motors` as the complete new one.
    ///
    /// Later duplicates of a code replace earlier ones in place, so the unique
    /// code invariant holds whatever the caller passes.
    pub fn replace_all(&mut self, motors: Vec<Motor>) -> Result<(), StoreError> {
        let next = dedup_by_id(motors);
        let count = next.len();
        self.commit(next)?;
        tracing::info!(count, "catalog replaced");
        Ok(())
    }

    /// Parse `text` as CSV and, if it yields any motor, replace the catalog.
    ///
    /// On failure the catalog is untouched.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary, ImportFailure> {
        let parsed = match parse_csv(text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "csv import rejected");
                return Err(e.into());
            }
        };
        let summary = ImportSummary {
            imported: parsed.count(),
            skipped_rows: parsed.skipped_rows,
        };
        self.replace_all(parsed.motors)?;
        tracing::info!(
            count = summary.imported,
            skipped = summary.skipped_rows,
            "csv import applied"
        );
        Ok(summary)
    }

    fn commit(&mut self, next: Vec<Motor>) -> Result<(), StoreError> {
        save_json(&self.kv, keys::APP_MOTORS, &next)?;
        self.motors = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::kv::InMemoryKeyValueStore;
    use motordesk_import::template;

    fn code(s: &str) -> MotorCode {
        MotorCode::new(s).unwrap()
    }

    fn motor(c: &str, price: f64) -> Motor {
        Motor::new(code(c), format!("Modelo {c}"), "", 1, price)
    }

    fn empty_store() -> (Arc<InMemoryKeyValueStore>, CatalogStore<Arc<InMemoryKeyValueStore>>) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(keys::APP_MOTORS, "[]").unwrap();
        let store = CatalogStore::open(Arc::clone(&kv)).unwrap();
        (kv, store)
    }

    fn persisted(kv: &InMemoryKeyValueStore) -> Vec<Motor> {
        load_json(kv, keys::APP_MOTORS).unwrap().unwrap()
    }

    #[test]
    fn fresh_store_is_seeded_and_persisted() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let store = CatalogStore::open(Arc::clone(&kv)).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(persisted(&kv), store.list());
    }

    #[test]
    fn persisted_empty_catalog_is_not_reseeded() {
        let (_kv, store) = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn stored_codes_are_trimmed_and_collapsed_on_load() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(
            keys::APP_MOTORS,
            r#"[
                {"codigo":"A","modelo":"Primeiro","descricao":"","estoque":1,"precoBase":1.0},
                {"codigo":"A","modelo":"Segundo","descricao":"","estoque":2,"precoBase":2.0},
                {"codigo":" B ","modelo":"Com espaco","descricao":"","estoque":3,"precoBase":3.0}
            ]"#,
        )
        .unwrap();

        let mut store = CatalogStore::open(Arc::clone(&kv)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&code("A")).unwrap().model, "Segundo");
        assert!(store.contains(&code("B")));

        store.delete(&code("B")).unwrap();
        assert_eq!(persisted(&kv).len(), 1);
    }

    #[test]
    fn blank_stored_code_fails_the_load() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set(
            keys::APP_MOTORS,
            r#"[{"codigo":"  ","modelo":"X","descricao":"","estoque":0,"precoBase":0}]"#,
        )
        .unwrap();
        assert!(matches!(
            CatalogStore::open(kv),
            Err(StoreError::Serialization { .. })
        ));
    }

    #[test]
    fn add_then_duplicate_add() {
        let (kv, mut store) = empty_store();
        store.add(motor("M1", 10.0)).unwrap();
        assert_eq!(store.list().iter().filter(|m| m.code == "M1").count(), 1);

        let err = store.add(motor("M1", 99.0)).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCode(ref c) if c == "M1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&code("M1")).unwrap().base_price, 10.0);
        assert_eq!(persisted(&kv).len(), 1);
    }

    #[test]
    fn add_validates_fields() {
        let (_kv, mut store) = empty_store();
        let mut bad = motor("M1", 1.0);
        bad.model = "  ".to_string();
        assert!(matches!(store.add(bad), Err(CatalogError::Invalid(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn update_replaces_in_place_or_appends() {
        let (kv, mut store) = empty_store();
        store.add(motor("A", 1.0)).unwrap();
        store.add(motor("B", 2.0)).unwrap();

        store.update(motor("A", 5.0)).unwrap();
        assert_eq!(store.list()[0].base_price, 5.0);
        assert_eq!(store.len(), 2);

        store.update(motor("C", 3.0)).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(persisted(&kv), store.list());
    }

    #[test]
    fn delete_is_idempotent() {
        let (kv, mut store) = empty_store();
        store.add(motor("A", 1.0)).unwrap();
        store.delete(&code("A")).unwrap();
        assert!(!store.contains(&code("A")));
        store.delete(&code("A")).unwrap();
        assert!(persisted(&kv).is_empty());
    }

    #[test]
    fn replace_all_keeps_codes_unique() {
        let (_kv, mut store) = empty_store();
        store
            .replace_all(vec![motor("A", 1.0), motor("B", 2.0), motor("A", 3.0)])
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&code("A")).unwrap().base_price, 3.0);
    }

    #[test]
    fn template_import_replaces_catalog() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CatalogStore::open(Arc::clone(&kv)).unwrap();
        let summary = store.import_csv(&template()).unwrap();
        assert_eq!(summary, ImportSummary { imported: 1, skipped_rows: 0 });
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].code, "MTR-EX01");
        assert_eq!(persisted(&kv).len(), 1);
    }

    #[test]
    fn failed_import_leaves_catalog_untouched() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CatalogStore::open(Arc::clone(&kv)).unwrap();
        let before = store.list().to_vec();

        let header_only = store.import_csv("codigo,modelo,descricao,estoque,precoBase\n");
        assert!(matches!(
            header_only,
            Err(ImportFailure::Parse(ImportError::EmptyOrHeaderOnly))
        ));

        let short_rows = store.import_csv("a,b,c,d,e\n1,2\n3,4,5\n");
        assert!(matches!(
            short_rows,
            Err(ImportFailure::Parse(ImportError::NoValidRows { skipped: 2 }))
        ));

        assert_eq!(store.list(), before.as_slice());
        assert_eq!(persisted(&kv), before);
    }

    #[test]
    fn search_uses_catalog_rules() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let store = CatalogStore::open(kv).unwrap();
        assert!(store.search("").is_empty());
        assert_eq!(store.search("elétrico").len(), 1);
    }
}
