use std::collections::HashMap;
use std::sync::Mutex;

use crate::adapters::record_store::RecordStore;
use crate::runtime::contract::{document_id, RecordDocument};
use crate::runtime::update_plan::UpdatePlan;

/// In-memory store fake that mirrors the key-value semantics of the real
/// table: unconditional put-by-id, field-merge update (creating a partial
/// record on a missing id), idempotent delete.
pub(crate) struct FakeRecordStore {
    records: Mutex<HashMap<String, RecordDocument>>,
    failure: Option<String>,
}

impl FakeRecordStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            failure: None,
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            failure: Some(message.to_string()),
        }
    }

    pub(crate) fn read(&self, id: &str) -> Option<RecordDocument> {
        self.records
            .lock()
            .expect("poisoned mutex")
            .get(id)
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("poisoned mutex").len()
    }

    fn check_failure(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl RecordStore for FakeRecordStore {
    fn put_record(&self, document: &RecordDocument) -> Result<(), String> {
        self.check_failure()?;
        let id = document_id(document)
            .expect("test documents must carry a string id")
            .to_string();
        self.records
            .lock()
            .expect("poisoned mutex")
            .insert(id, document.clone());
        Ok(())
    }

    fn update_record(&self, id: &str, plan: &UpdatePlan) -> Result<(), String> {
        self.check_failure()?;
        let mut records = self.records.lock().expect("poisoned mutex");
        let record = records.entry(id.to_string()).or_default();
        for (placeholder, value) in &plan.values {
            let field = placeholder
                .strip_prefix(':')
                .expect("placeholders are colon-prefixed");
            record.insert(field.to_string(), value.clone());
        }
        Ok(())
    }

    fn delete_record(&self, id: &str) -> Result<(), String> {
        self.check_failure()?;
        self.records.lock().expect("poisoned mutex").remove(id);
        Ok(())
    }
}
