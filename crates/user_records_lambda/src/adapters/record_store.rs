use crate::runtime::contract::RecordDocument;
use crate::runtime::update_plan::UpdatePlan;

pub trait RecordStore {
    fn put_record(&self, document: &RecordDocument) -> Result<(), String>;
    fn update_record(&self, id: &str, plan: &UpdatePlan) -> Result<(), String>;
    fn delete_record(&self, id: &str) -> Result<(), String>;
}
