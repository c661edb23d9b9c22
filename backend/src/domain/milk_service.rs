//! Milk production service.

use crate::auth::AuthContext;
use crate::domain::commands::{
    AddMilkRecordCommand, AddMilkRecordResult, DeleteMilkRecordCommand, DeleteRecordResult,
};
use crate::domain::{check_policy, require_text, validate_date};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{MilkRecord, NewMilkRecord};
use std::sync::Arc;

/// Record and remove milking entries.
#[derive(Clone)]
pub struct MilkService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> MilkService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of milk records, newest first.
    pub fn subscribe(&self) -> Subscription<MilkRecord> {
        self.store.subscribe()
    }

    pub async fn add_record(
        &self,
        ctx: &AuthContext,
        command: AddMilkRecordCommand,
    ) -> Result<AddMilkRecordResult, DomainError> {
        let user = ctx.require_user("add records")?;
        check_policy(
            ctx,
            Action::ManageMilkRecords,
            false,
            "Only admins and workers can add milk records",
        )?;
        validate_new_record(&command.record)?;

        info!(
            "Recording {} L of milk for animal {}",
            command.record.quantity, command.record.animal_id
        );
        let record = self
            .store
            .create::<MilkRecord>(&user.id, command.record)
            .await?;

        Ok(AddMilkRecordResult {
            record,
            success_message: "Milk production record added successfully".to_string(),
        })
    }

    pub async fn delete_record(
        &self,
        ctx: &AuthContext,
        command: DeleteMilkRecordCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete records")?;
        check_policy(
            ctx,
            Action::ManageMilkRecords,
            false,
            "Only admins and workers can delete milk records",
        )?;

        if !command.confirmed {
            info!("Deletion of milk record {} cancelled", command.record_id);
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store.delete::<MilkRecord>(&command.record_id).await?;
        info!("Deleted milk record {}", command.record_id);
        Ok(DeleteRecordResult::deleted("Record deleted successfully"))
    }
}

fn validate_new_record(draft: &NewMilkRecord) -> Result<(), DomainError> {
    require_text(&draft.animal_id, "Animal ID")?;
    if !draft.quantity.is_finite() || draft.quantity < 0.0 {
        return Err(DomainError::Validation(
            "Quantity must be zero or more liters".to_string(),
        ));
    }
    validate_date(&draft.date, "Date")?;
    Ok(())
}
