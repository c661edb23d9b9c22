//! Health monitoring service.

use crate::auth::AuthContext;
use crate::domain::commands::{
    AddHealthRecordCommand, AddHealthRecordResult, DeleteHealthRecordCommand, DeleteRecordResult,
};
use crate::domain::{check_policy, require_text, validate_date};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{HealthRecord, NewHealthRecord};
use std::sync::Arc;

/// Record and remove checkups, vaccinations and treatments.
#[derive(Clone)]
pub struct HealthService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> HealthService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of health records, newest first.
    pub fn subscribe(&self) -> Subscription<HealthRecord> {
        self.store.subscribe()
    }

    pub async fn add_record(
        &self,
        ctx: &AuthContext,
        command: AddHealthRecordCommand,
    ) -> Result<AddHealthRecordResult, DomainError> {
        let user = ctx.require_user("add health records")?;
        check_policy(
            ctx,
            Action::ManageHealthRecords,
            false,
            "Only admins and veterinarians can add health records",
        )?;
        validate_new_record(&command.record)?;

        info!(
            "Recording {:?} for animal {}",
            command.record.record_type, command.record.animal_id
        );
        // The store stamps the acting user into performedBy.
        let record = self
            .store
            .create::<HealthRecord>(&user.id, command.record)
            .await?;

        Ok(AddHealthRecordResult {
            record,
            success_message: "Health record added successfully".to_string(),
        })
    }

    pub async fn delete_record(
        &self,
        ctx: &AuthContext,
        command: DeleteHealthRecordCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete health records")?;
        check_policy(
            ctx,
            Action::ManageHealthRecords,
            false,
            "Only admins and veterinarians can delete health records",
        )?;

        if !command.confirmed {
            info!("Deletion of health record {} cancelled", command.record_id);
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store.delete::<HealthRecord>(&command.record_id).await?;
        info!("Deleted health record {}", command.record_id);
        Ok(DeleteRecordResult::deleted("Record deleted successfully"))
    }
}

fn validate_new_record(draft: &NewHealthRecord) -> Result<(), DomainError> {
    require_text(&draft.animal_id, "Animal ID")?;
    require_text(&draft.animal_tag_number, "Animal tag number")?;
    require_text(&draft.description, "Description")?;
    validate_date(&draft.date, "Date")?;
    Ok(())
}
