//! Financial ledger service.

use crate::auth::AuthContext;
use crate::domain::commands::{
    AddFinancialRecordCommand, AddFinancialRecordResult, DeleteFinancialRecordCommand,
    DeleteRecordResult,
};
use crate::domain::{check_policy, require_text, validate_date};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{FinancialRecord, NewFinancialRecord};
use std::sync::Arc;

/// Record and remove income and expense entries. Admin-only.
#[derive(Clone)]
pub struct FinancialService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> FinancialService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of the ledger, newest first.
    pub fn subscribe(&self) -> Subscription<FinancialRecord> {
        self.store.subscribe()
    }

    pub async fn add_record(
        &self,
        ctx: &AuthContext,
        command: AddFinancialRecordCommand,
    ) -> Result<AddFinancialRecordResult, DomainError> {
        let user = ctx.require_user("add records")?;
        check_policy(
            ctx,
            Action::ManageFinancialRecords,
            false,
            "Only admins can manage financial records",
        )?;
        validate_new_record(&command.record)?;

        info!(
            "Recording {:?} of ${:.2} ({})",
            command.record.record_type, command.record.amount, command.record.category
        );
        let record = self
            .store
            .create::<FinancialRecord>(&user.id, command.record)
            .await?;

        Ok(AddFinancialRecordResult {
            record,
            success_message: "Financial record added successfully".to_string(),
        })
    }

    pub async fn delete_record(
        &self,
        ctx: &AuthContext,
        command: DeleteFinancialRecordCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete records")?;
        check_policy(
            ctx,
            Action::ManageFinancialRecords,
            false,
            "Only admins can manage financial records",
        )?;

        if !command.confirmed {
            info!(
                "Deletion of financial record {} cancelled",
                command.record_id
            );
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store
            .delete::<FinancialRecord>(&command.record_id)
            .await?;
        info!("Deleted financial record {}", command.record_id);
        Ok(DeleteRecordResult::deleted("Record deleted successfully"))
    }
}

fn validate_new_record(draft: &NewFinancialRecord) -> Result<(), DomainError> {
    require_text(&draft.description, "Description")?;
    require_text(&draft.category, "Category")?;
    if !draft.amount.is_finite() || draft.amount < 0.0 {
        return Err(DomainError::Validation(
            "Amount must be zero or more".to_string(),
        ));
    }
    validate_date(&draft.date, "Date")?;
    Ok(())
}
