//! Feed inventory and feeding schedule service.

use crate::auth::AuthContext;
use crate::domain::commands::{
    AddFeedRecordCommand, AddFeedRecordResult, AddNutritionScheduleCommand,
    AddNutritionScheduleResult, DeleteFeedRecordCommand, DeleteNutritionScheduleCommand,
    DeleteRecordResult,
};
use crate::domain::{check_policy, require_text, validate_date};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{FeedRecord, NewFeedRecord, NewNutritionSchedule, NutritionSchedule};
use std::sync::Arc;

/// Maintain feed stock entries and the feeding schedule.
#[derive(Clone)]
pub struct FeedService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> FeedService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of feed stock, newest first.
    pub fn subscribe_feeds(&self) -> Subscription<FeedRecord> {
        self.store.subscribe()
    }

    /// Live snapshot of the feeding schedule, newest first.
    pub fn subscribe_schedules(&self) -> Subscription<NutritionSchedule> {
        self.store.subscribe()
    }

    pub async fn add_feed(
        &self,
        ctx: &AuthContext,
        command: AddFeedRecordCommand,
    ) -> Result<AddFeedRecordResult, DomainError> {
        let user = ctx.require_user("add feed records")?;
        check_policy(
            ctx,
            Action::ManageFeedRecords,
            false,
            "Only admins and workers can add feed records",
        )?;
        validate_new_feed(&command.record)?;

        info!(
            "Adding feed {} ({} kg in stock)",
            command.record.name, command.record.stock
        );
        let record = self
            .store
            .create::<FeedRecord>(&user.id, command.record)
            .await?;

        Ok(AddFeedRecordResult {
            record,
            success_message: "Feed record added successfully".to_string(),
        })
    }

    pub async fn delete_feed(
        &self,
        ctx: &AuthContext,
        command: DeleteFeedRecordCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete feed records")?;
        check_policy(
            ctx,
            Action::ManageFeedRecords,
            false,
            "Only admins and workers can delete feed records",
        )?;

        if !command.confirmed {
            info!("Deletion of feed record {} cancelled", command.record_id);
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store.delete::<FeedRecord>(&command.record_id).await?;
        info!("Deleted feed record {}", command.record_id);
        Ok(DeleteRecordResult::deleted(
            "Feed record deleted successfully",
        ))
    }

    pub async fn add_schedule(
        &self,
        ctx: &AuthContext,
        command: AddNutritionScheduleCommand,
    ) -> Result<AddNutritionScheduleResult, DomainError> {
        let user = ctx.require_user("add schedules")?;
        check_policy(
            ctx,
            Action::ManageFeedRecords,
            false,
            "Only admins and workers can add feeding schedules",
        )?;
        validate_new_schedule(&command.schedule)?;

        info!(
            "Adding feeding slot at {} for {} head",
            command.schedule.time, command.schedule.herd_size
        );
        let schedule = self
            .store
            .create::<NutritionSchedule>(&user.id, command.schedule)
            .await?;

        Ok(AddNutritionScheduleResult {
            schedule,
            success_message: "Feeding schedule added successfully".to_string(),
        })
    }

    pub async fn delete_schedule(
        &self,
        ctx: &AuthContext,
        command: DeleteNutritionScheduleCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete schedules")?;
        check_policy(
            ctx,
            Action::ManageFeedRecords,
            false,
            "Only admins and workers can delete feeding schedules",
        )?;

        if !command.confirmed {
            info!("Deletion of schedule {} cancelled", command.schedule_id);
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store
            .delete::<NutritionSchedule>(&command.schedule_id)
            .await?;
        info!("Deleted schedule {}", command.schedule_id);
        Ok(DeleteRecordResult::deleted("Schedule deleted successfully"))
    }
}

fn validate_new_feed(draft: &NewFeedRecord) -> Result<(), DomainError> {
    require_text(&draft.name, "Feed name")?;
    require_text(&draft.nutritional_value, "Nutritional value")?;
    validate_date(&draft.last_updated, "Last updated")?;
    Ok(())
}

fn validate_new_schedule(draft: &NewNutritionSchedule) -> Result<(), DomainError> {
    validate_time(&draft.time)?;
    require_text(&draft.feed_type, "Feed type")?;
    Ok(())
}

/// Feeding slots use a 24h HH:MM clock.
fn validate_time(value: &str) -> Result<(), DomainError> {
    let parts: Vec<&str> = value.split(':').collect();
    let valid = parts.len() == 2
        && parts[0].len() == 2
        && parts[1].len() == 2
        && matches!(parts[0].parse::<u32>(), Ok(hours) if hours < 24)
        && matches!(parts[1].parse::<u32>(), Ok(minutes) if minutes < 60);

    if valid {
        Ok(())
    } else {
        Err(DomainError::Validation(
            "Time must be in HH:MM format".to_string(),
        ))
    }
}
