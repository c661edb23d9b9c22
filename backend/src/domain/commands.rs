//! Command and result types for the domain services.
//!
//! Every delete carries the outcome of the caller's confirmation prompt;
//! a declined confirmation aborts the operation without an error.

use shared::{
    Animal, AnimalStatus, FeedRecord, FinancialRecord, HealthRecord, MilkRecord, NewAnimal,
    NewFeedRecord, NewFinancialRecord, NewHealthRecord, NewMilkRecord, NewNutritionSchedule,
    NutritionSchedule, Role,
};

/// Outcome of a confirmation-gated delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordResult {
    /// False when the caller declined the confirmation prompt.
    pub deleted: bool,
    pub message: String,
}

impl DeleteRecordResult {
    pub(crate) fn cancelled() -> Self {
        Self {
            deleted: false,
            message: "Deletion cancelled".to_string(),
        }
    }

    pub(crate) fn deleted(message: &str) -> Self {
        Self {
            deleted: true,
            message: message.to_string(),
        }
    }
}

// --- Animals ---------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AddAnimalCommand {
    pub animal: NewAnimal,
}

#[derive(Debug, Clone)]
pub struct AddAnimalResult {
    pub animal: Animal,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct UpdateAnimalStatusCommand {
    pub animal_id: String,
    pub status: AnimalStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateAnimalStatusResult {
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteAnimalCommand {
    pub animal_id: String,
    pub confirmed: bool,
}

// --- Health records --------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AddHealthRecordCommand {
    pub record: NewHealthRecord,
}

#[derive(Debug, Clone)]
pub struct AddHealthRecordResult {
    pub record: HealthRecord,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteHealthRecordCommand {
    pub record_id: String,
    pub confirmed: bool,
}

// --- Milk records ----------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AddMilkRecordCommand {
    pub record: NewMilkRecord,
}

#[derive(Debug, Clone)]
pub struct AddMilkRecordResult {
    pub record: MilkRecord,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteMilkRecordCommand {
    pub record_id: String,
    pub confirmed: bool,
}

// --- Feed records and schedules --------------------------------------------

#[derive(Debug, Clone)]
pub struct AddFeedRecordCommand {
    pub record: NewFeedRecord,
}

#[derive(Debug, Clone)]
pub struct AddFeedRecordResult {
    pub record: FeedRecord,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteFeedRecordCommand {
    pub record_id: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct AddNutritionScheduleCommand {
    pub schedule: NewNutritionSchedule,
}

#[derive(Debug, Clone)]
pub struct AddNutritionScheduleResult {
    pub schedule: NutritionSchedule,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteNutritionScheduleCommand {
    pub schedule_id: String,
    pub confirmed: bool,
}

// --- Financial records ------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AddFinancialRecordCommand {
    pub record: NewFinancialRecord,
}

#[derive(Debug, Clone)]
pub struct AddFinancialRecordResult {
    pub record: FinancialRecord,
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteFinancialRecordCommand {
    pub record_id: String,
    pub confirmed: bool,
}

// --- Users ------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct UpdateUserRoleCommand {
    pub user_id: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct UpdateUserRoleResult {
    pub success_message: String,
}
