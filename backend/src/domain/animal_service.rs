//! Animal registry service.

use crate::auth::AuthContext;
use crate::domain::commands::{
    AddAnimalCommand, AddAnimalResult, DeleteAnimalCommand, DeleteRecordResult,
    UpdateAnimalStatusCommand, UpdateAnimalStatusResult,
};
use crate::domain::{check_policy, now_millis, require_text, validate_date};
use crate::error::DomainError;
use crate::policy::Action;
use crate::storage::{RecordStore, Subscription};
use log::info;
use shared::{Animal, AnimalStatusPatch, NewAnimal};
use std::sync::Arc;

/// Create, delete and restate animals in the herd registry.
#[derive(Clone)]
pub struct AnimalService<S> {
    store: Arc<S>,
}

impl<S: RecordStore> AnimalService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Live snapshot of the herd, newest first.
    pub fn subscribe(&self) -> Subscription<Animal> {
        self.store.subscribe()
    }

    pub async fn add_animal(
        &self,
        ctx: &AuthContext,
        command: AddAnimalCommand,
    ) -> Result<AddAnimalResult, DomainError> {
        let user = ctx.require_user("add animals")?;
        check_policy(
            ctx,
            Action::ManageAnimals,
            false,
            "Only admins and veterinarians can add animals",
        )?;
        validate_new_animal(&command.animal)?;

        info!(
            "Registering animal {} ({})",
            command.animal.tag_number, command.animal.breed
        );
        let animal = self.store.create::<Animal>(&user.id, command.animal).await?;

        Ok(AddAnimalResult {
            animal,
            success_message: "Animal added successfully".to_string(),
        })
    }

    pub async fn update_status(
        &self,
        ctx: &AuthContext,
        command: UpdateAnimalStatusCommand,
    ) -> Result<UpdateAnimalStatusResult, DomainError> {
        let user = ctx.require_user("update animals")?;
        check_policy(
            ctx,
            Action::UpdateAnimalStatus,
            false,
            "Only admins and veterinarians can update animal status",
        )?;

        let patch = AnimalStatusPatch {
            status: command.status,
            last_updated_by: user.id.clone(),
            last_updated_at: now_millis(),
        };
        self.store
            .update::<Animal, _>(&command.animal_id, patch)
            .await?;

        info!(
            "Animal {} status set to {}",
            command.animal_id,
            command.status.as_str()
        );
        Ok(UpdateAnimalStatusResult {
            success_message: "Animal status updated".to_string(),
        })
    }

    pub async fn delete_animal(
        &self,
        ctx: &AuthContext,
        command: DeleteAnimalCommand,
    ) -> Result<DeleteRecordResult, DomainError> {
        ctx.require_user("delete animals")?;
        check_policy(
            ctx,
            Action::ManageAnimals,
            false,
            "Only admins and veterinarians can delete animals",
        )?;

        if !command.confirmed {
            info!("Deletion of animal {} cancelled", command.animal_id);
            return Ok(DeleteRecordResult::cancelled());
        }

        self.store.delete::<Animal>(&command.animal_id).await?;
        info!("Deleted animal {}", command.animal_id);
        Ok(DeleteRecordResult::deleted("Animal deleted successfully"))
    }
}

fn validate_new_animal(draft: &NewAnimal) -> Result<(), DomainError> {
    require_text(&draft.tag_number, "Tag number")?;
    require_text(&draft.breed, "Breed")?;
    validate_date(&draft.birth_date, "Birth date")?;
    Ok(())
}
