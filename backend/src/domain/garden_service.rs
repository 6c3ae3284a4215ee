//! Garden domain service.
//!
//! Implements the garden command and query driving ports, including the
//! detail view that stitches together a garden, its plants and the selected
//! plant's journal.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tracing::info;

use crate::domain::garden::unknown_choice;
use crate::domain::ports::{
    Dashboard, GardenCommand, GardenDetail, GardenQuery, GardenView, JournalRepositories,
    PlantSelection,
};
use crate::domain::service_support::{
    map_garden_error, map_note_error, map_plant_error, map_recommendation_error, map_user_error,
    visible_garden,
};
use crate::domain::{Error, FieldErrors, Garden, GardenDraft, GardenId, GardenInput, UserId};

/// Garden service implementing [`GardenCommand`] and [`GardenQuery`].
#[derive(Clone)]
pub struct GardenService {
    repos: JournalRepositories,
}

impl GardenService {
    /// Create the service over the journal repositories.
    pub fn new(repos: JournalRepositories) -> Self {
        Self { repos }
    }

    fn validate(input: GardenInput, owner: &UserId) -> Result<GardenDraft, Error> {
        GardenDraft::validate(input)
            .map(|draft| draft.without_owner(owner))
            .map_err(FieldErrors::into_error)
    }

    /// Reject sharing sets that name users who do not exist.
    async fn ensure_users_exist(&self, ids: &BTreeSet<UserId>) -> Result<(), Error> {
        if ids.is_empty() {
            return Ok(());
        }
        let wanted: Vec<UserId> = ids.iter().copied().collect();
        let found: BTreeSet<UserId> = self
            .repos
            .users
            .find_by_ids(&wanted)
            .await
            .map_err(map_user_error)?
            .into_iter()
            .map(|user| user.id)
            .collect();

        let mut errors = FieldErrors::new();
        for missing in ids.difference(&found) {
            errors.add("shared_users", unknown_choice(&missing.to_string()));
        }
        errors.into_result()
    }
}

#[async_trait]
impl GardenCommand for GardenService {
    async fn create_garden(&self, user: &UserId, input: GardenInput) -> Result<Garden, Error> {
        let draft = Self::validate(input, user)?;
        self.ensure_users_exist(&draft.shared_user_ids).await?;

        let garden = Garden {
            id: GardenId::random(),
            owner_id: *user,
            name: draft.name,
            description: draft.description,
            image: draft.image,
            shared_user_ids: draft.shared_user_ids,
        };
        self.repos
            .gardens
            .create(&garden)
            .await
            .map_err(map_garden_error)?;

        info!(
            garden_id = %garden.id,
            owner_id = %user,
            shared = garden.shared_user_ids.len(),
            "garden created"
        );
        Ok(garden)
    }

    async fn update_garden(
        &self,
        user: &UserId,
        garden: &GardenId,
        input: GardenInput,
    ) -> Result<Garden, Error> {
        let (existing, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_edit()?;
        let draft = Self::validate(input, &existing.owner_id)?;

        let shared_user_ids = if access.can_edit_users {
            self.ensure_users_exist(&draft.shared_user_ids).await?;
            draft.shared_user_ids
        } else {
            existing.shared_user_ids
        };
        let updated = Garden {
            id: existing.id,
            owner_id: existing.owner_id,
            name: draft.name,
            description: draft.description,
            image: draft.image,
            shared_user_ids,
        };
        self.repos
            .gardens
            .update(&updated)
            .await
            .map_err(map_garden_error)?;

        info!(garden_id = %updated.id, user_id = %user, "garden updated");
        Ok(updated)
    }

    async fn delete_garden(&self, user: &UserId, garden: &GardenId) -> Result<(), Error> {
        let (_, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_delete()?;
        let removed = self
            .repos
            .gardens
            .delete(garden)
            .await
            .map_err(map_garden_error)?;
        if !removed {
            return Err(Error::not_found(format!("garden {garden} not found")));
        }
        info!(garden_id = %garden, user_id = %user, "garden deleted");
        Ok(())
    }
}

#[async_trait]
impl GardenQuery for GardenService {
    async fn dashboard(&self, user: &UserId) -> Result<Dashboard, Error> {
        let owned = self
            .repos
            .gardens
            .list_owned_by(user)
            .await
            .map_err(map_garden_error)?;
        let shared = self
            .repos
            .gardens
            .list_shared_with(user)
            .await
            .map_err(map_garden_error)?
            .into_iter()
            .filter(|garden| !garden.is_owned_by(user))
            .collect();
        Ok(Dashboard { owned, shared })
    }

    async fn list_gardens(&self, user: &UserId) -> Result<Vec<Garden>, Error> {
        let Dashboard { owned, shared } = self.dashboard(user).await?;
        let mut visible: BTreeMap<GardenId, Garden> = BTreeMap::new();
        for garden in owned.into_iter().chain(shared) {
            visible.entry(garden.id).or_insert(garden);
        }
        let mut gardens: Vec<Garden> = visible.into_values().collect();
        gardens.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(gardens)
    }

    async fn garden_view(&self, user: &UserId, garden: &GardenId) -> Result<GardenView, Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        Ok(GardenView { garden, access })
    }

    async fn garden_detail(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
    ) -> Result<GardenDetail, Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        let plants = self
            .repos
            .plants
            .list_for_garden(&garden.id)
            .await
            .map_err(map_plant_error)?;
        let selected_plant = selection.pick(&plants).cloned();

        let (notes, latest_recommendation) = match &selected_plant {
            Some(plant) => {
                let notes = self
                    .repos
                    .notes
                    .list_for_plant(&plant.id)
                    .await
                    .map_err(map_note_error)?;
                let latest = self
                    .repos
                    .recommendations
                    .latest_for_plant(&plant.id)
                    .await
                    .map_err(map_recommendation_error)?;
                (notes, latest)
            }
            None => (Vec::new(), None),
        };

        Ok(GardenDetail {
            garden,
            access,
            plants,
            selected_plant,
            notes,
            latest_recommendation,
        })
    }
}

#[cfg(test)]
#[path = "garden_service_tests.rs"]
mod tests;
