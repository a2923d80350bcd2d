use crate::modules::movie::domain::entities::ActorDetail;
use crate::modules::provider::domain::MovieProviderRepository;
use crate::modules::provider::infrastructure::adapters::tmdb::TmdbMapper;
use crate::shared::errors::{AppError, AppResult};
use std::sync::Arc;

/// Person profiles, fetched from TMDB and normalized for display
pub struct ActorService {
    provider: Arc<dyn MovieProviderRepository>,
    mapper: TmdbMapper,
}

impl ActorService {
    pub fn new(provider: Arc<dyn MovieProviderRepository>, mapper: TmdbMapper) -> Self {
        Self { provider, mapper }
    }

    pub async fn actor_detail(&self, person_id: i32) -> AppResult<ActorDetail> {
        let actor = self
            .provider
            .actor_detail(person_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("TMDB person {} not found", person_id)))?;

        Ok(self.mapper.map_actor_detail(&actor)?)
    }
}
