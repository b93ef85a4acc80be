use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    dto::RevalidationDto,
    error::ApplicationError,
    ports::{cache::TaggedCache, security::SecretVerifier, time::Clock},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevalidateCommand {
    pub entity_id: Option<String>,
}

/// Handles CMS publish webhooks by evicting cached content tagged with the published entry.
pub struct RevalidationService {
    cache: Arc<dyn TaggedCache>,
    secret: Arc<dyn SecretVerifier>,
    clock: Arc<dyn Clock>,
}

impl RevalidationService {
    pub fn new(
        cache: Arc<dyn TaggedCache>,
        secret: Arc<dyn SecretVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            secret,
            clock,
        }
    }

    /// Checked before the webhook body is read.
    pub fn authorize(&self, presented: Option<&str>) -> ApplicationResult<()> {
        match presented {
            Some(candidate) if self.secret.verify(candidate) => Ok(()),
            _ => {
                tracing::error!("invalid revalidation secret");
                Err(ApplicationError::unauthorized("Invalid secret"))
            }
        }
    }

    pub async fn revalidate(&self, command: RevalidateCommand) -> ApplicationResult<RevalidationDto> {
        let entity_id = command
            .entity_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApplicationError::validation("Missing entity id"))?;

        let evicted = self.cache.invalidate_tag(&entity_id).await;
        tracing::info!(entity_id = %entity_id, evicted, "revalidated entity");

        Ok(RevalidationDto {
            revalidated: true,
            entity_id,
            now: self.clock.now().timestamp_millis(),
        })
    }
}
