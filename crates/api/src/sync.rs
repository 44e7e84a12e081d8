//! Outbound delivery of the profile knowledge document.
//!
//! Delivery is best-effort by design: a missing webhook URL or an
//! unresponsive target is a skip, not a failure, and an actual delivery
//! error is reported in-band as [`SyncOutcome::Failed`] rather than as an
//! HTTP error. Only database problems surface as errors.

use agendo_core::error::CoreError;
use agendo_core::profile_doc::{
    self, BusinessProfile, CollaboratorEntry, LinkEntry, ServiceEntry,
};
use agendo_db::repositories::{CollaboratorRepo, LinkRepo, ProfileRepo, ServiceRepo};
use reqwest::Method;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of one profile sync attempt, returned to the caller as data.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Nothing was sent: the webhook is unconfigured or unavailable.
    Skipped { reason: String },
    /// The document was delivered.
    Sent { metadata_key: String },
    /// Delivery was attempted and failed. Never fatal to the caller.
    Failed { reason: String },
}

/// Wire payload of the webhook POST.
#[derive(Debug, Serialize)]
struct ProfilePayload<'a> {
    #[serde(rename = "ragFiles")]
    rag_files: &'a str,
    #[serde(rename = "metadataKey")]
    metadata_key: &'a str,
}

/// Assemble the tenant's knowledge document and POST it to the configured
/// webhook.
///
/// The target is probed with an `OPTIONS` request first; a target that
/// does not answer successfully is treated the same as an unconfigured
/// one. A profile without a company name is the one hard requirement.
pub async fn sync_profile(state: &AppState, user_id: &str) -> AppResult<SyncOutcome> {
    let Some(url) = state.config.rag_webhook_url.as_deref() else {
        return Ok(SyncOutcome::Skipped {
            reason: "webhook not configured".into(),
        });
    };

    let profile = ProfileRepo::find_by_user(&state.pool, user_id)
        .await?
        .filter(|p| !p.company_name.trim().is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "A profile with a company name is required before syncing".into(),
            ))
        })?;

    // Probe before doing any assembly work; an unreachable target is a
    // silent skip, matching the unconfigured case.
    match state.http.request(Method::OPTIONS, url).send().await {
        Ok(response) if response.status().is_success() => {}
        Ok(response) => {
            return Ok(SyncOutcome::Skipped {
                reason: format!("webhook probe answered {}", response.status()),
            });
        }
        Err(err) => {
            return Ok(SyncOutcome::Skipped {
                reason: format!("webhook unreachable: {err}"),
            });
        }
    }

    // Independent sequential reads; no atomicity is needed between them.
    let services = ServiceRepo::list(&state.pool, user_id, false).await?;
    let links = LinkRepo::list_all(&state.pool, user_id).await?;
    let collaborators = CollaboratorRepo::list(&state.pool, user_id).await?;

    let mut collaborator_entries = Vec::with_capacity(collaborators.len());
    for collaborator in &collaborators {
        let service_names = CollaboratorRepo::service_names(&state.pool, collaborator.id).await?;
        collaborator_entries.push(CollaboratorEntry {
            name: collaborator.name.clone(),
            profession: collaborator.profession.clone(),
            phone: collaborator.phone.clone(),
            description: collaborator.description.clone(),
            working_hours: collaborator.working_hours.clone(),
            service_names,
        });
    }

    let service_entries: Vec<ServiceEntry> = services
        .iter()
        .map(|s| ServiceEntry {
            name: s.name.clone(),
            price: s.price,
            duration_minutes: s.duration_minutes,
            available_days: s.available_days.clone(),
            notes: s.notes.clone(),
        })
        .collect();

    let link_entries: Vec<LinkEntry> = links
        .iter()
        .map(|l| LinkEntry {
            title: l.title.clone(),
            url: l.url.clone(),
        })
        .collect();

    let business_profile = BusinessProfile {
        company_name: profile.company_name.clone(),
        address: profile.address.clone(),
        whatsapp: profile.whatsapp.clone(),
        document_number: profile.document_number.clone(),
        location_url: profile.location_url.clone(),
        business_hours: profile.business_hours.clone(),
    };

    let document = profile_doc::render_profile_document(
        &business_profile,
        &service_entries,
        &collaborator_entries,
        &link_entries,
    );
    let metadata_key = profile_doc::metadata_key(
        profile.whatsapp.as_deref().unwrap_or_default(),
        &profile.company_name,
    );

    let payload = ProfilePayload {
        rag_files: &document,
        metadata_key: &metadata_key,
    };

    match state.http.post(url).json(&payload).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::info!(user_id, %metadata_key, "Profile document delivered");
            Ok(SyncOutcome::Sent { metadata_key })
        }
        Ok(response) => {
            tracing::error!(user_id, status = %response.status(), "Profile webhook rejected delivery");
            Ok(SyncOutcome::Failed {
                reason: format!("webhook answered {}", response.status()),
            })
        }
        Err(err) => {
            tracing::error!(user_id, error = %err, "Profile webhook delivery failed");
            Ok(SyncOutcome::Failed {
                reason: format!("delivery failed: {err}"),
            })
        }
    }
}

/// Fire a sync in the background after a profile change.
///
/// Errors and failed deliveries are logged; the originating request never
/// sees them.
pub fn spawn_profile_sync(state: &AppState, user_id: String) {
    let state = state.clone();
    tokio::spawn(async move {
        match sync_profile(&state, &user_id).await {
            Ok(SyncOutcome::Failed { reason }) => {
                tracing::warn!(%user_id, %reason, "Background profile sync failed");
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(%user_id, error = %err, "Background profile sync errored");
            }
        }
    });
}
