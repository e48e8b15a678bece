use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::{InterestCatalog, VenueCatalog};
use crate::core::matcher::{get_matched_venues, get_shared_interests, MatchResult};
use crate::models::{ParticipantRole, Session, SessionStatus, Swipe, SwipeDirection, Venue};

pub const INVITE_CODE_LEN: usize = 8;

/// Errors that can occur with session operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Invalid invite code: {0}")]
    InvalidCode(String),

    #[error("Session {0} already has a partner")]
    AlreadyJoined(String),

    #[error("Session {0} is waiting for a partner")]
    NotActive(String),

    #[error("Pick at least {min} interests, got {got}")]
    NotEnoughInterests { min: usize, got: usize },

    #[error("Pick at most {max} interests, got {got}")]
    TooManyInterests { max: usize, got: usize },

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),
}

/// Limits applied to every session
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    pub capacity: u64,
    pub ttl_secs: u64,
    pub min_interests: usize,
    pub max_interests: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            ttl_secs: 24 * 60 * 60,
            min_interests: 3,
            max_interests: 10,
        }
    }
}

/// In-memory store for two-person swipe sessions
///
/// Sessions expire after the configured TTL. A second cache maps invite
/// codes to session ids.
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, Arc<RwLock<Session>>>,
    codes: moka::future::Cache<String, Uuid>,
    catalog: Arc<VenueCatalog>,
    interests: Arc<InterestCatalog>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(
        catalog: Arc<VenueCatalog>,
        interests: Arc<InterestCatalog>,
        limits: SessionLimits,
    ) -> Self {
        let ttl = Duration::from_secs(limits.ttl_secs);

        let sessions = moka::future::CacheBuilder::new(limits.capacity)
            .time_to_live(ttl)
            .build();
        let codes = moka::future::CacheBuilder::new(limits.capacity)
            .time_to_live(ttl)
            .build();

        Self {
            sessions,
            codes,
            catalog,
            interests,
            limits,
        }
    }

    async fn handle(&self, id: Uuid) -> Result<Arc<RwLock<Session>>, SessionError> {
        self.sessions
            .get(&id)
            .await
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    async fn unused_code(&self) -> String {
        loop {
            let code = Uuid::new_v4().simple().to_string()[..INVITE_CODE_LEN].to_uppercase();
            if !self.codes.contains_key(&code) {
                return code;
            }
        }
    }

    /// Open a session and hand back its invite code
    pub async fn create(&self, creator_name: &str) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            code: self.unused_code().await,
            creator_name: creator_name.trim().to_string(),
            partner_name: None,
            status: SessionStatus::Waiting,
            creator_interests: Vec::new(),
            partner_interests: Vec::new(),
            saved_venue_ids: Vec::new(),
            swipes: Vec::new(),
            created_at: chrono::Utc::now(),
        };

        self.codes.insert(session.code.clone(), session.id).await;
        self.sessions
            .insert(session.id, Arc::new(RwLock::new(session.clone())))
            .await;

        tracing::info!("Created session {} (code {})", session.id, session.code);
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, SessionError> {
        let handle = self.handle(id).await?;
        let session = handle.read().await;
        Ok(session.clone())
    }

    /// Join a waiting session as the partner; flips it to active
    pub async fn join(&self, code: &str, partner_name: &str) -> Result<Session, SessionError> {
        let code = code.trim().to_uppercase();
        if code.len() != INVITE_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SessionError::InvalidCode(code));
        }

        let id = self
            .codes
            .get(&code)
            .await
            .ok_or_else(|| SessionError::NotFound(code.clone()))?;

        let handle = self.handle(id).await?;
        let mut session = handle.write().await;

        if session.partner_name.is_some() || session.status == SessionStatus::Active {
            return Err(SessionError::AlreadyJoined(code));
        }

        session.partner_name = Some(partner_name.trim().to_string());
        session.status = SessionStatus::Active;

        tracing::info!("Partner joined session {}", session.id);
        Ok(session.clone())
    }

    /// Replace one participant's interests
    ///
    /// Names missing from the interest catalog are dropped and repeats are
    /// collapsed before the count limits are checked.
    pub async fn submit_interests(
        &self,
        id: Uuid,
        role: ParticipantRole,
        names: &[String],
    ) -> Result<Session, SessionError> {
        let mut accepted: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if self.interests.contains(name) && !accepted.contains(name) {
                accepted.push(name.clone());
            }
        }

        if accepted.len() < names.len() {
            tracing::debug!(
                "Dropped {} unknown or repeated interests for session {}",
                names.len() - accepted.len(),
                id
            );
        }

        if accepted.len() < self.limits.min_interests {
            return Err(SessionError::NotEnoughInterests {
                min: self.limits.min_interests,
                got: accepted.len(),
            });
        }
        if accepted.len() > self.limits.max_interests {
            return Err(SessionError::TooManyInterests {
                max: self.limits.max_interests,
                got: accepted.len(),
            });
        }

        let handle = self.handle(id).await?;
        let mut session = handle.write().await;

        match role {
            ParticipantRole::Creator => session.creator_interests = accepted,
            ParticipantRole::Partner => {
                if session.partner_name.is_none() {
                    return Err(SessionError::NotActive(id.to_string()));
                }
                session.partner_interests = accepted;
            }
        }

        Ok(session.clone())
    }

    /// Ranked deck for the pair, creator interests first
    pub async fn matches(&self, id: Uuid) -> Result<MatchResult, SessionError> {
        let session = self.get(id).await?;

        let creator = session.interests_for(ParticipantRole::Creator);
        let partner = session.interests_for(ParticipantRole::Partner);

        let venues = get_matched_venues(self.catalog.venues(), creator, partner);
        let shared_interests = get_shared_interests(creator, partner);

        Ok(MatchResult {
            venues,
            shared_interests,
            total_candidates: self.catalog.len(),
        })
    }

    /// Record a swipe; right swipes add the venue to the saved list
    ///
    /// Returns the number of saved venues afterwards.
    pub async fn record_swipe(
        &self,
        id: Uuid,
        venue_id: &str,
        direction: SwipeDirection,
    ) -> Result<usize, SessionError> {
        if self.catalog.get(venue_id).is_none() {
            return Err(SessionError::UnknownVenue(venue_id.to_string()));
        }

        let handle = self.handle(id).await?;
        let mut session = handle.write().await;

        if session.status != SessionStatus::Active {
            return Err(SessionError::NotActive(id.to_string()));
        }

        session.swipes.push(Swipe {
            venue_id: venue_id.to_string(),
            direction,
            swiped_at: chrono::Utc::now(),
        });

        if direction == SwipeDirection::Right
            && !session.saved_venue_ids.iter().any(|v| v == venue_id)
        {
            session.saved_venue_ids.push(venue_id.to_string());
        }

        tracing::debug!("Session {} swiped {:?} on {}", id, direction, venue_id);
        Ok(session.saved_venue_ids.len())
    }

    /// Saved venues in the order they were saved
    pub async fn saved_venues(&self, id: Uuid) -> Result<Vec<Venue>, SessionError> {
        let session = self.get(id).await?;

        Ok(session
            .saved_venue_ids
            .iter()
            .filter_map(|venue_id| self.catalog.get(venue_id).cloned())
            .collect())
    }
}
