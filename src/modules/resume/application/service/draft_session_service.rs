use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::incoming::use_cases::{
    DraftSessionError, DraftSessionUseCase, FetchResumeError, FetchResumeUseCase,
};
use crate::modules::resume::domain::draft::ResumeDraft;
use crate::modules::resume::domain::preview::render_resume;

/// Drafts untouched for this long are treated as abandoned.
pub const DEFAULT_DRAFT_IDLE_TTL: Duration = Duration::from_secs(2 * 60 * 60);

type DraftKey = (UserId, String);

struct DraftEntry {
    draft: ResumeDraft,
    touched: Instant,
}

impl DraftEntry {
    fn new(draft: ResumeDraft) -> Self {
        Self {
            draft,
            touched: Instant::now(),
        }
    }

    fn is_idle(&self, ttl: Duration) -> bool {
        self.touched.elapsed() >= ttl
    }
}

/// Keeps open drafts in process memory. Drafts do not survive a restart.
///
/// A draft left idle for longer than `idle_ttl` is dropped: lazily when its
/// owner next reaches for it, and in bulk on every `open` or `evict_idle`.
pub struct DraftSessionService {
    fetch_resume: Arc<dyn FetchResumeUseCase + Send + Sync>,
    drafts: RwLock<HashMap<DraftKey, DraftEntry>>,
    idle_ttl: Duration,
}

impl DraftSessionService {
    pub fn new(fetch_resume: Arc<dyn FetchResumeUseCase + Send + Sync>) -> Self {
        Self::with_idle_ttl(fetch_resume, DEFAULT_DRAFT_IDLE_TTL)
    }

    pub fn with_idle_ttl(
        fetch_resume: Arc<dyn FetchResumeUseCase + Send + Sync>,
        idle_ttl: Duration,
    ) -> Self {
        Self {
            fetch_resume,
            drafts: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    fn key(user_id: &UserId, resume_id: &str) -> DraftKey {
        (user_id.clone(), resume_id.to_string())
    }

    fn sweep(&self, drafts: &mut HashMap<DraftKey, DraftEntry>) -> usize {
        let before = drafts.len();
        drafts.retain(|_, entry| !entry.is_idle(self.idle_ttl));
        before - drafts.len()
    }

    /// Live entry for the key, refreshed. An idle entry is removed instead.
    fn touch<'a>(
        &self,
        drafts: &'a mut HashMap<DraftKey, DraftEntry>,
        key: &DraftKey,
    ) -> Result<&'a mut DraftEntry, DraftSessionError> {
        if drafts.get(key).is_some_and(|e| e.is_idle(self.idle_ttl)) {
            drafts.remove(key);
            debug!("Draft of resume {} for user {} expired", key.1, key.0);
        }
        let entry = drafts.get_mut(key).ok_or(DraftSessionError::NoActiveDraft)?;
        entry.touched = Instant::now();
        Ok(entry)
    }
}

#[async_trait]
impl DraftSessionUseCase for DraftSessionService {
    async fn open(
        &self,
        user_id: &UserId,
        resume_id: &str,
    ) -> Result<ResumeDraft, DraftSessionError> {
        let resume = self
            .fetch_resume
            .execute(resume_id)
            .await
            .map_err(|e| match e {
                FetchResumeError::NotFound => DraftSessionError::ResumeNotFound,
                FetchResumeError::RepositoryError(msg) => DraftSessionError::RepositoryError(msg),
            })?;

        let draft = ResumeDraft::from(&resume);
        let mut drafts = self.drafts.write().await;
        let evicted = self.sweep(&mut drafts);
        if evicted > 0 {
            debug!("Evicted {} idle draft(s)", evicted);
        }
        drafts.insert(Self::key(user_id, resume_id), DraftEntry::new(draft.clone()));

        debug!("Opened draft of resume {} for user {}", resume_id, user_id);
        Ok(draft)
    }

    async fn set_field(
        &self,
        user_id: &UserId,
        resume_id: &str,
        name: &str,
        value: Value,
    ) -> Result<ResumeDraft, DraftSessionError> {
        let mut drafts = self.drafts.write().await;
        let entry = self.touch(&mut drafts, &Self::key(user_id, resume_id))?;

        entry
            .draft
            .set_field(name, value)
            .map_err(DraftSessionError::InvalidEdit)?;

        Ok(entry.draft.clone())
    }

    async fn preview(&self, user_id: &UserId, resume_id: &str) -> Result<String, DraftSessionError> {
        let mut drafts = self.drafts.write().await;
        let entry = self.touch(&mut drafts, &Self::key(user_id, resume_id))?;

        Ok(render_resume(&entry.draft))
    }

    async fn discard(&self, user_id: &UserId, resume_id: &str) -> bool {
        self.drafts
            .write()
            .await
            .remove(&Self::key(user_id, resume_id))
            .is_some_and(|entry| !entry.is_idle(self.idle_ttl))
    }

    async fn evict_idle(&self) -> usize {
        let evicted = self.sweep(&mut *self.drafts.write().await);
        if evicted > 0 {
            info!("Evicted {} idle draft(s)", evicted);
        }
        evicted
    }
}
