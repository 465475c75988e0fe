use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::resume::application::ports::outgoing::resume_repository::{
    CreateResumeData, PatchField, PatchResumeData, ResumeRecord, ResumeRepository,
    ResumeRepositoryError,
};
use crate::modules::resume::application::ports::outgoing::sub_entity_repository::{
    SectionRepositories, SubEntityRepository, SubEntityRepositoryError,
};
use crate::modules::resume::domain::entities::{
    CustomSection, Education, Experience, PhotoPosition, SectionKind, Skill, SocialProfile, Stored,
    DEFAULT_THEME_COLOR,
};

#[derive(Default)]
pub struct State {
    resumes: HashMap<String, ResumeRecord>,
    experience: HashMap<Uuid, Experience>,
    education: HashMap<Uuid, Education>,
    skills: HashMap<Uuid, Skill>,
    custom_sections: HashMap<Uuid, CustomSection>,
    social_profiles: HashMap<Uuid, SocialProfile>,
    last_write: Option<DateTime<Utc>>,
    unavailable: bool,
    failing_inserts: HashSet<SectionKind>,
    failing_deletes: HashSet<SectionKind>,
}

impl State {
    /// Strictly increasing timestamps so "newest first" is deterministic.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last_write {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_write = Some(next);
        next
    }
}

/// Maps a record type to its table inside [`State`].
pub trait SectionTable: Clone + Send + Sync + 'static {
    const KIND: SectionKind;

    fn table(state: &mut State) -> &mut HashMap<Uuid, Self>;
}

macro_rules! section_table {
    ($ty:ty, $field:ident, $kind:ident) => {
        impl SectionTable for $ty {
            const KIND: SectionKind = SectionKind::$kind;

            fn table(state: &mut State) -> &mut HashMap<Uuid, Self> {
                &mut state.$field
            }
        }
    };
}

section_table!(Experience, experience, Experience);
section_table!(Education, education, Education);
section_table!(Skill, skills, Skills);
section_table!(CustomSection, custom_sections, CustomSections);
section_table!(SocialProfile, social_profiles, SocialProfiles);

/// Process-local stand-in for the document store. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryResumeStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryResumeStore {
    /// Every subsequent operation fails with a database error while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unwrap().unavailable = unavailable;
    }

    /// Inserts into the given section table fail; everything else keeps working.
    pub fn fail_inserts(&self, kind: SectionKind) {
        self.state.lock().unwrap().failing_inserts.insert(kind);
    }

    /// Deletes from the given section table fail; everything else keeps working.
    pub fn fail_deletes(&self, kind: SectionKind) {
        self.state.lock().unwrap().failing_deletes.insert(kind);
    }

    pub fn sections(&self) -> SectionRepositories {
        SectionRepositories::from_store(self.clone())
    }

    pub fn seed_resume(&self, record: ResumeRecord) {
        self.state
            .lock()
            .unwrap()
            .resumes
            .insert(record.resume_id.clone(), record);
    }

    pub fn record(&self, resume_id: &str) -> Option<ResumeRecord> {
        self.state.lock().unwrap().resumes.get(resume_id).cloned()
    }

    pub fn resume_count(&self) -> usize {
        self.state.lock().unwrap().resumes.len()
    }

    pub fn section_count(&self, kind: SectionKind) -> usize {
        let state = self.state.lock().unwrap();
        match kind {
            SectionKind::Experience => state.experience.len(),
            SectionKind::Education => state.education.len(),
            SectionKind::Skills => state.skills.len(),
            SectionKind::CustomSections => state.custom_sections.len(),
            SectionKind::SocialProfiles => state.social_profiles.len(),
        }
    }

    pub fn section<T: SectionTable>(&self, id: Uuid) -> Option<T> {
        T::table(&mut self.state.lock().unwrap()).get(&id).cloned()
    }

    fn seed<T: SectionTable>(&self, record: T) -> Uuid {
        let id = Uuid::new_v4();
        T::table(&mut self.state.lock().unwrap()).insert(id, record);
        id
    }

    pub fn seed_experience(&self, record: Experience) -> Uuid {
        self.seed(record)
    }

    pub fn seed_skill(&self, record: Skill) -> Uuid {
        self.seed(record)
    }

    pub fn seed_social_profile(&self, record: SocialProfile) -> Uuid {
        self.seed(record)
    }

    fn with_state<R, E>(
        &self,
        unavailable: E,
        f: impl FnOnce(&mut State) -> Result<R, E>,
    ) -> Result<R, E> {
        let mut state = self.state.lock().unwrap();
        if state.unavailable {
            return Err(unavailable);
        }
        f(&mut state)
    }
}

fn store_down() -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError("store unavailable".to_string())
}

fn sections_down() -> SubEntityRepositoryError {
    SubEntityRepositoryError::DatabaseError("store unavailable".to_string())
}

fn apply_text(target: &mut Option<String>, field: PatchField<String>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = None,
        PatchField::Value(v) => *target = Some(v),
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeStore {
    async fn find_by_resume_id(
        &self,
        resume_id: &str,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            state
                .resumes
                .get(resume_id)
                .cloned()
                .ok_or(ResumeRepositoryError::NotFound)
        })
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ResumeRecord>, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            let mut rows: Vec<ResumeRecord> = state
                .resumes
                .values()
                .filter(|r| &r.user_id == user_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            Ok(rows)
        })
    }

    async fn insert(&self, data: CreateResumeData) -> Result<ResumeRecord, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            if state.resumes.contains_key(&data.resume_id) {
                return Err(ResumeRepositoryError::DuplicateKey);
            }
            let record = ResumeRecord {
                resume_id: data.resume_id.clone(),
                user_id: data.user_id,
                title: data.title,
                first_name: None,
                last_name: None,
                job_title: None,
                address: None,
                phone: None,
                email: None,
                summary: None,
                profile_photo: None,
                photo_position: PhotoPosition::default(),
                theme_color: DEFAULT_THEME_COLOR.to_string(),
                experience: Vec::new(),
                education: Vec::new(),
                skills: Vec::new(),
                custom_sections: Vec::new(),
                social_profiles: Vec::new(),
                updated_at: state.tick(),
            };
            state.resumes.insert(data.resume_id, record.clone());
            Ok(record)
        })
    }

    async fn patch(
        &self,
        resume_id: &str,
        data: PatchResumeData,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            if !state.resumes.contains_key(resume_id) {
                return Err(ResumeRepositoryError::NotFound);
            }
            if data.is_empty() {
                return state
                    .resumes
                    .get(resume_id)
                    .cloned()
                    .ok_or(ResumeRepositoryError::NotFound);
            }
            let now = state.tick();
            let row = state
                .resumes
                .get_mut(resume_id)
                .ok_or(ResumeRepositoryError::NotFound)?;

            if let PatchField::Value(title) = data.title {
                row.title = title;
            }
            apply_text(&mut row.first_name, data.first_name);
            apply_text(&mut row.last_name, data.last_name);
            apply_text(&mut row.job_title, data.job_title);
            apply_text(&mut row.address, data.address);
            apply_text(&mut row.phone, data.phone);
            apply_text(&mut row.email, data.email);
            apply_text(&mut row.summary, data.summary);
            apply_text(&mut row.profile_photo, data.profile_photo);
            match data.photo_position {
                PatchField::Unset => {}
                PatchField::Null => row.photo_position = PhotoPosition::default(),
                PatchField::Value(p) => row.photo_position = p,
            }
            match data.theme_color {
                PatchField::Unset => {}
                PatchField::Null => row.theme_color = DEFAULT_THEME_COLOR.to_string(),
                PatchField::Value(c) => row.theme_color = c,
            }
            row.updated_at = now;

            Ok(row.clone())
        })
    }

    async fn set_references(
        &self,
        resume_id: &str,
        kind: SectionKind,
        ids: Vec<Uuid>,
    ) -> Result<ResumeRecord, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            let now = state.tick();
            let row = state
                .resumes
                .get_mut(resume_id)
                .ok_or(ResumeRepositoryError::NotFound)?;
            match kind {
                SectionKind::Experience => row.experience = ids,
                SectionKind::Education => row.education = ids,
                SectionKind::Skills => row.skills = ids,
                SectionKind::CustomSections => row.custom_sections = ids,
                SectionKind::SocialProfiles => row.social_profiles = ids,
            }
            row.updated_at = now;
            Ok(row.clone())
        })
    }

    async fn delete(&self, resume_id: &str) -> Result<(), ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            state
                .resumes
                .remove(resume_id)
                .map(|_| ())
                .ok_or(ResumeRepositoryError::NotFound)
        })
    }

    async fn exists_for_owner(
        &self,
        resume_id: &str,
        user_id: &UserId,
    ) -> Result<bool, ResumeRepositoryError> {
        self.with_state(store_down(), |state| {
            Ok(state
                .resumes
                .get(resume_id)
                .is_some_and(|r| &r.user_id == user_id))
        })
    }
}

#[async_trait]
impl<T> SubEntityRepository<T> for InMemoryResumeStore
where
    T: SectionTable,
{
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Stored<T>>, SubEntityRepositoryError> {
        self.with_state(sections_down(), |state| {
            let table = T::table(state);
            Ok(ids
                .iter()
                .filter_map(|id| table.get(id).map(|r| Stored::new(*id, r.clone())))
                .collect())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<T>>, SubEntityRepositoryError> {
        self.with_state(sections_down(), |state| {
            Ok(T::table(state).get(&id).map(|r| Stored::new(id, r.clone())))
        })
    }

    async fn insert(&self, record: T) -> Result<Stored<T>, SubEntityRepositoryError> {
        self.with_state(sections_down(), |state| {
            if state.failing_inserts.contains(&T::KIND) {
                return Err(sections_down());
            }
            let id = Uuid::new_v4();
            T::table(state).insert(id, record.clone());
            Ok(Stored::new(id, record))
        })
    }

    async fn update(&self, id: Uuid, record: T) -> Result<Stored<T>, SubEntityRepositoryError> {
        self.with_state(sections_down(), |state| {
            let slot = T::table(state)
                .get_mut(&id)
                .ok_or(SubEntityRepositoryError::NotFound)?;
            *slot = record.clone();
            Ok(Stored::new(id, record))
        })
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, SubEntityRepositoryError> {
        self.with_state(sections_down(), |state| {
            if state.failing_deletes.contains(&T::KIND) {
                return Err(sections_down());
            }
            let table = T::table(state);
            Ok(ids.iter().filter(|id| table.remove(*id).is_some()).count() as u64)
        })
    }
}
