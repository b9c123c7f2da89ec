//! In-memory repositories for service and router tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use time::Date;

use crate::errors::ServiceError;
use crate::job_offers::{
    category::Category,
    repo::JobOfferRepository,
    repo_types::{JobOfferRow, NewJobOffer},
};
use crate::users::{
    repo::UserRepository,
    repo_types::{NewUser, User},
};

#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
    next_id: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryUserRepository {
    /// Number of inserts and saves performed so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn username_of(&self, id: i64) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.clone())
    }

    fn ensure_unique(rows: &[User], username: &str, id: Option<i64>) -> Result<(), ServiceError> {
        if rows.iter().any(|u| u.username == username && Some(u.id) != id) {
            return Err(ServiceError::UsernameTaken {
                username: username.to_owned(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_unique(&rows, &user.username, None)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let user = User {
            id,
            username: user.username,
            password: user.password,
            creation_date: user.creation_date,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_unique(&rows, &user.username, Some(user.id))?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let stored = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(ServiceError::Db(sqlx::Error::RowNotFound))?;
        stored.username = user.username.clone();
        stored.password = user.password.clone();
        Ok(stored.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.rows.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

/// Offers joined against a [`MemoryUserRepository`] for employer usernames.
pub struct MemoryJobOfferRepository {
    users: Arc<MemoryUserRepository>,
    rows: Mutex<Vec<NewJobOffer>>,
}

impl MemoryJobOfferRepository {
    pub fn new(users: Arc<MemoryUserRepository>) -> Self {
        Self {
            users,
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn project(&self, index: usize, offer: &NewJobOffer) -> JobOfferRow {
        JobOfferRow {
            id: index as i64 + 1,
            category: offer.category,
            start_date: offer.start_date,
            end_date: offer.end_date,
            employer_id: offer.employer_id,
            employer: self.users.username_of(offer.employer_id),
        }
    }

    fn select(&self, date: Date, keep: impl Fn(&JobOfferRow) -> bool) -> Vec<JobOfferRow> {
        let offers = self.rows.lock().unwrap().clone();
        offers
            .iter()
            .enumerate()
            .map(|(i, o)| self.project(i, o))
            .filter(|r| r.start_date <= date && date <= r.end_date)
            .filter(|r| keep(r))
            .collect()
    }
}

#[async_trait]
impl JobOfferRepository for MemoryJobOfferRepository {
    async fn insert(&self, offer: NewJobOffer) -> Result<JobOfferRow, ServiceError> {
        let index = {
            let mut rows = self.rows.lock().unwrap();
            rows.push(offer.clone());
            rows.len() - 1
        };
        Ok(self.project(index, &offer))
    }

    async fn find_valid(&self, date: Date) -> Result<Vec<JobOfferRow>, ServiceError> {
        Ok(self.select(date, |_| true))
    }

    async fn find_valid_by_category(
        &self,
        category: Category,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        Ok(self.select(date, |r| r.category == category))
    }

    async fn find_valid_by_employer(
        &self,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        Ok(self.select(date, |r| r.employer.as_deref() == Some(employer)))
    }

    async fn find_valid_by_category_and_employer(
        &self,
        category: Category,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        Ok(self.select(date, |r| {
            r.category == category && r.employer.as_deref() == Some(employer)
        }))
    }
}
