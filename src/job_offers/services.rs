use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::errors::ServiceError;
use crate::job_offers::{
    dto::{JobOfferDto, JobOfferFilter, NewJobOfferDetails},
    repo::JobOfferRepository,
    repo_types::NewJobOffer,
};
use crate::users::services::UserService;

#[derive(Clone)]
pub struct JobOfferService {
    repo: Arc<dyn JobOfferRepository>,
    users: UserService,
}

impl JobOfferService {
    pub fn new(repo: Arc<dyn JobOfferRepository>, users: UserService) -> Self {
        Self { repo, users }
    }

    /// Creates an offer posted by the user named in `details.employer`.
    ///
    /// Fails with [`ServiceError::EmployerNotFound`] without writing anything
    /// when no such user exists.
    pub async fn add_job_offer(
        &self,
        details: NewJobOfferDetails,
    ) -> Result<JobOfferDto, ServiceError> {
        debug!(?details, "creating job offer");
        let employer = self
            .users
            .get_user_by_username(&details.employer)
            .await?
            .ok_or_else(|| ServiceError::EmployerNotFound {
                username: details.employer.clone(),
            })?;
        let offer = NewJobOffer::from_details(&details, employer.id);
        let created = self.repo.insert(offer).await?;
        Ok(created.into())
    }

    /// Offers valid today, optionally narrowed by category and/or employer username.
    pub async fn get_valid_job_offers(
        &self,
        filter: JobOfferFilter,
    ) -> Result<Vec<JobOfferDto>, ServiceError> {
        self.get_valid_job_offers_on(filter, today()).await
    }

    async fn get_valid_job_offers_on(
        &self,
        filter: JobOfferFilter,
        date: Date,
    ) -> Result<Vec<JobOfferDto>, ServiceError> {
        let rows = match (filter.category, filter.employer.as_deref()) {
            (Some(category), Some(employer)) => {
                debug!(%category, employer, "retrieving valid job offers for category and employer");
                self.repo
                    .find_valid_by_category_and_employer(category, employer, date)
                    .await?
            }
            (Some(category), None) => {
                debug!(%category, "retrieving valid job offers for category");
                self.repo.find_valid_by_category(category, date).await?
            }
            (None, Some(employer)) => {
                debug!(employer, "retrieving valid job offers for employer");
                self.repo.find_valid_by_employer(employer, date).await?
            }
            (None, None) => {
                debug!("retrieving all valid job offers");
                self.repo.find_valid(date).await?
            }
        };
        Ok(rows.into_iter().map(JobOfferDto::from).collect())
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
