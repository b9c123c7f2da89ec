use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;

use crate::errors::ServiceError;
use crate::job_offers::{
    category::Category,
    repo_types::{JobOfferRow, NewJobOffer},
};

/// Job offer storage. Every `find_valid*` query keeps only offers whose
/// `[start_date, end_date]` window contains `date`, ordered by id.
#[async_trait]
pub trait JobOfferRepository: Send + Sync {
    async fn insert(&self, offer: NewJobOffer) -> Result<JobOfferRow, ServiceError>;
    async fn find_valid(&self, date: Date) -> Result<Vec<JobOfferRow>, ServiceError>;
    async fn find_valid_by_category(
        &self,
        category: Category,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError>;
    async fn find_valid_by_employer(
        &self,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError>;
    async fn find_valid_by_category_and_employer(
        &self,
        category: Category,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError>;
}

#[derive(Clone)]
pub struct PgJobOfferRepository {
    db: PgPool,
}

impl PgJobOfferRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobOfferRepository for PgJobOfferRepository {
    async fn insert(&self, offer: NewJobOffer) -> Result<JobOfferRow, ServiceError> {
        let row = sqlx::query_as::<_, JobOfferRow>(
            r#"
            WITH inserted AS (
                INSERT INTO job_offers (category, start_date, end_date, employer_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, category, start_date, end_date, employer_id
            )
            SELECT i.id, i.category, i.start_date, i.end_date, i.employer_id,
                   u.username AS employer
            FROM inserted i
            LEFT JOIN users u ON u.id = i.employer_id
            "#,
        )
        .bind(offer.category)
        .bind(offer.start_date)
        .bind(offer.end_date)
        .bind(offer.employer_id)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_valid(&self, date: Date) -> Result<Vec<JobOfferRow>, ServiceError> {
        let rows = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT o.id, o.category, o.start_date, o.end_date, o.employer_id,
                   u.username AS employer
            FROM job_offers o
            LEFT JOIN users u ON u.id = o.employer_id
            WHERE $1 BETWEEN o.start_date AND o.end_date
            ORDER BY o.id
            "#,
        )
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_valid_by_category(
        &self,
        category: Category,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        let rows = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT o.id, o.category, o.start_date, o.end_date, o.employer_id,
                   u.username AS employer
            FROM job_offers o
            LEFT JOIN users u ON u.id = o.employer_id
            WHERE o.category = $1
              AND $2 BETWEEN o.start_date AND o.end_date
            ORDER BY o.id
            "#,
        )
        .bind(category)
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_valid_by_employer(
        &self,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        let rows = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT o.id, o.category, o.start_date, o.end_date, o.employer_id,
                   u.username AS employer
            FROM job_offers o
            JOIN users u ON u.id = o.employer_id
            WHERE u.username = $1
              AND $2 BETWEEN o.start_date AND o.end_date
            ORDER BY o.id
            "#,
        )
        .bind(employer)
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_valid_by_category_and_employer(
        &self,
        category: Category,
        employer: &str,
        date: Date,
    ) -> Result<Vec<JobOfferRow>, ServiceError> {
        let rows = sqlx::query_as::<_, JobOfferRow>(
            r#"
            SELECT o.id, o.category, o.start_date, o.end_date, o.employer_id,
                   u.username AS employer
            FROM job_offers o
            JOIN users u ON u.id = o.employer_id
            WHERE o.category = $1
              AND u.username = $2
              AND $3 BETWEEN o.start_date AND o.end_date
            ORDER BY o.id
            "#,
        )
        .bind(category)
        .bind(employer)
        .bind(date)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
