use sqlx::FromRow;
use time::Date;

use crate::job_offers::{
    category::Category,
    dto::{JobOfferDto, NewJobOfferDetails},
};

/// Job offer record joined with its employer's username.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct JobOfferRow {
    pub id: i64,
    pub category: Category,
    pub start_date: Date,
    pub end_date: Date,
    pub employer_id: i64,
    pub employer: Option<String>, // NULL when the employer row is gone
}

#[derive(Debug, Clone)]
pub struct NewJobOffer {
    pub category: Category,
    pub start_date: Date,
    pub end_date: Date,
    pub employer_id: i64,
}

impl NewJobOffer {
    pub fn from_details(details: &NewJobOfferDetails, employer_id: i64) -> Self {
        Self {
            category: details.category,
            start_date: details.start_date,
            end_date: details.end_date,
            employer_id,
        }
    }
}

impl From<JobOfferRow> for JobOfferDto {
    fn from(r: JobOfferRow) -> Self {
        Self {
            id: r.id,
            category: r.category,
            start_date: r.start_date,
            end_date: r.end_date,
            employer: r.employer,
        }
    }
}
