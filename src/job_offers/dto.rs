use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};

use crate::job_offers::category::Category;

pub const CATEGORY_NULL_MSG: &str = "Category cannot be null.";
pub const START_DATE_NULL_MSG: &str = "Start date cannot be null.";
pub const END_DATE_NULL_MSG: &str = "End date cannot be null.";
pub const EMPLOYER_BLANK_MSG: &str = "Employer username cannot be blank.";

time::serde::format_description!(offer_date, Date, "[day]-[month]-[year]");

/// Request body for posting a job offer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOfferDetails {
    pub category: Option<Category>,
    #[serde(default, with = "offer_date::option")]
    #[schema(value_type = Option<String>, example = "14-11-2019")]
    pub start_date: Option<Date>,
    #[serde(default, with = "offer_date::option")]
    #[schema(value_type = Option<String>, example = "24-12-2019")]
    pub end_date: Option<Date>,
    /// Username of the posting employer.
    #[schema(example = "JoeDoe")]
    pub employer: Option<String>,
}

/// Job offer details that passed validation.
#[derive(Debug, Clone)]
pub struct NewJobOfferDetails {
    pub category: Category,
    pub start_date: Date,
    pub end_date: Date,
    pub employer: String,
}

impl JobOfferDetails {
    /// One message per missing field. Dates are not checked against each other.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.category.is_none() {
            violations.push(CATEGORY_NULL_MSG.to_string());
        }
        if self.start_date.is_none() {
            violations.push(START_DATE_NULL_MSG.to_string());
        }
        if self.end_date.is_none() {
            violations.push(END_DATE_NULL_MSG.to_string());
        }
        if self
            .employer
            .as_deref()
            .map_or(true, |e| e.trim().is_empty())
        {
            violations.push(EMPLOYER_BLANK_MSG.to_string());
        }
        violations
    }

    pub fn into_new(self) -> Result<NewJobOfferDetails, Vec<String>> {
        let violations = self.validate();
        match (self.category, self.start_date, self.end_date, self.employer) {
            (Some(category), Some(start_date), Some(end_date), Some(employer))
                if violations.is_empty() =>
            {
                Ok(NewJobOfferDetails {
                    category,
                    start_date,
                    end_date,
                    employer,
                })
            }
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobOfferDto {
    #[schema(example = 1)]
    pub id: i64,
    pub category: Category,
    #[serde(with = "offer_date")]
    #[schema(value_type = String, example = "14-11-2019")]
    pub start_date: Date,
    #[serde(with = "offer_date")]
    #[schema(value_type = String, example = "24-12-2019")]
    pub end_date: Date,
    /// Employer username; `null` once the employer has been deleted.
    #[schema(example = "JoeDoe")]
    pub employer: Option<String>,
}

/// Query string of the valid offers listing. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobOfferQuery {
    /// Employer username.
    pub employer: Option<String>,
    /// Job category.
    #[param(example = "Courier")]
    pub category: Option<String>,
}

/// Filters parsed out of a [`JobOfferQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobOfferFilter {
    pub category: Option<Category>,
    pub employer: Option<String>,
}

impl JobOfferQuery {
    pub fn into_filter(self) -> Result<JobOfferFilter, Vec<String>> {
        let category = match self.category.filter(|c| !c.is_empty()) {
            Some(raw) => Some(
                raw.parse::<Category>()
                    .map_err(|_| vec![Category::invalid_value_message()])?,
            ),
            None => None,
        };
        let employer = self.employer.filter(|e| !e.is_empty());
        Ok(JobOfferFilter { category, employer })
    }
}
