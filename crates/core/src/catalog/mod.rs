//! Read-only catalog of case studies, services, and about-page content.
//!
//! The content ships as JSON documents embedded at compile time and is parsed
//! once into a [`Catalog`]. Loading enforces that slugs and ids are unique so
//! every slug lookup has at most one answer.

pub mod about;
pub mod case_study;
pub mod filter;
pub mod service;

use std::collections::{BTreeSet, HashSet};

use serde::de::DeserializeOwned;

use crate::error::CoreError;

pub use about::{CompanyValue, ProcessStep, TeamMember};
pub use case_study::{CaseStudy, CaseStudyImages, CaseStudySummary, ResultMetric, Testimonial};
pub use filter::{PortfolioFilter, FILTER_ALL};
pub use service::Service;

/// How many related projects a case study detail page shows.
pub const RELATED_PROJECTS_LIMIT: usize = 3;

const CASE_STUDIES_JSON: &str = include_str!("../../data/case_studies.json");
const SERVICES_JSON: &str = include_str!("../../data/services.json");
const TEAM_MEMBERS_JSON: &str = include_str!("../../data/team_members.json");
const PROCESS_STEPS_JSON: &str = include_str!("../../data/process_steps.json");
const COMPANY_VALUES_JSON: &str = include_str!("../../data/company_values.json");

/// Immutable, process-wide site content.
#[derive(Debug, Clone)]
pub struct Catalog {
    case_studies: Vec<CaseStudy>,
    services: Vec<Service>,
    team_members: Vec<TeamMember>,
    process_steps: Vec<ProcessStep>,
    company_values: Vec<CompanyValue>,
}

impl Catalog {
    /// Parse the embedded content documents.
    pub fn load() -> Result<Self, CoreError> {
        Self::from_parts(
            parse("case_studies", CASE_STUDIES_JSON)?,
            parse("services", SERVICES_JSON)?,
            parse("team_members", TEAM_MEMBERS_JSON)?,
            parse("process_steps", PROCESS_STEPS_JSON)?,
            parse("company_values", COMPANY_VALUES_JSON)?,
        )
    }

    /// Build a catalog from already-parsed collections.
    ///
    /// Fails if any collection repeats an id, or if case studies or services
    /// repeat a slug.
    pub fn from_parts(
        case_studies: Vec<CaseStudy>,
        services: Vec<Service>,
        team_members: Vec<TeamMember>,
        process_steps: Vec<ProcessStep>,
        company_values: Vec<CompanyValue>,
    ) -> Result<Self, CoreError> {
        ensure_unique("case study slug", case_studies.iter().map(|c| c.slug.as_str()))?;
        ensure_unique("case study id", case_studies.iter().map(|c| c.id.as_str()))?;
        ensure_unique("service slug", services.iter().map(|s| s.slug.as_str()))?;
        ensure_unique("service id", services.iter().map(|s| s.id.as_str()))?;
        ensure_unique("team member id", team_members.iter().map(|m| m.id.as_str()))?;
        ensure_unique("process step id", process_steps.iter().map(|p| p.id.as_str()))?;
        ensure_unique("company value id", company_values.iter().map(|v| v.id.as_str()))?;

        Ok(Self {
            case_studies,
            services,
            team_members,
            process_steps,
            company_values,
        })
    }

    // -- Case studies --

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn find_case_study(&self, slug: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.slug == slug)
    }

    /// Featured case studies in collection order.
    pub fn featured_case_studies(&self) -> Vec<&CaseStudy> {
        self.case_studies.iter().filter(|c| c.featured).collect()
    }

    /// Up to `limit` other case studies in the same industry as `slug`, in
    /// collection order. Empty when `slug` is unknown.
    pub fn related_case_studies(&self, slug: &str, limit: usize) -> Vec<&CaseStudy> {
        let Some(study) = self.find_case_study(slug) else {
            return Vec::new();
        };
        self.case_studies
            .iter()
            .filter(|c| c.industry == study.industry && c.slug != study.slug)
            .take(limit)
            .collect()
    }

    /// Distinct industries across all case studies, sorted ascending.
    pub fn industries(&self) -> Vec<&str> {
        distinct_sorted(self.case_studies.iter().map(|c| c.industry.as_str()))
    }

    /// Distinct project types across all case studies, sorted ascending.
    pub fn project_types(&self) -> Vec<&str> {
        distinct_sorted(self.case_studies.iter().map(|c| c.project_type.as_str()))
    }

    /// Case studies visible under `filter`, in collection order.
    pub fn filter_case_studies(&self, filter: &PortfolioFilter) -> Vec<&CaseStudy> {
        if filter.is_unfiltered() {
            return self.case_studies.iter().collect();
        }
        self.case_studies
            .iter()
            .filter(|c| filter.matches(c))
            .collect()
    }

    // -- Services --

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn find_service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    // -- About --

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    pub fn process_steps(&self) -> &[ProcessStep] {
        &self.process_steps
    }

    pub fn company_values(&self) -> &[CompanyValue] {
        &self.company_values
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, CoreError> {
    serde_json::from_str(raw).map_err(|e| CoreError::Catalog(format!("{name}: {e}")))
}

fn ensure_unique<'a>(
    what: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CoreError::Catalog(format!("duplicate {what} '{key}'")));
        }
    }
    Ok(())
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
