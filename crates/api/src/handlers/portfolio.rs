//! Handlers for the portfolio listing and case study detail pages.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use bob2build_core::catalog::{CaseStudySummary, PortfolioFilter, RELATED_PROJECTS_LIMIT};
use bob2build_core::error::CoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::PortfolioFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Filtered listing plus the counts behind "Showing N of M projects".
#[derive(Debug, Serialize)]
pub struct PortfolioListing<'a> {
    pub items: Vec<CaseStudySummary<'a>>,
    pub shown: usize,
    pub total: usize,
}

/// Options for the two listing filters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioFilters<'a> {
    pub industries: Vec<&'a str>,
    pub project_types: Vec<&'a str>,
}

/// GET /api/v1/portfolio
///
/// List case studies matching `?industry=` and `?project_type=`. Either
/// parameter may be `all` or omitted. No match is an empty list.
pub async fn list_case_studies(
    State(state): State<AppState>,
    Query(params): Query<PortfolioFilterParams>,
) -> AppResult<impl IntoResponse> {
    let filter = PortfolioFilter::from(params);
    let items: Vec<CaseStudySummary<'_>> = state
        .catalog
        .filter_case_studies(&filter)
        .into_iter()
        .map(CaseStudySummary::from)
        .collect();

    tracing::debug!(
        industry = ?filter.industry,
        project_type = ?filter.project_type,
        shown = items.len(),
        "Portfolio listing filtered",
    );

    let listing = PortfolioListing {
        shown: items.len(),
        total: state.catalog.case_studies().len(),
        items,
    };
    Ok(Json(DataResponse { data: listing }).into_response())
}

/// GET /api/v1/portfolio/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let featured = state.catalog.featured_case_studies();
    Ok(Json(DataResponse { data: featured }).into_response())
}

/// GET /api/v1/portfolio/filters
pub async fn list_filters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let filters = PortfolioFilters {
        industries: state.catalog.industries(),
        project_types: state.catalog.project_types(),
    };
    Ok(Json(DataResponse { data: filters }).into_response())
}

/// GET /api/v1/portfolio/{slug}
pub async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let study = state
        .catalog
        .find_case_study(&slug)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "CaseStudy",
                key: slug.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: study }).into_response())
}

/// GET /api/v1/portfolio/{slug}/related
///
/// Other case studies from the same industry, as listing cards.
pub async fn list_related(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    if state.catalog.find_case_study(&slug).is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CaseStudy",
            key: slug,
        }));
    }

    let related: Vec<CaseStudySummary<'_>> = state
        .catalog
        .related_case_studies(&slug, RELATED_PROJECTS_LIMIT)
        .into_iter()
        .map(CaseStudySummary::from)
        .collect();

    Ok(Json(DataResponse { data: related }).into_response())
}
