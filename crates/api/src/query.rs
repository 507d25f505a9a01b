//! Query parameter types shared by handlers.

use bob2build_core::catalog::PortfolioFilter;
use serde::Deserialize;

/// Portfolio listing filter (`?industry=&project_type=`).
///
/// Missing parameters and the literal `all` both leave a dimension open.
#[derive(Debug, Default, Deserialize)]
pub struct PortfolioFilterParams {
    pub industry: Option<String>,
    #[serde(alias = "projectType")]
    pub project_type: Option<String>,
}

impl From<PortfolioFilterParams> for PortfolioFilter {
    fn from(params: PortfolioFilterParams) -> Self {
        PortfolioFilter {
            industry: params.industry,
            project_type: params.project_type,
        }
    }
}
