use super::case_study::CaseStudy;

/// Filter value that leaves a dimension unconstrained.
pub const FILTER_ALL: &str = "all";

/// Portfolio listing filter.
///
/// Each dimension is either [`FILTER_ALL`] (or absent) or an exact value to
/// match. The visible set is the intersection of the constrained dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioFilter {
    pub industry: Option<String>,
    pub project_type: Option<String>,
}

impl PortfolioFilter {
    pub fn new(industry: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            industry: Some(industry.into()),
            project_type: Some(project_type.into()),
        }
    }

    /// True when neither dimension is constrained.
    pub fn is_unfiltered(&self) -> bool {
        constraint(&self.industry).is_none() && constraint(&self.project_type).is_none()
    }

    pub fn matches(&self, study: &CaseStudy) -> bool {
        let industry_match = constraint(&self.industry).map_or(true, |i| study.industry == i);
        let type_match = constraint(&self.project_type).map_or(true, |t| study.project_type == t);
        industry_match && type_match
    }
}

/// The value to match, or `None` if the dimension is open.
fn constraint(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != FILTER_ALL)
}
