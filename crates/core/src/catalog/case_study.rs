use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Slug};

/// A published portfolio case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: EntityId,
    pub slug: Slug,
    pub title: String,
    pub client: String,
    pub industry: String,
    pub project_type: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<ResultMetric>,
    pub testimonial: Testimonial,
    pub tech_stack: Vec<String>,
    pub images: CaseStudyImages,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetric {
    pub metric: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub position: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyImages {
    pub hero: String,
    pub screenshots: Vec<String>,
}

/// Listing-card projection of a case study.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudySummary<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub client: &'a str,
    pub industry: &'a str,
    pub project_type: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub results: &'a [ResultMetric],
}

impl<'a> From<&'a CaseStudy> for CaseStudySummary<'a> {
    fn from(study: &'a CaseStudy) -> Self {
        Self {
            slug: &study.slug,
            title: &study.title,
            client: &study.client,
            industry: &study.industry,
            project_type: &study.project_type,
            description: &study.description,
            image: &study.images.hero,
            results: &study.results,
        }
    }
}
