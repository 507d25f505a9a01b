//! Integration tests for the portfolio listing, filters and case study detail.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_default_app, get};

fn slugs(items: &serde_json::Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn unfiltered_listing_shows_every_case_study() {
    let response = get(build_default_app(), "/api/v1/portfolio").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["shown"], 8);
    assert_eq!(json["data"]["total"], 8);

    let items = &json["data"]["items"];
    assert_eq!(slugs(items)[0], "infinity-solutions-logistics");
    // Listing cards are summaries, not full documents.
    assert!(items[0]["challenge"].is_null());
    assert!(items[0]["image"].is_string());
    assert!(items[0]["projectType"].is_string());
}

#[tokio::test]
async fn all_means_no_constraint() {
    let json = body_json(
        get(
            build_default_app(),
            "/api/v1/portfolio?industry=all&project_type=all",
        )
        .await,
    )
    .await;

    assert_eq!(json["data"]["shown"], 8);
}

#[tokio::test]
async fn industry_filter_returns_only_that_industry() {
    let json = body_json(
        get(
            build_default_app(),
            "/api/v1/portfolio?industry=Healthcare&project_type=all",
        )
        .await,
    )
    .await;

    assert_eq!(slugs(&json["data"]["items"]), ["babylon-hospital"]);
    assert_eq!(json["data"]["shown"], 1);
    assert_eq!(json["data"]["total"], 8);
}

#[tokio::test]
async fn project_type_filter_accepts_camel_case_parameter() {
    let json = body_json(
        get(
            build_default_app(),
            "/api/v1/portfolio?projectType=Web%20Application",
        )
        .await,
    )
    .await;

    assert_eq!(
        slugs(&json["data"]["items"]),
        ["plixplay-streaming-platform", "split-expense-sharing-app"]
    );
}

#[tokio::test]
async fn combined_filters_intersect() {
    let json = body_json(
        get(
            build_default_app(),
            "/api/v1/portfolio?industry=FinTech&project_type=Web%20Application",
        )
        .await,
    )
    .await;

    assert_eq!(slugs(&json["data"]["items"]), ["split-expense-sharing-app"]);
}

#[tokio::test]
async fn non_matching_filters_return_empty_list() {
    let response = get(
        build_default_app(),
        "/api/v1/portfolio?industry=Healthcare&project_type=Portfolio%20Website",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["shown"], 0);
    assert_eq!(json["data"]["total"], 8);
    assert!(json["data"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn featured_preserves_catalog_order() {
    let listing = body_json(get(build_default_app(), "/api/v1/portfolio").await).await;
    let featured = body_json(get(build_default_app(), "/api/v1/portfolio/featured").await).await;

    let featured_slugs = slugs(&featured["data"]);
    let all_slugs = slugs(&listing["data"]["items"]);

    // Every featured entry appears in the listing, in the same relative order.
    let mut cursor = all_slugs.iter();
    for slug in &featured_slugs {
        assert!(
            cursor.any(|s| s == slug),
            "featured slug {slug} out of catalog order"
        );
    }
    for study in featured["data"].as_array().unwrap() {
        assert_eq!(study["featured"], true);
    }
}

#[tokio::test]
async fn filters_are_distinct_and_sorted() {
    let json = body_json(get(build_default_app(), "/api/v1/portfolio/filters").await).await;

    let industries: Vec<&str> = json["data"]["industries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(industries.len(), 8);
    assert!(industries.windows(2).all(|w| w[0] < w[1]));
    assert!(industries.contains(&"Healthcare"));

    let project_types: Vec<&str> = json["data"]["projectTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(project_types.len(), 6);
    assert!(json["data"]["project_types"].is_null());
    assert!(project_types.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn case_study_detail_by_slug() {
    let response = get(build_default_app(), "/api/v1/portfolio/babylon-hospital").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let study = &json["data"];
    assert_eq!(study["slug"], "babylon-hospital");
    assert_eq!(study["industry"], "Healthcare");
    assert!(study["testimonial"]["quote"].is_string());
    assert!(study["techStack"].is_array());
    assert!(study["images"]["screenshots"].is_array());
}

#[tokio::test]
async fn unknown_slug_returns_404() {
    let response = get(build_default_app(), "/api/v1/portfolio/nonexistent-slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "CaseStudy 'nonexistent-slug' not found");
}

#[tokio::test]
async fn related_for_sole_study_in_industry_is_empty() {
    let response = get(
        build_default_app(),
        "/api/v1/portfolio/babylon-hospital/related",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn related_never_includes_the_study_itself() {
    let app = build_default_app();
    let listing = body_json(get(app.clone(), "/api/v1/portfolio").await).await;

    for slug in slugs(&listing["data"]["items"]) {
        let related = body_json(get(app.clone(), &format!("/api/v1/portfolio/{slug}/related")).await).await;
        let related = related["data"].as_array().unwrap();
        assert!(related.len() <= 3);
        assert!(related.iter().all(|r| r["slug"] != slug));
    }
}

#[tokio::test]
async fn related_for_unknown_slug_returns_404() {
    let response = get(
        build_default_app(),
        "/api/v1/portfolio/nonexistent-slug/related",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
