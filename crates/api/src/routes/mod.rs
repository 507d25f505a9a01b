pub mod about;
pub mod contact;
pub mod health;
pub mod portfolio;
pub mod services;
pub mod theme;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio                      filtered case study listing
/// /portfolio/featured             featured case studies
/// /portfolio/filters              industries and project types
/// /portfolio/{slug}               case study detail
/// /portfolio/{slug}/related       same-industry case studies
///
/// /services                       all services
/// /services/{slug}                service detail
///
/// /about/team                     team members
/// /about/process                  delivery process steps
/// /about/values                   company values
///
/// /contact                        submit a lead (POST)
/// /contact/options                select option sets
///
/// /theme                          get, set color scheme
/// /theme/toggle                   flip color scheme (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/portfolio", portfolio::router())
        .nest("/services", services::router())
        .nest("/about", about::router())
        .nest("/contact", contact::router())
        .nest("/theme", theme::router())
}
