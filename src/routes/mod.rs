pub mod feedback;
pub mod service_requests;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Service requests
        .route(
            "/api/service-requests",
            get(service_requests::list).post(service_requests::create),
        )
        .route(
            "/api/service-requests/{id}",
            get(service_requests::get).put(service_requests::update),
        )
        // Feedback
        .route("/api/feedback", get(feedback::list).post(feedback::create))
}
