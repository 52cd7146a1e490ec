use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;

use quickclick_core::health::{healthz, readyz};
use quickclick_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    advert::{
        delete_advert, find_advert_by_id, find_adverts_by_category, find_adverts_newest_first,
        find_all_adverts, find_discounted_adverts, find_most_viewed_adverts, find_my_adverts,
        find_promoted_adverts, find_viewed_adverts, record_advert_view, register_advert,
    },
    auth::{get_me, login, oauth2_login, signup},
    image::{delete_image, find_advert_images, find_image, upload_image},
};
use crate::state::AppState;

/// Build the HTTP router. API routes live under `api_prefix`; health probes
/// stay at the root.
pub fn build_router(state: AppState, api_prefix: &str, max_body_bytes: usize) -> Router {
    let api = Router::new()
        // Adverts
        .route("/adverts", get(find_all_adverts).post(register_advert))
        .route("/adverts/newest", get(find_adverts_newest_first))
        .route("/adverts/my", get(find_my_adverts))
        .route("/adverts/viewed", get(find_viewed_adverts))
        .route("/adverts/discounted", get(find_discounted_adverts))
        .route("/adverts/promoted", get(find_promoted_adverts))
        .route("/adverts/most-viewed", get(find_most_viewed_adverts))
        .route("/adverts/category/{category}", get(find_adverts_by_category))
        .route(
            "/adverts/{id}",
            get(find_advert_by_id).delete(delete_advert),
        )
        .route("/adverts/{id}/views", post(record_advert_view))
        // Images
        .route(
            "/adverts/{id}/images",
            get(find_advert_images).post(upload_image),
        )
        .route(
            "/adverts/{id}/images/{image_id}",
            get(find_image).delete(delete_image),
        )
        // Auth
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
        .route("/auth/oauth2/{registration_id}", post(oauth2_login));

    let router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));
    let router = if api_prefix.is_empty() || api_prefix == "/" {
        router.merge(api)
    } else {
        router.nest(api_prefix, api)
    };

    // Outermost first: the request id must exist before the trace span opens.
    let middleware = ServiceBuilder::new()
        .layer(request_id_layer())
        .layer(trace_layer())
        .layer(propagate_request_id_layer());

    router
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware)
        .with_state(state)
}
