use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Greeting;
use service::collections::{DogStore, HubStore};

pub mod dogs;
pub mod hubs;

/// Shared handler state: one independent store per resource collection.
#[derive(Clone)]
pub struct ServerState {
    pub dogs: Arc<DogStore>,
    pub hubs: Arc<HubStore>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            dogs: DogStore::new(),
            hubs: HubStore::new(),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

async fn root() -> Json<Greeting> {
    Json(Greeting { hello: "world" })
}

async fn hello() -> Json<Greeting> {
    Json(Greeting { hello: "Lambda School" })
}

/// Build the full application router: greeting routes plus both resource APIs.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/hello", get(hello));

    let dogs_api = Router::new()
        .route("/api/dogs", get(dogs::list_dogs).post(dogs::create_dog))
        .route(
            "/api/dogs/:id",
            get(dogs::get_dog)
                .patch(dogs::patch_dog)
                .put(dogs::replace_dog)
                .delete(dogs::delete_dog),
        );

    let hubs_api = Router::new()
        .route("/api/hubs", get(hubs::list_hubs).post(hubs::create_hub))
        .route(
            "/api/hubs/:id",
            get(hubs::get_hub)
                .patch(hubs::patch_hub)
                .put(hubs::replace_hub)
                .delete(hubs::delete_hub),
        );

    // Compose
    public
        .merge(dogs_api)
        .merge(hubs_api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
