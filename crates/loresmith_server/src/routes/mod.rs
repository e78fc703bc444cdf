//! Route table.

mod backstories;
mod ipfs;
mod meta;
mod prompts;
mod story_elements;
mod tweets;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(meta::health_check))
        .route("/api/stages", get(meta::list_stages))
        .route(
            "/api/prompts",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route("/api/prompts/preview", post(prompts::preview_prompt))
        .route("/api/prompts/active/:type", get(prompts::active_prompt))
        .route(
            "/api/prompts/:id",
            get(prompts::get_prompt)
                .put(prompts::update_prompt)
                .delete(prompts::delete_prompt),
        )
        .route("/api/prompts/:id/activate", post(prompts::activate_prompt))
        .route(
            "/api/backstories",
            get(backstories::list_backstories).post(backstories::generate_backstory),
        )
        .route("/api/backstories/:id", get(backstories::get_backstory))
        .route(
            "/api/backstories/:id/activate",
            post(backstories::activate_backstory),
        )
        .route(
            "/api/tokens/:token_id/backstory",
            get(backstories::active_backstory),
        )
        .route("/api/names", post(backstories::generate_names))
        .route(
            "/api/story-elements",
            get(story_elements::list_story_elements).post(story_elements::generate_story_element),
        )
        .route(
            "/api/story-elements/:id",
            get(story_elements::get_story_element),
        )
        .route(
            "/api/story-elements/:id/stage",
            put(story_elements::set_stage),
        )
        .route(
            "/api/tweets",
            get(tweets::list_tweets).post(tweets::generate_tweet),
        )
        .route("/api/tweets/:id", get(tweets::get_tweet))
        .route("/api/ipfs/metadata", post(ipfs::pin_metadata))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
