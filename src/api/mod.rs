pub mod health;
pub mod mobs;

use axum::{
    Router,
    routing::get,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    let mobs = Router::new()
        .route("/mobs", get(mobs::list_mobs).post(mobs::create_mob))
        .route(
            "/mobs/:id",
            get(mobs::get_mob)
                .patch(mobs::update_mob)
                .delete(mobs::delete_mob),
        );

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .nest("/v1", mobs)
        .with_state(state)
}
