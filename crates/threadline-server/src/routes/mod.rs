// Export route modules
pub mod compile;
pub mod conversations;
pub mod status;

use crate::state::AppState;
use axum::Router;

// Function to configure all routes
pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(compile::routes(state.clone()))
        .merge(conversations::routes(state))
        .merge(status::routes())
}
