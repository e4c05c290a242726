mod handlers;
mod routes;
mod state;

pub use handlers::{GenreRecommendationRequest, VideoResponse};
pub use routes::create_router;
pub use state::AppState;
