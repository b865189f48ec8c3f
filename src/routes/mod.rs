use axum::{routing::post, Router};

use crate::types::app_state::AppState;

mod post_callback;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/callback", post(post_callback::post_callback))
}
