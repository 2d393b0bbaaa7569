use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::auth::controller::{get_profile, login, signup};
use crate::state::AppState;

pub fn init_account_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/profile", get(get_profile))
}
