use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::emp::controller::{add_employee_ack, get_emp_profile};
use crate::state::AppState;

pub fn init_emp_router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_employee_ack))
        .route("/profile", get(get_emp_profile))
}
