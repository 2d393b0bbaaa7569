use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::employees::controller::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
use crate::state::AppState;

pub fn init_employees_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/add", post(create_employee))
        .route("/delete", delete(delete_employee))
        .route("/{eid}", get(get_employee).put(update_employee))
}
