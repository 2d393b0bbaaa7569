use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use ems_core::AppError;

/// JSON body extractor that also runs the payload's `validator` rules.
///
/// Every rejection is a 400: body-level problems carry a single message,
/// rule failures list each offending field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::from_validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::invalid_field(field, format!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}
