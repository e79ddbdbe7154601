use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, ValidationOrder, first_validation_message};
use validator::Validate;

/// JSON body that has already passed `validator` rules. Rejections come back in
/// the `{dados, erros}` envelope carrying the single highest-priority message.
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + ValidationOrder,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|errors| {
            let message = first_validation_message(&errors, T::field_order());
            tracing::info!("Rejected request body: {message}");
            AppErrorHttp(ServiceError::Validation(message))
        })?;

        Ok(SimpleValidatedJson(value))
    }
}
