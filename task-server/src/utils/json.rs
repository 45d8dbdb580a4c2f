//! JSON body extractor
//!
//! Same as [`axum::Json`] but rejects with [`AppError`], so a body that
//! fails to decode (wrong type, unknown enum value, missing content type)
//! gets the unified error body instead of axum's plain-text rejection.

use axum::extract::{FromRequest, Request};

use crate::utils::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}
