use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use utils::AppError;

/// 任意 JSON 载荷
///
/// 与 `axum::Json` 不同，这里不要求 `Content-Type: application/json`，
/// 设备固件经常不带这个头。只校验 JSON 语法，不校验结构。
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest("request body is empty".to_string()));
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("request body is not valid JSON: {}", e)))?;

        Ok(Self(value))
    }
}
