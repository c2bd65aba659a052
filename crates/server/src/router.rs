use super::services::Services;
use crate::{api, docs::ApiDoc, middleware};
use axum::{
    error_handling::HandleErrorLayer,
    handler::HandlerWithoutStateExt,
    http::{header, Method},
    middleware as axum_middleware,
    response::IntoResponse,
    BoxError, Extension, Router,
};
use std::time::Duration;
use tower::{buffer::BufferLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utils::AppError;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub struct AppRouter;

impl AppRouter {
    pub fn new(services: Services) -> Router {
        let timeout = services.config.http_timeout();

        // 地图页面与 API 不同源
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::USER_AGENT]);

        // 其余 GET 请求交给地图前端静态文件
        // 非 GET 的未知路径同样返回 JSON 404，而不是 ServeDir 的空 405
        let static_files = ServeDir::new(&services.config.static_dir)
            .not_found_service(Self::handle_404.into_service())
            .call_fallback_on_method_not_allowed(true);

        Router::new()
            .merge(api::app())
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .fallback_service(static_files)
            .layer(axum_middleware::from_fn(middleware::request_logger))
            .layer(cors)
            .layer(
                ServiceBuilder::new()
                    .layer(Extension(services))
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(move |err: BoxError| Self::handle_timeout_error(err, timeout)))
                    .timeout(timeout)
                    .layer(BufferLayer::new(1024)),
            )
    }

    async fn handle_404() -> impl IntoResponse {
        AppError::NotFound("The requested resource does not exist on this server!".to_string())
    }

    async fn handle_timeout_error(err: BoxError, timeout: Duration) -> AppError {
        if err.is::<tower::timeout::error::Elapsed>() {
            AppError::Timeout(format!(
                "Request took longer than the configured {} second timeout",
                timeout.as_secs()
            ))
        } else {
            AppError::Internal(anyhow::anyhow!("Unhandled internal error: {}", err))
        }
    }
}
