// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type ApiRateLimiter = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REQUESTS_PER_SECOND: u64 = 2;
const BURST_SIZE: u32 = 10;

/// Per-client-IP limiter for the `/api/*` endpoints. `None` if the quota is rejected by the
/// governor builder, in which case the endpoints run unthrottled.
pub fn rate_limit_layer() -> Option<ApiRateLimiter> {
    static RATE_LIMITER: OnceLock<Option<ApiRateLimiter>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                tracing::error!("invalid rate limit configuration; api endpoints are unthrottled");
                return None;
            };
            Some(GovernorLayer::new(config))
        })
        .clone()
}
