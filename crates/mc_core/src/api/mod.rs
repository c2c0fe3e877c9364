pub mod dashboard;
pub mod json_api;

pub use dashboard::{Dashboard, HealthStatus, MatchDetail};
pub use json_api::{
    feed_json, health_json, match_detail_json, today_json, FeedResponse, HealthResponse,
    MatchDetailResponse, TodayResponse, SCHEMA_VERSION,
};
