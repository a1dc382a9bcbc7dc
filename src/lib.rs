use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use cache::store::SessionStore;
use config::Config;
use navigation::NavigationConfig;
use prefetch::UpstreamClient;

pub mod cache;
pub mod config;
pub mod database;
pub mod middleware;
pub mod navigation;
pub mod prefetch;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub redis: Arc<RedisClient>,
    pub store: Arc<dyn SessionStore>,
    pub navigation: Arc<NavigationConfig>,
    pub upstream: UpstreamClient,
}
