use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use portal_backend::{
    AppState,
    cache::operations::query::QueryCacheOperations,
    cache::store::{RedisStore, SessionStore},
    config::Config,
    middleware::{RateLimiter, auth_middleware, log_errors, rate_limit, rewrite_legacy_paths},
    navigation::NavigationConfig,
    prefetch::UpstreamClient,
    routes,
};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    #[cfg(debug_assertions)]
    tracing::info!("Running in debug mode with CORS enabled");

    #[cfg(not(debug_assertions))]
    tracing::info!("Running in production mode with CORS disabled");

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'portal_backend';")
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");

    // 设置 Redis 客户端
    let redis_client =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");
    let redis_arc = Arc::new(redis_client.clone());

    // 缓存存储、导航配置和上游客户端
    let store: Arc<dyn SessionStore> = Arc::new(RedisStore::new(redis_arc.clone()));
    let navigation = Arc::new(NavigationConfig::new());
    let upstream = UpstreamClient::new(config.upstream_api_url.clone());

    // 设置应用状态
    let state = AppState {
        pool,
        config: config.clone(),
        redis: redis_arc,
        store: store.clone(),
        navigation,
        upstream,
    };

    // 设置限流器
    let rate_limiter = Arc::new(RateLimiter::new(redis_client, config.clone()));

    // 周期性清理过期查询缓存，作为页面切换触发之外的兜底
    {
        let store = store.clone();
        let stale_secs = config.query_stale_secs;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));
            loop {
                interval.tick().await;
                match QueryCacheOperations::prune_stale(store.as_ref(), "", stale_secs).await {
                    Ok(0) => {}
                    Ok(n) => tracing::debug!("pruned {} stale query cache entries", n),
                    Err(e) => tracing::warn!("periodic query cache prune failed: {}", e),
                }
            }
        });
    }

    // API 路由，认证由全局中间件按路径决定
    let api_routes = Router::new()
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/me", get(routes::auth::me))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/navigation/dashboard", get(routes::navigation::dashboard))
        .route("/navigation/transition", post(routes::navigation::transition))
        .route("/prefetch/hint", post(routes::prefetch::hint))
        .route(
            "/social/carteirinha/summary",
            get(routes::summary::social_carteirinha_summary),
        )
        .route("/{module}/summary", get(routes::summary::module_summary));

    // 预注册静态页面
    let page_routes = Router::new()
        .route("/pre-cadastro", get(routes::prereg::page))
        .route("/pre-cadastro/{org}", get(routes::prereg::org_page));

    let router = Router::new()
        .nest(&config.api_base_uri.clone(), api_routes)
        .merge(page_routes);

    // 中间件从外到内：限流、错误日志、旧路径重写、认证
    let router = router
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(axum::middleware::from_fn(rewrite_legacy_paths))
        .layer(axum::middleware::from_fn(log_errors))
        .layer(axum::middleware::from_fn_with_state(rate_limiter, rate_limit));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        // 设置开发环境的CORS，允许所有来源
        let cors = tower_http::cors::CorsLayer::permissive();
        router.layer(cors)
    };

    // 添加应用状态
    let app = router.with_state(state.clone());

    // 启动服务器
    let addr = SocketAddr::new(
        state.config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        state.config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}
