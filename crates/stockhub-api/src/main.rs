//! 주식 데이터 API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 헬스 체크, 시세/개요/시계열/요약 조회, 관심종목 관리 엔드포인트를
//! 제공합니다.

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use stockhub_api::routes::create_api_router;
use stockhub_api::state::AppState;
use stockhub_core::{init_logging, AppConfig, LogConfig};
use stockhub_provider::create_provider;

/// AppState 초기화.
///
/// DATABASE_URL이 설정되어 있으면 연결을 시도하고, 실패하면 DB 없이
/// 기동합니다 (시세 조회는 DB 없이도 동작).
async fn create_app_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let provider = create_provider(&config.market_data)?;
    let mut state = AppState::new(provider);

    if let Some(database_url) = &config.database.url {
        match PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout_secs))
            .connect(database_url)
            .await
        {
            Ok(pool) => {
                if sqlx::query("SELECT 1").fetch_one(&pool).await.is_ok() {
                    info!("PostgreSQL 연결 성공");
                    state = state.with_db_pool(pool);
                } else {
                    error!("데이터베이스 연결 검증 실패");
                }
            }
            Err(e) => {
                error!("데이터베이스 연결 실패: {}", e);
            }
        }
    } else {
        warn!("DATABASE_URL 미설정, 관심종목 기능이 비활성화됩니다");
    }

    Ok(state)
}

/// CORS 미들웨어 구성.
///
/// CORS_ORIGINS 환경변수가 설정되어 있으면 해당 origin만 허용합니다.
/// 설정되지 않으면 개발 모드로 간주하여 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS에 유효한 origin이 없어 전체 허용합니다");
                AllowOrigin::any()
            } else {
                info!("CORS 허용 origin {}개 설정", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS 미설정, 모든 origin 허용 (개발 모드)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>, request_timeout_secs: u64) -> Router {
    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
        .layer(cors_layer())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    init_logging(&LogConfig::from_env());

    info!("Stockhub API 서버 시작...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        e
    })?;

    let state = Arc::new(create_app_state(&config).await?);

    info!(version = %state.version, "애플리케이션 상태 초기화 완료");
    info!(
        has_db = state.db_pool.is_some(),
        provider = state.provider.name(),
        "서비스 연결 상태"
    );

    let app = create_router(state, config.server.request_timeout_secs);

    let addr = config.server.bind_addr();
    info!(%addr, "API 서버 리스닝");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("서버가 정상 종료되었습니다");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Ctrl+C 수신, graceful shutdown 시작...");
        }
        _ = terminate => {
            warn!("SIGTERM 수신, graceful shutdown 시작...");
        }
    }
}
