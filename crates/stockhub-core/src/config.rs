//! 설정 관리.
//!
//! 애플리케이션 설정을 정의하고 환경변수에서 로드합니다.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터베이스 설정
    pub database: DatabaseConfig,
    /// 시장 데이터 제공자 설정
    pub market_data: MarketDataConfig,
}

impl AppConfig {
    /// 환경변수에서 전체 설정 로드.
    pub fn from_env() -> CoreResult<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            market_data: MarketDataConfig::from_env()?,
        })
    }
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// - `API_HOST`: 바인딩 호스트 (기본값: "127.0.0.1")
    /// - `API_PORT`: 바인딩 포트 (기본값: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("API_HOST").unwrap_or(defaults.host);
        let port = std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host,
            port,
            request_timeout_secs: defaults.request_timeout_secs,
        }
    }

    /// 소켓 주소 문자열 반환.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// 연결 URL (없으면 즐겨찾기 기능 비활성)
    pub url: Option<String>,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 타임아웃 (초)
    pub connection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            connection_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// - `DATABASE_URL`: PostgreSQL 연결 URL (선택)
    /// - `DATABASE_MAX_CONNECTIONS`: 최대 연결 수 (기본값: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("DATABASE_URL").ok();
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_connections);

        Self {
            url,
            max_connections,
            connection_timeout_secs: defaults.connection_timeout_secs,
        }
    }
}

/// 시장 데이터 제공자 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketDataConfig {
    /// 활성 제공자 이름 ("twelvedata" | "alphavantage")
    pub provider: String,
    /// API 키
    pub api_key: String,
    /// 기본 URL 재정의 (테스트/프록시용, 없으면 제공자 기본값)
    pub base_url: Option<String>,
    /// 아웃바운드 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            provider: "twelvedata".to_string(),
            api_key: String::new(),
            base_url: None,
            timeout_secs: 10,
        }
    }
}

impl MarketDataConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// - `MARKET_DATA_PROVIDER`: 제공자 이름 (기본값: "twelvedata")
    /// - `MARKET_DATA_API_KEY`: API 키 (필수)
    /// - `MARKET_DATA_BASE_URL`: 기본 URL 재정의 (선택)
    /// - `MARKET_DATA_TIMEOUT_SECS`: 요청 타임아웃 (기본값: 10)
    pub fn from_env() -> CoreResult<Self> {
        let defaults = Self::default();
        let provider =
            std::env::var("MARKET_DATA_PROVIDER").unwrap_or(defaults.provider);
        let api_key = std::env::var("MARKET_DATA_API_KEY")
            .map_err(|_| CoreError::Config("MARKET_DATA_API_KEY가 설정되지 않았습니다".to_string()))?;
        let base_url = std::env::var("MARKET_DATA_BASE_URL").ok();
        let timeout_secs = std::env::var("MARKET_DATA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        Ok(Self {
            provider,
            api_key,
            base_url,
            timeout_secs,
        })
    }
}
