use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub places: PlacesConfig,
    pub supervisor: SupervisorConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Places provider access (API key, endpoint, pacing)
#[derive(Clone)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: String,
    /// Wait before a continuation token is used
    pub page_token_delay: Duration,
    /// Upper bound for a single provider call
    pub request_timeout: Duration,
}

/// Worker pool settings for the supervisor process
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    pub worker_count: usize,
    pub restart_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            places: PlacesConfig::from_env()?,
            supervisor: SupervisorConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PlacesConfig {
    const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com/maps/api/place";
    // The provider rejects a next_page_token used sooner than ~2s after issue
    const DEFAULT_PAGE_TOKEN_DELAY_MS: u64 = 2000;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("GOOGLE_PLACE_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "GOOGLE_PLACE_API_KEY must be set".to_string())?;

        let base_url = env::var("GOOGLE_PLACES_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let page_token_delay_ms = env::var("PLACES_PAGE_TOKEN_DELAY_MS")
            .unwrap_or_else(|_| Self::DEFAULT_PAGE_TOKEN_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "PLACES_PAGE_TOKEN_DELAY_MS must be a valid number".to_string())?;

        let request_timeout_secs = env::var("PLACES_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "PLACES_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            api_key,
            base_url,
            page_token_delay: Duration::from_millis(page_token_delay_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

// Keeps the API key out of startup logs
impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("page_token_delay", &self.page_token_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl SupervisorConfig {
    pub fn from_env() -> Result<Self, String> {
        let worker_count = match env::var("WORKER_COUNT") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| "WORKER_COUNT must be a valid number".to_string())?,
            Err(_) => std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
        };

        let restart_delay_ms = env::var("WORKER_RESTART_DELAY_MS")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u64>()
            .map_err(|_| "WORKER_RESTART_DELAY_MS must be a valid number".to_string())?;

        Ok(Self {
            worker_count: worker_count.max(1),
            restart_delay: Duration::from_millis(restart_delay_ms),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Nearby Places API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Keyword search for places around a point".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
