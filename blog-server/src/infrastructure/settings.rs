use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) mongo_url: String,
    pub(crate) mongo_database: String,
    pub(crate) http_addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) http_request_body_limit_bytes: usize,
    pub(crate) http_concurrency_limit: usize,
    pub(crate) http_request_timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let mongo_url = get_required("MONGO_DB_URL").context("MONGO_DB_URL is required")?;
        let mongo_database =
            std::env::var("MONGO_DB_NAME").unwrap_or_else(|_| "blog".to_string());

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_body_limit_bytes = parse_positive(
            "HTTP_REQUEST_BODY_LIMIT_BYTES",
            std::env::var("HTTP_REQUEST_BODY_LIMIT_BYTES").ok(),
            1024 * 1024,
        )?;
        let http_concurrency_limit = parse_positive(
            "HTTP_CONCURRENCY_LIMIT",
            std::env::var("HTTP_CONCURRENCY_LIMIT").ok(),
            256,
        )?;
        let http_request_timeout_secs = parse_positive(
            "HTTP_REQUEST_TIMEOUT_SECS",
            std::env::var("HTTP_REQUEST_TIMEOUT_SECS").ok(),
            10,
        )?;

        Ok(Self {
            mongo_url,
            mongo_database,
            http_addr,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
            http_request_timeout_secs,
        })
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = raw else {
        return Ok(default);
    };

    let value = raw
        .trim()
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_cors_origins, parse_positive};

    #[test]
    fn parse_cors_origins_skips_blank_entries() {
        let origins = parse_cors_origins(" http://a.test , ,http://b.test,".to_string());
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn parse_positive_uses_default_when_unset() {
        let value: usize = parse_positive("LIMIT", None, 256).expect("default must be used");
        assert_eq!(value, 256);
    }

    #[test]
    fn parse_positive_rejects_zero_and_garbage() {
        assert!(parse_positive::<u64>("TIMEOUT", Some("0".to_string()), 10).is_err());
        assert!(parse_positive::<u64>("TIMEOUT", Some("-3".to_string()), 10).is_err());
        assert!(parse_positive::<u64>("TIMEOUT", Some("ten".to_string()), 10).is_err());
    }

    #[test]
    fn parse_positive_accepts_trimmed_value() {
        let value: usize = parse_positive("LIMIT", Some(" 64 ".to_string()), 256).expect("valid");
        assert_eq!(value, 64);
    }
}
