use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    // Feed
    pub feed_default_limit: usize,
    pub feed_max_limit: usize,
    pub feed_friend_ids: Vec<String>,
    pub seed_demo_posts: bool,

    // Video generation
    pub video_latency_ms: u64,
    pub video_api_url: Option<String>,
    pub video_api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3001,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            feed_default_limit: 10,
            feed_max_limit: 100,
            feed_friend_ids: vec!["user_alex".into(), "user_maya".into()],
            seed_demo_posts: true,
            video_latency_ms: 2000,
            video_api_url: None,
            video_api_key: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.cors_extra_origins),

            feed_default_limit: parse_var("FEED_DEFAULT_LIMIT", defaults.feed_default_limit)?,
            feed_max_limit: parse_var("FEED_MAX_LIMIT", defaults.feed_max_limit)?,
            feed_friend_ids: env::var("FEED_FRIEND_IDS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.feed_friend_ids),
            seed_demo_posts: env::var("SEED_DEMO_POSTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed_demo_posts),

            video_latency_ms: parse_var("VIDEO_LATENCY_MS", defaults.video_latency_ms)?,
            video_api_url: env::var("VIDEO_API_URL").ok().filter(|s| !s.is_empty()),
            video_api_key: env::var("VIDEO_API_KEY").unwrap_or(defaults.video_api_key),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Clamp a caller-supplied limit to the configured bounds.
    pub fn feed_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.feed_default_limit)
            .min(self.feed_max_limit)
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} must be a number: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_limit_defaults_and_clamps() {
        let config = Config::default();
        assert_eq!(config.feed_limit(None), 10);
        assert_eq!(config.feed_limit(Some(3)), 3);
        assert_eq!(config.feed_limit(Some(5000)), 100);
    }

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(
            split_list(" user_alex, ,user_maya,"),
            vec!["user_alex".to_string(), "user_maya".to_string()]
        );
    }
}
