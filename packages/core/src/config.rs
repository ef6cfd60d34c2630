//! Конфигурация для sealed-http
//!
//! There is no process-global instance: every [`HttpAdapter`](crate::api::HttpAdapter)
//! owns its own copy, so concurrent adapters never share state.

use crate::protocol::headers::{MergePolicy, DEFAULT_CONTENT_TYPE};

/// Tunables for building protected messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Content-Type applied to JSON bodies when the caller sent none
    pub default_content_type: String,

    /// HTTP version for responses when the caller passes none
    pub http_version: String,

    /// How a proof header is merged into an existing header set
    pub merge_policy: MergePolicy,

    /// Spaces per indentation level in pretty-printed JSON bodies
    pub json_indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            http_version: "1.1".to_string(),
            merge_policy: MergePolicy::PairedHeader,
            json_indent: 4,
        }
    }
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    ///
    /// Unset or unparsable variables keep their default value.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("SEALED_HTTP_DEFAULT_CONTENT_TYPE") {
            if !val.trim().is_empty() {
                config.default_content_type = val.trim().to_string();
            }
        }

        if let Ok(val) = std::env::var("SEALED_HTTP_VERSION") {
            if !val.trim().is_empty() {
                config.http_version = val.trim().to_string();
            }
        }

        if let Ok(val) = std::env::var("SEALED_HTTP_MERGE_POLICY") {
            match val.parse() {
                Ok(policy) => config.merge_policy = policy,
                Err(e) => tracing::warn!(value = %val, error = %e, "ignoring SEALED_HTTP_MERGE_POLICY"),
            }
        }

        if let Ok(val) = std::env::var("SEALED_HTTP_JSON_INDENT") {
            match val.trim().parse() {
                Ok(indent) => config.json_indent = indent,
                Err(e) => tracing::warn!(value = %val, error = %e, "ignoring SEALED_HTTP_JSON_INDENT"),
            }
        }

        config
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_content_type, "application/json");
        assert_eq!(config.http_version, "1.1");
        assert_eq!(config.merge_policy, MergePolicy::PairedHeader);
        assert_eq!(config.json_indent, 4);
    }

    #[test]
    fn test_with_merge_policy() {
        let config = Config::default().with_merge_policy(MergePolicy::OwnHeader);
        assert_eq!(config.merge_policy, MergePolicy::OwnHeader);
        assert_eq!(config.http_version, "1.1");
    }

    // Environment is process-wide: every from_env case lives in this one test.
    #[test]
    fn test_from_env_overrides() {
        const VARS: [&str; 4] = [
            "SEALED_HTTP_DEFAULT_CONTENT_TYPE",
            "SEALED_HTTP_VERSION",
            "SEALED_HTTP_MERGE_POLICY",
            "SEALED_HTTP_JSON_INDENT",
        ];

        std::env::set_var("SEALED_HTTP_DEFAULT_CONTENT_TYPE", " application/vnd.api+json ");
        std::env::set_var("SEALED_HTTP_VERSION", "2");
        std::env::set_var("SEALED_HTTP_MERGE_POLICY", "own");
        std::env::set_var("SEALED_HTTP_JSON_INDENT", "2");

        let config = Config::from_env();
        assert_eq!(config.default_content_type, "application/vnd.api+json");
        assert_eq!(config.http_version, "2");
        assert_eq!(config.merge_policy, MergePolicy::OwnHeader);
        assert_eq!(config.json_indent, 2);

        // Unparsable values keep the defaults
        std::env::set_var("SEALED_HTTP_MERGE_POLICY", "sometimes");
        std::env::set_var("SEALED_HTTP_JSON_INDENT", "wide");
        std::env::set_var("SEALED_HTTP_VERSION", "   ");

        let config = Config::from_env();
        assert_eq!(config.merge_policy, MergePolicy::PairedHeader);
        assert_eq!(config.json_indent, 4);
        assert_eq!(config.http_version, "1.1");

        for var in VARS {
            std::env::remove_var(var);
        }
        assert_eq!(Config::from_env(), Config::default());
    }
}
