use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::duration_codec::{deserialize_optional_duration, serialize_optional_duration};
use super::QueryDefaults;
use crate::coordinator::{AuxiliaryTrigger, SelectionPolicy};
use crate::model::{query_field, PlannerError};

/// defines where the planner finds its routing server and how it reacts to
/// user input.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    /// scheme, host and port of the routing server
    pub base_url: String,
    /// location of the planner page, the anchor of shareable links
    pub page_url: String,
    pub route_endpoint: String,
    pub info_endpoint: String,
    pub locale: String,
    /// routing profile name sent with each request
    pub profile: String,
    pub selection_policy: SelectionPolicy,
    pub auxiliary_trigger: AuxiliaryTrigger,
    /// keep showing the previous paths while a new request is in flight
    pub retain_paths_while_fetching: bool,
    /// transport timeout of the http client, unbounded if not set
    #[serde(
        deserialize_with = "deserialize_optional_duration",
        serialize_with = "serialize_optional_duration"
    )]
    pub request_timeout: Option<Duration>,
    pub defaults: QueryDefaults,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8989"),
            page_url: String::from("http://localhost:8989/"),
            route_endpoint: String::from("/route"),
            info_endpoint: String::from("/info"),
            locale: String::from("en-US"),
            profile: String::from("pt"),
            selection_policy: SelectionPolicy::default(),
            auxiliary_trigger: AuxiliaryTrigger::default(),
            retain_paths_while_fetching: false,
            request_timeout: None,
            defaults: QueryDefaults::default(),
        }
    }
}

impl PlannerConfig {
    /// base of all route requests, e.g. `http://localhost:8989/route`
    pub fn route_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.route_endpoint)
    }

    pub fn info_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.info_endpoint)
    }

    pub fn page_location(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.page_url)
    }

    /// confirms that all configured URLs can be built.
    pub fn validate(&self) -> Result<(), PlannerError> {
        self.route_url().map_err(|e| {
            PlannerError::Configuration(format!(
                "invalid route url from '{}' + '{}': {e}",
                self.base_url, self.route_endpoint
            ))
        })?;
        self.info_url().map_err(|e| {
            PlannerError::Configuration(format!(
                "invalid info url from '{}' + '{}': {e}",
                self.base_url, self.info_endpoint
            ))
        })?;
        self.page_location().map_err(|e| {
            PlannerError::Configuration(format!("invalid page url '{}': {e}", self.page_url))
        })?;
        let defaults = &self.defaults;
        for (field, name) in [
            ("access_profile", &defaults.access_profile),
            ("egress_profile", &defaults.egress_profile),
        ] {
            match query_field::profile_name(name) {
                Ok(valid) if &valid == name => {}
                Ok(_) => {
                    return Err(PlannerError::Configuration(format!(
                        "defaults.{field} '{name}' has surrounding whitespace"
                    )))
                }
                Err(e) => {
                    return Err(PlannerError::Configuration(format!("defaults.{field}: {e}")))
                }
            }
        }
        for (field, beta) in [
            ("beta_access_time", defaults.beta_access_time),
            ("beta_egress_time", defaults.beta_egress_time),
        ] {
            query_field::beta(beta)
                .map_err(|e| PlannerError::Configuration(format!("defaults.{field}: {e}")))?;
        }
        Ok(())
    }
}

impl TryFrom<&String> for PlannerConfig {
    type Error = PlannerError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f)
            .map_err(|e| PlannerError::Configuration(format!("failure reading {f}: {e}")))?;
        let config: PlannerConfig = if f.ends_with(".toml") {
            toml::from_str(&s)
                .map_err(|e| PlannerError::Configuration(format!("failure decoding {f}: {e}")))?
        } else if f.ends_with(".json") {
            serde_json::from_str(&s)
                .map_err(|e| PlannerError::Configuration(format!("failure decoding {f}: {e}")))?
        } else {
            return Err(PlannerError::Configuration(format!(
                "unsupported file type: {f}"
            )));
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::PlannerConfig;
    use crate::coordinator::{AuxiliaryTrigger, SelectionPolicy};
    use std::time::Duration;

    #[test]
    fn test_default_urls() {
        let config = PlannerConfig::default();
        assert_eq!(
            config.route_url().expect("test failed").as_str(),
            "http://localhost:8989/route"
        );
        assert_eq!(
            config.info_url().expect("test failed").as_str(),
            "http://localhost:8989/info"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: PlannerConfig = toml::from_str(
            r#"
            base_url = "https://transit.example.org"
            selection_policy = "feasible_only"
            auxiliary_trigger = "refetch"
            request_timeout = "45s"

            [defaults]
            access_profile = "bike"
            limit_street_time = "PT20M"
            "#,
        )
        .expect("test failed");
        assert_eq!(config.base_url, "https://transit.example.org");
        assert_eq!(config.route_endpoint, "/route");
        assert_eq!(config.selection_policy, SelectionPolicy::FeasibleOnly);
        assert_eq!(config.auxiliary_trigger, AuxiliaryTrigger::Refetch);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
        assert_eq!(config.defaults.access_profile, "bike");
        assert_eq!(config.defaults.egress_profile, "foot");
        assert_eq!(config.defaults.limit_street_time.as_str(), "PT20M");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = PlannerConfig {
            base_url: String::from("not a url"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_defaults() {
        let mut config = PlannerConfig::default();
        config.defaults.beta_egress_time = -0.5;
        assert!(config.validate().is_err());

        let mut config = PlannerConfig::default();
        config.defaults.access_profile = String::from(" foot");
        assert!(config.validate().is_err());

        let oversized = toml::from_str::<PlannerConfig>(
            r#"
            [defaults]
            limit_street_time = "PT9999999999999999S"
            "#,
        );
        assert!(oversized.is_err());
    }
}
