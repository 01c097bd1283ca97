use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use super::query_param as param;
use super::CodecError;
use crate::model::{query_field, GeoPoint, IsoDuration, QueryPatch, QueryState, TimeMode};

/// translates between a [`QueryState`] and the query string understood by the
/// routing server. the same encoding is used for API requests and for the
/// shareable page URL, only the base differs.
///
/// parameters are always written in the same order so that two equal states
/// produce byte-identical URLs. the resulting string doubles as the identity
/// of a request when deciding whether a response is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCodec {
    locale: String,
    profile: String,
}

impl QueryCodec {
    pub fn new(locale: &str, profile: &str) -> QueryCodec {
        QueryCodec {
            locale: locale.to_string(),
            profile: profile.to_string(),
        }
    }

    /// writes the state onto `base`, replacing any query and fragment it had.
    /// endpoints that are not set are omitted, so a query with only a
    /// destination is written as a single `point` and reads back as an origin.
    pub fn encode_url(&self, base: &Url, state: &QueryState) -> Url {
        let mut url = base.clone();
        url.set_fragment(None);
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for point in [&state.origin, &state.destination].into_iter().flatten() {
                pairs.append_pair(param::POINT, &point.to_string());
            }
            let time = state
                .departure_or_arrival_time
                .to_rfc3339_opts(SecondsFormat::Secs, true);
            pairs
                .append_pair(param::EARLIEST_DEPARTURE_TIME, &time)
                .append_pair(param::ARRIVE_BY, &state.time_mode.is_arrive_by().to_string())
                .append_pair(param::PROFILE_QUERY, &state.range_query.to_string())
                .append_pair(param::PROFILE_DURATION, state.range_query_duration.as_str())
                .append_pair(param::ACCESS_PROFILE, &state.access_profile)
                .append_pair(param::BETA_ACCESS_TIME, &state.beta_access_time.to_string())
                .append_pair(param::EGRESS_PROFILE, &state.egress_profile)
                .append_pair(param::BETA_EGRESS_TIME, &state.beta_egress_time.to_string())
                .append_pair(param::LIMIT_STREET_TIME, state.limit_street_time.as_str())
                .append_pair(param::IGNORE_TRANSFERS, &state.ignore_transfers.to_string())
                .append_pair(param::LOCALE, &self.locale)
                .append_pair(param::PROFILE, &self.profile);
        }
        url
    }

    pub fn encode(&self, base: &Url, state: &QueryState) -> String {
        self.encode_url(base, state).to_string()
    }

    /// reads whatever can be recovered from the query of `url`. unknown keys
    /// are ignored and malformed values are skipped with a warning, so this
    /// never fails. the first `point` is the origin, the second the
    /// destination, and a malformed first point does not shift the second.
    pub fn decode(&self, url: &Url) -> QueryPatch {
        let mut patch = QueryPatch::default();
        let mut points: Vec<Option<GeoPoint>> = vec![];
        for (key, value) in url.query_pairs() {
            let value = value.as_ref();
            match key.as_ref() {
                param::POINT => points.push(parse_value(param::POINT, value)),
                param::EARLIEST_DEPARTURE_TIME => {
                    patch.departure_or_arrival_time = parse_time(value);
                }
                param::ARRIVE_BY => {
                    patch.time_mode =
                        parse_value::<bool>(param::ARRIVE_BY, value).map(TimeMode::from_arrive_by);
                }
                param::PROFILE_QUERY => {
                    patch.range_query = parse_value(param::PROFILE_QUERY, value);
                }
                param::PROFILE_DURATION => {
                    patch.range_query_duration =
                        parse_value::<IsoDuration>(param::PROFILE_DURATION, value);
                }
                param::ACCESS_PROFILE => {
                    patch.access_profile = parse_name(param::ACCESS_PROFILE, value);
                }
                param::EGRESS_PROFILE => {
                    patch.egress_profile = parse_name(param::EGRESS_PROFILE, value);
                }
                param::BETA_ACCESS_TIME => {
                    patch.beta_access_time = parse_beta(param::BETA_ACCESS_TIME, value);
                }
                param::BETA_EGRESS_TIME => {
                    patch.beta_egress_time = parse_beta(param::BETA_EGRESS_TIME, value);
                }
                param::LIMIT_STREET_TIME => {
                    patch.limit_street_time =
                        parse_value::<IsoDuration>(param::LIMIT_STREET_TIME, value);
                }
                param::IGNORE_TRANSFERS => {
                    patch.ignore_transfers = parse_value(param::IGNORE_TRANSFERS, value);
                }
                _ => {}
            }
        }
        if points.len() > 2 {
            log::warn!(
                "query has {} '{}' parameters, only the first two are used",
                points.len(),
                param::POINT
            );
        }
        if let Some(Some(origin)) = points.first() {
            patch.origin = Some(Some(*origin));
        }
        if let Some(Some(destination)) = points.get(1) {
            patch.destination = Some(Some(*destination));
        }
        patch
    }

    /// like [`QueryCodec::decode`], accepting either an absolute URL or a bare
    /// query string (with or without the leading `?`).
    pub fn decode_str(&self, s: &str) -> Result<QueryPatch, CodecError> {
        let url = match Url::parse(s) {
            Ok(url) => url,
            Err(_) => {
                let query = s.trim().trim_start_matches('?');
                let mut url = Url::parse("http://localhost/")
                    .map_err(|e| CodecError::InvalidUrl(s.to_string(), e.to_string()))?;
                url.set_query(Some(query));
                url
            }
        };
        Ok(self.decode(&url))
    }
}

fn parse_value<T>(key: &str, value: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match T::from_str(value.trim()) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring query parameter {key}={value}: {e}");
            None
        }
    }
}

fn parse_time(value: &str) -> Option<DateTime<Utc>> {
    parse_value::<DateTime<chrono::FixedOffset>>(param::EARLIEST_DEPARTURE_TIME, value)
        .map(|t| t.with_timezone(&Utc))
}

fn parse_name(key: &str, value: &str) -> Option<String> {
    accept(key, value, query_field::profile_name(value))
}

fn parse_beta(key: &str, value: &str) -> Option<f64> {
    parse_value::<f64>(key, value).and_then(|beta| accept(key, value, query_field::beta(beta)))
}

fn accept<T>(key: &str, value: &str, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring query parameter {key}={value}: {e}");
            None
        }
    }
}
