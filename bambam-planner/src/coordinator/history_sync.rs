use super::AddressBar;
use crate::codec::QueryCodec;
use crate::model::QueryState;

/// keeps the address bar equal to the shareable encoding of the current
/// query, anchored at the page location rather than at the API.
#[derive(Debug)]
pub struct HistorySync<A: AddressBar> {
    address_bar: A,
}

impl<A: AddressBar> HistorySync<A> {
    pub fn new(address_bar: A) -> HistorySync<A> {
        HistorySync { address_bar }
    }

    pub fn address_bar(&self) -> &A {
        &self.address_bar
    }

    /// writes the canonical page URL for `state` into the address bar,
    /// replacing the current entry. incomplete queries are written as well.
    /// returns false when the address bar already showed that URL.
    pub fn sync(&mut self, codec: &QueryCodec, state: &QueryState) -> bool {
        let current = self.address_bar.location();
        let link = codec.encode_url(&current, state);
        if link == current {
            return false;
        }
        log::debug!("replacing location with {link}");
        self.address_bar.replace(&link);
        true
    }
}

#[cfg(test)]
mod test {
    use super::HistorySync;
    use crate::codec::QueryCodec;
    use crate::config::QueryDefaults;
    use crate::coordinator::{AddressBar, MemoryAddressBar};
    use crate::model::{GeoPoint, QueryPatch, QueryState};
    use chrono::{DateTime, Utc};
    use url::Url;

    fn mock_state() -> QueryState {
        let time = DateTime::parse_from_rfc3339("2024-05-02T08:15:00Z")
            .expect("test invariant failed")
            .with_timezone(&Utc);
        QueryState::new(time, &QueryDefaults::default())
    }

    fn mock_history() -> HistorySync<MemoryAddressBar> {
        let page = Url::parse("http://localhost:8989/maps/pt/").expect("test invariant failed");
        HistorySync::new(MemoryAddressBar::new(page))
    }

    #[test]
    fn test_anchored_at_page() {
        let codec = QueryCodec::new("en-US", "pt");
        let mut history = mock_history();
        let mut state = mock_state();
        state.apply(&QueryPatch {
            origin: Some(Some(GeoPoint::new(52.5, 13.4).expect("test invariant failed"))),
            ..Default::default()
        });

        // incomplete queries are still written
        assert!(history.sync(&codec, &state));
        let location = history.address_bar().location();
        assert_eq!(location.path(), "/maps/pt/");
        assert_eq!(
            location.query_pairs().filter(|(k, _)| k == "point").count(),
            1
        );
    }

    #[test]
    fn test_replace_only_on_change() {
        let codec = QueryCodec::new("en-US", "pt");
        let mut history = mock_history();
        let mut state = mock_state();

        assert!(history.sync(&codec, &state));
        assert!(!history.sync(&codec, &state));
        assert_eq!(history.address_bar().replace_count(), 1);

        state.apply(&QueryPatch {
            ignore_transfers: Some(true),
            ..Default::default()
        });
        assert!(history.sync(&codec, &state));
        assert_eq!(history.address_bar().replace_count(), 2);
    }
}
