use url::Url;

/// the location shown to the user. it is read once when the planner starts
/// and afterwards only ever overwritten in place, so stepping back through
/// the history never visits intermediate edits.
pub trait AddressBar {
    fn location(&self) -> Url;

    /// replaces the current history entry. implementations must not add an
    /// entry.
    fn replace(&mut self, url: &Url);
}

/// an [`AddressBar`] held in memory, used by the command line planner and in
/// tests.
#[derive(Debug, Clone)]
pub struct MemoryAddressBar {
    location: Url,
    replace_count: usize,
}

impl MemoryAddressBar {
    pub fn new(location: Url) -> MemoryAddressBar {
        MemoryAddressBar {
            location,
            replace_count: 0,
        }
    }

    /// how many times the location has been replaced
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl AddressBar for MemoryAddressBar {
    fn location(&self) -> Url {
        self.location.clone()
    }

    fn replace(&mut self, url: &Url) {
        self.location = url.clone();
        self.replace_count += 1;
    }
}
