use std::fmt;

use dcs_shared::ValidationError;

/// Location of the embedded app's router, split like a browser location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub pathname: String,
    /// Query string including its leading `?`, or empty.
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Splits a path-and-query string such as `/docs/intro?dcs-layout=3`.
    /// A fragment, if any, is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.find('?') {
            Some(index) => {
                let (pathname, search) = url.split_at(index);
                let search = if search == "?" { "" } else { search };
                Self::new(pathname, search)
            }
            None => Self::new(url, ""),
        }
    }

    pub fn matches(&self, pathname: &str, search: &str) -> bool {
        self.pathname == pathname && self.search == search
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}

/// Handle returned by [`InternalRouter::listen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Called on every location change. An error aborts the navigation that
/// caused it.
pub type LocationListener = Box<dyn Fn(&Location) -> Result<(), ValidationError>>;

/// The embedded app's own history-backed router.
pub trait InternalRouter {
    fn location(&self) -> Location;

    /// Registers a listener for subsequent location changes. The current
    /// location is not replayed.
    fn listen(&self, listener: LocationListener) -> ListenerId;

    fn unlisten(&self, id: ListenerId);

    /// Navigates without growing the back stack. Implementations notify
    /// listeners even when `url` equals the current location.
    fn replace(&self, url: &str);
}
