use crate::client::Auth;

/// The four console checks, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// Console landing page; body must contain the title marker.
    Homepage,
    /// `/api/overview` behind Basic auth; reports the broker version.
    ApiOverview,
    /// Bundled script asset.
    Script,
    /// Bundled stylesheet asset.
    Stylesheet,
}

impl CheckKind {
    pub const ALL: [Self; 4] = [
        Self::Homepage,
        Self::ApiOverview,
        Self::Script,
        Self::Stylesheet,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Homepage => "/",
            Self::ApiOverview => "/api/overview",
            Self::Script => "/js/main.js",
            Self::Stylesheet => "/css/main.css",
        }
    }

    /// Short label used as the prefix of printed lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Homepage => "Homepage",
            Self::ApiOverview => "API",
            Self::Script => "JavaScript",
            Self::Stylesheet => "CSS",
        }
    }

    pub fn auth(self) -> Auth {
        match self {
            Self::ApiOverview => Auth::Basic,
            Self::Homepage | Self::Script | Self::Stylesheet => Auth::Anonymous,
        }
    }

    /// Identifier used in log event names.
    pub fn event_key(self) -> &'static str {
        match self {
            Self::Homepage => "homepage",
            Self::ApiOverview => "api_overview",
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/check.rs"]
mod tests;
