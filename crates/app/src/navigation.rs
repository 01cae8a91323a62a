//! Tab navigation: which resource panel is on screen.

use std::fmt;
use std::str::FromStr;

/// One tab of the panel, each backed by a resource page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    Cities,
    Categories,
    #[default]
    Services,
    Users,
}

impl Tab {
    /// Tabs in navigation-bar order.
    pub const ALL: [Self; 4] = [Self::Cities, Self::Categories, Self::Services, Self::Users];

    /// Identifier used in route paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cities => "cities",
            Self::Categories => "categories",
            Self::Services => "services",
            Self::Users => "users",
        }
    }

    /// Navigation-bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cities => "Cities",
            Self::Categories => "Categories",
            Self::Services => "Services",
            Self::Users => "Users",
        }
    }

    /// Absolute route path, e.g. `/cities`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tab identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}
