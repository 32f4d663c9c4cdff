use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Path prefix for product detail pages.
pub const PRODUCT_ROUTE_PREFIX: &str = "/shoplist";

/// Path the cart icon links to.
pub const CART_ROUTE: &str = "/cart";

/// A sellable item as returned by the content source.
///
/// The slug is unique within a catalog and doubles as the route key for the
/// product detail page. Missing or `null` text fields decode as empty strings
/// so a single sloppy document does not fail the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub slug: String,
    /// Direct image URL, resolved by the content query itself.
    #[serde(rename = "image", default, deserialize_with = "string_or_null")]
    pub image_url: String,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        slug: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            slug: slug.into(),
            image_url: image_url.into(),
        }
    }

    /// Route of the product detail page for this item.
    ///
    /// An empty slug yields `/shoplist/`; that is a dead link caused by
    /// upstream data, not an error.
    pub fn detail_route(&self) -> Route {
        Route::new(format!("{PRODUCT_ROUTE_PREFIX}/{}", self.slug))
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A path handed to the router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown for the entry (e.g., "Menu").
    pub label: String,
    /// Route requested when the entry is activated.
    pub route: Route,
}

impl NavItem {
    pub fn new(label: impl Into<String>, route: impl Into<Route>) -> Self {
        Self {
            label: label.into(),
            route: route.into(),
        }
    }
}

/// The fixed, ordered navigation menu shared by both layouts.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/"),
        NavItem::new("Menu", "/menu"),
        NavItem::new("Blog", "/blog"),
        NavItem::new("Chef", "/chef"),
        NavItem::new("About", "/about"),
        NavItem::new("Shop", "/shoplist"),
        NavItem::new("Contact", "/SignUp"),
    ]
}

/// Messages delivered to the application from input and background tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Terminal was resized to (columns, rows)
    Resize(u16, u16),
    /// The one-shot catalog fetch succeeded
    CatalogLoaded(Vec<CatalogItem>),
    /// The one-shot catalog fetch failed; payload is the rendered error
    CatalogFailed(String),
    /// The cart poller observed a (possibly unchanged) distinct-key count
    CartCountChanged(usize),
}

/// Side effects requested by components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the router to navigate to a path
    Navigate(Route),
    /// Open the collapsed-layout menu overlay
    OpenMenu,
    /// Close the collapsed-layout menu overlay
    CloseMenu,
    /// Leave the application
    Quit,
}
