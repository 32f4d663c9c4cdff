//! UI components: navigation menu, search box, cart badge, page and hints.

pub mod cart_badge;
pub mod common;
pub mod component;
pub mod hint_bar;
pub mod nav_bar;
pub mod page;
pub mod search;

pub use cart_badge::CartBadgeComponent;
pub use component::Component;
pub use hint_bar::HintBarComponent;
pub use nav_bar::{MenuSheetComponent, NavBarComponent};
pub use page::PageComponent;
pub use search::SearchComponent;
