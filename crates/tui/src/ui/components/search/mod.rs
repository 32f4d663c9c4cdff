//! Product search box and its results dropdown.

mod search_component;
mod state;

pub use search_component::SearchComponent;
pub use state::SearchBoxState;
