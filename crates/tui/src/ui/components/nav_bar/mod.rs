//! Navigation menu.
//!
//! The fixed site menu is rendered two ways depending on [`NavLayout`]:
//! - Expanded: entries inline in the bar, Left/Right to select, Enter to go
//! - Collapsed: a trigger in the bar that opens [`MenuSheetComponent`]
//!
//! Both variants share [`NavBarState`], so the selection survives a layout
//! switch. Activation is reported as `Effect::Navigate`.
//!
//! [`NavLayout`]: crate::ui::layout::NavLayout

mod menu_sheet_component;
mod nav_bar_component;
mod state;

pub use menu_sheet_component::MenuSheetComponent;
pub use nav_bar_component::NavBarComponent;
pub use state::NavBarState;
