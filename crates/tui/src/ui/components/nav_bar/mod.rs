//! Top navigation bar: brand, desktop link row, mobile toggle and overlay.
//!
//! The component is a thin view over the navigation snapshot. Link styling
//! comes from the snapshot's link variants; geometry comes from
//! [`NavBarLayout`], which the app recomputes on resize and also uses for the
//! outside-click bounds.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::{BRAND_TEXT, LayoutMode, NavBarLayout, NavBarState, NavBarTarget, TAGLINE, pill_width};
