//! UI components: navigation bar, page body, auth placeholder.

pub mod auth;
pub mod common;
pub mod component;
pub mod nav_bar;
pub mod page;

pub use auth::AuthComponent;
pub(crate) use component::Component;
pub use nav_bar::NavBarComponent;
pub use page::PageComponent;
