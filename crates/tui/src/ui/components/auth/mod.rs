//! Placeholder screen shown for the `/auth` route.

mod auth_component;

pub use auth_component::AuthComponent;
