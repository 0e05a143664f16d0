//! Scrollable view of the events page.

mod page_component;

pub use page_component::PageComponent;
