//! Delivery block of the POS cart
//!
//! - view_model.rs: store access, pickers' rules, address commands
//! - view.rs: Leptos components

mod view;
mod view_model;

pub use view::DeliveryInfo;
pub use view_model::DeliveryInfoViewModel;
