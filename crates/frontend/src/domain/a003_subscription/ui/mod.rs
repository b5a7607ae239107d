pub mod list;
pub mod purchase_modal;
