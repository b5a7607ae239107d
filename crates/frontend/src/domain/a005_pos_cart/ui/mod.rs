pub mod delivery_info;
pub mod pos_page;
