pub mod debounce_select;
pub mod delivery_date_picker;
pub mod time_picker;
