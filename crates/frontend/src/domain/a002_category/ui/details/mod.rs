//! Shop category details UI module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, create, update)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub(crate) use model::fetch_shop_categories;
pub use view::ShopCategoryDetails;
pub use view_model::ShopCategoryDetailsViewModel;
