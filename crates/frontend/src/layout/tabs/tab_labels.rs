//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a002_category::aggregate::{CategoryFormMode, CategoryId};
use contracts::domain::common::AggregateId;

pub mod tab_keys {
    pub const POS_SYSTEM: &str = "pos_system";
    pub const SHOP_CATEGORIES: &str = "shop_categories";
    pub const SHOP_CATEGORY_NEW: &str = "shop_category_new";
    pub const SHOP_CATEGORY_EDIT_PREFIX: &str = "shop_category_edit_";
    pub const SHOP_CATEGORY_EDIT_PARENT_PREFIX: &str = "shop_category_edit_parent_";
    pub const SHOP_CATEGORY_CLONE_PREFIX: &str = "shop_category_clone_";
    pub const SELLER_SUBSCRIPTIONS: &str = "seller_subscriptions";
}

/// Разобранный ключ таба
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute {
    PosSystem,
    ShopCategories,
    ShopCategoryForm(CategoryFormMode),
    SellerSubscriptions,
}

impl TabRoute {
    pub fn parse(key: &str) -> Option<Self> {
        use tab_keys::*;
        match key {
            POS_SYSTEM => return Some(TabRoute::PosSystem),
            SHOP_CATEGORIES => return Some(TabRoute::ShopCategories),
            SHOP_CATEGORY_NEW => return Some(TabRoute::ShopCategoryForm(CategoryFormMode::Create)),
            SELLER_SUBSCRIPTIONS => return Some(TabRoute::SellerSubscriptions),
            _ => {}
        }
        // parent prefix is longer and shares the edit prefix, check it first
        if let Some(id) = key.strip_prefix(SHOP_CATEGORY_EDIT_PARENT_PREFIX) {
            let uuid = CategoryId::from_string(id).ok()?;
            return Some(TabRoute::ShopCategoryForm(CategoryFormMode::Edit {
                uuid,
                is_parent: true,
            }));
        }
        if let Some(id) = key.strip_prefix(SHOP_CATEGORY_EDIT_PREFIX) {
            let uuid = CategoryId::from_string(id).ok()?;
            return Some(TabRoute::ShopCategoryForm(CategoryFormMode::Edit {
                uuid,
                is_parent: false,
            }));
        }
        if let Some(id) = key.strip_prefix(SHOP_CATEGORY_CLONE_PREFIX) {
            let uuid = CategoryId::from_string(id).ok()?;
            return Some(TabRoute::ShopCategoryForm(CategoryFormMode::Duplicate { uuid }));
        }
        None
    }

    /// Ключ таба формы категории для режима
    pub fn category_form_key(mode: CategoryFormMode) -> String {
        use tab_keys::*;
        match mode {
            CategoryFormMode::Create => SHOP_CATEGORY_NEW.to_string(),
            CategoryFormMode::Edit { uuid, is_parent: true } => {
                format!("{}{}", SHOP_CATEGORY_EDIT_PARENT_PREFIX, uuid.as_string())
            }
            CategoryFormMode::Edit { uuid, is_parent: false } => {
                format!("{}{}", SHOP_CATEGORY_EDIT_PREFIX, uuid.as_string())
            }
            CategoryFormMode::Duplicate { uuid } => {
                format!("{}{}", SHOP_CATEGORY_CLONE_PREFIX, uuid.as_string())
            }
        }
    }
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: «Page».
pub fn tab_label_for_key(key: &str) -> &'static str {
    match TabRoute::parse(key) {
        Some(TabRoute::PosSystem) => "POS system",
        Some(TabRoute::ShopCategories) => "Shop categories",
        Some(TabRoute::ShopCategoryForm(CategoryFormMode::Create)) => "Add category",
        Some(TabRoute::ShopCategoryForm(CategoryFormMode::Edit { .. })) => "Edit category",
        Some(TabRoute::ShopCategoryForm(CategoryFormMode::Duplicate { .. })) => "Clone category",
        Some(TabRoute::SellerSubscriptions) => "Subscriptions",
        None => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_keys() {
        assert_eq!(TabRoute::parse("pos_system"), Some(TabRoute::PosSystem));
        assert_eq!(TabRoute::parse("seller_subscriptions"), Some(TabRoute::SellerSubscriptions));
        assert_eq!(TabRoute::parse("unknown"), None);
        assert_eq!(tab_label_for_key("unknown"), "Page");
    }

    #[test]
    fn test_category_form_keys_round_trip() {
        let uuid = CategoryId::new_v4();
        for mode in [
            CategoryFormMode::Create,
            CategoryFormMode::Edit { uuid, is_parent: false },
            CategoryFormMode::Edit { uuid, is_parent: true },
            CategoryFormMode::Duplicate { uuid },
        ] {
            let key = TabRoute::category_form_key(mode);
            assert_eq!(TabRoute::parse(&key), Some(TabRoute::ShopCategoryForm(mode)));
        }
        assert_eq!(TabRoute::parse("shop_category_edit_garbage"), None);
    }
}
