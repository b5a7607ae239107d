pub mod a001_shop;
pub mod a002_category;
pub mod a003_subscription;
pub mod a004_user_address;
pub mod a005_pos_cart;
pub mod a006_client;
