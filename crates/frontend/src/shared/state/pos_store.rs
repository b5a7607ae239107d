//! Client-side store for the POS screen
//!
//! Holds every open cart bag and the shop the cashier currently sells for.
//! Pages read and write through these signals; requests write their
//! results here and the last write wins.

use contracts::domain::a001_shop::aggregate::Shop;
use contracts::domain::a005_pos_cart::aggregate::CartBag;
use contracts::domain::a005_pos_cart::delivery_schedule::ClosedDateSet;
use crate::shared::date_utils::now_local;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PosStore {
    pub bags: RwSignal<Vec<CartBag>>,
    pub current_bag: RwSignal<u32>,
    /// Shop selected in the current bag (loaded by uuid)
    pub current_shop: RwSignal<Option<Shop>>,
    /// Seller's own shop, used by the subscriptions page
    pub my_shop: RwSignal<Option<Shop>>,
}

impl PosStore {
    pub fn new() -> Self {
        Self {
            bags: RwSignal::new(vec![CartBag::new(0)]),
            current_bag: RwSignal::new(0),
            current_shop: RwSignal::new(None),
            my_shop: RwSignal::new(None),
        }
    }

    /// Reactive snapshot of the current bag
    pub fn cart(&self) -> CartBag {
        let id = self.current_bag.get();
        self.bags
            .with(|bags| bags.iter().find(|b| b.bag_id == id).cloned())
            .unwrap_or_else(|| CartBag::new(id))
    }

    /// Mutate the current bag, creating it if it does not exist yet
    pub fn update_cart(&self, f: impl FnOnce(&mut CartBag)) {
        let id = self.current_bag.get_untracked();
        self.bags.update(|bags| {
            if let Some(bag) = bags.iter_mut().find(|b| b.bag_id == id) {
                f(bag);
            } else {
                let mut bag = CartBag::new(id);
                f(&mut bag);
                bags.push(bag);
            }
        });
    }

    /// Try a fallible mutation on a copy; commit only on success
    pub fn try_update_cart<E>(&self, f: impl FnOnce(&mut CartBag) -> Result<(), E>) -> Result<(), E> {
        let mut bag = self.cart_untracked();
        f(&mut bag)?;
        self.update_cart(move |current| *current = bag);
        Ok(())
    }

    pub fn cart_untracked(&self) -> CartBag {
        let id = self.current_bag.get_untracked();
        self.bags
            .with_untracked(|bags| bags.iter().find(|b| b.bag_id == id).cloned())
            .unwrap_or_else(|| CartBag::new(id))
    }

    /// Replace the active shop wholesale (its closed dates come with it)
    ///
    /// The current bag follows: its delivery fee takes the new price and a
    /// chosen date or time the new schedule blocks is dropped.
    pub fn set_current_shop(&self, shop: Option<Shop>) {
        log::debug!(
            "active shop -> {:?}",
            shop.as_ref().map(|s| s.uuid.to_string())
        );
        let price = shop.as_ref().map(|s| s.price).unwrap_or(0.0);
        let closed = shop.as_ref().map(Shop::closed_dates).unwrap_or_default();
        self.current_shop.set(shop);
        let now = now_local();
        self.update_cart(|bag| {
            if bag.apply_shop_schedule(price, &closed, now) {
                log::info!("bag {}: delivery slot dropped by the shop schedule", bag.bag_id);
            }
        });
    }

    /// Reactive: closed dates of the active shop
    pub fn closed_dates(&self) -> ClosedDateSet {
        self.current_shop
            .with(|shop| shop.as_ref().map(Shop::closed_dates))
            .unwrap_or_default()
    }

    /// Delivery price of the active shop, read without subscribing
    pub fn shop_delivery_price(&self) -> f64 {
        self.current_shop
            .with_untracked(|shop| shop.as_ref().map(|s| s.price))
            .unwrap_or(0.0)
    }
}
