use crate::domain::a001_shop::api::fetch_shop;
use crate::domain::a004_user_address::api::{create_address, search_addresses, to_select_options};
use crate::shared::components::debounce_select::SelectOption;
use crate::shared::date_utils::now_local;
use crate::shared::state::pos_store::PosStore;
use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a001_shop::aggregate::ShopId;
use contracts::domain::a004_user_address::aggregate::UserAddress;
use contracts::domain::a005_pos_cart::delivery_mode::DeliveryMode;
use contracts::domain::a005_pos_cart::delivery_schedule::{self, DisabledTime};
use contracts::domain::a006_client::aggregate::NewUserAddress;
use leptos::prelude::*;

/// ViewModel for the delivery block of the POS cart
#[derive(Clone, Copy)]
pub struct DeliveryInfoViewModel {
    pub store: PosStore,
    /// Last address search answer, used to resolve the picked option
    pub addresses: RwSignal<Vec<UserAddress>>,
    pub error: RwSignal<Option<String>>,
    pub show_add_address: RwSignal<bool>,
    pub new_address: NewAddressFields,
    pub saving_address: RwSignal<bool>,
}

/// Raw inputs of the add-address dialog
#[derive(Clone, Copy)]
pub struct NewAddressFields {
    pub user_id: RwSignal<String>,
    pub title: RwSignal<String>,
    pub address: RwSignal<String>,
    pub lat: RwSignal<String>,
    pub lng: RwSignal<String>,
}

impl NewAddressFields {
    fn new() -> Self {
        Self {
            user_id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            lat: RwSignal::new(String::new()),
            lng: RwSignal::new(String::new()),
        }
    }

    fn reset(&self, user_id: String) {
        self.user_id.set(user_id);
        for field in [self.title, self.address, self.lat, self.lng] {
            field.set(String::new());
        }
    }

    fn to_body(&self) -> NewUserAddress {
        NewUserAddress::from_input(
            &self.user_id.get_untracked(),
            &self.title.get_untracked(),
            &self.address.get_untracked(),
            &self.lat.get_untracked(),
            &self.lng.get_untracked(),
        )
    }
}

impl DeliveryInfoViewModel {
    pub fn new() -> Self {
        let store = use_context::<PosStore>().expect("PosStore not found in context");
        Self {
            store,
            addresses: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            show_add_address: RwSignal::new(false),
            new_address: NewAddressFields::new(),
            saving_address: RwSignal::new(false),
        }
    }

    /// Reload the shop (and its closed dates) whenever the bag's shop changes
    pub fn watch_shop(&self) {
        let store = self.store;
        let error = self.error;
        Effect::new(move |previous: Option<Option<ShopId>>| {
            let shop = store.cart().shop;
            if previous.as_ref() == Some(&shop) {
                return shop;
            }
            match shop {
                Some(uuid) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        match fetch_shop(uuid).await {
                            // the bag may have moved on while the request was in flight
                            Ok(loaded) if store.cart_untracked().shop == Some(uuid) => {
                                store.set_current_shop(Some(loaded))
                            }
                            Ok(_) => log::debug!("shop {} loaded for a stale selection", uuid),
                            Err(e) => {
                                log::error!("failed to load shop {}: {}", uuid, e);
                                error.set(Some(e.message));
                            }
                        }
                    });
                }
                None => store.set_current_shop(None),
            }
            shop
        });
    }

    pub fn mode(&self) -> Option<DeliveryMode> {
        self.store.cart().deliveries
    }

    pub fn is_delivery(&self) -> bool {
        self.store.cart().is_delivery()
    }

    pub fn change_mode(&self, raw: &str) {
        let mode = DeliveryMode::from_value(raw);
        let price = self.store.shop_delivery_price();
        log::debug!("delivery mode -> {:?}", mode);
        self.store
            .update_cart(|bag| bag.set_delivery_mode(mode, price));
        self.error.set(None);
    }

    /// Label of the chosen address; hidden once the address is cleared
    pub fn address_label(&self) -> Option<String> {
        let bag = self.store.cart();
        bag.address
            .as_ref()
            .and(bag.delivery_address.as_ref())
            .map(|l| l.label.clone())
    }

    pub async fn search_addresses(self, search: String) -> Result<Vec<SelectOption>, String> {
        let found = search_addresses(&search).await.map_err(|e| e.to_string())?;
        let options = to_select_options(&found);
        self.addresses.set(found);
        Ok(options)
    }

    pub fn select_address(&self, option: Option<SelectOption>) {
        let Some(option) = option else {
            self.store.update_cart(|bag| bag.select_address(None));
            return;
        };
        let picked = self.addresses.with_untracked(|list| {
            list.iter()
                .find(|a| a.id.to_string() == option.value)
                .cloned()
        });
        match picked {
            Some(address) => self
                .store
                .update_cart(|bag| bag.select_address(Some(&address))),
            None => log::warn!("address option {} is no longer in the list", option.value),
        }
    }

    /// Reactive: closed shop days and days before today cannot be picked
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        delivery_schedule::is_date_disabled(date, &self.store.closed_dates(), now_local())
    }

    pub fn change_date(&self, date: NaiveDate) {
        let closed = self
            .store
            .current_shop
            .with_untracked(|shop| shop.as_ref().map(|s| s.closed_dates()))
            .unwrap_or_default();
        let result = self
            .store
            .try_update_cart(|bag| bag.set_delivery_date(date, &closed, now_local()));
        self.report(result);
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.store.cart().delivery_date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.store.cart().delivery_time
    }

    pub fn disabled_time(&self) -> DisabledTime {
        delivery_schedule::disabled_time(self.date(), now_local())
    }

    pub fn change_time(&self, time: NaiveTime) {
        let result = self
            .store
            .try_update_cart(|bag| bag.set_delivery_time(time, now_local()));
        self.report(result);
    }

    fn report<E: std::fmt::Display>(&self, result: Result<(), E>) {
        match result {
            Ok(()) => self.error.set(None),
            Err(e) => {
                log::warn!("delivery field rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    /// Open the add-address modal for the bag's client
    pub fn open_add_address(&self) {
        let Some(user_uuid) = self.store.cart_untracked().user_uuid else {
            self.error.set(Some("Please select client".to_string()));
            return;
        };
        self.new_address.reset(user_uuid);
        self.show_add_address.set(true);
    }

    pub fn save_new_address(&self) {
        let body = self.new_address.to_body();
        if let Err(e) = body.validate() {
            self.error.set(Some(e));
            return;
        }
        let this = *self;
        this.saving_address.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = create_address(&body).await;
            this.saving_address.set(false);
            match result {
                Ok(created) => {
                    log::info!("address {} created", created.id);
                    this.store
                        .update_cart(|bag| bag.select_address(Some(&created)));
                    this.addresses.update(|list| list.insert(0, created));
                    this.show_add_address.set(false);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("failed to create address: {}", e);
                    this.error.set(Some(e.message));
                }
            }
        });
    }
}
