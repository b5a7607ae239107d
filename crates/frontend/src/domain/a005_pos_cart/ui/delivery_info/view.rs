use super::view_model::DeliveryInfoViewModel;
use crate::shared::components::debounce_select::DebounceSelect;
use crate::shared::components::delivery_date_picker::DeliveryDatePicker;
use crate::shared::components::time_picker::TimePicker;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a005_pos_cart::delivery_mode::DeliveryMode;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DeliveryInfo() -> impl IntoView {
    let vm = DeliveryInfoViewModel::new();
    vm.watch_shop();

    let fetch_addresses = move |search: String| async move { vm.search_addresses(search).await };

    view! {
        <Card class="delivery-info">
            <div class="card__header">
                <h3>{"Delivery"}</h3>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form-group">
                <label for="deliveries">{"Delivery type"}</label>
                <select
                    id="deliveries"
                    class="w-100"
                    prop:value=move || vm.mode().map(|m| m.value()).unwrap_or("")
                    on:change=move |ev| vm.change_mode(&event_target_value(&ev))
                >
                    <option value="" disabled=true>{"Delivery type"}</option>
                    {DeliveryMode::ALL
                        .into_iter()
                        .map(|mode| view! { <option value=mode.value()>{mode.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || vm.is_delivery()>
                <div class="form-group">
                    <label>{"Address"}</label>
                    <Flex class="delivery-info__address" gap=FlexGap::Small align=FlexAlign::Center>
                        <DebounceSelect
                            fetch_options=fetch_addresses
                            selected=Signal::derive(move || vm.address_label())
                            on_select=Callback::new(move |opt| vm.select_address(opt))
                            placeholder="Select address"
                            allow_clear=true
                        />
                        <Button
                            appearance=ButtonAppearance::Secondary
                            attr:title="Add address"
                            on_click=move |_| vm.open_add_address()
                        >
                            {icon("plus")}
                        </Button>
                    </Flex>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>{"Delivery date"}</label>
                        <DeliveryDatePicker
                            value=Signal::derive(move || vm.date())
                            is_disabled=Callback::new(move |date| vm.is_date_disabled(date))
                            on_change=Callback::new(move |date| vm.change_date(date))
                            placeholder="Delivery date"
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Delivery time"}</label>
                        <TimePicker
                            value=Signal::derive(move || vm.time())
                            disabled_time=Signal::derive(move || vm.disabled_time())
                            disabled=Signal::derive(move || vm.date().is_none())
                            on_change=Callback::new(move |time| vm.change_time(time))
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || vm.show_add_address.get()>
                <AddAddressModal vm=vm />
            </Show>
        </Card>
    }
}

#[component]
fn AddAddressModal(vm: DeliveryInfoViewModel) -> impl IntoView {
    let fields = vm.new_address;

    view! {
        <Modal title="Add address" on_close=Callback::new(move |_| vm.show_add_address.set(false))>
            <div class="details-form">
                <div class="form-group">
                    <Label>{"Title"}</Label>
                    <Input value=fields.title placeholder="Home, work..." />
                </div>
                <div class="form-group">
                    <Label>{"Address"}</Label>
                    <Input value=fields.address />
                </div>
                <Flex class="form-row" gap=FlexGap::Large>
                    <div class="form-group">
                        <Label>{"Latitude"}</Label>
                        <Input input_type=InputType::Number value=fields.lat attr:step="any" />
                    </div>
                    <div class="form-group">
                        <Label>{"Longitude"}</Label>
                        <Input input_type=InputType::Number value=fields.lng attr:step="any" />
                    </div>
                </Flex>
            </div>
            <Flex class="details-actions" gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_new_address()
                    disabled=Signal::derive(move || vm.saving_address.get())
                    loading=Signal::derive(move || vm.saving_address.get())
                >
                    {icon("save")}
                    {move || if vm.saving_address.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.show_add_address.set(false)>
                    {"Cancel"}
                </Button>
            </Flex>
        </Modal>
    }
}
