use super::view_model::ShopCategoryDetailsViewModel;
use crate::shared::components::debounce_select::DebounceSelect;
use crate::shared::icons::icon;
use contracts::domain::a002_category::aggregate::{
    CategoryFormMode, FIELD_DESCRIPTION, FIELD_IMAGES, FIELD_KEYWORDS, FIELD_POSITION,
};
use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn ShopCategoryDetails(mode: CategoryFormMode, on_saved: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ShopCategoryDetailsViewModel::new(mode);
    vm.load_if_needed();
    let on_saved = StoredValue::new_local(on_saved);

    let fetch_parents = move |search: String| async move { vm.search_parents(search).await };
    let error_line = move |field: &'static str| {
        move || vm.field_error(field).map(|e| view! { <div class="form-error">{e}</div> })
    };

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>{vm.title_text()}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form form-grid">
                <div class="form-group">
                    <Label>{"Name"}</Label>
                    <Input value=vm.title placeholder="Name" />
                    {move || vm.title_error().map(|e| view! { <div class="form-error">{e}</div> })}
                </div>

                <div class="form-group">
                    <Label>{"Description"}</Label>
                    <Textarea value=vm.description attr:rows=4 />
                    {error_line(FIELD_DESCRIPTION)}
                </div>

                <div class="form-group">
                    <label for="keywords">{"Keywords"}</label>
                    <div class="tags">
                        {move || vm.keywords.get().into_iter().map(|tag| {
                            let label = tag.clone();
                            view! {
                                <span class="tag">
                                    {label}
                                    <button class="button button--icon tag__remove" on:click=move |_| vm.remove_keyword(&tag)>
                                        {icon("x")}
                                    </button>
                                </span>
                            }
                        }).collect_view()}
                        // native input: Enter and comma turn the draft into a tag
                        <input
                            type="text"
                            id="keywords"
                            class="tags__input"
                            prop:value=move || vm.keyword_draft.get()
                            on:input=move |ev| vm.keyword_draft.set(event_target_value(&ev))
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                if ev.key() == "Enter" || ev.key() == "," {
                                    ev.prevent_default();
                                    vm.add_keyword();
                                }
                            }
                            on:blur=move |_| vm.add_keyword()
                        />
                    </div>
                    {error_line(FIELD_KEYWORDS)}
                </div>

                <Show when=move || mode.shows_parent_field()>
                    <div class="form-group">
                        <Label>{"Parent category"}</Label>
                        <DebounceSelect
                            fetch_options=fetch_parents
                            selected=Signal::derive(move || vm.parent_label.get())
                            on_select=Callback::new(move |opt| vm.select_parent(opt))
                            placeholder="Parent category"
                            allow_clear=true
                        />
                    </div>
                </Show>

                <div class="form-group">
                    <Label>{"Position"}</Label>
                    <Input input_type=InputType::Number value=vm.position attr:style="width: 100%;" />
                    {error_line(FIELD_POSITION)}
                </div>

                <div class="form-group">
                    <Label>{"Image"}</Label>
                    {move || {
                        let src = vm.image.get();
                        (!src.is_empty()).then(|| view! {
                            <div class="image-preview">
                                <img src=src alt="category" />
                                <button class="button button--icon" on:click=move |_| vm.image.set(String::new())>
                                    {icon("x")}
                                </button>
                            </div>
                        })
                    }}
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Input
                            input_type=InputType::Url
                            value=vm.image_draft
                            placeholder="https://..."
                            attr:style="flex: 1;"
                        />
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.attach_image()>
                            {icon("plus")}
                        </Button>
                    </Flex>
                    {error_line(FIELD_IMAGES)}
                </div>

                <div class="form-group">
                    <Checkbox checked=vm.active label="Active" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved.get_value())
                    disabled=Signal::derive(move || vm.loading.get())
                    loading=Signal::derive(move || vm.loading.get())
                >
                    {icon("save")}
                    {move || if vm.loading.get() { "Saving..." } else { "Submit" }}
                </Button>
            </div>
        </div>
    }
}
