use super::model;
use crate::shared::components::debounce_select::SelectOption;
use contracts::domain::a002_category::aggregate::{
    parent_options, split_keywords, CategoryFieldError, CategoryForm, CategoryFormErrors,
    CategoryFormMode, FIELD_POSITION, SERVER_FIELD_TITLE,
};
use contracts::shared::api_response::ServerFieldErrors;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the shop category form
///
/// One signal per field so thaw inputs bind to them directly.
#[derive(Clone, Copy)]
pub struct ShopCategoryDetailsViewModel {
    pub mode: CategoryFormMode,
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub keywords: RwSignal<Vec<String>>,
    pub keyword_draft: RwSignal<String>,
    pub parent_id: RwSignal<Option<i64>>,
    pub parent_label: RwSignal<Option<String>>,
    /// Raw text of the position input
    pub position: RwSignal<String>,
    /// Attached image URL, empty when none
    pub image: RwSignal<String>,
    pub image_draft: RwSignal<String>,
    pub active: RwSignal<bool>,

    pub errors: RwSignal<CategoryFormErrors>,
    pub server_errors: RwSignal<ServerFieldErrors>,
    pub error: RwSignal<Option<String>>,
    /// Submit in flight
    pub loading: RwSignal<bool>,
}

impl ShopCategoryDetailsViewModel {
    pub fn new(mode: CategoryFormMode) -> Self {
        let vm = Self {
            mode,
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            keywords: RwSignal::new(Vec::new()),
            keyword_draft: RwSignal::new(String::new()),
            parent_id: RwSignal::new(None),
            parent_label: RwSignal::new(None),
            position: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),
            image_draft: RwSignal::new(String::new()),
            active: RwSignal::new(true),
            errors: RwSignal::new(CategoryFormErrors::default()),
            server_errors: RwSignal::new(ServerFieldErrors::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        };
        vm.fill(CategoryForm::default());
        vm
    }

    pub fn title_text(&self) -> &'static str {
        match self.mode {
            CategoryFormMode::Create => "Add category",
            CategoryFormMode::Edit { .. } => "Edit category",
            CategoryFormMode::Duplicate { .. } => "Clone category",
        }
    }

    fn fill(&self, form: CategoryForm) {
        self.title.set(form.title_en);
        self.description.set(form.description_en);
        self.keywords.set(form.keywords);
        self.parent_id.set(form.parent_id);
        self.position.set(form.input.to_string());
        self.image.set(form.images.into_iter().next().unwrap_or_default());
        self.active.set(form.active);
    }

    /// Snapshot of the fields; `None` position when the input is not a number
    fn snapshot(&self) -> (CategoryForm, Option<i64>) {
        let position = self.position.get_untracked().trim().parse::<i64>().ok();
        let image = self.image.get_untracked();
        let form = CategoryForm {
            title_en: self.title.get_untracked(),
            description_en: self.description.get_untracked(),
            keywords: self.keywords.get_untracked(),
            parent_id: self.parent_id.get_untracked(),
            input: position.unwrap_or_default(),
            images: if image.trim().is_empty() { Vec::new() } else { vec![image] },
            active: self.active.get_untracked(),
        };
        (form, position)
    }

    /// Load the source category for edit and clone modes
    pub fn load_if_needed(&self) {
        let Some(uuid) = self.mode.source_uuid() else {
            return;
        };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_uuid(uuid).await {
                Ok(category) => {
                    let form = CategoryForm::from_category(&category);
                    let parent_id = form.parent_id;
                    this.fill(form);
                    if let Some(parent_id) = parent_id {
                        this.resolve_parent_label(parent_id).await;
                    }
                }
                Err(e) => {
                    log::error!("failed to load category {}: {}", uuid, e);
                    this.error.set(Some(format!("Failed to load: {}", e)));
                }
            }
        });
    }

    async fn resolve_parent_label(self, parent_id: i64) {
        match model::fetch_shop_categories("").await {
            Ok(list) => {
                let label = list
                    .iter()
                    .find(|c| c.id == parent_id)
                    .map(|c| c.title().to_string());
                self.parent_label.set(label);
            }
            Err(e) => log::warn!("parent category {} not resolved: {}", parent_id, e),
        }
    }

    /// Parent candidates without the category being edited
    pub async fn search_parents(self, search: String) -> Result<Vec<SelectOption>, String> {
        let list = model::fetch_shop_categories(&search)
            .await
            .map_err(|e| e.to_string())?;
        Ok(parent_options(&list, self.mode.source_uuid())
            .into_iter()
            .map(|o| SelectOption {
                label: o.label,
                value: o.value.to_string(),
            })
            .collect())
    }

    pub fn select_parent(&self, option: Option<SelectOption>) {
        self.parent_id
            .set(option.as_ref().and_then(|o| o.value.parse::<i64>().ok()));
        self.parent_label.set(option.map(|o| o.label));
    }

    pub fn add_keyword(&self) {
        let tags = split_keywords(&self.keyword_draft.get_untracked());
        if tags.is_empty() {
            return;
        }
        self.keywords.update(|list| {
            for tag in tags {
                if !list.contains(&tag) {
                    list.push(tag);
                }
            }
        });
        self.keyword_draft.set(String::new());
    }

    pub fn remove_keyword(&self, tag: &str) {
        self.keywords.update(|list| list.retain(|k| k != tag));
    }

    pub fn attach_image(&self) {
        let url = self.image_draft.get_untracked().trim().to_string();
        if url.is_empty() {
            return;
        }
        self.image.set(url);
        self.image_draft.set(String::new());
    }

    /// Reactive: client-side message for a field
    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).map(CategoryFieldError::message))
    }

    /// Reactive: first server message for the title
    pub fn title_error(&self) -> Option<String> {
        self.server_errors
            .with(|e| e.first(SERVER_FIELD_TITLE).map(str::to_string))
    }

    /// Validate and submit; the button stays in loading state until the request settles
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let (current, position) = self.snapshot();
        let mut errors = current.validate().err().unwrap_or_default();
        if position.is_none() {
            errors.0.insert(FIELD_POSITION, CategoryFieldError::Required);
        }
        if !errors.is_empty() {
            log::debug!("category form rejected: {}", errors);
            self.errors.set(errors);
            return;
        }
        self.errors.set(CategoryFormErrors::default());
        self.server_errors.set(ServerFieldErrors::default());
        self.error.set(None);

        let this = *self;
        let payload = current.to_payload();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match this.mode {
                CategoryFormMode::Edit { uuid, .. } => model::update(uuid, &payload).await,
                CategoryFormMode::Create | CategoryFormMode::Duplicate { .. } => {
                    model::create(&payload).await
                }
            };
            this.loading.set(false);
            match result {
                Ok(saved) => {
                    log::info!("category {} saved", saved.uuid);
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("failed to save category: {}", e);
                    this.server_errors.set(e.fields);
                    this.error.set(Some(e.message));
                }
            }
        });
    }
}
