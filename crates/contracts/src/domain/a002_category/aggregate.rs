use crate::domain::common::{AggregateId, Translation};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_id! {
    /// UUID категории
    CategoryId
}

/// Тип категорий, которые редактирует форма
pub const SHOP_CATEGORY_TYPE: &str = "shop";

/// Допустимый диапазон позиции категории (smallint на сервере)
pub const POSITION_MIN: i64 = 0;
pub const POSITION_MAX: i64 = 32767;

/// Минимальная длина описания после обрезки пробелов
pub const DESCRIPTION_MIN_LEN: usize = 5;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория магазина
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCategory {
    pub id: i64,
    pub uuid: CategoryId,
    #[serde(default)]
    pub translation: Option<Translation>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Позиция в списке
    #[serde(default)]
    pub input: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub img: Option<String>,
}

impl ShopCategory {
    pub fn title(&self) -> &str {
        self.translation.as_ref().map(|t| t.title.as_str()).unwrap_or("")
    }
}

/// Вариант выбора родительской категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub label: String,
    pub value: i64,
    pub key: i64,
}

/// Варианты родителя: все категории, кроме редактируемой
pub fn parent_options(categories: &[ShopCategory], editing: Option<CategoryId>) -> Vec<CategoryOption> {
    categories
        .iter()
        .filter(|c| Some(c.uuid) != editing)
        .map(|c| CategoryOption {
            label: c.title().to_string(),
            value: c.id,
            key: c.id,
        })
        .collect()
}

// ============================================================================
// Form
// ============================================================================

/// Режим открытия формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFormMode {
    Create,
    Edit { uuid: CategoryId, is_parent: bool },
    Duplicate { uuid: CategoryId },
}

impl CategoryFormMode {
    /// UUID исходной категории (для исключения из списка родителей)
    pub fn source_uuid(&self) -> Option<CategoryId> {
        match self {
            CategoryFormMode::Create => None,
            CategoryFormMode::Edit { uuid, .. } | CategoryFormMode::Duplicate { uuid } => Some(*uuid),
        }
    }

    /// Поле родителя скрыто для родительских категорий и при клонировании
    pub fn shows_parent_field(&self) -> bool {
        match self {
            CategoryFormMode::Create => true,
            CategoryFormMode::Edit { is_parent, .. } => !is_parent,
            CategoryFormMode::Duplicate { .. } => false,
        }
    }
}

/// Ошибка одного поля формы категории
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryFieldError {
    #[error("required")]
    Required,
    #[error("no.empty.space")]
    EmptySpace,
    #[error("must.be.at.least.{0}")]
    TooShort(usize),
    #[error("must.be.between.{0}.and.{1}")]
    OutOfRange(i64, i64),
}

impl CategoryFieldError {
    /// Текст для пользователя
    pub fn message(&self) -> String {
        match self {
            CategoryFieldError::Required => "Required".to_string(),
            CategoryFieldError::EmptySpace => "Must not be empty space".to_string(),
            CategoryFieldError::TooShort(n) => format!("Must be at least {} characters", n),
            CategoryFieldError::OutOfRange(min, max) => format!("Must be between {} and {}", min, max),
        }
    }
}

/// Ошибки формы по ключу поля
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("category form has {} invalid field(s)", field_count(.0))]
pub struct CategoryFormErrors(pub BTreeMap<&'static str, CategoryFieldError>);

fn field_count(errors: &BTreeMap<&'static str, CategoryFieldError>) -> usize {
    errors.len()
}

impl CategoryFormErrors {
    pub fn get(&self, field: &str) -> Option<&CategoryFieldError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub const FIELD_TITLE: &str = "title[en]";
pub const FIELD_DESCRIPTION: &str = "description[en]";
pub const FIELD_KEYWORDS: &str = "keywords";
pub const FIELD_POSITION: &str = "input";
pub const FIELD_IMAGES: &str = "images";

/// Ключ серверной ошибки для заголовка
pub const SERVER_FIELD_TITLE: &str = "title.en";

/// Состояние формы категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForm {
    pub title_en: String,
    pub description_en: String,
    pub keywords: Vec<String>,
    pub parent_id: Option<i64>,
    pub input: i64,
    pub images: Vec<String>,
    pub active: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            title_en: String::new(),
            description_en: String::new(),
            keywords: Vec::new(),
            parent_id: None,
            input: 0,
            images: Vec::new(),
            active: true,
        }
    }
}

impl CategoryForm {
    /// Заполнить форму из существующей категории
    pub fn from_category(category: &ShopCategory) -> Self {
        let translation = category.translation.clone().unwrap_or_default();
        Self {
            title_en: translation.title,
            description_en: translation.description.unwrap_or_default(),
            keywords: category
                .keywords
                .as_deref()
                .map(split_keywords)
                .unwrap_or_default(),
            parent_id: category.parent_id,
            input: category.input,
            images: category.img.iter().cloned().collect(),
            active: category.active,
        }
    }

    pub fn validate(&self) -> Result<(), CategoryFormErrors> {
        let mut errors = BTreeMap::new();

        if let Err(e) = validate_description(&self.description_en) {
            errors.insert(FIELD_DESCRIPTION, e);
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            errors.insert(FIELD_KEYWORDS, CategoryFieldError::Required);
        }
        if !(POSITION_MIN..=POSITION_MAX).contains(&self.input) {
            errors.insert(
                FIELD_POSITION,
                CategoryFieldError::OutOfRange(POSITION_MIN, POSITION_MAX),
            );
        }
        if self.images.is_empty() {
            errors.insert(FIELD_IMAGES, CategoryFieldError::Required);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CategoryFormErrors(errors))
        }
    }

    /// Тело запроса create/update
    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            title: HashMap::from([("en".to_string(), self.title_en.trim().to_string())]),
            description: HashMap::from([("en".to_string(), self.description_en.trim().to_string())]),
            keywords: self
                .keywords
                .iter()
                .map(|k| k.trim())
                .filter(|k| !k.is_empty())
                .collect::<Vec<_>>()
                .join(","),
            parent_id: self.parent_id,
            kind: SHOP_CATEGORY_TYPE.to_string(),
            input: self.input,
            active: u8::from(self.active),
            images: self.images.clone(),
        }
    }
}

fn validate_description(value: &str) -> Result<(), CategoryFieldError> {
    if value.is_empty() {
        return Err(CategoryFieldError::Required);
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CategoryFieldError::EmptySpace);
    }
    if trimmed.chars().count() < DESCRIPTION_MIN_LEN {
        return Err(CategoryFieldError::TooShort(DESCRIPTION_MIN_LEN));
    }
    Ok(())
}

/// Разбить строку тегов `a,b, c` на список
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub title: HashMap<String, String>,
    pub description: HashMap<String, String>,
    pub keywords: String,
    pub parent_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub input: i64,
    pub active: u8,
    pub images: Vec<String>,
}

/// Путь ресурса для update
pub fn category_path(uuid: &CategoryId) -> String {
    format!("categories/{}", uuid.as_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CategoryForm {
        CategoryForm {
            title_en: "Bakery".into(),
            description_en: "Fresh bread and pastry".into(),
            keywords: vec!["bread".into(), "cake".into()],
            parent_id: None,
            input: 3,
            images: vec!["https://cdn.example.com/categories/bakery.png".into()],
            active: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_description_rules() {
        let mut form = valid_form();

        form.description_en = String::new();
        let errs = form.validate().unwrap_err();
        assert_eq!(errs.get(FIELD_DESCRIPTION), Some(&CategoryFieldError::Required));

        form.description_en = "   ".into();
        let errs = form.validate().unwrap_err();
        assert_eq!(errs.get(FIELD_DESCRIPTION), Some(&CategoryFieldError::EmptySpace));

        form.description_en = "abc  ".into();
        let errs = form.validate().unwrap_err();
        assert_eq!(errs.get(FIELD_DESCRIPTION), Some(&CategoryFieldError::TooShort(5)));

        form.description_en = "  abcde ".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_position_range() {
        let mut form = valid_form();
        form.input = 40000;
        let errs = form.validate().unwrap_err();
        assert_eq!(
            errs.get(FIELD_POSITION),
            Some(&CategoryFieldError::OutOfRange(0, 32767))
        );
        form.input = -1;
        assert!(form.validate().is_err());
        form.input = 32767;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_keywords_and_image_required() {
        let mut form = valid_form();
        form.keywords = vec!["  ".into()];
        form.images.clear();
        let errs = form.validate().unwrap_err();
        assert_eq!(errs.0.len(), 2);
        assert_eq!(errs.get(FIELD_KEYWORDS), Some(&CategoryFieldError::Required));
        assert_eq!(errs.get(FIELD_IMAGES), Some(&CategoryFieldError::Required));
        assert_eq!(errs.to_string(), "category form has 2 invalid field(s)");
    }

    #[test]
    fn test_payload_shape() {
        let payload = valid_form().to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["title"]["en"], "Bakery");
        assert_eq!(json["keywords"], "bread,cake");
        assert_eq!(json["type"], "shop");
        assert_eq!(json["active"], 1);
    }

    #[test]
    fn test_parent_options_exclude_edited() {
        let a = CategoryId::new_v4();
        let b = CategoryId::new_v4();
        let categories = vec![
            ShopCategory {
                id: 1,
                uuid: a,
                translation: Some(Translation { title: "Drinks".into(), ..Default::default() }),
                keywords: None,
                parent_id: None,
                input: 0,
                active: true,
                img: None,
            },
            ShopCategory {
                id: 2,
                uuid: b,
                translation: Some(Translation { title: "Snacks".into(), ..Default::default() }),
                keywords: Some("chips, nuts".into()),
                parent_id: None,
                input: 1,
                active: true,
                img: Some("snacks.png".into()),
            },
        ];

        let opts = parent_options(&categories, Some(a));
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].label, "Snacks");
        assert_eq!(parent_options(&categories, None).len(), 2);

        let form = CategoryForm::from_category(&categories[1]);
        assert_eq!(form.keywords, vec!["chips".to_string(), "nuts".to_string()]);
        assert_eq!(form.images, vec!["snacks.png".to_string()]);
    }

    #[test]
    fn test_form_mode_parent_field() {
        let id = CategoryId::new_v4();
        assert!(CategoryFormMode::Create.shows_parent_field());
        assert!(CategoryFormMode::Edit { uuid: id, is_parent: false }.shows_parent_field());
        assert!(!CategoryFormMode::Edit { uuid: id, is_parent: true }.shows_parent_field());
        assert!(!CategoryFormMode::Duplicate { uuid: id }.shows_parent_field());
        assert_eq!(CategoryFormMode::Duplicate { uuid: id }.source_uuid(), Some(id));
    }
}
