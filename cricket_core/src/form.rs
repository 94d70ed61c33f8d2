//! # Form State
//!
//! The entry form as a plain value. The GUI binds its widgets to a
//! [`FormState`] and forwards user events to its update methods; the CLI
//! builds one the same way to add records.
//!
//! ## Modes
//!
//! - [`FormMode::Create`]: saving appends a new record
//! - [`FormMode::Edit`]: saving replaces the record with the original name,
//!   in place, then the form returns to create mode
//!
//! Nothing is validated: empty names, non-numeric levels and missing
//! selections are saved as they are.

use std::path::Path;

use tracing::debug;

use crate::category::{classify_value, resolve_value, Category};
use crate::errors::CatalogResult;
use crate::record::{Attribute, Cricket};
use crate::store;

/// Whether saving creates a record or replaces one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        /// Name of the record being edited, as it was loaded
        original_name: String,
    },
}

/// One attribute line of the form: category selector plus value selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub attribute: Attribute,
    pub category: Option<Category>,
    pub value: String,
    /// Choices for the value selector, driven by `category`
    pub options: Vec<String>,
}

impl AttributeRow {
    pub fn new(attribute: Attribute) -> Self {
        AttributeRow {
            attribute,
            category: None,
            value: String::new(),
            options: Vec::new(),
        }
    }

    /// Select a category and suggest its canonical value.
    ///
    /// A custom value that already falls in the chosen band is kept.
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.options = options_for(Some(category));

        let keeps_custom = !self.value.is_empty()
            && self.value != category.default_value()
            && classify_value(&self.value) == Some(category);
        if !keeps_custom {
            self.value = category.default_value().to_string();
        }
    }

    pub fn select_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Fill from a stored value, deriving the category from it.
    pub fn prefill(&mut self, value: &str) {
        self.value = value.to_string();
        self.category = classify_value(value);
        self.options = options_for(self.category);
    }

    pub fn clear(&mut self) {
        self.category = None;
        self.value.clear();
        self.options.clear();
    }

    /// Value that will be persisted for this row.
    pub fn resolved_value(&self) -> String {
        resolve_value(self.category, &self.value)
    }
}

fn options_for(category: Option<Category>) -> Vec<String> {
    category
        .map(|c| c.value_options().iter().map(|v| v.to_string()).collect())
        .unwrap_or_default()
}

/// Complete state of the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub breed: String,
    pub level: String,
    pub size: String,
    /// One row per [`Attribute`], in [`Attribute::ALL`] order
    pub attributes: Vec<AttributeRow>,
    pub mode: FormMode,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            name: String::new(),
            breed: String::new(),
            level: String::new(),
            size: String::new(),
            attributes: Attribute::ALL.iter().copied().map(AttributeRow::new).collect(),
            mode: FormMode::Create,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    fn row_mut(&mut self, attribute: Attribute) -> Option<&mut AttributeRow> {
        self.attributes.iter_mut().find(|r| r.attribute == attribute)
    }

    pub fn select_category(&mut self, attribute: Attribute, category: Category) {
        if let Some(row) = self.row_mut(attribute) {
            row.select_category(category);
        }
    }

    pub fn select_value(&mut self, attribute: Attribute, value: impl Into<String>) {
        if let Some(row) = self.row_mut(attribute) {
            row.select_value(value);
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Pre-fill every field from `cricket` and switch to edit mode.
    pub fn begin_edit(&mut self, cricket: &Cricket) {
        self.name = cricket.name.clone();
        self.breed = cricket.breed.clone();
        self.level = cricket.level.clone();
        self.size = cricket.size.clone();
        for row in &mut self.attributes {
            let value = cricket.attribute(row.attribute).unwrap_or_default();
            row.prefill(value);
        }
        self.mode = FormMode::Edit {
            original_name: cricket.name.clone(),
        };
        debug!(name = %cricket.name, "editing cricket");
    }

    /// Reset every field. The mode is left alone.
    pub fn clear(&mut self) {
        self.name.clear();
        self.breed.clear();
        self.level.clear();
        self.size.clear();
        for row in &mut self.attributes {
            row.clear();
        }
    }

    /// Assemble the record the form currently describes.
    pub fn to_cricket(&self) -> Cricket {
        let mut cricket = Cricket::new(&self.name, &self.breed, &self.level, &self.size);
        for row in &self.attributes {
            cricket
                .attributes
                .insert(row.attribute.label().to_string(), row.resolved_value());
        }
        cricket
    }
}

/// What a successful [`save_form`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added { name: String },
    Updated { original_name: String, name: String },
    /// Edit mode, but the original record was no longer in the file
    Missing { original_name: String },
}

/// Persist the form: append in create mode, replace in place in edit mode.
///
/// On success the form is cleared and returns to create mode. On error the
/// form is left untouched so nothing typed is lost.
pub fn save_form(form: &mut FormState, path: &Path) -> CatalogResult<SaveOutcome> {
    let cricket = form.to_cricket();
    let name = cricket.name.clone();

    let outcome = match &form.mode {
        FormMode::Create => {
            store::append_cricket(path, cricket)?;
            SaveOutcome::Added { name }
        }
        FormMode::Edit { original_name } => {
            let original_name = original_name.clone();
            if store::replace_cricket(path, &original_name, cricket)? {
                SaveOutcome::Updated { original_name, name }
            } else {
                SaveOutcome::Missing { original_name }
            }
        }
    };

    form.clear();
    form.mode = FormMode::Create;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load_crickets, save_crickets};
    use tempfile::TempDir;

    fn attribute_row(form: &FormState, attribute: Attribute) -> &AttributeRow {
        form.attributes.iter().find(|r| r.attribute == attribute).unwrap()
    }

    fn sample() -> Cricket {
        Cricket::new("A", "B", "5", "中")
            .with_attribute(Attribute::Attack, "7-9")
            .with_attribute(Attribute::Defense, "2")
            .with_attribute(Attribute::Spirit, "odd")
    }

    #[test]
    fn test_new_form_is_empty_create() {
        let form = FormState::new();
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.attributes.len(), Attribute::ALL.len());
        assert!(form.attributes.iter().all(|r| r.category.is_none() && r.value.is_empty()));
    }

    #[test]
    fn test_select_category_sets_default_and_options() {
        let mut form = FormState::new();
        form.select_category(Attribute::Attack, Category::Medium);

        let row = attribute_row(&form, Attribute::Attack);
        assert_eq!(row.value, "4-6");
        assert_eq!(row.options, vec!["4", "5", "6", "4-5", "5-6", "4-6"]);

        form.select_category(Attribute::Attack, Category::God);
        let row = attribute_row(&form, Attribute::Attack);
        assert_eq!(row.value, "11");
        assert_eq!(row.options, vec!["11"]);
    }

    #[test]
    fn test_reselecting_category_keeps_custom_value() {
        let mut form = FormState::new();
        form.select_category(Attribute::Block, Category::Low);
        form.select_value(Attribute::Block, "2");

        form.select_category(Attribute::Block, Category::Low);
        assert_eq!(attribute_row(&form, Attribute::Block).value, "2");

        // Switching band discards a value from the old band
        form.select_category(Attribute::Block, Category::High);
        assert_eq!(attribute_row(&form, Attribute::Block).value, "7-9");
    }

    #[test]
    fn test_custom_low_value_is_saved_verbatim() {
        let mut form = FormState::new();
        form.select_category(Attribute::Attack, Category::Low);
        form.select_value(Attribute::Attack, "2");
        assert_eq!(form.to_cricket().attribute(Attribute::Attack), Some("2"));
    }

    #[test]
    fn test_begin_edit_prefills_and_derives_categories() {
        let mut form = FormState::new();
        form.begin_edit(&sample());

        assert_eq!(form.name, "A");
        assert_eq!(form.level, "5");
        assert_eq!(form.size, "中");
        assert_eq!(form.mode, FormMode::Edit { original_name: "A".to_string() });

        let attack = attribute_row(&form, Attribute::Attack);
        assert_eq!(attack.category, Some(Category::High));
        assert_eq!(attack.value, "7-9");
        assert_eq!(attack.options.len(), 6);

        let spirit = attribute_row(&form, Attribute::Spirit);
        assert_eq!(spirit.category, None);
        assert_eq!(spirit.value, "odd");
        assert!(spirit.options.is_empty());

        let speed = attribute_row(&form, Attribute::Speed);
        assert_eq!(speed.category, None);
        assert_eq!(speed.value, "");
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut form = FormState::new();
        form.begin_edit(&sample());
        form.clear();

        assert!(form.name.is_empty());
        assert!(form.attributes.iter().all(|r| r.category.is_none() && r.value.is_empty()));
        assert!(form.is_editing());
    }

    #[test]
    fn test_to_cricket_writes_every_attribute() {
        let form = FormState::new();
        let cricket = form.to_cricket();
        assert_eq!(cricket.attributes.len(), 8);
        assert!(cricket.attributes.values().all(String::is_empty));
    }

    #[test]
    fn test_save_create_then_edit_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crickets.json");
        save_crickets(&[Cricket::new("first", "", "", "小")], &path).unwrap();

        let mut form = FormState::new();
        form.name = "A".to_string();
        form.size = "中".to_string();
        form.select_category(Attribute::Attack, Category::High);
        assert_eq!(
            save_form(&mut form, &path).unwrap(),
            SaveOutcome::Added { name: "A".to_string() }
        );
        assert!(form.name.is_empty());
        crate::store::append_cricket(&path, Cricket::new("last", "", "", "大")).unwrap();

        let stored = load_crickets(&path).unwrap();
        form.begin_edit(&stored[1]);
        form.name = "A-renamed".to_string();
        form.level = "9".to_string();
        assert_eq!(
            save_form(&mut form, &path).unwrap(),
            SaveOutcome::Updated {
                original_name: "A".to_string(),
                name: "A-renamed".to_string(),
            }
        );
        assert_eq!(form.mode, FormMode::Create);

        let stored = load_crickets(&path).unwrap();
        let names: Vec<_> = stored.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "A-renamed", "last"]);
        assert_eq!(stored[1].level, "9");
        assert_eq!(stored[1].attribute(Attribute::Attack), Some("7-9"));
    }

    #[test]
    fn test_save_edit_of_deleted_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crickets.json");
        save_crickets(&[sample()], &path).unwrap();

        let mut form = FormState::new();
        form.begin_edit(&sample());
        crate::store::remove_cricket(&path, "A").unwrap();

        assert_eq!(
            save_form(&mut form, &path).unwrap(),
            SaveOutcome::Missing { original_name: "A".to_string() }
        );
        assert!(load_crickets(&path).unwrap().is_empty());
        assert_eq!(form.mode, FormMode::Create);
    }

    #[test]
    fn test_failed_save_keeps_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crickets.json");
        std::fs::write(&path, "not json").unwrap();

        let mut form = FormState::new();
        form.name = "A".to_string();
        assert!(save_form(&mut form, &path).is_err());
        assert_eq!(form.name, "A");
    }
}
