#[cfg(test)]
#[path = "image_radio_test.rs"]
mod image_radio_test;

use crate::config::{FieldDecl, field_input_id};

/// One clickable option backed by a native radio input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRadioOption {
    pub value: String,
    pub label: String,
    pub image: Option<String>,
    /// State of the backing `<input type="radio">`.
    pub checked: bool,
    /// Visual `selected` marker on the list item.
    pub selected: bool,
}

/// Image-grid substitute for a radio group, owned by one tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRadioGroup {
    pub name: String,
    pub tab: String,
    pub options: Vec<ImageRadioOption>,
}

impl ImageRadioGroup {
    /// Build a group from option `(value, label, image, checked)` tuples.
    ///
    /// Every option whose input starts checked is marked selected; the
    /// one-per-group rule is only enforced on click.
    pub fn new(
        name: impl Into<String>,
        tab: impl Into<String>,
        options: impl IntoIterator<Item = (String, String, Option<String>, bool)>,
    ) -> Self {
        let options = options
            .into_iter()
            .map(|(value, label, image, checked)| ImageRadioOption { value, label, image, checked, selected: checked })
            .collect();
        Self { name: name.into(), tab: tab.into(), options }
    }

    /// Build a group from a `radio-image` field; the field value picks the
    /// checked option.
    pub fn from_field(field: &FieldDecl) -> Self {
        Self::new(
            field.name.clone(),
            field.tab.clone(),
            field.choices.iter().map(|c| {
                let label = if c.label.is_empty() { c.value.clone() } else { c.label.clone() };
                (c.value.clone(), label, c.image.clone(), c.value == field.value)
            }),
        )
    }

    /// Handle a click on option `index`.
    ///
    /// Returns the owning tab to flag as changed, or `None` when the index
    /// is out of range.
    pub fn click(&mut self, index: usize) -> Option<&str> {
        if index >= self.options.len() {
            return None;
        }
        for opt in self.options.iter_mut().filter(|o| o.checked) {
            opt.checked = false;
        }
        self.options[index].checked = true;
        for opt in self.options.iter_mut().filter(|o| o.selected) {
            opt.selected = false;
        }
        self.options[index].selected = true;
        Some(self.tab.as_str())
    }

    /// DOM id for option `index`'s input. Only the first option carries the
    /// field's id, so the field label targets the group.
    pub fn option_input_id(&self, index: usize) -> Option<String> {
        (index == 0 && !self.options.is_empty()).then(|| field_input_id(&self.name))
    }

    /// Value of the checked option, if exactly one is checked.
    pub fn checked_value(&self) -> Option<&str> {
        let mut checked = self.options.iter().filter(|o| o.checked);
        match (checked.next(), checked.next()) {
            (Some(opt), None) => Some(opt.value.as_str()),
            _ => None,
        }
    }
}
