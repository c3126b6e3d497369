//! Form submission model.
//!
//! This is what the form collaborator hands over when "Add Product" is pressed.
//! Every text field is free text; nothing is validated.

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, MAX_ATTRIBUTES, clamp_attribute_count};

/// Image link for an upload: `pattern + file_name` when both are present.
pub fn image_link(pattern: &str, uploaded_file_name: Option<&str>) -> String {
    match uploaded_file_name {
        Some(name) if !pattern.is_empty() && !name.is_empty() => format!("{pattern}{name}"),
        _ => String::new(),
    }
}

/// Image path pattern plus the name of the uploaded product image, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    /// e.g. `www.example.com/wp-content/uploads/2024/05/`
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ImageUpload {
    pub fn link(&self) -> String {
        image_link(&self.pattern, self.file_name.as_deref())
    }

    /// Link for a variation image uploaded under the same pattern.
    pub fn link_for(&self, file_name: Option<&str>) -> String {
        image_link(&self.pattern, file_name)
    }
}

/// Raw attribute slot: a name and a comma-separated value list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: String,
}

impl AttributeInput {
    pub fn new(name: impl Into<String>, values: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }

    pub fn parse(&self) -> Attribute {
        Attribute::parse(self.name.clone(), &self.values)
    }
}

/// Per-variation inputs, matched to combinations by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationInput {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_file_name: Option<String>,
}

/// Type-specific part of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "product_type")]
pub enum FormKind {
    Simple {
        #[serde(default)]
        price: String,
        #[serde(default)]
        weight: String,
    },
    Variable {
        #[serde(default)]
        attributes: Vec<AttributeInput>,
        #[serde(default)]
        variations: Vec<VariationInput>,
    },
}

/// One "Add Product" submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated category names.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub image: ImageUpload,
    #[serde(flatten)]
    pub kind: FormKind,
}

impl ProductFormData {
    /// Empty simple-product form.
    pub fn simple() -> Self {
        Self::with_kind(FormKind::Simple {
            price: String::new(),
            weight: String::new(),
        })
    }

    /// Empty variable-product form.
    pub fn variable() -> Self {
        Self::with_kind(FormKind::Variable {
            attributes: Vec::new(),
            variations: Vec::new(),
        })
    }

    fn with_kind(kind: FormKind) -> Self {
        Self {
            title: String::new(),
            short_description: String::new(),
            description: String::new(),
            category: String::new(),
            sku: String::new(),
            image: ImageUpload::default(),
            kind,
        }
    }

    /// Parsed attributes; empty for simple products.
    ///
    /// A variable product always has between 1 and [`MAX_ATTRIBUTES`] slots:
    /// slots past the limit are ignored and a form without any gets one unset
    /// slot, which expands to no variations.
    pub fn attributes(&self) -> Vec<Attribute> {
        match &self.kind {
            FormKind::Simple { .. } => Vec::new(),
            FormKind::Variable { attributes, .. } => {
                let slots = clamp_attribute_count(attributes.len());
                (0..slots)
                    .map(|i| {
                        attributes
                            .get(i)
                            .map(AttributeInput::parse)
                            .unwrap_or_else(Attribute::unset)
                    })
                    .collect()
            }
        }
    }
}
