//! Products module.
//!
//! Turns one product form submission into flat export rows: a single row for
//! simple products, a summary row plus one row per attribute combination for
//! variable products. Pure logic, no IO.

pub mod attribute;
pub mod builder;
pub mod category;
pub mod form;

pub use attribute::{Attribute, Combination, MAX_ATTRIBUTES, clamp_attribute_count, expand};
pub use builder::build;
pub use category::{normalize_categories, split_categories};
pub use form::{AttributeInput, FormKind, ImageUpload, ProductFormData, VariationInput, image_link};
