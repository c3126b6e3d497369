//! Product record builder.
//!
//! Maps one form submission onto export rows:
//!
//! - simple product: one `Simple` row;
//! - variable product: one `Variable` summary row, then one `Variation` row per
//!   attribute combination, in expansion order.
//!
//! Nothing is validated; blank fields become blank cells.

use woocsv_core::columns;
use woocsv_core::{ProductRecord, ProductType};

use crate::attribute::{Attribute, Combination, expand};
use crate::category::normalize_categories;
use crate::form::{FormKind, ProductFormData, VariationInput};

/// Build the rows for one submission.
pub fn build(form: &ProductFormData) -> Vec<ProductRecord> {
    let records = match &form.kind {
        FormKind::Simple { price, weight } => vec![build_simple(form, price, weight)],
        FormKind::Variable { variations, .. } => build_variable(form, variations),
    };

    tracing::debug!(
        sku = %form.sku,
        rows = records.len(),
        "built product records"
    );
    records
}

fn shared_record(form: &ProductFormData, kind: ProductType) -> ProductRecord {
    ProductRecord::new()
        .with(columns::PRODUCT_TITLE, &form.title)
        .with(columns::SHORT_DESCRIPTION, &form.short_description)
        .with(columns::DESCRIPTION, &form.description)
        .with(columns::CATEGORY, normalize_categories(&form.category))
        .with(columns::PRODUCT_TYPE, kind)
}

fn build_simple(form: &ProductFormData, price: &str, weight: &str) -> ProductRecord {
    shared_record(form, ProductType::Simple)
        .with(columns::PRICE, price)
        .with(columns::WEIGHT, weight)
        .with(columns::SKU, &form.sku)
        .with(columns::IMAGE_LINK, form.image.link())
}

fn build_variable(form: &ProductFormData, inputs: &[VariationInput]) -> Vec<ProductRecord> {
    let attributes = form.attributes();
    let combinations = expand(&attributes);

    let mut records = Vec::with_capacity(combinations.len() + 1);
    records.push(summary_record(form, &attributes));

    let blank = VariationInput::default();
    for (idx, combination) in combinations.iter().enumerate() {
        let input = inputs.get(idx).unwrap_or(&blank);
        records.push(variation_record(form, &attributes, combination, input));
    }
    records
}

fn summary_record(form: &ProductFormData, attributes: &[Attribute]) -> ProductRecord {
    let mut record = shared_record(form, ProductType::Variable)
        .with(columns::SKU, &form.sku)
        .with(columns::IMAGE_LINK, form.image.link());

    for (i, attribute) in attributes.iter().enumerate() {
        let slot = i + 1;
        record.set(columns::attribute_name(slot), &attribute.name);
        record.set(columns::attribute_values(slot), attribute.joined_values());
        record.set(columns::attribute_description(slot), "");
    }
    record
}

fn variation_record(
    form: &ProductFormData,
    attributes: &[Attribute],
    combination: &Combination,
    input: &VariationInput,
) -> ProductRecord {
    let mut record = ProductRecord::new()
        .with(columns::PRODUCT_TITLE, &form.title)
        .with(columns::SHORT_DESCRIPTION, "")
        .with(columns::DESCRIPTION, "")
        .with(columns::CATEGORY, "")
        .with(columns::PRODUCT_TYPE, ProductType::Variation)
        .with(
            columns::IMAGE_LINK,
            form.image.link_for(input.image_file_name.as_deref()),
        )
        .with(columns::TAX_STATUS, columns::TAX_PARENT)
        .with(columns::SKU, "")
        .with(columns::PRICE, &input.price)
        .with(columns::WEIGHT, &input.weight);

    for (i, attribute) in attributes.iter().enumerate() {
        let slot = i + 1;
        record.set(columns::attribute_name(slot), &attribute.name);
        record.set(
            columns::attribute_values(slot),
            combination.value(i).unwrap_or_default(),
        );
        // Only the first slot carries the variation description.
        let description = if i == 0 { input.description.as_str() } else { "" };
        record.set(columns::attribute_description(slot), description);
    }
    record
}
