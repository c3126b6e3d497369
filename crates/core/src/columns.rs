//! Column names of the storefront import sheet.
//!
//! The builder writes the English form columns; the projector adds the localized
//! flag columns expected by the downstream importer.

pub const SKU: &str = "SKU";
pub const PRODUCT_TYPE: &str = "Product Type";
pub const PRODUCT_TITLE: &str = "Product Title";
pub const SHORT_DESCRIPTION: &str = "Short Description";
pub const DESCRIPTION: &str = "Description";
pub const CATEGORY: &str = "Category";
pub const PRICE: &str = "Price";
pub const WEIGHT: &str = "Weight";
pub const IMAGE_LINK: &str = "Image Link";
pub const TAX_STATUS: &str = "Tax Status";

pub const PUBLISHED: &str = "Pubblicato";
pub const VISIBILITY: &str = "Visibilità";
pub const IN_STOCK: &str = "In Stock";
pub const BACKORDERS: &str = "Ordini arretrati";
pub const SOLD_INDIVIDUALLY: &str = "Venduto singolarmente";
pub const ALLOW_REVIEWS: &str = "Permetti le recensioni ai clienti";
pub const FEATURED: &str = "In Primo Piano";
pub const ATTRIBUTE_1_VISIBLE: &str = "Attributi 1 visibile";
pub const ATTRIBUTE_1_GLOBAL: &str = "Attributi 1 globale";
pub const PARENT: &str = "Genitore";
pub const TAX_STATE: &str = "Stato delle imposte";
pub const TAX_CLASS: &str = "Aliquote";

/// Marker shared by every per-attribute column.
pub const ATTRIBUTE_MARKER: &str = "Attribute";

/// Value written into the tax columns of variation rows.
pub const TAX_PARENT: &str = "parent";

/// Value of `Stato delle imposte` on every row.
pub const TAXABLE: &str = "Taxable";

/// Fixed leading columns of the export, in output order.
///
/// Attribute columns follow in first-appearance order, then [`IMAGE_LINK`].
pub const LEADING_ORDER: [&str; 18] = [
    SKU,
    PRODUCT_TYPE,
    PRODUCT_TITLE,
    PUBLISHED,
    FEATURED,
    VISIBILITY,
    SHORT_DESCRIPTION,
    DESCRIPTION,
    TAX_STATE,
    TAX_CLASS,
    IN_STOCK,
    BACKORDERS,
    SOLD_INDIVIDUALLY,
    WEIGHT,
    ALLOW_REVIEWS,
    PRICE,
    CATEGORY,
    PARENT,
];

/// `Attribute {i} Name` for the 1-based attribute slot `i`.
pub fn attribute_name(index: usize) -> String {
    format!("Attribute {index} Name")
}

/// `Attribute {i} Values` for the 1-based attribute slot `i`.
pub fn attribute_values(index: usize) -> String {
    format!("Attribute {index} Values")
}

/// `Attribute {i} Description` for the 1-based attribute slot `i`.
pub fn attribute_description(index: usize) -> String {
    format!("Attribute {index} Description")
}

/// Whether a column belongs to the per-attribute block of the export.
pub fn is_attribute_column(name: &str) -> bool {
    name.contains(ATTRIBUTE_MARKER)
}
