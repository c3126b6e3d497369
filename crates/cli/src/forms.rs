//! Loading form submissions from disk.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use woocsv_products::ProductFormData;

#[derive(Deserialize)]
#[serde(untagged)]
enum FormFile {
    Many(Vec<ProductFormData>),
    One(Box<ProductFormData>),
}

/// Read one form file. `image_pattern` fills in forms that left the pattern blank.
pub fn load(path: &Path, image_pattern: Option<&str>) -> anyhow::Result<Vec<ProductFormData>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read form file {}", path.display()))?;
    parse(&text, image_pattern).with_context(|| format!("invalid form file {}", path.display()))
}

fn parse(text: &str, image_pattern: Option<&str>) -> anyhow::Result<Vec<ProductFormData>> {
    let mut forms = match serde_json::from_str::<FormFile>(text)? {
        FormFile::Many(forms) => forms,
        FormFile::One(form) => vec![*form],
    };

    if let Some(pattern) = image_pattern {
        for form in forms.iter_mut().filter(|f| f.image.pattern.is_empty()) {
            form.image.pattern = pattern.to_string();
        }
    }
    Ok(forms)
}
