use serde::{Deserialize, Serialize};

/// Longest value (in characters) a single form field keeps when set through `FormFields::set`.
pub const MAX_FIELD_CHARS: usize = 4000;

// ── Types ─────────────────────────────────────────────

/// Product metadata typed into the form. Every field is plain text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormFields {
    pub product_name: String,
    pub category: String,
    pub unique_selling_points: String,
    pub target_audience: String,
    pub current_description: String,
    pub specifications: String,
    pub freeform_keywords: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ProductName,
    Category,
    UniqueSellingPoints,
    TargetAudience,
    CurrentDescription,
    Specifications,
    FreeformKeywords,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::ProductName,
        Field::Category,
        Field::UniqueSellingPoints,
        Field::TargetAudience,
        Field::CurrentDescription,
        Field::Specifications,
        Field::FreeformKeywords,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductName => "Product Name",
            Self::Category => "Category",
            Self::UniqueSellingPoints => "Unique Selling Points",
            Self::TargetAudience => "Target Audience",
            Self::CurrentDescription => "Current Description",
            Self::Specifications => "Specifications",
            Self::FreeformKeywords => "Keywords",
        }
    }
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProductName => &self.product_name,
            Field::Category => &self.category,
            Field::UniqueSellingPoints => &self.unique_selling_points,
            Field::TargetAudience => &self.target_audience,
            Field::CurrentDescription => &self.current_description,
            Field::Specifications => &self.specifications,
            Field::FreeformKeywords => &self.freeform_keywords,
        }
    }

    /// Replace a field's value, truncated to `MAX_FIELD_CHARS`.
    pub fn set(&mut self, field: Field, value: &str) {
        let value = truncate_chars(value, MAX_FIELD_CHARS).to_string();
        match field {
            Field::ProductName => self.product_name = value,
            Field::Category => self.category = value,
            Field::UniqueSellingPoints => self.unique_selling_points = value,
            Field::TargetAudience => self.target_audience = value,
            Field::CurrentDescription => self.current_description = value,
            Field::Specifications => self.specifications = value,
            Field::FreeformKeywords => self.freeform_keywords = value,
        }
    }

    /// Apply the size limit to every field (used for bodies that arrive over HTTP).
    pub fn clamped(mut self) -> Self {
        for field in Field::ALL {
            let value = self.get(field).to_string();
            self.set(field, &value);
        }
        self
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
