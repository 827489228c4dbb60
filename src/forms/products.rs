use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::forms::{parse_form_date, sanitize_inline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 100;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for a category label.
const CATEGORY_MAX_LEN: usize = 50;
const CATEGORY_MAX_LEN_VALIDATOR: u64 = CATEGORY_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// A date field could not be parsed.
    #[error("invalid {field} `{value}`, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    /// The return date precedes the issue date.
    #[error("return date cannot be earlier than the issue date")]
    ReturnBeforeIssue,
    /// The minimum stock level is not a non-negative integer.
    #[error("invalid minimum stock level `{value}`")]
    InvalidMinStockLevel { value: String },
}

/// Form payload emitted when submitting the "Add product" form.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Number of units received.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Issue date in `YYYY-MM-DD` format.
    pub date_of_issue: String,
    /// Optional return date in `YYYY-MM-DD` format.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub date_of_return: Option<String>,
    /// Optional category label.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = CATEGORY_MAX_LEN_VALIDATOR))]
    pub category: Option<String>,
    /// Optional low-stock threshold; the default applies when empty.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub min_stock_level: Option<String>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a pooled `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let date_of_issue =
            parse_form_date(&self.date_of_issue).ok_or_else(|| ProductFormError::InvalidDate {
                field: "date of issue",
                value: self.date_of_issue.clone(),
            })?;

        let mut new_product = NewProduct::new(name, self.quantity, date_of_issue);

        if let Some(raw) = self.date_of_return.as_deref() {
            let date_of_return = parse_form_date(raw).ok_or_else(|| ProductFormError::InvalidDate {
                field: "date of return",
                value: raw.to_string(),
            })?;
            if date_of_return < date_of_issue {
                return Err(ProductFormError::ReturnBeforeIssue);
            }
            new_product = new_product.with_date_of_return(date_of_return);
        }

        if let Some(category) = self
            .category
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            new_product = new_product.with_category(category);
        }

        if let Some(raw) = self.min_stock_level.as_deref() {
            let level = raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|level| *level >= 0)
                .ok_or_else(|| ProductFormError::InvalidMinStockLevel {
                    value: raw.to_string(),
                })?;
            new_product = new_product.with_min_stock_level(level);
        }

        Ok(new_product)
    }
}
