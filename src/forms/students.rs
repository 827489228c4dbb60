use chrono::NaiveDate;
use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::student::NewStudent;
use crate::forms::sanitize_inline_text;

const FULL_NAME_MAX_LEN_VALIDATOR: u64 = 100;
const ROLL_NUMBER_MAX_LEN_VALIDATOR: u64 = 20;
const DEPARTMENT_MAX_LEN_VALIDATOR: u64 = 10;
const PRODUCT_NAME_MAX_LEN_VALIDATOR: u64 = 100;

/// Result type returned by the student form helpers.
pub type StudentFormResult<T> = Result<T, StudentFormError>;

/// Errors that can occur while processing student forms.
#[derive(Debug, Error)]
pub enum StudentFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required text field is empty after sanitization.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// Quantity is not a non-negative integer.
    #[error("invalid quantity `{value}`")]
    InvalidQuantity { value: String },
}

const DEFAULT_ISSUED_QUANTITY: i32 = 1;

/// Form payload emitted when registering a student.
#[derive(Debug, Deserialize, Validate)]
pub struct AddStudentForm {
    #[serde(rename = "fullName")]
    #[validate(length(min = 1, max = FULL_NAME_MAX_LEN_VALIDATOR))]
    pub full_name: String,
    #[serde(rename = "rollNumber")]
    #[validate(length(min = 1, max = ROLL_NUMBER_MAX_LEN_VALIDATOR))]
    pub roll_number: String,
    #[validate(length(min = 1, max = DEPARTMENT_MAX_LEN_VALIDATOR))]
    pub department: String,
    /// Name of a product to issue to the student right away.
    #[serde(
        rename = "productName",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    #[validate(length(max = PRODUCT_NAME_MAX_LEN_VALIDATOR))]
    pub product_name: Option<String>,
    /// Quantity of the issued product, one when left blank.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub quantity: Option<String>,
}

impl AddStudentForm {
    /// Validates and sanitizes the payload into a domain `NewStudent`.
    ///
    /// A product named in the form is issued on `today`.
    pub fn into_new_student(self, today: NaiveDate) -> StudentFormResult<NewStudent> {
        self.validate()?;

        let full_name = required(&self.full_name, "full name")?;
        let roll_number = required(&self.roll_number, "roll number")?;
        let department = required(&self.department, "department")?;

        let mut new_student = NewStudent::new(full_name, roll_number, department);

        if let Some(product_name) = self
            .product_name
            .as_deref()
            .map(sanitize_inline_text)
            .filter(|value| !value.is_empty())
        {
            let quantity = parse_quantity(self.quantity.as_deref())?;
            new_student = new_student.with_product(product_name, quantity, today);
        }

        Ok(new_student)
    }
}

/// Form payload emitted when assigning a pooled product to a student.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignProductForm {
    /// Identifier of the pooled product to copy.
    #[serde(rename = "productId")]
    #[validate(range(min = 1))]
    pub product_id: i32,
}

impl AssignProductForm {
    /// Validates the payload and returns the selected product identifier.
    pub fn into_product_id(self) -> StudentFormResult<i32> {
        self.validate()?;
        Ok(self.product_id)
    }
}

fn parse_quantity(raw: Option<&str>) -> StudentFormResult<i32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_ISSUED_QUANTITY);
    };
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|quantity| *quantity >= 0)
        .ok_or_else(|| StudentFormError::InvalidQuantity {
            value: raw.to_string(),
        })
}

fn required(value: &str, field: &'static str) -> StudentFormResult<String> {
    let sanitized = sanitize_inline_text(value);
    if sanitized.is_empty() {
        return Err(StudentFormError::EmptyField(field));
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn alice_form() -> AddStudentForm {
        AddStudentForm {
            full_name: " Alice  Smith ".to_string(),
            roll_number: "R100".to_string(),
            department: "CS".to_string(),
            product_name: None,
            quantity: None,
        }
    }

    #[test]
    fn add_student_form_without_product() {
        let student = alice_form()
            .into_new_student(today())
            .expect("expected conversion to succeed");

        assert_eq!(student.full_name, "Alice Smith");
        assert_eq!(student.roll_number, "R100");
        assert_eq!(student.department, "CS");
        assert!(student.product.is_none());
        assert!(student.assignment_date.is_none());
    }

    #[test]
    fn add_student_form_issues_named_product() {
        let form = AddStudentForm {
            product_name: Some("Laptop".to_string()),
            quantity: Some("2".to_string()),
            ..alice_form()
        };

        let student = form.into_new_student(today()).expect("expected success");

        let product = student.product.expect("product should be attached");
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.quantity, 2);
        assert!(product.is_assigned);
        assert_eq!(product.date_of_issue, today());
        assert_eq!(student.assignment_date, Some(today()));
    }

    #[test]
    fn add_student_form_defaults_blank_quantity() {
        let form: AddStudentForm = serde_html_form::from_str(
            "fullName=Alice&rollNumber=R100&department=CS&productName=Laptop&quantity=",
        )
        .expect("blank quantity should deserialize");

        let student = form.into_new_student(today()).expect("expected success");

        let product = student.product.expect("product should be attached");
        assert_eq!(product.quantity, 1);
    }

    #[test]
    fn add_student_form_rejects_negative_quantity() {
        let form = AddStudentForm {
            product_name: Some("Laptop".to_string()),
            quantity: Some("-1".to_string()),
            ..alice_form()
        };

        assert!(matches!(
            form.into_new_student(today()),
            Err(StudentFormError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn add_student_form_ignores_blank_product_name() {
        let form = AddStudentForm {
            product_name: Some("   ".to_string()),
            ..alice_form()
        };

        let student = form.into_new_student(today()).expect("expected success");

        assert!(student.product.is_none());
    }

    #[test]
    fn add_student_form_rejects_long_department() {
        let form = AddStudentForm {
            department: "Mechanical Engineering".to_string(),
            ..alice_form()
        };

        assert!(matches!(
            form.into_new_student(today()),
            Err(StudentFormError::Validation(_))
        ));
    }

    #[test]
    fn add_student_form_rejects_whitespace_roll_number() {
        let form = AddStudentForm {
            roll_number: "  ".to_string(),
            ..alice_form()
        };

        assert!(matches!(
            form.into_new_student(today()),
            Err(StudentFormError::EmptyField("roll number"))
        ));
    }

    #[test]
    fn assign_form_rejects_non_positive_ids() {
        let form = AssignProductForm { product_id: 0 };

        assert!(matches!(
            form.into_product_id(),
            Err(StudentFormError::Validation(_))
        ));
        assert_eq!(AssignProductForm { product_id: 4 }.into_product_id().ok(), Some(4));
    }
}
