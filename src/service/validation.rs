//! Field constraints that serde alone does not enforce.

use crate::error::AppError;
use crate::schemas::{Member, Product, Project, Team, User};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_AGE: u8 = 120;

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::Validation(format!("{} must be a valid email", field)));
    }
    Ok(())
}

impl Validate for User {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)?;
        validate_email("email", &self.email)?;
        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(AppError::Validation(format!("age must be at most {}", MAX_AGE)));
            }
        }
        Ok(())
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), AppError> {
        required("title", &self.title)?;
        required("category", &self.category)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::Validation("price must be at least 0".into()));
        }
        Ok(())
    }
}

impl Validate for Team {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)
    }
}

impl Validate for Member {
    fn validate(&self) -> Result<(), AppError> {
        required("name", &self.name)?;
        required("role", &self.role)
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), AppError> {
        required("title", &self.title)?;
        required("summary", &self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, age: Option<u8>) -> User {
        User {
            name: "Ada".into(),
            email: email.into(),
            address: None,
            age,
            is_active: true,
        }
    }

    #[test]
    fn email_format() {
        assert!(user("ada@example.com", None).validate().is_ok());
        assert!(user("ada.example.com", None).validate().is_err());
        assert!(user("ada@", None).validate().is_err());
    }

    #[test]
    fn age_bounds() {
        assert!(user("a@b.io", Some(0)).validate().is_ok());
        assert!(user("a@b.io", Some(120)).validate().is_ok());
        let err = user("a@b.io", Some(121)).validate().unwrap_err();
        assert_eq!(err.to_string(), "validation: age must be at most 120");
    }

    #[test]
    fn price_must_be_non_negative() {
        let mut p = Product {
            title: "Mug".into(),
            description: None,
            price: 0.0,
            category: "kitchen".into(),
            in_stock: true,
        };
        assert!(p.validate().is_ok());
        p.price = -0.01;
        assert!(p.validate().is_err());
        p.price = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn member_requires_role() {
        let m = Member {
            name: "Ada".into(),
            role: " ".into(),
            bio: None,
            avatar: None,
            github: None,
            linkedin: None,
            twitter: None,
            skills: vec![],
        };
        assert_eq!(m.validate().unwrap_err().to_string(), "validation: role is required");
    }
}
