//! Create/update payloads for the admin inventory screens.

use chrono::NaiveDate;
use mge_common::{validation_error, MgeError, Validate};
use serde::{Deserialize, Serialize};

fn require(field: &str, value: &str) -> Result<(), MgeError> {
    if value.trim().is_empty() {
        return Err(validation_error(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> Result<(), MgeError> {
    if value < 0 {
        return Err(validation_error(format!("{} must not be negative", field)));
    }
    Ok(())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, MgeError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| validation_error(format!("{} must be in YYYY-MM-DD format", field)))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

impl Validate for ConsoleForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("name", &self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visitors: Option<u32>,
    pub is_active: bool,
}

impl Validate for RoomForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("name", &self.name)?;
        if self.max_visitors == Some(0) {
            return Err(validation_error("max_visitors must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitForm {
    pub name: String,
    pub console_id: u64,
    pub room_id: u64,
    pub price_per_hour: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Validate for UnitForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("name", &self.name)?;
        if self.console_id == 0 || self.room_id == 0 {
            return Err(validation_error("a unit needs both a console and a room"));
        }
        require_non_negative("price_per_hour", self.price_per_hour)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameForm {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub console_ids: Vec<u64>,
}

impl Validate for GameForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("title", &self.title)?;
        if self.console_ids.is_empty() {
            return Err(validation_error("a game must be playable on at least one console"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FnbForm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: i64,
    pub is_available: bool,
}

impl Validate for FnbForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("name", &self.name)?;
        require_non_negative("price", self.price)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoForm {
    pub code: String,
    pub discount_percentage: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    pub is_active: bool,
}

impl Validate for PromoForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("code", &self.code)?;
        if self.code.chars().any(char::is_whitespace) {
            return Err(validation_error("code must not contain spaces"));
        }
        if !(1..=100).contains(&self.discount_percentage) {
            return Err(validation_error(
                "discount_percentage must be between 1 and 100",
            ));
        }
        let from = self
            .valid_from
            .as_deref()
            .map(|v| parse_date("valid_from", v))
            .transpose()?;
        let until = self
            .valid_until
            .as_deref()
            .map(|v| parse_date("valid_until", v))
            .transpose()?;
        if let (Some(from), Some(until)) = (from, until) {
            if until < from {
                return Err(validation_error("valid_until must not be before valid_from"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Validate for FaqForm {
    fn validate(&self) -> Result<(), MgeError> {
        require("question", &self.question)?;
        require("answer", &self.answer)
    }
}
