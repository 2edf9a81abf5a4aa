//! Menu entry value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A non-negative currency amount stored as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Price(u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid price: {0}")]
pub struct ParsePriceError(pub String);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    /// Parse `"10.99"`, `"$10.99"`, `"10.9"` or `"10"` without going through floats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePriceError(s.to_string());
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if digits.is_empty() {
            return Err(err());
        }

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
        {
            return Err(err());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .map(Price)
            .ok_or_else(err)
    }
}

impl<'de> Deserialize<'de> for Price {
    /// Accepts a JSON number (`10.99`) or a string (`"10.99"`, `"$10.99"`).
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(text) => text.parse().map_err(serde::de::Error::custom),
            // Go through the number's decimal text so 10.99 stays 1099 cents.
            serde_json::Value::Number(number) => number
                .to_string()
                .parse()
                .map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom(
                "price must be a number or a string",
            )),
        }
    }
}

/// A single item on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: EntryId,
    pub name: String,
    pub price: Price,
    /// Opaque image resource name, resolved by whoever renders it.
    pub image_ref: String,
    pub category: String,
}

impl MenuEntry {
    /// Create an entry with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        image_ref: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            price,
            image_ref: image_ref.into(),
            category: category.into(),
        }
    }
}
