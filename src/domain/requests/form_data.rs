//! Form-encoded transport payloads.
//!
//! The gateway accepts `application/x-www-form-urlencoded` bodies. Nested
//! structures are flattened into bracketed keys (`purchase[products][0][name]`)
//! and extension data into numbered keys (`addInfo_1`).

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::payment::Purchase;
use crate::domain::signature::render_decimal;

/// Insertion-ordered form fields.
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Sets `key` only when `value` is present and non-empty.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.insert(key, value);
        }
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Key/value pairs in insertion order, ready for URL encoding.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.fields
    }
}

/// Flattens a receipt into `purchase[products][i][...]` keys.
pub fn flatten_purchase(purchase: &Purchase) -> Vec<(String, String)> {
    let mut result = Vec::new();
    for (index, product) in purchase.products.iter().enumerate() {
        let prefix = format!("purchase[products][{}]", index);
        result.push((format!("{}[name]", prefix), product.name.clone()));
        result.push((format!("{}[price]", prefix), render_decimal(product.price)));
        result.push((format!("{}[quantity]", prefix), render_decimal(product.quantity)));
        result.push((format!("{}[vat]", prefix), render_decimal(product.vat)));
        result.push((format!("{}[unit]", prefix), product.unit.as_str().to_string()));
        if let Some(discount) = &product.discount {
            result.push((
                format!("{}[discount][type]", prefix),
                discount.discount_type.as_str().to_string(),
            ));
            result.push((
                format!("{}[discount][value]", prefix),
                render_decimal(discount.value),
            ));
        }
    }
    result
}

/// Flattens extension data into `addInfo_<key>` fields.
pub fn flatten_add_info(add_info: &BTreeMap<u32, String>) -> Vec<(String, String)> {
    add_info
        .iter()
        .map(|(key, value)| (format!("addInfo_{}", key), value.clone()))
        .collect()
}

/// Collects `addInfo_<N>` fields from an inbound form. Returns `None` when there are none.
///
/// Keys whose suffix is not a plain unsigned integer are ignored.
pub fn parse_add_info(form: &HashMap<String, String>) -> Option<BTreeMap<u32, String>> {
    let add_info: BTreeMap<u32, String> = form
        .iter()
        .filter_map(|(key, value)| {
            let suffix = key.strip_prefix("addInfo_")?;
            if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            suffix.parse().ok().map(|index| (index, value.clone()))
        })
        .collect();

    if add_info.is_empty() {
        None
    } else {
        Some(add_info)
    }
}
