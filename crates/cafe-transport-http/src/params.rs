//! Query-string parameters accepted by the cafe routes.
//!
//! Parameters are collected as raw pairs and the first occurrence of a
//! name wins, so `?loc=A&loc=B` reads as `loc=A` instead of failing.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use cafe_types::{presence_flag, CafeError, NewCafe};

use crate::error::ApiError;

/// Query-string pairs keyed by name, keeping the first value of each.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryArgs(HashMap<String, String>);

impl QueryArgs {
    /// Collects pairs in order; later duplicates of a name are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut args = HashMap::new();
        for (name, value) in pairs {
            args.entry(name).or_insert(value);
        }
        Self(args)
    }

    /// Returns the value of `name`, if supplied.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes and returns the value of `name`, if supplied.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

impl<S> FromRequestParts<S> for QueryArgs
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(Self::from_pairs(pairs))
    }
}

/// `GET /search?loc=...`
#[derive(Debug, Default)]
pub struct SearchParams {
    pub loc: Option<String>,
}

impl From<QueryArgs> for SearchParams {
    fn from(mut args: QueryArgs) -> Self {
        Self {
            loc: args.take("loc"),
        }
    }
}

/// `PATCH /update-price/{id}?new_price=...`
#[derive(Debug, Default)]
pub struct PriceParams {
    pub new_price: Option<String>,
}

impl From<QueryArgs> for PriceParams {
    fn from(mut args: QueryArgs) -> Self {
        Self {
            new_price: args.take("new_price"),
        }
    }
}

/// `DELETE /report-closed/{id}?api-key=...`
#[derive(Debug, Default)]
pub struct ApiKeyParams {
    pub api_key: Option<String>,
}

impl From<QueryArgs> for ApiKeyParams {
    fn from(mut args: QueryArgs) -> Self {
        Self {
            api_key: args.take("api-key"),
        }
    }
}

/// `POST /add?name=...&map_url=...`
///
/// Every field is optional at the wire level so that a missing value can be
/// reported by name.
#[derive(Debug, Default)]
pub struct AddCafeParams {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

impl From<QueryArgs> for AddCafeParams {
    fn from(mut args: QueryArgs) -> Self {
        Self {
            name: args.take("name"),
            map_url: args.take("map_url"),
            img_url: args.take("img_url"),
            location: args.take("location"),
            seats: args.take("seats"),
            has_toilet: args.take("has_toilet"),
            has_wifi: args.take("has_wifi"),
            has_sockets: args.take("has_sockets"),
            can_take_calls: args.take("can_take_calls"),
            coffee_price: args.take("coffee_price"),
        }
    }
}

impl AddCafeParams {
    /// Builds the record to insert.
    ///
    /// Amenity flags use the presence rule from [`presence_flag`]: any
    /// non-empty value (even `"false"`) means `true`, and only an absent or
    /// empty parameter means `false`.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::MissingField` naming the first required text
    /// field that is absent.
    pub fn into_new_cafe(self) -> Result<NewCafe, CafeError> {
        Ok(NewCafe {
            has_toilet: presence_flag(self.has_toilet.as_deref()),
            has_wifi: presence_flag(self.has_wifi.as_deref()),
            has_sockets: presence_flag(self.has_sockets.as_deref()),
            can_take_calls: presence_flag(self.can_take_calls.as_deref()),
            name: required(self.name, "name")?,
            map_url: required(self.map_url, "map_url")?,
            img_url: required(self.img_url, "img_url")?,
            location: required(self.location, "location")?,
            seats: required(self.seats, "seats")?,
            coffee_price: self.coffee_price,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CafeError> {
    value.ok_or(CafeError::MissingField(field))
}
