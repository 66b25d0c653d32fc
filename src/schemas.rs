//! Document shapes for each collection. URL fields are checked at deserialization via `url::Url`;
//! the remaining field constraints are enforced by [`Validate`](crate::service::Validate).

use crate::store::Collection;
use serde::{Deserialize, Serialize};
use url::Url;

/// Binds a document shape to the collection it is stored in.
pub trait Schema: Serialize {
    const COLLECTION: Collection;
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Years, 0..=120.
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Dollars, never negative.
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub website: Option<Url>,
    /// GitHub organisation.
    #[serde(default)]
    pub github: Option<Url>,
    #[serde(default)]
    pub x: Option<Url>,
    #[serde(default)]
    pub linkedin: Option<Url>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Primary role or title.
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Url>,
    #[serde(default)]
    pub github: Option<Url>,
    #[serde(default)]
    pub linkedin: Option<Url>,
    #[serde(default)]
    pub twitter: Option<Url>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub cover: Option<Url>,
    #[serde(default)]
    pub repo: Option<Url>,
    #[serde(default)]
    pub demo: Option<Url>,
    /// Member names. Not checked against the member collection.
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Schema for User {
    const COLLECTION: Collection = Collection::User;
}

impl Schema for Product {
    const COLLECTION: Collection = Collection::Product;
}

impl Schema for Team {
    const COLLECTION: Collection = Collection::Team;
}

impl Schema for Member {
    const COLLECTION: Collection = Collection::Member;
}

impl Schema for Project {
    const COLLECTION: Collection = Collection::Project;
}
