// SPDX-License-Identifier: MPL-2.0
//! Typed lists over a [`KeyValueStore`].

use super::KeyValueStore;
use crate::error::{Error, Result};
use crate::site::{BlogPost, ContactRequest, Testimonial};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const TESTIMONIALS_KEY: &str = "testimonials";
pub const CONTACTS_KEY: &str = "contacts";
pub const BLOGS_KEY: &str = "blogs";

const ALL_KEYS: [&str; 3] = [TESTIMONIALS_KEY, CONTACTS_KEY, BLOGS_KEY];

/// Snapshot of every collection, as printed by `--dump-store`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDump {
    pub testimonials: Vec<Testimonial>,
    pub contacts: Vec<ContactRequest>,
    pub blogs: Vec<BlogPost>,
}

#[derive(Debug)]
pub struct Collections<S> {
    store: S,
}

impl<S: KeyValueStore> Collections<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Testimonials, newest first.
    #[must_use]
    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.list(TESTIMONIALS_KEY)
    }

    /// Stores `testimonial` ahead of the existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn add_testimonial(&mut self, testimonial: Testimonial) -> Result<()> {
        let mut all = self.testimonials();
        all.insert(0, testimonial);
        self.save(TESTIMONIALS_KEY, &all)
    }

    /// Contact requests, oldest first.
    #[must_use]
    pub fn contacts(&self) -> Vec<ContactRequest> {
        self.list(CONTACTS_KEY)
    }

    /// Appends `request`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn add_contact(&mut self, request: ContactRequest) -> Result<()> {
        let mut all = self.contacts();
        all.push(request);
        self.save(CONTACTS_KEY, &all)
    }

    /// Imported blog posts, oldest first.
    #[must_use]
    pub fn blogs(&self) -> Vec<BlogPost> {
        self.list(BLOGS_KEY)
    }

    /// Appends an imported `post`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn add_blog(&mut self, post: BlogPost) -> Result<()> {
        let mut all = self.blogs();
        all.push(post);
        self.save(BLOGS_KEY, &all)
    }

    #[must_use]
    pub fn dump(&self) -> StoreDump {
        StoreDump {
            testimonials: self.testimonials(),
            contacts: self.contacts(),
            blogs: self.blogs(),
        }
    }

    /// Removes every collection.
    ///
    /// # Errors
    ///
    /// Returns the first write error; earlier keys stay removed.
    pub fn clear(&mut self) -> Result<()> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    /// Decodes the list under `key`; a missing or undecodable value reads as
    /// empty.
    fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(bytes) = self.store.get(key) else {
            return Vec::new();
        };
        match ciborium::from_reader(bytes.as_slice()) {
            Ok(list) => list,
            Err(error) => {
                tracing::warn!(key, %error, "stored collection is unreadable");
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, list: &[T]) -> Result<()> {
        let mut bytes = Vec::new();
        ciborium::into_writer(list, &mut bytes).map_err(|e| Error::Store(e.to_string()))?;
        self.store.put(key, bytes)
    }
}
