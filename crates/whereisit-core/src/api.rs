//! Backend endpoint catalogue.
//!
//! Paths go through the [`PathResolver`]; query strings are appended after
//! resolution so slash normalization never touches encoded values.

use crate::path::PathResolver;
use crate::route::BoxKey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    resolver: PathResolver,
}

impl Endpoints {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn units(&self) -> String {
        self.resolver.resolve("/api/units")
    }

    pub fn unit(&self, id: u64) -> String {
        self.resolver.resolve(&format!("/api/units/{}", id))
    }

    pub fn storage_box(&self, id: u64) -> String {
        self.resolver.resolve(&format!("/api/boxes/{}", id))
    }

    /// `GET /api/boxes/slug/:slug`
    pub fn box_by_slug(&self, slug: &str) -> String {
        format!(
            "{}/{}",
            self.resolver.resolve("/api/boxes/slug"),
            urlencoding::encode(slug)
        )
    }

    /// Box lookup by whichever key the route carries.
    pub fn box_by_key(&self, key: &BoxKey) -> String {
        match key {
            BoxKey::Id(id) => self.storage_box(*id),
            BoxKey::Slug(slug) => self.box_by_slug(slug),
        }
    }

    /// QR code image rendered by the backend for a box.
    pub fn box_qrcode(&self, id: u64) -> String {
        self.resolver.resolve(&format!("/api/boxes/{}/qrcode", id))
    }

    pub fn categories(&self) -> String {
        self.resolver.resolve("/api/categories")
    }

    /// `GET /api/search?q=<text>[&category=<cat>]`
    pub fn search(&self, query: &str, category: Option<&str>) -> String {
        let mut url = format!(
            "{}?q={}",
            self.resolver.resolve("/api/search"),
            urlencoding::encode(query)
        );
        if let Some(category) = category {
            url.push_str("&category=");
            url.push_str(&urlencoding::encode(category));
        }
        url
    }

    /// Photo URL as stored on an item (`/api/photos/...`).
    pub fn photo(&self, photo_path: &str) -> String {
        self.resolver.resolve(photo_path)
    }
}
