//! Pagination & hypermedia assembly
//!
//! Navigation links live on returned view models, never on stored
//! state: attaching links is a pure function from an entity (or a page
//! of entities) to a new read-only view.

use serde::Serialize;
use surrealdb::RecordId;

use crate::db::models::Product;

/// A navigational reference attached to a returned view
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Link to a product's single-item retrieval operation
pub fn self_link(id: &RecordId) -> Link {
    Link {
        rel: "self".to_string(),
        href: format!("/products/{}", id),
    }
}

/// Link back to the default product listing
pub fn list_link() -> Link {
    Link {
        rel: "products".to_string(),
        href: "/products".to_string(),
    }
}

/// A product plus its navigation links
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub links: Vec<Link>,
}

/// Wrap a product with its self link
pub fn attach_self(product: Product) -> ProductView {
    let links = match &product.id {
        Some(id) => vec![self_link(id)],
        None => Vec::new(),
    };
    ProductView { product, links }
}

/// Wrap a product with a link back to the listing (single-item views)
pub fn attach_list(product: Product) -> ProductView {
    ProductView {
        product,
        links: vec![list_link()],
    }
}

/// Page metadata: requested size and zero-based index, plus the
/// whole-collection element count (not just the current page)
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub size: usize,
    pub number: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// A bounded page of product views with metadata and a self link
#[derive(Debug, Clone, Serialize)]
pub struct PagedProducts {
    pub items: Vec<ProductView>,
    pub page: PageMetadata,
    pub links: Vec<Link>,
}

/// Assemble a page view from a bounded scan result
///
/// `size` must be >= 1; callers validate before scanning.
pub fn page_of(items: Vec<Product>, number: usize, size: usize, total: u64) -> PagedProducts {
    debug_assert!(size >= 1, "page size must be >= 1");
    let items = items.into_iter().map(attach_self).collect();
    PagedProducts {
        items,
        page: PageMetadata {
            size,
            number,
            total_elements: total,
            total_pages: total.div_ceil(size as u64),
        },
        links: vec![Link {
            rel: "self".to_string(),
            href: format!("/products?page={}&size={}", number, size),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(key: &str, name: &str) -> Product {
        Product {
            id: Some(format!("product:{key}").parse().unwrap()),
            name: name.to_string(),
            value: "10.00".parse().unwrap(),
        }
    }

    #[test]
    fn test_self_link_href() {
        let view = attach_self(product("abc", "Keyboard"));
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].rel, "self");
        assert_eq!(view.links[0].href, "/products/product:abc");
    }

    #[test]
    fn test_list_link_points_to_default_listing() {
        let view = attach_list(product("abc", "Keyboard"));
        assert_eq!(view.links[0].rel, "products");
        assert_eq!(view.links[0].href, "/products");
    }

    #[test]
    fn test_page_metadata_math() {
        let items = vec![product("a", "A"), product("b", "B")];
        let page = page_of(items, 0, 2, 5);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page.size, 2);
        assert_eq!(page.page.number, 0);
        assert_eq!(page.page.total_elements, 5);
        assert_eq!(page.page.total_pages, 3);
        assert_eq!(page.links[0].href, "/products?page=0&size=2");
    }

    #[test]
    fn test_total_pages_exact_division() {
        let page = page_of(Vec::new(), 1, 5, 10);
        assert_eq!(page.page.total_pages, 2);
    }

    #[test]
    #[should_panic(expected = "page size must be >= 1")]
    fn test_page_of_rejects_zero_size() {
        page_of(Vec::new(), 0, 0, 10);
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = attach_self(product("abc", "Keyboard"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "product:abc");
        assert_eq!(json["name"], "Keyboard");
        assert!(json["links"].is_array());
    }
}
