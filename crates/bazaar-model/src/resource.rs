//! The backend resource registry.
//!
//! Every screen in the studio maps onto one of these collections. The enum
//! carries the routing and invalidation metadata the client and cache layers
//! share: the path segment, the list of dependent resources whose cached
//! lists a mutation must also invalidate, and whether writes are multipart.

use std::fmt;

/// One backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Products,
    Inventory,
    Blogs,
    Categories,
    Users,
    Orders,
    Reviews,
    Ads,
    Comments,
    Contact,
    Banners,
    Brands,
    Deals,
}

impl Resource {
    /// All resources, in sidebar order.
    pub const ALL: [Resource; 13] = [
        Self::Products,
        Self::Inventory,
        Self::Categories,
        Self::Brands,
        Self::Orders,
        Self::Reviews,
        Self::Deals,
        Self::Ads,
        Self::Banners,
        Self::Blogs,
        Self::Comments,
        Self::Users,
        Self::Contact,
    ];

    /// Stable string key, used in cache keys and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Inventory => "inventory",
            Self::Blogs => "blogs",
            Self::Categories => "categories",
            Self::Users => "users",
            Self::Orders => "orders",
            Self::Reviews => "reviews",
            Self::Ads => "ads",
            Self::Comments => "comments",
            Self::Contact => "contact",
            Self::Banners => "banners",
            Self::Brands => "brands",
            Self::Deals => "deals",
        }
    }

    /// Collection path under the API base, e.g. `/api/products`.
    pub fn base_path(self) -> String {
        format!("/api/{}", self.name())
    }

    /// Item path, e.g. `/api/products/42`.
    pub fn item_path(self, id: &str) -> String {
        format!("/api/{}/{id}", self.name())
    }

    /// Resources whose cached lists are also invalidated by a mutation of
    /// this one. Adjusting inventory changes product stock; deleting an
    /// order may restock products.
    pub const fn dependents(self) -> &'static [Resource] {
        match self {
            Self::Inventory => &[Self::Products],
            Self::Orders => &[Self::Products, Self::Inventory],
            _ => &[],
        }
    }

    /// Whether create/update for this resource encode as multipart form
    /// data (resources with file attachments).
    pub const fn multipart(self) -> bool {
        matches!(self, Self::Blogs | Self::Ads | Self::Banners | Self::Brands)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Resource::Products.base_path(), "/api/products");
        assert_eq!(Resource::Contact.item_path("7"), "/api/contact/7");
    }

    #[test]
    fn inventory_invalidates_products() {
        assert_eq!(Resource::Inventory.dependents(), &[Resource::Products]);
        assert!(Resource::Categories.dependents().is_empty());
    }

    #[test]
    fn multipart_resources() {
        for r in [
            Resource::Blogs,
            Resource::Ads,
            Resource::Banners,
            Resource::Brands,
        ] {
            assert!(r.multipart());
        }
        assert!(!Resource::Products.multipart());
        assert!(!Resource::Deals.multipart());
    }
}
