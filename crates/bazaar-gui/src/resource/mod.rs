//! Per-resource UI specifications.
//!
//! Every CRUD screen is an instantiation of the same machinery; these static
//! tables are the only thing that differs between them: which columns the
//! table shows, which fields the dialog edits, and what the entity is called
//! in toasts.

use bazaar_model::{ColumnKind, Resource};

/// One table column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Backend field name.
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
}

/// How a dialog field is edited and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// Parsed on submit; invalid input coerces to 0.
    Number,
    Flag,
    /// Comma-separated in the editor, JSON array on the wire.
    Tags,
    Select(&'static [&'static str]),
    /// A file attachment field (e.g. `logoFile`) with its companion
    /// URL-based field (e.g. `logo`).
    File { url_field: &'static str },
}

/// One dialog field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Backend field name (for [`FieldKind::File`], the attachment field).
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Template default for text-like kinds.
    pub default: &'static str,
    /// Template default for [`FieldKind::Flag`].
    pub flag_default: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
            default: "",
            flag_default: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    const fn default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }

    const fn flag(name: &'static str, label: &'static str, on: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Flag,
            required: false,
            default: "",
            flag_default: on,
        }
    }
}

/// Everything a generic page needs to render one resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSpec {
    pub resource: Resource,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Singular noun for toasts ("Product created").
    pub singular: &'static str,
    pub columns: &'static [ColumnSpec],
    pub fields: &'static [FieldSpec],
    pub can_create: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

const fn column(id: &'static str, label: &'static str, kind: ColumnKind) -> ColumnSpec {
    ColumnSpec {
        id,
        label,
        kind,
        sortable: true,
    }
}

static PRODUCTS: ResourceSpec = ResourceSpec {
    resource: Resource::Products,
    title: "Products",
    subtitle: "Manage the storefront catalog",
    singular: "Product",
    columns: &[
        column("name", "Name", ColumnKind::Text),
        column("price", "Price", ColumnKind::Number),
        column("stock", "Stock", ColumnKind::Number),
        column("isAvailable", "Available", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("price", "Price").kind(FieldKind::Number).required(),
        FieldSpec::text("originalPrice", "Original price").kind(FieldKind::Number),
        FieldSpec::text("discount", "Discount %").kind(FieldKind::Number).default("0"),
        FieldSpec::text("unit", "Unit").default("kg"),
        FieldSpec::text("stock", "Stock").kind(FieldKind::Number).default("0"),
        FieldSpec::text("brand", "Brand"),
        FieldSpec::text("category", "Category"),
        FieldSpec::text("tags", "Tags").kind(FieldKind::Tags),
        FieldSpec::text("shortDescription", "Short description"),
        FieldSpec::text("description", "Description").kind(FieldKind::Multiline),
        FieldSpec::flag("isAvailable", "Available", true),
        FieldSpec::flag("isFeatured", "Featured", false),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static INVENTORY: ResourceSpec = ResourceSpec {
    resource: Resource::Inventory,
    title: "Inventory",
    subtitle: "Live stock control and warehouse adjustments",
    singular: "Inventory",
    columns: &[
        column("name", "Product", ColumnKind::Text),
        column("stock", "Current stock", ColumnKind::Number),
    ],
    fields: &[],
    can_create: false,
    can_edit: false,
    can_delete: false,
};

static BLOGS: ResourceSpec = ResourceSpec {
    resource: Resource::Blogs,
    title: "Blog Posts",
    subtitle: "Editorial content for the storefront",
    singular: "Post",
    columns: &[
        column("title", "Title", ColumnKind::Text),
        column("author", "Author", ColumnKind::Text),
        column("createdAt", "Created", ColumnKind::Date),
        column("published", "Published", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("author", "Author"),
        FieldSpec::text("excerpt", "Excerpt"),
        FieldSpec::text("content", "Content").kind(FieldKind::Multiline).required(),
        FieldSpec::text("tags", "Tags").kind(FieldKind::Tags),
        FieldSpec::text("coverImageFile", "Cover image")
            .kind(FieldKind::File { url_field: "coverImage" }),
        FieldSpec::flag("published", "Published", false),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static CATEGORIES: ResourceSpec = ResourceSpec {
    resource: Resource::Categories,
    title: "Categories",
    subtitle: "Define and order product categories",
    singular: "Category",
    columns: &[
        column("name", "Name", ColumnKind::Text),
        column("order", "Order", ColumnKind::Number),
        column("isActive", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("order", "Order").kind(FieldKind::Number).default("0"),
        FieldSpec::flag("isActive", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static USERS: ResourceSpec = ResourceSpec {
    resource: Resource::Users,
    title: "Users",
    subtitle: "Customer and staff accounts",
    singular: "User",
    columns: &[
        column("name", "Name", ColumnKind::Text),
        column("email", "Email", ColumnKind::Text),
        column("role", "Role", ColumnKind::Text),
        column("isActive", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("email", "Email").required(),
        FieldSpec::text("role", "Role")
            .kind(FieldKind::Select(&["customer", "admin"]))
            .default("customer"),
        FieldSpec::flag("isActive", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static ORDERS: ResourceSpec = ResourceSpec {
    resource: Resource::Orders,
    title: "Orders",
    subtitle: "Track and progress customer orders",
    singular: "Order",
    columns: &[
        column("orderNumber", "Order #", ColumnKind::Text),
        column("customerName", "Customer", ColumnKind::Text),
        column("total", "Total", ColumnKind::Number),
        column("createdAt", "Placed", ColumnKind::Date),
    ],
    fields: &[],
    can_create: false,
    can_edit: false,
    can_delete: true,
};

static REVIEWS: ResourceSpec = ResourceSpec {
    resource: Resource::Reviews,
    title: "Reviews",
    subtitle: "Moderate order reviews",
    singular: "Review",
    columns: &[
        column("productName", "Product", ColumnKind::Text),
        column("rating", "Rating", ColumnKind::Number),
        column("status", "Status", ColumnKind::Text),
        column("createdAt", "Submitted", ColumnKind::Date),
    ],
    fields: &[
        FieldSpec::text("status", "Status")
            .kind(FieldKind::Select(&["pending", "approved", "rejected"]))
            .default("pending")
            .required(),
    ],
    can_create: false,
    can_edit: true,
    can_delete: true,
};

static ADS: ResourceSpec = ResourceSpec {
    resource: Resource::Ads,
    title: "Ads",
    subtitle: "Promotional placements across the storefront",
    singular: "Ad",
    columns: &[
        column("title", "Title", ColumnKind::Text),
        column("placement", "Placement", ColumnKind::Text),
        column("priority", "Priority", ColumnKind::Number),
        column("active", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("placement", "Placement")
            .kind(FieldKind::Select(&["hero", "carousel", "sidebar", "footer"]))
            .default("hero")
            .required(),
        FieldSpec::text("ctaLabel", "CTA label"),
        FieldSpec::text("ctaUrl", "CTA link"),
        FieldSpec::text("priority", "Priority").kind(FieldKind::Number).default("0"),
        FieldSpec::text("imageFile", "Image")
            .kind(FieldKind::File { url_field: "image" }),
        FieldSpec::flag("active", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static COMMENTS: ResourceSpec = ResourceSpec {
    resource: Resource::Comments,
    title: "Comments",
    subtitle: "Moderate product comments",
    singular: "Comment",
    columns: &[
        column("author", "Author", ColumnKind::Text),
        column("content", "Comment", ColumnKind::Text),
        column("status", "Status", ColumnKind::Text),
        column("createdAt", "Posted", ColumnKind::Date),
    ],
    fields: &[
        FieldSpec::text("status", "Status")
            .kind(FieldKind::Select(&["pending", "approved", "rejected"]))
            .default("pending")
            .required(),
    ],
    can_create: false,
    can_edit: true,
    can_delete: true,
};

static CONTACT: ResourceSpec = ResourceSpec {
    resource: Resource::Contact,
    title: "Contact Messages",
    subtitle: "Inbox for storefront contact form submissions",
    singular: "Message",
    columns: &[
        column("name", "Name", ColumnKind::Text),
        column("email", "Email", ColumnKind::Text),
        column("subject", "Subject", ColumnKind::Text),
        column("createdAt", "Date", ColumnKind::Date),
        column("status", "Status", ColumnKind::Text),
    ],
    fields: &[],
    can_create: false,
    can_edit: false,
    can_delete: true,
};

static BANNERS: ResourceSpec = ResourceSpec {
    resource: Resource::Banners,
    title: "Banners",
    subtitle: "Homepage and campaign banners",
    singular: "Banner",
    columns: &[
        column("title", "Title", ColumnKind::Text),
        column("order", "Order", ColumnKind::Number),
        column("isActive", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("title", "Title").required(),
        FieldSpec::text("link", "Link"),
        FieldSpec::text("order", "Order").kind(FieldKind::Number).default("0"),
        FieldSpec::text("imageFile", "Image")
            .kind(FieldKind::File { url_field: "image" })
            .required(),
        FieldSpec::flag("isActive", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static BRANDS: ResourceSpec = ResourceSpec {
    resource: Resource::Brands,
    title: "Brands",
    subtitle: "Supplier and house brands",
    singular: "Brand",
    columns: &[
        column("name", "Name", ColumnKind::Text),
        column("isActive", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("description", "Description").kind(FieldKind::Multiline),
        FieldSpec::text("logoFile", "Logo").kind(FieldKind::File { url_field: "logo" }),
        FieldSpec::flag("isActive", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

static DEALS: ResourceSpec = ResourceSpec {
    resource: Resource::Deals,
    title: "Deals",
    subtitle: "Time-limited product discounts",
    singular: "Deal",
    columns: &[
        column("productId", "Product", ColumnKind::Text),
        column("discount", "Discount %", ColumnKind::Number),
        column("endsAt", "Ends", ColumnKind::Date),
        column("isActive", "Active", ColumnKind::Flag),
    ],
    fields: &[
        FieldSpec::text("productId", "Product id").required(),
        FieldSpec::text("discount", "Discount %").kind(FieldKind::Number).default("0"),
        FieldSpec::text("startsAt", "Starts at"),
        FieldSpec::text("endsAt", "Ends at"),
        FieldSpec::flag("isActive", "Active", true),
    ],
    can_create: true,
    can_edit: true,
    can_delete: true,
};

/// Look up the UI spec for a resource.
pub fn spec(resource: Resource) -> &'static ResourceSpec {
    match resource {
        Resource::Products => &PRODUCTS,
        Resource::Inventory => &INVENTORY,
        Resource::Blogs => &BLOGS,
        Resource::Categories => &CATEGORIES,
        Resource::Users => &USERS,
        Resource::Orders => &ORDERS,
        Resource::Reviews => &REVIEWS,
        Resource::Ads => &ADS,
        Resource::Comments => &COMMENTS,
        Resource::Contact => &CONTACT,
        Resource::Banners => &BANNERS,
        Resource::Brands => &BRANDS,
        Resource::Deals => &DEALS,
    }
}

/// Kind of a column, for the sorter.
pub fn column_kind(resource: Resource, column: &str) -> ColumnKind {
    spec(resource)
        .columns
        .iter()
        .find(|c| c.id == column)
        .map(|c| c.kind)
        .unwrap_or(ColumnKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_a_spec() {
        for resource in Resource::ALL {
            let spec = spec(resource);
            assert_eq!(spec.resource, resource);
            assert!(!spec.columns.is_empty(), "{resource} has no columns");
        }
    }

    #[test]
    fn multipart_resources_have_a_file_field() {
        for resource in Resource::ALL {
            let has_file = spec(resource)
                .fields
                .iter()
                .any(|f| matches!(f.kind, FieldKind::File { .. }));
            assert_eq!(
                has_file,
                resource.multipart(),
                "{resource}: file fields and multipart flag disagree"
            );
        }
    }

    #[test]
    fn dialog_resources_have_editable_fields() {
        for resource in Resource::ALL {
            let spec = spec(resource);
            if spec.can_create || spec.can_edit {
                assert!(!spec.fields.is_empty(), "{resource} opens an empty dialog");
            }
        }
    }
}
