//! The per-resource operation surface.
//!
//! Generic CRUD is table-driven from [`Resource`] metadata (path, write
//! verb, multipart). Resource-specific verbs are explicit methods so the
//! call sites read like the backend's route table.

use serde_json::{Map, Value, json};

use bazaar_model::{ListParams, Record, RecordId, Resource};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::form::{FilePart, build_form};

/// Inventory adjustment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryOp {
    Set,
    Increase,
    Decrease,
}

impl InventoryOp {
    pub const ALL: [InventoryOp; 3] = [Self::Set, Self::Increase, Self::Decrease];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }

    /// Human label for the operation picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Set => "Set exact amount",
            Self::Increase => "Increase",
            Self::Decrease => "Decrease",
        }
    }
}

impl std::fmt::Display for InventoryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl ApiClient {
    // -------------------------------------------------------------------------
    // Generic CRUD
    // -------------------------------------------------------------------------

    /// Fetch a resource's collection.
    pub async fn list(&self, resource: Resource, params: &ListParams) -> Result<Vec<Record>> {
        tracing::debug!(resource = %resource, params = %params, "list");
        let body = self.get_json(&resource.base_path(), params).await?;
        Ok(Record::from_list(body)?)
    }

    /// Create an entity. Multipart resources route through the form
    /// encoder; everything else posts plain JSON.
    pub async fn create(
        &self,
        resource: Resource,
        payload: Map<String, Value>,
        files: Vec<FilePart>,
    ) -> Result<Record> {
        tracing::debug!(resource = %resource, "create");
        let path = resource.base_path();
        let body = if resource.multipart() {
            self.post_multipart(&path, build_form(&payload, files)?).await?
        } else {
            self.post_json(&path, &Value::Object(payload)).await?
        };
        Ok(Record::from_value(body)?)
    }

    /// Update an entity (fields merged server-side).
    pub async fn update(
        &self,
        resource: Resource,
        id: &RecordId,
        payload: Map<String, Value>,
        files: Vec<FilePart>,
    ) -> Result<Record> {
        tracing::debug!(resource = %resource, %id, "update");
        let path = resource.item_path(id.as_str());
        let body = if resource.multipart() {
            self.put_multipart(&path, build_form(&payload, files)?).await?
        } else if resource == Resource::Reviews {
            // Reviews are moderated through PATCH, not PUT.
            self.patch_json(&path, &Value::Object(payload)).await?
        } else {
            self.put_json(&path, &Value::Object(payload)).await?
        };
        Ok(Record::from_value(body)?)
    }

    /// Delete an entity. `params` carries extras such as orders'
    /// `restock=true`.
    pub async fn remove(
        &self,
        resource: Resource,
        id: &RecordId,
        params: &ListParams,
    ) -> Result<()> {
        tracing::debug!(resource = %resource, %id, "remove");
        self.delete_json(&resource.item_path(id.as_str()), params)
            .await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Resource-specific verbs
    // -------------------------------------------------------------------------

    /// PATCH `/api/inventory/:productId` with an operation mode.
    pub async fn adjust_inventory(
        &self,
        product_id: &RecordId,
        quantity: i64,
        op: InventoryOp,
    ) -> Result<Record> {
        let body = json!({ "quantity": quantity, "operation": op.as_str() });
        let value = self
            .patch_json(&Resource::Inventory.item_path(product_id.as_str()), &body)
            .await?;
        Ok(Record::from_value(value)?)
    }

    /// GET `/api/orders/meta/statuses`.
    pub async fn order_statuses(&self) -> Result<Vec<String>> {
        let value = self
            .get_json("/api/orders/meta/statuses", &ListParams::new())
            .await?;
        let Value::Array(items) = value else {
            return Err(ApiError::Decode("statuses: expected an array".to_string()));
        };
        items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => Ok(s),
                other => Err(ApiError::Decode(format!("statuses: unexpected entry {other}"))),
            })
            .collect()
    }

    /// PATCH `/api/orders/:id/status`.
    pub async fn update_order_status(&self, id: &RecordId, status: &str) -> Result<Record> {
        let body = json!({ "status": status });
        let value = self
            .patch_json(&format!("/api/orders/{id}/status"), &body)
            .await?;
        Ok(Record::from_value(value)?)
    }

    /// POST `/api/users/:id/notifications`.
    pub async fn send_notification(
        &self,
        user_id: &RecordId,
        payload: Map<String, Value>,
    ) -> Result<()> {
        self.post_json(
            &format!("/api/users/{user_id}/notifications"),
            &Value::Object(payload),
        )
        .await?;
        Ok(())
    }

    /// GET `/api/contact/:id`.
    pub async fn contact_message(&self, id: &RecordId) -> Result<Record> {
        let value = self
            .get_json(&Resource::Contact.item_path(id.as_str()), &ListParams::new())
            .await?;
        Ok(Record::from_value(value)?)
    }

    /// PATCH `/api/contact/:id/status`, optionally attaching a reply.
    pub async fn update_contact_status(
        &self,
        id: &RecordId,
        status: &str,
        reply_message: Option<&str>,
    ) -> Result<Record> {
        let mut body = Map::new();
        body.insert("status".to_string(), Value::String(status.to_string()));
        if let Some(reply) = reply_message {
            body.insert(
                "replyMessage".to_string(),
                Value::String(reply.to_string()),
            );
        }
        let value = self
            .patch_json(&format!("/api/contact/{id}/status"), &Value::Object(body))
            .await?;
        Ok(Record::from_value(value)?)
    }
}
