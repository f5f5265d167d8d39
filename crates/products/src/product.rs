use serde::{Deserialize, Serialize};

use telinv_core::{Draft, DomainError, DomainResult, Entity, EntityId, impl_entity_id};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl_entity_id!(ProductId, "ProductId");

/// A tracked stock item.
///
/// Wire shape matches the inventory API (camelCase field names). Stock and
/// reorder point are numeric in the domain model; drafts hold the raw form
/// strings and parse on materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub reorder_point: i64,
}

impl Product {
    /// Whether this product has fallen to (or below) its reorder point.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_point
    }
}

/// Request body for product create/update: the product shape minus the
/// server-assigned id, levels parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub reorder_point: i64,
}

/// In-progress product form state. All fields are raw strings, exactly as
/// entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub reorder_point: String,
}

impl Draft for ProductDraft {
    fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        match name {
            "name" => self.name = value.to_string(),
            "category" => self.category = value.to_string(),
            "stock" => self.stock = value.to_string(),
            "reorderPoint" => self.reorder_point = value.to_string(),
            other => return Err(DomainError::unknown_field(other)),
        }
        Ok(())
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && !self.stock.trim().is_empty()
            && !self.reorder_point.trim().is_empty()
    }
}

impl Entity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    type Body = ProductBody;

    const RESOURCE: &'static str = "products";

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn to_body(draft: &ProductDraft) -> DomainResult<ProductBody> {
        Ok(ProductBody {
            name: draft.name.clone(),
            category: draft.category.clone(),
            stock: parse_level(&draft.stock, "stock")?,
            reorder_point: parse_level(&draft.reorder_point, "reorderPoint")?,
        })
    }

    fn from_draft(id: ProductId, draft: &ProductDraft) -> DomainResult<Self> {
        let body = Self::to_body(draft)?;
        Ok(Self {
            id,
            name: body.name,
            category: body.category,
            stock: body.stock,
            reorder_point: body.reorder_point,
        })
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            stock: self.stock.to_string(),
            reorder_point: self.reorder_point.to_string(),
        }
    }
}

fn parse_level(raw: &str, field: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("{field} must be numeric, got {raw:?}")))
}

/// Products at or below their reorder point, in snapshot order.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}
