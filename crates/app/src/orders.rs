//! Supplier-order gateways.
//!
//! Orders are a sub-resource of suppliers, so they get their own gateway
//! contract rather than the generic entity one. The created representation
//! is returned and appended to the history directly — orders have no
//! standalone collection endpoint to refetch.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use telinv_store::{GatewayError, GatewayResult, check_status};
use telinv_suppliers::{Order, OrderDraft, OrderId, SupplierId};

/// Create/delete orders and fetch the session's order history.
#[async_trait::async_trait]
pub trait OrderGateway: Send + Sync {
    /// Flat list of all known orders; callers group it per render.
    async fn fetch_history(&self) -> GatewayResult<Vec<Order>>;

    /// Place an order with a supplier; returns the stored representation
    /// (with its assigned id).
    async fn create_order(
        &self,
        supplier_id: SupplierId,
        draft: &OrderDraft,
    ) -> GatewayResult<Order>;

    /// Remove one order from a supplier's history.
    async fn delete_order(&self, supplier_id: SupplierId, order_id: OrderId)
    -> GatewayResult<()>;
}

/// In-memory order collection for local mode.
#[derive(Debug)]
pub struct LocalOrderGateway {
    orders: Mutex<Vec<Order>>,
}

impl LocalOrderGateway {
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for LocalOrderGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl OrderGateway for LocalOrderGateway {
    async fn fetch_history(&self) -> GatewayResult<Vec<Order>> {
        let orders = self.orders.lock().expect("order gateway poisoned");
        Ok(orders.clone())
    }

    async fn create_order(
        &self,
        supplier_id: SupplierId,
        draft: &OrderDraft,
    ) -> GatewayResult<Order> {
        let order = draft.into_order(OrderId::new(), supplier_id);
        let mut orders = self.orders.lock().expect("order gateway poisoned");
        orders.push(order.clone());
        Ok(order)
    }

    async fn delete_order(
        &self,
        supplier_id: SupplierId,
        order_id: OrderId,
    ) -> GatewayResult<()> {
        let mut orders = self.orders.lock().expect("order gateway poisoned");
        orders.retain(|o| !(o.supplier_id == supplier_id && o.id == order_id));
        Ok(())
    }
}

/// REST-backed order gateway.
///
/// `POST {base}/api/suppliers/{id}/orders` and
/// `DELETE {base}/api/suppliers/{id}/orders/{orderId}`. History is read off
/// the supplier collection response, which embeds each supplier's orders.
#[derive(Debug, Clone)]
pub struct RemoteOrderGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Wire body for order creation: the supplier is named by the path.
#[derive(Debug, Serialize)]
struct OrderBody<'a> {
    description: &'a str,
    status: &'a str,
}

/// Supplier collection row, reduced to what the history needs.
#[derive(Debug, Deserialize)]
struct SupplierOrdersRow {
    #[serde(default)]
    orders: Vec<Order>,
}

impl RemoteOrderGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn orders_url(&self, supplier_id: SupplierId) -> String {
        format!("{}/api/suppliers/{}/orders", self.base_url, supplier_id)
    }
}

#[async_trait::async_trait]
impl OrderGateway for RemoteOrderGateway {
    async fn fetch_history(&self) -> GatewayResult<Vec<Order>> {
        let url = format!("{}/api/suppliers", self.base_url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        let rows = resp
            .json::<Vec<SupplierOrdersRow>>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))?;
        Ok(rows.into_iter().flat_map(|row| row.orders).collect())
    }

    async fn create_order(
        &self,
        supplier_id: SupplierId,
        draft: &OrderDraft,
    ) -> GatewayResult<Order> {
        let body = OrderBody {
            description: &draft.description,
            status: &draft.status,
        };
        let resp = self
            .client
            .post(self.orders_url(supplier_id))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<Order>()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }

    async fn delete_order(
        &self,
        supplier_id: SupplierId,
        order_id: OrderId,
    ) -> GatewayResult<()> {
        let url = format!("{}/{}", self.orders_url(supplier_id), order_id);
        let resp = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use telinv_suppliers::OrderDraft;

    use super::*;

    fn draft(description: &str) -> OrderDraft {
        let mut d = OrderDraft::default();
        d.set_field("description", description).unwrap();
        d.set_field("status", "pending").unwrap();
        d
    }

    #[tokio::test]
    async fn local_create_assigns_unique_ids_within_a_supplier() {
        let gateway = LocalOrderGateway::new();
        let supplier = SupplierId::new();

        let first = gateway.create_order(supplier, &draft("24x SFP")).await.unwrap();
        let second = gateway.create_order(supplier, &draft("2km fiber")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(gateway.fetch_history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn local_delete_targets_one_order() {
        let gateway = LocalOrderGateway::new();
        let supplier = SupplierId::new();
        let keep = gateway.create_order(supplier, &draft("24x SFP")).await.unwrap();
        let drop = gateway.create_order(supplier, &draft("2km fiber")).await.unwrap();

        gateway.delete_order(supplier, drop.id).await.unwrap();

        let history = gateway.fetch_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, keep.id);
    }
}
