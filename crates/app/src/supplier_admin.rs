//! Supplier feature session: supplier CRUD plus order history.

use std::sync::Arc;

use telinv_core::{Draft as _, DomainResult, Entity as _};
use telinv_forms::{FormController, Submission};
use telinv_store::{DomainStore, MutationGateway, search_by_name};
use telinv_suppliers::{
    Order, OrderDraft, OrderHistory, OrderId, Supplier, SupplierDraft, SupplierId,
};

use crate::orders::OrderGateway;

/// One user's supplier-management session.
///
/// Owns the supplier store, the supplier form, the order form, and the
/// session's order history. Deleting a supplier cascades to its order
/// history once the gateway confirms the delete.
pub struct SupplierAdmin {
    store: DomainStore<Supplier>,
    form: FormController<SupplierId, SupplierDraft>,
    order_form: OrderDraft,
    history: OrderHistory,
    orders: Arc<dyn OrderGateway>,
}

impl SupplierAdmin {
    pub fn new(
        gateway: Arc<dyn MutationGateway<Supplier>>,
        orders: Arc<dyn OrderGateway>,
    ) -> Self {
        Self {
            store: DomainStore::new(gateway),
            form: FormController::new(),
            order_form: OrderDraft::default(),
            history: OrderHistory::new(),
            orders,
        }
    }

    /// Resync suppliers and order history from the gateways.
    pub async fn refresh(&mut self) {
        self.store.refresh().await;
        match self.orders.fetch_history().await {
            Ok(orders) => self.history.rebuild(orders),
            Err(err) => {
                tracing::error!("error fetching orders: {}", err);
            }
        }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        self.store.snapshot()
    }

    pub fn form(&self) -> &FormController<SupplierId, SupplierDraft> {
        &self.form
    }

    pub fn order_form(&self) -> &OrderDraft {
        &self.order_form
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        self.form.set_field(name, value)
    }

    pub fn set_order_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        self.order_form.set_field(name, value)
    }

    /// Copy an existing supplier into the form and arm update mode. Unknown
    /// ids silently no-op.
    pub fn start_edit(&mut self, id: SupplierId) {
        if let Some(supplier) = self.store.find(id) {
            let draft = supplier.to_draft();
            self.form.start_edit(id, draft);
        }
    }

    /// Submit the supplier form. Incomplete drafts are refused and kept; on
    /// gateway failure the form is likewise kept as entered.
    pub async fn submit(&mut self) {
        if !self.form.draft().is_complete() {
            tracing::warn!("supplier form incomplete; submit refused");
            return;
        }
        let applied = match self.form.submission() {
            Submission::Create(draft) => self.store.create(&draft).await,
            Submission::Update(id, draft) => self.store.update(id, &draft).await,
        };
        if applied {
            self.form.clear();
        }
    }

    /// Delete a supplier; on confirmed removal the order history drops the
    /// supplier's key as well.
    pub async fn delete(&mut self, id: SupplierId) {
        if self.store.delete(id).await {
            self.history.remove_supplier(id);
        }
    }

    /// Submit the order form. A submit without a selected supplier silently
    /// no-ops; otherwise presence is required on every field. On success the
    /// returned representation is appended to the supplier's group and the
    /// form clears; on failure the form stays as entered.
    pub async fn submit_order(&mut self) {
        if self.order_form.supplier_id.trim().is_empty() {
            return;
        }
        if !self.order_form.is_complete() {
            tracing::warn!("order form incomplete; submit refused");
            return;
        }
        let supplier_id = match self.order_form.supplier_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("order form has an unusable supplier selection: {}", err);
                return;
            }
        };
        match self.orders.create_order(supplier_id, &self.order_form).await {
            Ok(order) => {
                self.history.record(order);
                self.order_form.clear();
            }
            Err(err) => {
                tracing::error!("error saving order: {}", err);
            }
        }
    }

    /// Delete one order from a supplier's history.
    pub async fn delete_order(&mut self, supplier_id: SupplierId, order_id: OrderId) {
        match self.orders.delete_order(supplier_id, order_id).await {
            Ok(()) => self.history.remove_order(supplier_id, order_id),
            Err(err) => {
                tracing::error!("error deleting order: {}", err);
            }
        }
    }

    pub fn orders_for(&self, supplier_id: SupplierId) -> &[Order] {
        self.history.orders_for(supplier_id)
    }

    /// Case-insensitive name search over the current snapshot.
    pub fn search(&self, query: &str) -> Vec<&Supplier> {
        search_by_name(self.store.snapshot(), query)
    }
}
