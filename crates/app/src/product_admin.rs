//! Product feature session: stock tracking with reorder alerts.

use std::sync::Arc;

use telinv_core::{Draft as _, DomainResult, Entity as _};
use telinv_forms::{FormController, Submission};
use telinv_products::{Product, ProductDraft, ProductId, StockTransaction, low_stock};
use telinv_store::{DomainStore, MutationGateway, search_by_name};

/// One user's product-management session.
///
/// Holds the product store and the single in-progress form. Control flow per
/// action: form submits → gateway applies the change → store refetches →
/// views recompute from the new snapshot.
pub struct ProductAdmin {
    store: DomainStore<Product>,
    form: FormController<ProductId, ProductDraft>,
}

impl ProductAdmin {
    pub fn new(gateway: Arc<dyn MutationGateway<Product>>) -> Self {
        Self {
            store: DomainStore::new(gateway),
            form: FormController::new(),
        }
    }

    /// Resync the product list from the gateway.
    pub async fn refresh(&mut self) {
        self.store.refresh().await;
    }

    pub fn products(&self) -> &[Product] {
        self.store.snapshot()
    }

    pub fn form(&self) -> &FormController<ProductId, ProductDraft> {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> DomainResult<()> {
        self.form.set_field(name, value)
    }

    /// Copy an existing product into the form and arm update mode. Unknown
    /// ids silently no-op.
    pub fn start_edit(&mut self, id: ProductId) {
        if let Some(product) = self.store.find(id) {
            let draft = product.to_draft();
            self.form.start_edit(id, draft);
        }
    }

    /// Submit the form. Incomplete drafts are refused and left in place so
    /// the user can finish them; on gateway failure the form is likewise
    /// kept as entered.
    pub async fn submit(&mut self) {
        if !self.form.draft().is_complete() {
            tracing::warn!("product form incomplete; submit refused");
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

    pub async fn delete(&mut self, id: ProductId) {
        self.store.delete(id).await;
    }

    /// Apply a one-shot stock transaction to its target product by routing
    /// the adjusted product through the store's update path. Transactions
    /// for unknown products silently no-op.
    pub async fn apply_transaction(&mut self, tx: &StockTransaction) {
        let Some(product) = self.store.find(tx.product_id) else {
            tracing::debug!("stock transaction for unknown product {}", tx.product_id);
            return;
        };
        let mut adjusted = product.clone();
        adjusted.apply_transaction(tx);
        self.store.update(tx.product_id, &adjusted.to_draft()).await;
    }

    /// Products at or below their reorder point, recomputed per call.
    pub fn low_stock(&self) -> Vec<&Product> {
        low_stock(self.store.snapshot())
    }

    /// Case-insensitive name search over the current snapshot.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        search_by_name(self.store.snapshot(), query)
    }
}
