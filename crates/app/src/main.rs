use telinv_app::{Config, ProductAdmin, SupplierAdmin};
use telinv_products::{StockDirection, StockTransaction};

/// Scripted demo session: exercises both feature areas against whichever
/// strategy `TELINV_MODE` selects and prints the resulting snapshots.
#[tokio::main]
async fn main() {
    telinv_observability::init();

    let config = Config::from_env();
    tracing::info!(mode = ?config.mode, api_url = %config.api_url, "starting session");

    let mut products = ProductAdmin::new(config.product_gateway());
    let mut suppliers = SupplierAdmin::new(config.supplier_gateway(), config.order_gateway());
    products.refresh().await;
    suppliers.refresh().await;

    seed_products(&mut products).await;
    seed_suppliers(&mut suppliers).await;

    let modem_id = products.search("modem").first().map(|p| p.id);
    if let Some(id) = modem_id {
        let tx = StockTransaction::new(id, StockDirection::Out, 4);
        products.apply_transaction(&tx).await;
    }

    for product in products.low_stock() {
        tracing::warn!(
            "low stock: {} at {} (reorder point {})",
            product.name,
            product.stock,
            product.reorder_point
        );
    }

    match serde_json::to_string_pretty(products.products()) {
        Ok(json) => println!("products: {json}"),
        Err(err) => tracing::error!("error rendering products: {}", err),
    }
    for (supplier_id, orders) in suppliers.history().iter() {
        tracing::info!("supplier {} has {} order(s)", supplier_id, orders.len());
    }
}

async fn seed_products(admin: &mut ProductAdmin) {
    let rows = [
        ("Fiber Modem", "CPE", "6", "5"),
        ("Router X1", "core", "40", "10"),
        ("Splice Tray", "plant", "3", "8"),
    ];
    for (name, category, stock, reorder) in rows {
        let fields = [
            ("name", name),
            ("category", category),
            ("stock", stock),
            ("reorderPoint", reorder),
        ];
        for (field, value) in fields {
            if let Err(err) = admin.set_field(field, value) {
                tracing::error!("bad product field {}: {}", field, err);
            }
        }
        admin.submit().await;
    }
}

async fn seed_suppliers(admin: &mut SupplierAdmin) {
    let fields = [
        ("name", "NetParts Ltd"),
        ("contact", "021-555-0199"),
        ("email", "sales@netparts.example"),
        ("address", "4 Exchange Rd"),
    ];
    for (field, value) in fields {
        if let Err(err) = admin.set_field(field, value) {
            tracing::error!("bad supplier field {}: {}", field, err);
        }
    }
    admin.submit().await;

    let Some(supplier) = admin.suppliers().first() else {
        // Remote mode with the API down; the stores just stay empty.
        return;
    };
    let supplier_id = supplier.id.to_string();
    let order_fields = [
        ("supplierId", supplier_id.as_str()),
        ("description", "24x SFP modules"),
        ("status", "pending"),
    ];
    for (field, value) in order_fields {
        if let Err(err) = admin.set_order_field(field, value) {
            tracing::error!("bad order field {}: {}", field, err);
        }
    }
    admin.submit_order().await;
}
