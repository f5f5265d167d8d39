//! Order history: the supplier → orders mapping.

use std::collections::BTreeMap;

use crate::order::{Order, OrderId};
use crate::supplier::SupplierId;

/// Partition a flat order list by owning supplier, preserving insertion
/// order within each group. Pure projection; recompute per render.
pub fn group_by_supplier(orders: &[Order]) -> BTreeMap<SupplierId, Vec<&Order>> {
    let mut groups: BTreeMap<SupplierId, Vec<&Order>> = BTreeMap::new();
    for order in orders {
        groups.entry(order.supplier_id).or_default().push(order);
    }
    groups
}

/// Session-held order history, keyed by supplier.
///
/// Orders append to their supplier's group in arrival order. Deleting a
/// supplier removes its key entirely (cascade).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    groups: BTreeMap<SupplierId, Vec<Order>>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the history from a freshly fetched flat order list.
    pub fn rebuild(&mut self, orders: Vec<Order>) {
        self.groups.clear();
        for order in orders {
            self.record(order);
        }
    }

    /// Append an order to its supplier's group, creating the group if this
    /// is the supplier's first order.
    pub fn record(&mut self, order: Order) {
        self.groups.entry(order.supplier_id).or_default().push(order);
    }

    /// Remove one order from a supplier's group. Unknown ids no-op; an
    /// emptied group keeps its key, matching the source behavior.
    pub fn remove_order(&mut self, supplier_id: SupplierId, order_id: OrderId) {
        if let Some(orders) = self.groups.get_mut(&supplier_id) {
            orders.retain(|o| o.id != order_id);
        }
    }

    /// Cascade: drop the supplier's key and all its orders.
    pub fn remove_supplier(&mut self, supplier_id: SupplierId) {
        self.groups.remove(&supplier_id);
    }

    pub fn orders_for(&self, supplier_id: SupplierId) -> &[Order] {
        self.groups
            .get(&supplier_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn suppliers(&self) -> impl Iterator<Item = SupplierId> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SupplierId, &[Order])> {
        self.groups.iter().map(|(id, orders)| (*id, orders.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(supplier_id: SupplierId, description: &str) -> Order {
        Order {
            id: OrderId::new(),
            supplier_id,
            description: description.to_string(),
            status: "pending".to_string(),
        }
    }

    #[test]
    fn grouping_partitions_by_supplier_in_insertion_order() {
        let a = SupplierId::new();
        let b = SupplierId::new();
        let orders = vec![
            order(a, "first for A"),
            order(b, "first for B"),
            order(a, "second for A"),
        ];

        let groups = group_by_supplier(&orders);
        assert_eq!(groups.len(), 2);

        let for_a: Vec<&str> = groups[&a].iter().map(|o| o.description.as_str()).collect();
        assert_eq!(for_a, vec!["first for A", "second for A"]);
        assert_eq!(groups[&b].len(), 1);
    }

    #[test]
    fn cascade_removes_the_supplier_key() {
        let a = SupplierId::new();
        let b = SupplierId::new();
        let mut history = OrderHistory::new();
        history.record(order(a, "first for A"));
        history.record(order(b, "first for B"));

        history.remove_supplier(a);

        assert_eq!(history.len(), 1);
        assert!(history.orders_for(a).is_empty());
        assert_eq!(history.orders_for(b).len(), 1);
    }

    #[test]
    fn removing_one_order_keeps_the_group_key() {
        let a = SupplierId::new();
        let mut history = OrderHistory::new();
        let first = order(a, "first for A");
        let first_id = first.id;
        history.record(first);
        history.record(order(a, "second for A"));

        history.remove_order(a, first_id);

        assert_eq!(history.len(), 1, "emptying never drops the key");
        let remaining: Vec<&str> = history
            .orders_for(a)
            .iter()
            .map(|o| o.description.as_str())
            .collect();
        assert_eq!(remaining, vec!["second for A"]);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let a = SupplierId::new();
        let b = SupplierId::new();
        let mut history = OrderHistory::new();
        history.record(order(a, "stale"));

        history.rebuild(vec![order(b, "fresh")]);

        assert!(history.orders_for(a).is_empty());
        assert_eq!(history.orders_for(b).len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: grouping never loses or duplicates an order, and
            /// every group preserves the input's relative order.
            #[test]
            fn grouping_is_a_partition(assignments in proptest::collection::vec(0usize..4, 0..40)) {
                let suppliers: Vec<SupplierId> = (0..4).map(|_| SupplierId::new()).collect();
                let orders: Vec<Order> = assignments
                    .iter()
                    .enumerate()
                    .map(|(i, s)| order(suppliers[*s], &format!("order {i}")))
                    .collect();

                let groups = group_by_supplier(&orders);
                let total: usize = groups.values().map(Vec::len).sum();
                prop_assert_eq!(total, orders.len());

                for group in groups.values() {
                    let mut last_seen = None;
                    for o in group {
                        let pos = orders.iter().position(|x| x.id == o.id).unwrap();
                        if let Some(prev) = last_seen {
                            prop_assert!(pos > prev, "relative order preserved");
                        }
                        last_seen = Some(pos);
                    }
                }
            }
        }
    }
}
