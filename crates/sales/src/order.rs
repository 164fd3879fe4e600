use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use restapi_core::{Entity, EntityId};
use restapi_products::Product;

/// A placed order.
///
/// `products` are snapshots taken when the order was built; later edits to
/// the product catalog do not reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub products: Vec<Product>,
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Create an unsaved order dated now.
    pub fn new(products: Vec<Product>) -> Self {
        Self::placed_at(products, Utc::now())
    }

    /// Create an unsaved order with an explicit date.
    pub fn placed_at(products: Vec<Product>, order_date: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            products,
            order_date,
        }
    }

    pub fn total_price(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Entity for Order {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Order [id={}, products=[", self.id)?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{product}")?;
        }
        write!(f, "], orderDate={}]", self.order_date.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn saved_product(id: u64, name: &str, price: f64) -> Product {
        let mut p = Product::new(name, price);
        p.set_id(EntityId::new(id));
        p
    }

    #[test]
    fn new_order_is_unsaved_and_dated() {
        let before = Utc::now();
        let order = Order::new(vec![saved_product(1, "Apple", 1.5)]);

        assert!(order.is_new());
        assert_eq!(order.products.len(), 1);
        assert!(order.order_date >= before);
    }

    #[test]
    fn products_are_snapshots() {
        let mut apple = saved_product(1, "Apple", 1.5);
        let order = Order::new(vec![apple.clone()]);

        apple.price = 99.0;

        assert_eq!(order.products[0].price, 1.5);
    }

    #[test]
    fn total_price_sums_products() {
        let order = Order::placed_at(
            vec![saved_product(1, "Apple", 1.5), saved_product(2, "Banana", 0.75)],
            fixed_time(),
        );

        assert_eq!(order.total_price(), 2.25);
    }

    #[test]
    fn json_uses_camel_case_order_date() {
        let mut order = Order::placed_at(vec![saved_product(1, "Apple", 1.5)], fixed_time());
        order.set_id(EntityId::new(1));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["products"][0]["name"], "Apple");
        assert_eq!(json["orderDate"], "2024-01-02T03:04:05Z");
        assert!(json.get("order_date").is_none());
    }

    #[test]
    fn display_lists_products() {
        let mut order = Order::placed_at(
            vec![saved_product(1, "Apple", 1.5), saved_product(2, "Banana", 0.75)],
            fixed_time(),
        );
        order.set_id(EntityId::new(9));

        assert_eq!(
            order.to_string(),
            "Order [id=9, products=[Product [id=1, name=Apple, price=1.5], \
             Product [id=2, name=Banana, price=0.75]], orderDate=2024-01-02T03:04:05+00:00]"
        );
    }
}
