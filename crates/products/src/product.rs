use serde::{Deserialize, Serialize};

use restapi_core::{Entity, EntityId};

/// A catalog product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Unit price in major currency units.
    pub price: f64,
}

impl Product {
    /// Create an unsaved product (id unassigned).
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: EntityId::UNASSIGNED,
            name: name.into(),
            price,
        }
    }

    /// Overwrite name and price, keeping `self.id`.
    pub fn apply_changes(&mut self, changes: ProductChanges) {
        self.name = changes.name;
        self.price = changes.price;
    }
}

impl Entity for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Product [id={}, name={}, price={:?}]", self.id, self.name, self.price)
    }
}

/// Editable fields of a product, as accepted by create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
}

impl From<ProductChanges> for Product {
    fn from(changes: ProductChanges) -> Self {
        Product::new(changes.name, changes.price)
    }
}

/// The products every fresh product store starts with, in id order.
pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", 1.5),
        Product::new("Banana", 0.75),
        Product::new("Orange", 1.25),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_is_unsaved() {
        let product = Product::new("Apple", 1.5);

        assert!(product.is_new());
        assert_eq!(product.name, "Apple");
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn default_catalog_is_unsaved_and_ordered() {
        let catalog = default_catalog();
        let names: Vec<_> = catalog.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Apple", "Banana", "Orange"]);
        assert!(catalog.iter().all(Entity::is_new));
    }

    #[test]
    fn display_keeps_decimal_point() {
        let mut product = Product::new("Banana", 1.0);
        product.set_id(EntityId::new(2));

        assert_eq!(product.to_string(), "Product [id=2, name=Banana, price=1.0]");
    }

    #[test]
    fn apply_changes_keeps_id() {
        let mut product = Product::new("Apple", 1.5);
        product.set_id(EntityId::new(1));

        product.apply_changes(ProductChanges {
            name: "Green Apple".to_string(),
            price: 1.75,
        });

        assert_eq!(product.id, EntityId::new(1));
        assert_eq!(product.name, "Green Apple");
        assert_eq!(product.price, 1.75);
    }

    #[test]
    fn json_uses_plain_field_names() {
        let mut product = Product::new("Orange", 1.25);
        product.set_id(EntityId::new(3));

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "Orange", "price": 1.25}));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: applying changes never touches identity.
            #[test]
            fn apply_changes_preserves_id(
                id in 1u64..10_000,
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in 0.0f64..10_000.0
            ) {
                let mut product = Product::new("Seed", 1.0);
                product.set_id(EntityId::new(id));

                product.apply_changes(ProductChanges { name: name.clone(), price });

                prop_assert_eq!(product.id, EntityId::new(id));
                prop_assert_eq!(product.name, name);
                prop_assert_eq!(product.price, price);
            }
        }
    }
}
