// ==========================================
// Victor Repuestos - Almacén en memoria
// ==========================================
// Backing volátil del contrato de repositorios.
// Usado por los tests y como almacén de demostración.
// ==========================================

use crate::domain::{Movement, Product, ProductField, ProductUpsert};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::movement_repo::MovementRepository;
use crate::repository::product_repo::{ProductRepository, MAX_BATCH_WRITES};
use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::RwLock;

// ==========================================
// MemoryStore
// ==========================================
// BTreeMap para que list_products tenga orden estable por clave.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<BTreeMap<String, Product>>,
    movements: RwLock<Vec<Movement>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga un producto completo, stock y ubicación incluidos.
    /// Pensado para sembrar estado en tests y demos; el importador
    /// nunca escribe por este camino.
    pub fn seed_product(&self, product: Product) -> RepositoryResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        products.insert(product.doc_key(), product);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(products.values().cloned().collect())
    }

    async fn get_product(&self, doc_key: &str) -> RepositoryResult<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(products.get(doc_key).cloned())
    }

    async fn upsert_product_batch(&self, batch: Vec<ProductUpsert>) -> RepositoryResult<usize> {
        if batch.len() > MAX_BATCH_WRITES {
            return Err(RepositoryError::BatchTooLarge {
                got: batch.len(),
                max: MAX_BATCH_WRITES,
            });
        }

        let mut products = self
            .products
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let count = batch.len();
        for upsert in batch {
            match products.entry(upsert.doc_key()) {
                // Merge: stock y location quedan como estaban
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    existing.codigo = upsert.codigo;
                    existing.descripcion = upsert.descripcion;
                    existing.precio = upsert.precio;
                    existing.updated_at = Some(upsert.updated_at);
                }
                // Alta: el documento nace sin stock ni location
                Entry::Vacant(entry) => {
                    entry.insert(Product {
                        codigo: upsert.codigo,
                        descripcion: upsert.descripcion,
                        precio: upsert.precio,
                        stock: None,
                        location: None,
                        updated_at: Some(upsert.updated_at),
                    });
                }
            }
        }

        Ok(count)
    }

    async fn update_product_field(
        &self,
        doc_key: &str,
        field: ProductField,
    ) -> RepositoryResult<()> {
        let mut products = self
            .products
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let product = products
            .get_mut(doc_key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Product".to_string(),
                key: doc_key.to_string(),
            })?;

        match field {
            ProductField::Stock(stock) => product.stock = Some(stock),
            ProductField::Location(location) => product.location = Some(location),
        }

        Ok(())
    }

    async fn count_products(&self) -> RepositoryResult<usize> {
        let products = self
            .products
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(products.len())
    }
}

#[async_trait]
impl MovementRepository for MemoryStore {
    async fn append_movement(&self, movement: Movement) -> RepositoryResult<String> {
        let mut movements = self
            .movements
            .write()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        let id = movement.movement_id.clone();
        movements.push(movement);
        Ok(id)
    }

    async fn recent_movements(&self, limit: usize) -> RepositoryResult<Vec<Movement>> {
        let movements = self
            .movements
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        // Los append llegan en orden cronológico; el historial se sirve
        // del más nuevo al más viejo
        let mut recent: Vec<Movement> = movements.iter().rev().take(limit).cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recent)
    }

    async fn count_movements(&self) -> RepositoryResult<usize> {
        let movements = self
            .movements
            .read()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(movements.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn upsert(codigo: &str, precio: f64) -> ProductUpsert {
        ProductUpsert {
            codigo: codigo.to_string(),
            descripcion: format!("Repuesto {}", codigo),
            precio,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_without_stock_or_location() {
        let store = MemoryStore::new();
        store
            .upsert_product_batch(vec![upsert("D129/C", 1218.62)])
            .await
            .expect("upsert");

        let p = store
            .get_product("D129_C")
            .await
            .expect("get")
            .expect("existe");
        assert_eq!(p.codigo, "D129/C");
        assert_eq!(p.stock, None);
        assert_eq!(p.location, None);
    }

    #[tokio::test]
    async fn test_upsert_merge_preserves_stock_and_location() {
        let store = MemoryStore::new();
        store
            .seed_product(Product {
                codigo: "D129/C".to_string(),
                descripcion: "vieja".to_string(),
                precio: 1.0,
                stock: Some(7),
                location: Some("A1".to_string()),
                updated_at: None,
            })
            .expect("seed");

        store
            .upsert_product_batch(vec![upsert("D129/C", 1300.0)])
            .await
            .expect("upsert");

        let p = store
            .get_product("D129_C")
            .await
            .expect("get")
            .expect("existe");
        assert_eq!(p.precio, 1300.0);
        assert_eq!(p.stock, Some(7));
        assert_eq!(p.location, Some("A1".to_string()));
        assert!(p.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_oversized_batch_is_rejected() {
        let store = MemoryStore::new();
        let batch: Vec<ProductUpsert> = (0..=MAX_BATCH_WRITES)
            .map(|i| upsert(&format!("P{}", i), 1.0))
            .collect();

        let err = store.upsert_product_batch(batch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::BatchTooLarge { .. }));
        assert_eq!(store.count_products().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_update_field_on_missing_product_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_product_field("NOEXISTE", ProductField::Stock(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_recent_movements_newest_first() {
        let store = MemoryStore::new();
        let p = Product {
            codigo: "A1".to_string(),
            descripcion: "x".to_string(),
            precio: 1.0,
            stock: Some(0),
            location: None,
            updated_at: None,
        };
        for i in 1..=5 {
            store
                .append_movement(Movement::new(&p, 1, i, "v@r.com", None))
                .await
                .expect("append");
        }

        let recent = store.recent_movements(3).await.expect("recent");
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].new_stock, 5);
        assert_eq!(recent[2].new_stock, 3);
    }
}
