// ==========================================
// Victor Repuestos - Mutación de stock + auditoría
// ==========================================
// Rol: aplicar deltas de stock y registrar el movimiento.
// El registro de auditoría es un canal lateral de mejor esfuerzo:
// si falla se loguea y no se corta la operación principal.
// ==========================================

use crate::domain::{Movement, Product, ProductField};
use crate::repository::{
    MovementRepository, ProductRepository, RepositoryError, RepositoryResult,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

// ==========================================
// StockChange - resultado de una mutación aplicada
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockChange {
    pub doc_key: String,
    pub previous_stock: i64,
    pub new_stock: i64,
}

// ==========================================
// StockMutationError - fallo con estado previo
// ==========================================
// Lleva el stock anterior para que el que llamó revierta su estado
// local de forma determinística (sin adivinar).
#[derive(Error, Debug)]
#[error("no se pudo actualizar el stock de {doc_key}: {source}")]
pub struct StockMutationError {
    pub doc_key: String,
    pub previous_stock: i64,
    #[source]
    pub source: RepositoryError,
}

// ==========================================
// StockMutationService
// ==========================================
pub struct StockMutationService<R, M>
where
    R: ProductRepository,
    M: MovementRepository,
{
    products: Arc<R>,
    movements: Arc<M>,
}

impl<R, M> StockMutationService<R, M>
where
    R: ProductRepository,
    M: MovementRepository,
{
    pub fn new(products: Arc<R>, movements: Arc<M>) -> Self {
        Self { products, movements }
    }

    /// Aplica un delta de stock sobre un producto.
    ///
    /// 1. Actualiza el campo stock en el almacén
    /// 2. Si la escritura falla, devuelve el stock previo para revertir
    /// 3. Si anda, registra el movimiento en el historial; un fallo
    ///    del historial NO hace fallar la mutación
    ///
    /// Dos usuarios tocando el mismo producto a la vez compiten:
    /// gana la última escritura (aceptado para un local chico).
    pub async fn adjust_stock(
        &self,
        product: &Product,
        delta: i64,
        user_email: &str,
        reason: Option<&str>,
    ) -> Result<StockChange, StockMutationError> {
        let doc_key = product.doc_key();
        let previous_stock = product.stock_disponible();
        let new_stock = previous_stock + delta;

        self.products
            .update_product_field(&doc_key, ProductField::Stock(new_stock))
            .await
            .map_err(|source| StockMutationError {
                doc_key: doc_key.clone(),
                previous_stock,
                source,
            })?;

        debug!(codigo = %product.codigo, previous_stock, new_stock, "stock actualizado");

        // Canal lateral de auditoría (mejor esfuerzo)
        let movement = Movement::new(product, delta, new_stock, user_email, reason);
        if let Err(e) = self.movements.append_movement(movement).await {
            warn!(
                error = %e,
                codigo = %product.codigo,
                "no se pudo registrar el movimiento; la mutación sigue en pie"
            );
        }

        Ok(StockChange {
            doc_key,
            previous_stock,
            new_stock,
        })
    }

    /// Actualiza la ubicación de un producto.
    /// Los cambios de ubicación no generan movimiento de auditoría.
    pub async fn update_location(
        &self,
        product: &Product,
        location: &str,
    ) -> RepositoryResult<()> {
        self.products
            .update_product_field(
                &product.doc_key(),
                ProductField::Location(location.to_string()),
            )
            .await
    }
}
