// ==========================================
// Victor Repuestos - API de inventario
// ==========================================
// Rol: catálogo, búsqueda, stock y ubicación
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::Product;
use crate::engine::{StockChange, StockMutationService};
use crate::repository::{MovementRepository, ProductRepository};
use std::sync::Arc;

// ==========================================
// InventoryApi
// ==========================================
pub struct InventoryApi<R, M>
where
    R: ProductRepository,
    M: MovementRepository,
{
    repo: Arc<R>,
    stock_service: StockMutationService<R, M>,
    low_stock_threshold: i64,
}

impl<R, M> InventoryApi<R, M>
where
    R: ProductRepository + Send + Sync + 'static,
    M: MovementRepository + Send + Sync + 'static,
{
    pub fn new(products: Arc<R>, movements: Arc<M>, low_stock_threshold: i64) -> Self {
        Self {
            repo: Arc::clone(&products),
            stock_service: StockMutationService::new(products, movements),
            low_stock_threshold,
        }
    }

    /// Catálogo completo (una sola lectura masiva)
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        Ok(self.repo.list_products().await?)
    }

    /// Busca un producto por su clave de documento
    pub async fn get_product(&self, doc_key: &str) -> ApiResult<Option<Product>> {
        Ok(self.repo.get_product(doc_key).await?)
    }

    /// Búsqueda del catálogo: filtro por subcadena de código o
    /// descripción (sin distinguir mayúsculas) y opcionalmente solo
    /// stock crítico. El catálogo se baja entero y se filtra en
    /// memoria (son pocos miles de registros).
    pub async fn search_products(
        &self,
        filter: &str,
        only_low_stock: bool,
    ) -> ApiResult<Vec<Product>> {
        let filter = filter.to_lowercase();
        let products = self.repo.list_products().await?;

        Ok(products
            .into_iter()
            .filter(|p| {
                let matches_search = filter.is_empty()
                    || p.codigo.to_lowercase().contains(&filter)
                    || p.descripcion.to_lowercase().contains(&filter);
                let matches_stock =
                    !only_low_stock || p.es_stock_critico(self.low_stock_threshold);
                matches_search && matches_stock
            })
            .collect())
    }

    /// Aplica un delta de stock y registra el movimiento.
    ///
    /// En caso de error el ApiError lleva el stock previo, para que
    /// la interfaz revierta su actualización optimista.
    pub async fn adjust_stock(
        &self,
        product: &Product,
        delta: i64,
        user_email: &str,
    ) -> ApiResult<StockChange> {
        Ok(self
            .stock_service
            .adjust_stock(product, delta, user_email, None)
            .await?)
    }

    /// Igual que adjust_stock pero con motivo explícito
    pub async fn adjust_stock_with_reason(
        &self,
        product: &Product,
        delta: i64,
        user_email: &str,
        reason: &str,
    ) -> ApiResult<StockChange> {
        Ok(self
            .stock_service
            .adjust_stock(product, delta, user_email, Some(reason))
            .await?)
    }

    /// Guarda la ubicación editada (sin movimiento de auditoría)
    pub async fn update_location(&self, product: &Product, location: &str) -> ApiResult<()> {
        Ok(self.stock_service.update_location(product, location).await?)
    }
}
