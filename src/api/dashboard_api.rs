// ==========================================
// Victor Repuestos - API del panel de control
// ==========================================
// Rol: métricas del catálogo y el historial de movimientos
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::Movement;
use crate::repository::{MovementRepository, ProductRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Movimientos que se muestran en el panel
const DASHBOARD_RECENT_MOVEMENTS: usize = 5;
/// Tope del historial completo
const MOVEMENT_HISTORY_LIMIT: usize = 100;

/// Métricas del panel de control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Cantidad de referencias en el catálogo
    pub total_products: usize,
    /// Unidades físicas totales
    pub total_units: i64,
    /// Valorización del inventario (stock x precio)
    pub total_value: f64,
    /// Referencias con stock crítico
    pub low_stock_count: usize,
    /// Últimos movimientos
    pub recent_movements: Vec<Movement>,
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi<R, M>
where
    R: ProductRepository,
    M: MovementRepository,
{
    products: Arc<R>,
    movements: Arc<M>,
    low_stock_threshold: i64,
}

impl<R, M> DashboardApi<R, M>
where
    R: ProductRepository + Send + Sync + 'static,
    M: MovementRepository + Send + Sync + 'static,
{
    pub fn new(products: Arc<R>, movements: Arc<M>, low_stock_threshold: i64) -> Self {
        Self {
            products,
            movements,
            low_stock_threshold,
        }
    }

    /// Calcula las métricas del panel en una pasada sobre el catálogo
    pub async fn get_summary(&self) -> ApiResult<DashboardSummary> {
        let products = self.products.list_products().await?;

        let mut total_units = 0i64;
        let mut total_value = 0f64;
        let mut low_stock_count = 0usize;

        for product in &products {
            let stock = product.stock_disponible();
            total_units += stock;
            total_value += stock as f64 * product.precio;
            if product.es_stock_critico(self.low_stock_threshold) {
                low_stock_count += 1;
            }
        }

        let recent_movements = self
            .movements
            .recent_movements(DASHBOARD_RECENT_MOVEMENTS)
            .await?;

        Ok(DashboardSummary {
            total_products: products.len(),
            total_units,
            total_value,
            low_stock_count,
            recent_movements,
        })
    }

    /// Historial de movimientos, del más nuevo al más viejo.
    /// Sin límite explícito se sirven los últimos 100.
    pub async fn list_movements(&self, limit: Option<usize>) -> ApiResult<Vec<Movement>> {
        let limit = limit.unwrap_or(MOVEMENT_HISTORY_LIMIT);
        Ok(self.movements.recent_movements(limit).await?)
    }
}
