// ==========================================
// Victor Repuestos - Repositorio de productos (Trait)
// ==========================================
// Contrato angosto contra el almacén de documentos.
// Regla: el repositorio no contiene reglas de negocio,
// solo lectura/escritura de documentos.
// ==========================================

use crate::domain::{Product, ProductField, ProductUpsert};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

/// Tope duro de escrituras por lote del backend.
/// Un lote que lo supere se rechaza entero.
pub const MAX_BATCH_WRITES: usize = 500;

// ==========================================
// ProductRepository Trait
// ==========================================
// Implementado por: MemoryStore, SqliteStore
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lectura masiva de todo el catálogo, sin paginado.
    ///
    /// Aceptable para catálogos de pocos miles de registros; el
    /// catálogo completo se materializa en memoria.
    async fn list_products(&self) -> RepositoryResult<Vec<Product>>;

    /// Busca un documento por su clave derivada
    async fn get_product(&self, doc_key: &str) -> RepositoryResult<Option<Product>>;

    /// Upsert con semántica de merge, atómico por llamada.
    ///
    /// Cada payload actualiza SOLO codigo/descripcion/precio/updated_at;
    /// si el documento existe, stock y location quedan intactos, y si
    /// no existe se crea sin esos campos.
    ///
    /// # Retorna
    /// - Ok(usize): cantidad de documentos escritos
    /// - Err(BatchTooLarge): el lote supera MAX_BATCH_WRITES
    async fn upsert_product_batch(&self, batch: Vec<ProductUpsert>) -> RepositoryResult<usize>;

    /// Actualización parcial de un solo campo (stock o location)
    ///
    /// # Retorna
    /// - Err(NotFound): el documento no existe
    async fn update_product_field(
        &self,
        doc_key: &str,
        field: ProductField,
    ) -> RepositoryResult<()>;

    /// Cantidad de documentos en la colección
    async fn count_products(&self) -> RepositoryResult<usize>;
}
