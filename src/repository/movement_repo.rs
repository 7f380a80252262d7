// ==========================================
// Victor Repuestos - Repositorio de movimientos (Trait)
// ==========================================
// Colección solo-agregar: los movimientos no se editan ni se borran
// ==========================================

use crate::domain::Movement;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// MovementRepository Trait
// ==========================================
// Implementado por: MemoryStore, SqliteStore
#[async_trait]
pub trait MovementRepository: Send + Sync {
    /// Agrega un movimiento al historial
    ///
    /// # Retorna
    /// - Ok(movement_id): id del registro agregado
    async fn append_movement(&self, movement: Movement) -> RepositoryResult<String>;

    /// Últimos movimientos, ordenados por fecha descendente
    ///
    /// # Parámetros
    /// - limit: cantidad máxima de registros
    async fn recent_movements(&self, limit: usize) -> RepositoryResult<Vec<Movement>>;

    /// Cantidad de movimientos registrados
    async fn count_movements(&self) -> RepositoryResult<usize>;
}
