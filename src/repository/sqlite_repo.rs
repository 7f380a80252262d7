// ==========================================
// Victor Repuestos - Almacén SQLite
// ==========================================
// Backing persistente del contrato de repositorios.
// Dos tablas-colección: products y movements.
// Regla: sin reglas de negocio, solo mapeo de documentos.
// ==========================================

use crate::db;
use crate::domain::{Movement, MovementKind, Product, ProductField, ProductUpsert};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::movement_repo::MovementRepository;
use crate::repository::product_repo::{ProductRepository, MAX_BATCH_WRITES};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard};

/// Formato de almacenamiento de fechas (igual en ambas tablas)
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_ts(ts: DateTime<Utc>) -> String {
    ts.naive_utc().format(TS_FORMAT).to_string()
}

fn parse_ts(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TS_FORMAT)
        .ok()
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

// ==========================================
// SqliteStore
// ==========================================
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Abre (o crea) el almacén en la ruta indicada
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = db::open_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        db::init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Crea el almacén sobre una conexión existente.
    ///
    /// Vuelve a aplicar los PRAGMA unificados (idempotente) para
    /// garantizar el mismo comportamiento en cualquier origen.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            db::configure_connection(&guard)?;
            db::init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn map_product_row(row: &Row) -> rusqlite::Result<Product> {
        let updated_at: Option<String> = row.get(5)?;
        Ok(Product {
            codigo: row.get(0)?,
            descripcion: row.get(1)?,
            precio: row.get(2)?,
            stock: row.get(3)?,
            location: row.get(4)?,
            updated_at: updated_at.as_deref().and_then(parse_ts),
        })
    }

    fn map_movement_row(row: &Row) -> rusqlite::Result<Movement> {
        let kind_raw: String = row.get(5)?;
        let change: i64 = row.get(4)?;
        let created_at: String = row.get(10)?;
        Ok(Movement {
            movement_id: row.get(0)?,
            product_key: row.get(1)?,
            product_code: row.get(2)?,
            product_name: row.get(3)?,
            change,
            // Valores desconocidos se normalizan por el signo del delta
            kind: MovementKind::parse(&kind_raw).unwrap_or(MovementKind::from_change(change)),
            previous_stock: row.get(6)?,
            new_stock: row.get(7)?,
            user: row.get(8)?,
            reason: row.get(9)?,
            created_at: parse_ts(&created_at).unwrap_or_else(Utc::now),
        })
    }
}

const PRODUCT_COLUMNS: &str = "codigo, descripcion, precio, stock, location, updated_at";

#[async_trait]
impl ProductRepository for SqliteStore {
    async fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM products ORDER BY doc_key",
            PRODUCT_COLUMNS
        ))?;
        let products = stmt
            .query_map([], |row| Self::map_product_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }

    async fn get_product(&self, doc_key: &str) -> RepositoryResult<Option<Product>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM products WHERE doc_key = ?1",
            PRODUCT_COLUMNS
        ))?;
        match stmt.query_row(params![doc_key], |row| Self::map_product_row(row)) {
            Ok(product) => Ok(Some(product)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn upsert_product_batch(&self, batch: Vec<ProductUpsert>) -> RepositoryResult<usize> {
        if batch.len() > MAX_BATCH_WRITES {
            return Err(RepositoryError::BatchTooLarge {
                got: batch.len(),
                max: MAX_BATCH_WRITES,
            });
        }

        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = batch.len();
        {
            // El merge toca únicamente los cuatro campos del importador;
            // stock y location no aparecen en el UPDATE
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO products (doc_key, codigo, descripcion, precio, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ON CONFLICT(doc_key) DO UPDATE SET
                    codigo = excluded.codigo,
                    descripcion = excluded.descripcion,
                    precio = excluded.precio,
                    updated_at = excluded.updated_at
                "#,
            )?;

            for upsert in &batch {
                stmt.execute(params![
                    upsert.doc_key(),
                    upsert.codigo,
                    upsert.descripcion,
                    upsert.precio,
                    format_ts(upsert.updated_at),
                ])?;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn update_product_field(
        &self,
        doc_key: &str,
        field: ProductField,
    ) -> RepositoryResult<()> {
        let conn = self.lock()?;
        let rows = match &field {
            ProductField::Stock(stock) => conn.execute(
                "UPDATE products SET stock = ?1 WHERE doc_key = ?2",
                params![stock, doc_key],
            )?,
            ProductField::Location(location) => conn.execute(
                "UPDATE products SET location = ?1 WHERE doc_key = ?2",
                params![location, doc_key],
            )?,
        };

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                key: doc_key.to_string(),
            });
        }
        Ok(())
    }

    async fn count_products(&self) -> RepositoryResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[async_trait]
impl MovementRepository for SqliteStore {
    async fn append_movement(&self, movement: Movement) -> RepositoryResult<String> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO movements (
                movement_id, product_key, product_code, product_name,
                change, kind, previous_stock, new_stock,
                user_email, reason, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                movement.movement_id,
                movement.product_key,
                movement.product_code,
                movement.product_name,
                movement.change,
                movement.kind.as_str(),
                movement.previous_stock,
                movement.new_stock,
                movement.user,
                movement.reason,
                format_ts(movement.created_at),
            ],
        )?;
        Ok(movement.movement_id)
    }

    async fn recent_movements(&self, limit: usize) -> RepositoryResult<Vec<Movement>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT movement_id, product_key, product_code, product_name,
                   change, kind, previous_stock, new_stock,
                   user_email, reason, created_at
            FROM movements
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?1
            "#,
        )?;
        let movements = stmt
            .query_map(params![limit as i64], |row| Self::map_movement_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movements)
    }

    async fn count_movements(&self) -> RepositoryResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM movements", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn temp_store() -> (NamedTempFile, SqliteStore) {
        let file = NamedTempFile::new().expect("archivo temporal");
        let path = file.path().to_str().expect("ruta utf-8").to_string();
        let store = SqliteStore::new(&path).expect("abrir almacén");
        (file, store)
    }

    fn upsert(codigo: &str, precio: f64) -> ProductUpsert {
        ProductUpsert {
            codigo: codigo.to_string(),
            descripcion: format!("Repuesto {}", codigo),
            precio,
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_then_merge_preserves_inventory_fields() {
        let (_file, store) = temp_store();

        store
            .upsert_product_batch(vec![upsert("D129/C", 1218.62)])
            .await
            .expect("primer upsert");
        store
            .update_product_field("D129_C", ProductField::Stock(7))
            .await
            .expect("stock");
        store
            .update_product_field("D129_C", ProductField::Location("A1".to_string()))
            .await
            .expect("ubicación");

        // Re-importación del mismo código con otro precio
        store
            .upsert_product_batch(vec![upsert("D129/C", 1300.0)])
            .await
            .expect("segundo upsert");

        let p = store
            .get_product("D129_C")
            .await
            .expect("get")
            .expect("existe");
        assert_eq!(p.precio, 1300.0);
        assert_eq!(p.stock, Some(7));
        assert_eq!(p.location, Some("A1".to_string()));
        assert_eq!(store.count_products().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_update_field_missing_doc_is_not_found() {
        let (_file, store) = temp_store();
        let err = store
            .update_product_field("NOEXISTE", ProductField::Stock(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_movements_roundtrip_and_order() {
        let (_file, store) = temp_store();
        let p = Product {
            codigo: "A1".to_string(),
            descripcion: "Repuesto A1".to_string(),
            precio: 10.0,
            stock: Some(0),
            location: None,
            updated_at: None,
        };

        for i in 1..=3 {
            store
                .append_movement(Movement::new(&p, 1, i, "victor@repuestos.com", None))
                .await
                .expect("append");
        }

        let recent = store.recent_movements(2).await.expect("recent");
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].new_stock, 3);
        assert_eq!(recent[1].new_stock, 2);
        assert_eq!(recent[0].kind, MovementKind::Entrada);
        assert_eq!(recent[0].user, "victor@repuestos.com");
        assert_eq!(store.count_movements().await.expect("count"), 3);
    }

    #[tokio::test]
    async fn test_oversized_batch_rejected_before_writing() {
        let (_file, store) = temp_store();
        let batch: Vec<ProductUpsert> = (0..=MAX_BATCH_WRITES)
            .map(|i| upsert(&format!("P{}", i), 1.0))
            .collect();

        let err = store.upsert_product_batch(batch).await.unwrap_err();
        assert!(matches!(err, RepositoryError::BatchTooLarge { .. }));
        assert_eq!(store.count_products().await.expect("count"), 0);
    }
}
