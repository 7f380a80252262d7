// ==========================================
// Infraestructura SQLite - apertura de conexiones
// ==========================================
// Objetivo:
// - Unificar el comportamiento de PRAGMA en todos los Connection::open
// - Unificar busy_timeout para reducir errores "busy" esporádicos
// - Inicialización idempotente del esquema de documentos
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// busy_timeout por defecto (milisegundos)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Aplica los PRAGMA unificados a una conexión SQLite
///
/// Nota:
/// - foreign_keys se habilita por conexión
/// - busy_timeout se configura por conexión
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Abre una conexión SQLite con la configuración unificada
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Crea las tablas de documentos si no existen
///
/// El esquema refleja las dos colecciones del sistema:
/// - products: documentos de producto direccionados por doc_key
/// - movements: registro de movimientos de stock, solo-agregar
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            doc_key     TEXT PRIMARY KEY,
            codigo      TEXT NOT NULL,
            descripcion TEXT NOT NULL,
            precio      REAL NOT NULL DEFAULT 0,
            stock       INTEGER,
            location    TEXT,
            updated_at  TEXT
        );

        CREATE TABLE IF NOT EXISTS movements (
            movement_id    TEXT PRIMARY KEY,
            product_key    TEXT NOT NULL,
            product_code   TEXT NOT NULL,
            product_name   TEXT NOT NULL,
            change         INTEGER NOT NULL,
            kind           TEXT NOT NULL,
            previous_stock INTEGER NOT NULL,
            new_stock      INTEGER NOT NULL,
            user_email     TEXT NOT NULL,
            reason         TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_movements_created_at
            ON movements (created_at DESC);
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().expect("abrir db en memoria");
        configure_connection(&conn).expect("configurar conexión");
        init_schema(&conn).expect("primera inicialización");
        init_schema(&conn).expect("segunda inicialización");

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('products','movements')",
                [],
                |row| row.get(0),
            )
            .expect("consultar tablas");
        assert_eq!(count, 2);
    }
}
