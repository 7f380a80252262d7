// ==========================================
// Test de integración - Importación de listas de precios
// ==========================================
// Objetivo: verificar el flujo completo del CSV al almacén,
// incluida la semántica de merge y los caminos de error
// ==========================================


use std::sync::Arc;
use test_helpers::{producto, write_temp_csv, FailingStore};
use victor_inventario::config::{ConfigManager, InventoryConfig};
use victor_inventario::importer::{CatalogImporter, CatalogImporterImpl, ImportError};
use victor_inventario::logging;
use victor_inventario::repository::{MemoryStore, ProductRepository};

fn importador(store: Arc<MemoryStore>) -> CatalogImporterImpl<MemoryStore, ConfigManager> {
    CatalogImporterImpl::with_default_stages(store, ConfigManager::new())
}

fn importador_con_lotes(
    store: Arc<FailingStore>,
    batch_size: usize,
) -> CatalogImporterImpl<FailingStore, ConfigManager> {
    let config = ConfigManager::from_config(InventoryConfig {
        import_batch_size: batch_size,
        ..InventoryConfig::default()
    });
    CatalogImporterImpl::with_default_stages(store, config)
}

// ==========================================
// Flujo completo
// ==========================================

#[tokio::test]
async fn test_e2e_import_from_csv_file() {
    logging::init_test();

    let file = write_temp_csv(
        "CODIGO,DESCRIPCION,PRECIO S/IVA\n\
         D129/C,JUNTA TAPA,\"1.218,62\"\n\
         A1,BUJIA NGK,\"45,00\"\n\
         B2,,\n",
    );

    let store = Arc::new(MemoryStore::new());
    let outcome = importador(Arc::clone(&store))
        .import_from_path(file.path())
        .await
        .expect("importar");

    assert_eq!(outcome.total_rows, 3);
    assert_eq!(outcome.imported, 3);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.batches, 1);

    // Clave derivada: la barra se reemplaza, el código original queda
    let junta = store
        .get_product("D129_C")
        .await
        .expect("get")
        .expect("existe");
    assert_eq!(junta.codigo, "D129/C");
    assert_eq!(junta.descripcion, "JUNTA TAPA");
    assert_eq!(junta.precio, 1218.62);
    assert!(junta.updated_at.is_some());
    assert_eq!(junta.stock, None);
    assert_eq!(junta.location, None);

    // Sin descripción ni precio: defaults
    let b2 = store.get_product("B2").await.expect("get").expect("existe");
    assert_eq!(b2.descripcion, "Sin descripción");
    assert_eq!(b2.precio, 0.0);
}

#[tokio::test]
async fn test_import_preserves_stock_and_location_on_merge() {
    let store = Arc::new(MemoryStore::new());
    store
        .seed_product(producto("D129/C", 999.0, 7, "A1"))
        .expect("seed");

    let file = write_temp_csv("CODIGO,DESCRIPCION,PRECIO S/IVA\nD129/C,JUNTA NUEVA,\"1.300,00\"\n");
    importador(Arc::clone(&store))
        .import_from_path(file.path())
        .await
        .expect("importar");

    let p = store
        .get_product("D129_C")
        .await
        .expect("get")
        .expect("existe");
    assert_eq!(p.precio, 1300.0);
    assert_eq!(p.descripcion, "JUNTA NUEVA");
    // Los campos de inventario no se tocan
    assert_eq!(p.stock, Some(7));
    assert_eq!(p.location, Some("A1".to_string()));
}

#[tokio::test]
async fn test_reimport_is_idempotent() {
    let csv = "CODIGO,DESCRIPCION,PRECIO S/IVA\nD129/C,JUNTA,\"1.218,62\"\nA1,BUJIA,\"45,00\"\n";
    let store = Arc::new(MemoryStore::new());
    let importer = importador(Arc::clone(&store));

    let first = importer
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("primera");
    let second = importer
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("segunda");

    assert_eq!(first.imported, 2);
    assert_eq!(second.imported, 2);
    // Mismas claves, sin duplicados
    assert_eq!(store.count_products().await.expect("count"), 2);
}

// ==========================================
// Política de filas
// ==========================================

#[tokio::test]
async fn test_blank_code_rows_are_skipped_silently() {
    let csv = "CODIGO,DESCRIPCION,PRECIO S/IVA\n\
               ,SIN CODIGO,\"10,00\"\n\
               A1,BUJIA,\"45,00\"\n";
    let store = Arc::new(MemoryStore::new());
    let outcome = importador(Arc::clone(&store))
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("importar");

    // La fila sin código no cuenta como éxito ni como error
    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(store.count_products().await.expect("count"), 1);
}

#[tokio::test]
async fn test_price_column_fallback_order() {
    let csv = "CODIGO,PRECIO\nA1,\"45,00\"\n";
    let store = Arc::new(MemoryStore::new());
    importador(Arc::clone(&store))
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("importar");

    let p = store.get_product("A1").await.expect("get").expect("existe");
    assert_eq!(p.precio, 45.0);
}

#[tokio::test]
async fn test_unreadable_price_imports_as_zero_with_warning() {
    let csv = "CODIGO,PRECIO S/IVA\nA1,consultar\n";
    let store = Arc::new(MemoryStore::new());
    let outcome = importador(Arc::clone(&store))
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("importar");

    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.price_warnings, 1);
    let p = store.get_product("A1").await.expect("get").expect("existe");
    assert_eq!(p.precio, 0.0);
}

// ==========================================
// Validación de formato (antes de escribir)
// ==========================================

#[tokio::test]
async fn test_missing_codigo_column_fails_with_zero_writes() {
    let csv = "ARTICULO,PRECIO\nA1,\"45,00\"\n";
    let store = Arc::new(MemoryStore::new());
    let err = importador(Arc::clone(&store))
        .import_from_bytes(csv.as_bytes())
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::MissingColumn(col) if col == "CODIGO"));
    assert_eq!(store.count_products().await.expect("count"), 0);
}

#[tokio::test]
async fn test_header_only_file_is_empty_error() {
    let csv = "CODIGO,DESCRIPCION,PRECIO S/IVA\n";
    let store = Arc::new(MemoryStore::new());
    let err = importador(Arc::clone(&store))
        .import_from_bytes(csv.as_bytes())
        .await
        .unwrap_err();

    // Error distinto al de columna faltante
    assert!(matches!(err, ImportError::EmptyFile));
    assert_eq!(store.count_products().await.expect("count"), 0);
}

#[tokio::test]
async fn test_bom_and_semicolon_delimited_file() {
    let mut csv = Vec::new();
    csv.extend_from_slice(b"\xef\xbb\xbf");
    csv.extend_from_slice(b"CODIGO;DESCRIPCION;PRECIO S/IVA\nA1;BUJIA NGK;45,00\n");

    let store = Arc::new(MemoryStore::new());
    let outcome = importador(Arc::clone(&store))
        .import_from_bytes(&csv)
        .await
        .expect("importar");

    assert_eq!(outcome.imported, 1);
    let p = store.get_product("A1").await.expect("get").expect("existe");
    assert_eq!(p.precio, 45.0);
}

// ==========================================
// Lotes
// ==========================================

#[tokio::test]
async fn test_rows_are_committed_in_bounded_batches() {
    let mut csv = String::from("CODIGO,PRECIO S/IVA\n");
    for i in 0..5 {
        csv.push_str(&format!("P{},\"10,00\"\n", i));
    }

    let store = Arc::new(FailingStore::new());
    let outcome = importador_con_lotes(Arc::clone(&store), 2)
        .import_from_bytes(csv.as_bytes())
        .await
        .expect("importar");

    // 5 filas con lotes de 2: dos lotes llenos y un resto de 1
    assert_eq!(outcome.imported, 5);
    assert_eq!(outcome.batches, 3);
    assert_eq!(store.count_products().await.expect("count"), 5);
}

#[tokio::test]
async fn test_batch_failure_keeps_previous_batches() {
    let mut csv = String::from("CODIGO,PRECIO S/IVA\n");
    for i in 0..5 {
        csv.push_str(&format!("P{},\"10,00\"\n", i));
    }

    // El primer lote entra, el segundo falla
    let store = Arc::new(FailingStore::failing_batches_after(1));
    let err = importador_con_lotes(Arc::clone(&store), 2)
        .import_from_bytes(csv.as_bytes())
        .await
        .unwrap_err();

    assert!(matches!(err, ImportError::StoreWriteError(_)));
    // Lo ya confirmado queda persistido; no hay rollback entre lotes
    assert_eq!(store.count_products().await.expect("count"), 2);
}
