// ==========================================
// Test de integración - Exportación del catálogo
// ==========================================
// Objetivo: proyección completa y vuelta sin pérdida por el importador
// ==========================================


use chrono::Local;
use std::sync::Arc;
use test_helpers::producto;
use victor_inventario::config::ConfigManager;
use victor_inventario::exporter::{CatalogExporter, EXPORT_FILENAME_PREFIX};
use victor_inventario::importer::{CatalogImporter, CatalogImporterImpl};
use victor_inventario::repository::{MemoryStore, ProductRepository};

#[tokio::test]
async fn test_export_includes_inventory_columns_with_defaults() {
    let store = Arc::new(MemoryStore::new());
    store
        .seed_product(producto("D129/C", 1218.62, 7, "A1"))
        .expect("seed");
    // Producto recién importado: sin stock ni ubicación
    store
        .seed_product(victor_inventario::domain::Product {
            codigo: "A1".to_string(),
            descripcion: "BUJIA".to_string(),
            precio: 45.0,
            stock: None,
            location: None,
            updated_at: None,
        })
        .expect("seed");

    let file = CatalogExporter::new(Arc::clone(&store))
        .export()
        .await
        .expect("exportar");

    let lines: Vec<&str> = file.content.lines().collect();
    assert_eq!(lines[0], "CODIGO,DESCRIPCION,PRECIO S/IVA,STOCK,UBICACION");
    // Los ausentes salen como 0 y vacío
    assert_eq!(lines[1], "A1,BUJIA,\"45,00\",0,");
    assert_eq!(lines[2], "D129/C,Repuesto D129/C,\"1218,62\",7,A1");
    assert_eq!(file.rows, 2);
}

#[tokio::test]
async fn test_export_filename_embeds_iso_date() {
    let store = Arc::new(MemoryStore::new());
    let file = CatalogExporter::new(store).export().await.expect("exportar");

    let hoy = Local::now().format("%Y-%m-%d").to_string();
    assert_eq!(
        file.filename,
        format!("{}_{}.csv", EXPORT_FILENAME_PREFIX, hoy)
    );
}

#[tokio::test]
async fn test_export_then_import_roundtrips_importer_fields() {
    // Catálogo original con stock y ubicación cargados
    let origen = Arc::new(MemoryStore::new());
    origen
        .seed_product(producto("D129/C", 1218.62, 7, "A1"))
        .expect("seed");
    origen
        .seed_product(producto("A1", 45.0, 3, "B4"))
        .expect("seed");

    let exportado = CatalogExporter::new(Arc::clone(&origen))
        .export()
        .await
        .expect("exportar");

    // Se importa el archivo exportado, sin tocarlo, en un almacén limpio
    let destino = Arc::new(MemoryStore::new());
    let outcome = CatalogImporterImpl::with_default_stages(Arc::clone(&destino), ConfigManager::new())
        .import_from_bytes(exportado.content.as_bytes())
        .await
        .expect("importar");

    assert_eq!(outcome.imported, 2);

    // codigo / descripcion / precio viajan sin pérdida
    let originales = origen.list_products().await.expect("listar origen");
    for original in originales {
        let reimportado = destino
            .get_product(&original.doc_key())
            .await
            .expect("get")
            .expect("existe");
        assert_eq!(reimportado.codigo, original.codigo);
        assert_eq!(reimportado.descripcion, original.descripcion);
        assert_eq!(reimportado.precio, original.precio);
        // STOCK y UBICACION pasan por el archivo pero el importador
        // los ignora: el documento nuevo nace sin ellos
        assert_eq!(reimportado.stock, None);
        assert_eq!(reimportado.location, None);
    }
}
