// ==========================================
// Victor Repuestos - Modelo de producto
// ==========================================
// Documento de la colección "products"
// Campos del documento tal como existen en la base:
// codigo, descripcion, precio, stock, location, updated_at
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deriva la clave de documento a partir del código de repuesto.
///
/// Las barras "/" (ej: D129/C) no son válidas en el espacio de
/// identificadores de documento, así que se reemplazan por "_" SOLO
/// para direccionar el registro. El código original se conserva en el
/// campo `codigo` del documento.
///
/// La derivación es pura y determinística: el mismo código produce
/// siempre la misma clave, por eso re-importar actualiza el mismo
/// documento en vez de duplicarlo.
pub fn derive_doc_key(codigo: &str) -> String {
    codigo.replace('/', "_")
}

// ==========================================
// Product - documento de producto
// ==========================================
// stock y location pertenecen a las operaciones de inventario;
// el importador de listas de precios nunca los escribe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Código de repuesto asignado por el negocio (puede contener "/")
    pub codigo: String,

    /// Descripción libre
    pub descripcion: String,

    /// Precio sin IVA, ya normalizado a número
    pub precio: f64,

    /// Stock físico; ausente en documentos recién importados
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    /// Ubicación en el depósito; ausente hasta que alguien la cargue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Última escritura del importador
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Clave de documento derivada del código
    pub fn doc_key(&self) -> String {
        derive_doc_key(&self.codigo)
    }

    /// Stock físico, ausente se lee como 0
    pub fn stock_disponible(&self) -> i64 {
        self.stock.unwrap_or(0)
    }

    /// Ubicación, ausente se lee como cadena vacía
    pub fn ubicacion(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Stock crítico: en o por debajo del umbral configurado
    pub fn es_stock_critico(&self, umbral: i64) -> bool {
        self.stock_disponible() <= umbral
    }
}

// ==========================================
// ProductUpsert - payload de escritura del importador
// ==========================================
// Lleva exactamente los cuatro campos que el importador posee.
// La AUSENCIA de stock y location es lo que hace que el merge
// preserve los valores existentes del documento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpsert {
    pub codigo: String,
    pub descripcion: String,
    pub precio: f64,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpsert {
    /// Clave de documento derivada del código
    pub fn doc_key(&self) -> String {
        derive_doc_key(&self.codigo)
    }
}

// ==========================================
// ProductField - actualización parcial de un campo
// ==========================================
// Payload de update_product_field: solo los dos campos que
// pertenecen a las operaciones de inventario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductField {
    Stock(i64),
    Location(String),
}

impl ProductField {
    /// Nombre de columna en la colección de productos
    pub fn column(&self) -> &'static str {
        match self {
            ProductField::Stock(_) => "stock",
            ProductField::Location(_) => "location",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_doc_key_replaces_slashes() {
        assert_eq!(derive_doc_key("D129/C"), "D129_C");
        assert_eq!(derive_doc_key("A/B/C"), "A_B_C");
    }

    #[test]
    fn test_derive_doc_key_leaves_other_chars_untouched() {
        assert_eq!(derive_doc_key("BOMBA-AGUA.1,6 Ñ"), "BOMBA-AGUA.1,6 Ñ");
        assert_eq!(derive_doc_key(""), "");
    }

    #[test]
    fn test_derive_doc_key_is_deterministic() {
        let a = derive_doc_key("D129/C");
        let b = derive_doc_key("D129/C");
        assert_eq!(a, b);
    }

    #[test]
    fn test_product_defaults_for_absent_fields() {
        let p = Product {
            codigo: "X1".to_string(),
            descripcion: "Sin descripción".to_string(),
            precio: 0.0,
            stock: None,
            location: None,
            updated_at: None,
        };
        assert_eq!(p.stock_disponible(), 0);
        assert_eq!(p.ubicacion(), "");
        assert!(p.es_stock_critico(2));
    }

    #[test]
    fn test_upsert_payload_has_no_stock_or_location_keys() {
        let upsert = ProductUpsert {
            codigo: "D129/C".to_string(),
            descripcion: "JUNTA TAPA".to_string(),
            precio: 1218.62,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&upsert).expect("serializar payload");
        let obj = json.as_object().expect("objeto json");
        assert!(!obj.contains_key("stock"));
        assert!(!obj.contains_key("location"));
        assert_eq!(obj.len(), 4);
    }
}
