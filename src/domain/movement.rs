// ==========================================
// Victor Repuestos - Movimientos de stock
// ==========================================
// Registro de auditoría, solo-agregar: nunca se edita ni se borra
// ==========================================

use crate::domain::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Motivo por defecto cuando el operador no indica uno
pub const DEFAULT_MOVEMENT_REASON: &str = "Ajuste Manual";

// ==========================================
// MovementKind - sentido del movimiento
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    Entrada, // delta positivo
    Salida,  // delta cero o negativo
}

impl MovementKind {
    /// Deriva el sentido a partir del delta
    pub fn from_change(change: i64) -> Self {
        if change > 0 {
            MovementKind::Entrada
        } else {
            MovementKind::Salida
        }
    }

    /// Representación en texto (para almacenamiento)
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entrada => "entrada",
            MovementKind::Salida => "salida",
        }
    }

    /// Parsea desde texto
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(MovementKind::Entrada),
            "salida" => Some(MovementKind::Salida),
            _ => None,
        }
    }
}

// ==========================================
// Movement - registro de movimiento de stock
// ==========================================
// Se crea únicamente como efecto de un cambio de stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    // ===== Identidad =====
    pub movement_id: String,

    // ===== Referencia al producto (snapshot) =====
    pub product_key: String,
    pub product_code: String,
    pub product_name: String,

    // ===== Cambio =====
    pub change: i64,        // delta con signo (+1, -5, ...)
    pub kind: MovementKind, // entrada / salida
    pub previous_stock: i64,
    pub new_stock: i64,

    // ===== Contexto =====
    pub user: String,   // email del usuario autenticado
    pub reason: String, // motivo libre
    pub created_at: DateTime<Utc>,
}

impl Movement {
    /// Crea un movimiento a partir del producto afectado
    ///
    /// # Parámetros
    /// - product: producto tal como estaba ANTES del cambio
    /// - change: delta aplicado
    /// - new_stock: stock resultante
    /// - user: email del usuario que operó
    /// - reason: motivo; None usa el motivo por defecto
    pub fn new(
        product: &Product,
        change: i64,
        new_stock: i64,
        user: &str,
        reason: Option<&str>,
    ) -> Self {
        Self {
            movement_id: Uuid::new_v4().to_string(),
            product_key: product.doc_key(),
            product_code: product.codigo.clone(),
            product_name: product.descripcion.clone(),
            change,
            kind: MovementKind::from_change(change),
            previous_stock: product.stock_disponible(),
            new_stock,
            user: user.to_string(),
            reason: reason.unwrap_or(DEFAULT_MOVEMENT_REASON).to_string(),
            created_at: Utc::now(),
        }
    }
}
