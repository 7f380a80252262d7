// ==========================================
// Victor Repuestos - Capa de dominio
// ==========================================
// Entidades del negocio: producto, movimiento, carrito
// ==========================================

pub mod cart;
pub mod currency;
pub mod movement;
pub mod product;

// Reexportación de tipos centrales
pub use cart::{Cart, CartItem};
pub use currency::{format_currency, format_number};
pub use movement::{Movement, MovementKind, DEFAULT_MOVEMENT_REASON};
pub use product::{derive_doc_key, Product, ProductField, ProductUpsert};
