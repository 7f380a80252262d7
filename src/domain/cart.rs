// ==========================================
// Victor Repuestos - Carrito / presupuesto
// ==========================================
// Estado local del cliente: nunca viaja al backend.
// Cada renglón lleva un snapshot del producto + cantidad.
// ==========================================

use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

// ==========================================
// CartItem - renglón del presupuesto
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub cantidad: u32,
}

impl CartItem {
    /// Subtotal del renglón (precio x cantidad)
    pub fn subtotal(&self) -> f64 {
        self.product.precio * f64::from(self.cantidad)
    }
}

// ==========================================
// Cart - presupuesto en armado
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Agrega un producto: si ya está en el carrito suma 1 a la
    /// cantidad, si no crea el renglón con cantidad 1
    pub fn add(&mut self, product: &Product) {
        let key = product.doc_key();
        if let Some(item) = self.items.iter_mut().find(|i| i.product.doc_key() == key) {
            item.cantidad += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                cantidad: 1,
            });
        }
    }

    /// Quita un renglón completo
    pub fn remove(&mut self, doc_key: &str) {
        self.items.retain(|i| i.product.doc_key() != doc_key);
    }

    /// Ajusta la cantidad de un renglón por un delta con signo.
    /// La cantidad nunca baja de 1; para sacar el producto se usa remove.
    pub fn adjust_quantity(&mut self, doc_key: &str, delta: i64) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.doc_key() == doc_key)
        {
            let nueva = i64::from(item.cantidad) + delta;
            item.cantidad = nueva.max(1) as u32;
        }
    }

    /// Vacía el carrito
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Renglones actuales
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Cantidad de renglones
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total del presupuesto
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
