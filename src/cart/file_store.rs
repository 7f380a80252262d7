// ==========================================
// Victor Repuestos - Carrito persistente en archivo
// ==========================================
// Backing JSON en disco: el presupuesto sobrevive a un reinicio,
// igual que el carrito del navegador sobrevive una recarga.
// ==========================================

use crate::cart::store::{CartListener, CartStore, CartStoreError, CartStoreResult};
use crate::domain::Cart;
use std::path::PathBuf;
use std::sync::Mutex;

// ==========================================
// FileCartStore
// ==========================================
pub struct FileCartStore {
    path: PathBuf,
    listeners: Mutex<Vec<CartListener>>,
}

impl FileCartStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn notify(&self, cart: &Cart) -> CartStoreResult<()> {
        let listeners = self
            .listeners
            .lock()
            .map_err(|e| CartStoreError::LockError(e.to_string()))?;
        for listener in listeners.iter() {
            listener(cart);
        }
        Ok(())
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> CartStoreResult<Cart> {
        if !self.path.exists() {
            return Ok(Cart::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| CartStoreError::ReadError(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| CartStoreError::ReadError(e.to_string()))
    }

    fn save(&self, cart: &Cart) -> CartStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CartStoreError::WriteError(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(cart)
            .map_err(|e| CartStoreError::WriteError(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| CartStoreError::WriteError(e.to_string()))?;

        self.notify(cart)
    }

    fn subscribe(&self, listener: CartListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }
}
