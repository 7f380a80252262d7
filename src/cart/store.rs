// ==========================================
// Victor Repuestos - Persistencia del carrito (Trait)
// ==========================================
// El carrito es estado local del cliente: se persiste por un
// almacén inyectado (memoria para tests, archivo en producción)
// y NUNCA viaja al backend.
// ==========================================

use crate::domain::Cart;
use std::sync::Mutex;
use thiserror::Error;

/// Errores del almacén de carrito
#[derive(Error, Debug)]
pub enum CartStoreError {
    #[error("no se pudo leer el carrito guardado: {0}")]
    ReadError(String),

    #[error("no se pudo guardar el carrito: {0}")]
    WriteError(String),

    #[error("no se pudo obtener el lock del carrito: {0}")]
    LockError(String),
}

pub type CartStoreResult<T> = Result<T, CartStoreError>;

/// Callback que se dispara en cada guardado del carrito
pub type CartListener = Box<dyn Fn(&Cart) + Send + Sync>;

// ==========================================
// CartStore Trait
// ==========================================
// Implementado por: MemoryCartStore, FileCartStore
pub trait CartStore: Send + Sync {
    /// Carga el carrito guardado (vacío si no hay nada)
    fn load(&self) -> CartStoreResult<Cart>;

    /// Guarda el carrito y notifica a los suscriptores
    fn save(&self, cart: &Cart) -> CartStoreResult<()>;

    /// Registra un callback que se dispara en cada guardado
    fn subscribe(&self, listener: CartListener);
}

// ==========================================
// MemoryCartStore - backing volátil
// ==========================================
#[derive(Default)]
pub struct MemoryCartStore {
    cart: Mutex<Cart>,
    listeners: Mutex<Vec<CartListener>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
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

impl CartStore for MemoryCartStore {
    fn load(&self) -> CartStoreResult<Cart> {
        let cart = self
            .cart
            .lock()
            .map_err(|e| CartStoreError::LockError(e.to_string()))?;
        Ok(cart.clone())
    }

    fn save(&self, cart: &Cart) -> CartStoreResult<()> {
        {
            let mut stored = self
                .cart
                .lock()
                .map_err(|e| CartStoreError::LockError(e.to_string()))?;
            *stored = cart.clone();
        }
        self.notify(cart)
    }

    fn subscribe(&self, listener: CartListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }
}
