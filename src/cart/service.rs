// ==========================================
// Victor Repuestos - Servicio de carrito / presupuesto
// ==========================================
// Rol: operaciones del presupuesto sobre el almacén inyectado.
// Cada mutación persiste el carrito (y dispara los suscriptores).
// ==========================================

use crate::cart::store::{CartStore, CartStoreResult};
use crate::domain::{format_currency, format_number, Cart, CartItem, Product};
use tracing::warn;

/// Largo máximo de la descripción en el texto del presupuesto
const QUOTE_DESC_LEN: usize = 25;

// ==========================================
// CartService
// ==========================================
pub struct CartService {
    store: Box<dyn CartStore>,
    cart: Cart,
    quote_header: String,
}

impl CartService {
    /// Crea el servicio cargando el carrito guardado.
    /// Un carrito ilegible arranca vacío (con aviso), no rompe la app.
    pub fn new(store: Box<dyn CartStore>, quote_header: String) -> Self {
        let cart = match store.load() {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "carrito guardado ilegible, se arranca vacío");
                Cart::default()
            }
        };

        Self {
            store,
            cart,
            quote_header,
        }
    }

    /// Agrega un producto (o suma 1 si ya estaba)
    pub fn add_product(&mut self, product: &Product) -> CartStoreResult<()> {
        self.cart.add(product);
        self.persist()
    }

    /// Quita un renglón completo
    pub fn remove(&mut self, doc_key: &str) -> CartStoreResult<()> {
        self.cart.remove(doc_key);
        self.persist()
    }

    /// Ajusta la cantidad de un renglón (mínimo 1)
    pub fn adjust_quantity(&mut self, doc_key: &str, delta: i64) -> CartStoreResult<()> {
        self.cart.adjust_quantity(doc_key, delta);
        self.persist()
    }

    /// Vacía el presupuesto
    pub fn clear(&mut self) -> CartStoreResult<()> {
        self.cart.clear();
        self.persist()
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Genera el texto compartible del presupuesto (para pegar en
    /// WhatsApp): un renglón por producto y el total al pie.
    pub fn quote_text(&self) -> String {
        let mut text = format!("*{}*\n\n", self.quote_header);

        for item in self.cart.items() {
            let descripcion: String = item
                .product
                .descripcion
                .chars()
                .take(QUOTE_DESC_LEN)
                .collect();
            text.push_str(&format!(
                "{}x {}... \n   ${}\n",
                item.cantidad,
                descripcion,
                format_number(item.subtotal())
            ));
        }

        text.push_str(&format!("\n*TOTAL: {}*", format_currency(self.total())));
        text
    }

    fn persist(&self) -> CartStoreResult<()> {
        self.store.save(&self.cart)
    }
}
