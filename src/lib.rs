// ============================================================================
// COURSE CART - Carrito de cursos en Rust puro (WASM, MVVM)
// ============================================================================
// - Models: CartItem (formato JSON compartido con localStorage)
// - Services: persistencia (localStorage / memoria)
// - State: lista reactiva con Rc<RefCell>
// - ViewModels: CartViewModel, único dueño de la consistencia
// - Views: filas de la tabla + lectura del catálogo
// - App: listeners sobre el markup existente
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;
pub mod dom;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;

pub use crate::app::App;
pub use crate::models::CartItem;
pub use crate::viewmodels::CartViewModel;

// Instancia global: los listeners viven toda la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Course Cart - Rust Puro + MVVM");

    let app = App::new(&CONFIG)?;
    app.mount()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Cantidad de cursos en el carrito (llamable desde JavaScript)
#[wasm_bindgen]
pub fn cart_item_count() -> usize {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| app.cart().len())
            .unwrap_or(0)
    })
}

/// Vaciar el carrito desde JavaScript (mismo efecto que el botón)
#[wasm_bindgen]
pub fn clear_cart_wasm() -> Result<(), JsValue> {
    let cart = APP.with(|app_cell| app_cell.borrow().as_ref().map(|app| app.cart()));
    match cart {
        Some(cart) => cart.clear_all().map_err(|e| JsValue::from_str(&e)),
        None => {
            log::warn!("⚠️ [APP] Carrito no inicializado");
            Ok(())
        }
    }
}
