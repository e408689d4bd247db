// ============================================================================
// APP - Montaje del carrito sobre el markup existente
// ============================================================================
// Conecta tres puntos de interacción + el arranque con el CartViewModel:
// - click en el catálogo (delegado, clase add-to-cart) -> add_item
// - click en el <tbody> del carrito (delegado, clase remove) -> remove_item
// - click en "clear cart" -> clear_all
// - DOMContentLoaded -> restore
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::AppConfig;
use crate::dom::{document, get_attribute, on_click, on_delegated_click, on_event, query_selector, require_element};
use crate::services::CartStorage;
use crate::viewmodels::CartViewModel;
use crate::views::{find_course_card, read_course_card, TableRenderer};

/// Aplicación principal
pub struct App {
    cart: Rc<CartViewModel>,
    catalog: Element,
    cart_body: Element,
    clear_button: Element,
    config: AppConfig,
}

impl App {
    /// Resolver el markup y construir el carrito (sin registrar listeners)
    pub fn new(config: &AppConfig) -> Result<Self, JsValue> {
        let catalog = require_element(&config.catalog_selector)?;
        let cart_body = require_element(&config.cart_body_selector)?;
        let clear_button = require_element(&config.clear_button_selector)?;

        let storage = CartStorage::browser_or_memory(config.storage_key.clone());
        let renderer = Rc::new(TableRenderer::new(cart_body.clone(), config.remove_class.clone()));
        let cart = CartViewModel::new(storage, renderer, config.clear_scope);

        Ok(Self {
            cart: Rc::new(cart),
            catalog,
            cart_body,
            clear_button,
            config: config.clone(),
        })
    }

    pub fn cart(&self) -> Rc<CartViewModel> {
        self.cart.clone()
    }

    /// Registrar listeners y restaurar el carrito. Llamar una sola vez.
    pub fn mount(&self) -> Result<(), JsValue> {
        self.watch_cart_count();
        self.bind_catalog()?;
        self.bind_cart_body()?;
        self.bind_clear_button()?;
        self.schedule_restore()?;
        log::info!("✅ [APP] Carrito montado");
        Ok(())
    }

    fn bind_catalog(&self) -> Result<(), JsValue> {
        let cart = self.cart.clone();
        on_delegated_click(&self.catalog, &self.config.add_to_cart_class, true, move |control| {
            let Some(card) = find_course_card(&control) else {
                log::error!("❌ [APP] Botón add-to-cart fuera de una tarjeta de curso");
                return;
            };
            match read_course_card(&card) {
                Ok(item) => {
                    if let Err(e) = cart.add_item(item) {
                        log::error!("❌ [APP] Error agregando curso: {}", e);
                    }
                }
                Err(e) => log::error!("❌ [APP] Markup de catálogo inválido: {}", e),
            }
        })
    }

    fn bind_cart_body(&self) -> Result<(), JsValue> {
        let cart = self.cart.clone();
        on_delegated_click(&self.cart_body, &self.config.remove_class, true, move |control| {
            // El id se lee del control ANTES de tocar el DOM
            let id = get_attribute(&control, "data-id");
            if let Err(e) = cart.remove_item(id.as_deref()) {
                log::error!("❌ [APP] Error eliminando curso: {}", e);
            }
        })
    }

    fn bind_clear_button(&self) -> Result<(), JsValue> {
        let cart = self.cart.clone();
        on_click(&self.clear_button, move |e: web_sys::MouseEvent| {
            e.prevent_default();
            if let Err(e) = cart.clear_all() {
                log::error!("❌ [APP] Error vaciando carrito: {}", e);
            }
        })
    }

    /// Restaurar al DOMContentLoaded, o ya mismo si el documento está parseado
    fn schedule_restore(&self) -> Result<(), JsValue> {
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let cart = self.cart.clone();
        let restore = move || {
            if let Err(e) = cart.restore() {
                log::error!("❌ [APP] Error restaurando carrito: {}", e);
            }
        };

        // document.readyState vía Reflect: "loading" | "interactive" | "complete"
        let ready_state = js_sys::Reflect::get(doc.as_ref(), &JsValue::from_str("readyState"))
            .ok()
            .and_then(|state| state.as_string());
        if ready_state.as_deref() == Some("loading") {
            let mut pending = Some(restore);
            on_event(&doc, "DOMContentLoaded", move |_| {
                if let Some(restore) = pending.take() {
                    restore();
                }
            })
        } else {
            restore();
            Ok(())
        }
    }

    /// Contador opcional (#cart-count), escrito fuera del handler que mutó el
    /// carrito. Si el elemento no existe no se hace nada.
    fn watch_cart_count(&self) {
        let selector = self.config.cart_count_selector.clone();
        self.cart.state().subscribe(move |items| {
            log::debug!("🛒 [APP] Carrito con {} cursos", items.len());
            let count = items.len();
            let selector = selector.clone();
            Timeout::new(0, move || {
                if let Ok(Some(counter)) = query_selector(&selector) {
                    counter.set_text_content(Some(&count.to_string()));
                }
            })
            .forget();
        });
    }
}
