// ============================================================================
// CART VIEWMODEL - Consistencia memoria / storage / tabla
// ============================================================================
// Cada operación es una pasada síncrona: mutar la lista, persistir la lista
// completa y reflejar el cambio en el renderer, en ese orden.
// ============================================================================

use std::rc::Rc;
use crate::config::ClearScope;
use crate::models::CartItem;
use crate::services::CartStorage;
use crate::state::CartState;
use crate::views::CartRenderer;

/// ViewModel del carrito: único dueño de la lista
pub struct CartViewModel {
    state: CartState,
    storage: CartStorage,
    renderer: Rc<dyn CartRenderer>,
    clear_scope: ClearScope,
}

impl CartViewModel {
    pub fn new(storage: CartStorage, renderer: Rc<dyn CartRenderer>, clear_scope: ClearScope) -> Self {
        Self {
            state: CartState::new(),
            storage,
            renderer,
            clear_scope,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.items()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.contains(id)
    }

    /// Cargar desde storage y pintar la lista completa. Se llama una vez al arrancar.
    pub fn restore(&self) -> Result<usize, String> {
        let items = self.storage.load_all();
        let count = items.len();
        // Memoria primero: si el render falla a mitad, la lista ya es la persistida
        self.state.replace(items.clone());
        self.renderer.render_all(&items)?;
        log::info!("🛒 [CART] Carrito restaurado: {} cursos", count);
        Ok(count)
    }

    /// Agregar al final. Ids duplicados permitidos: cada uno tiene su fila.
    pub fn add_item(&self, item: CartItem) -> Result<(), String> {
        log::info!("➕ [CART] Agregando curso {} ({})", item.id, item.title);
        let items = self.state.push(item.clone());
        // La tabla sigue a la memoria aunque falle el storage
        let persisted = self.storage.save_all(&items);
        self.renderer.render_row(&item)?;
        persisted
    }

    /// Quitar todos los cursos con ese id, de memoria, storage y tabla.
    /// Sin id (control sin data-id) no se toca nada.
    pub fn remove_item(&self, id: Option<&str>) -> Result<usize, String> {
        let Some(id) = id else {
            log::warn!("⚠️ [CART] Remove sin id, se ignora");
            return Ok(0);
        };

        let (removed, items) = self.state.remove_by_id(id);
        let persisted = self.storage.save_all(&items);
        let rows = self.renderer.remove_rows(id)?;
        if rows != removed {
            log::warn!("⚠️ [CART] Id {}: {} cursos eliminados pero {} filas", id, removed, rows);
        }
        persisted?;
        log::info!("➖ [CART] Curso {} eliminado ({} coincidencias)", id, removed);
        Ok(removed)
    }

    /// Vaciar memoria, storage (según ClearScope) y tabla
    pub fn clear_all(&self) -> Result<(), String> {
        self.state.clear();
        let persisted = match self.clear_scope {
            ClearScope::OwnKey => self.storage.clear(),
            ClearScope::Everything => self.storage.clear_everything(),
        };
        self.renderer.clear_all_rows()?;
        persisted?;
        log::info!("🗑️ [CART] Carrito vaciado");
        Ok(())
    }
}
