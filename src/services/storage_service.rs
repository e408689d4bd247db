// ============================================================================
// STORAGE SERVICE - Persistencia del carrito (localStorage)
// ============================================================================
// Un único slot (clave configurable, por defecto "courses") con el JSON
// del carrito completo. Cada escritura reemplaza la lista entera.
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use crate::models::CartItem;

/// Almacén clave/valor de strings (localStorage o equivalente)
pub trait KeyValueStore {
    /// Leer valor; Ok(None) si la clave no existe
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;

    /// Escribir valor (reemplaza)
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    /// Eliminar una clave
    fn remove_item(&self, key: &str) -> Result<(), String>;

    /// Vaciar el área completa, incluidas claves de otras apps
    fn clear(&self) -> Result<(), String>;
}

/// localStorage del navegador
pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    /// None si no hay window o localStorage está bloqueado (modo privado, iframes...)
    pub fn local() -> Option<Self> {
        let storage = window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        self.storage.get_item(key)
            .map_err(|e| format!("Error leyendo localStorage[{}]: {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage.set_item(key, value)
            .map_err(|e| format!("Error guardando en localStorage[{}]: {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.storage.remove_item(key)
            .map_err(|e| format!("Error eliminando localStorage[{}]: {:?}", key, e))
    }

    fn clear(&self) -> Result<(), String> {
        self.storage.clear()
            .map_err(|e| format!("Error vaciando localStorage: {:?}", e))
    }
}

/// Almacén en memoria. Se usa cuando localStorage no está disponible
/// (el carrito funciona pero no sobrevive a la recarga) y en los tests.
/// Los clones comparten el mismo contenido.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// Adaptador de persistencia del carrito
#[derive(Clone)]
pub struct CartStorage {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl CartStorage {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// localStorage del navegador, o memoria si no está disponible
    pub fn browser_or_memory(key: impl Into<String>) -> Self {
        match BrowserStorage::local() {
            Some(browser) => Self::new(Rc::new(browser), key),
            None => {
                log::warn!("⚠️ [STORAGE] localStorage no disponible, el carrito no se persistirá");
                Self::new(Rc::new(MemoryStorage::new()), key)
            }
        }
    }

    /// Cargar el carrito persistido. Nunca falla: clave ausente, error de
    /// lectura o JSON inválido devuelven una lista vacía.
    pub fn load_all(&self) -> Vec<CartItem> {
        let json = match self.store.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("⚠️ [STORAGE] {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CartItem>>(&json) {
            Ok(items) => {
                log::debug!("📋 [STORAGE] {} cursos cargados de '{}'", items.len(), self.key);
                items
            }
            Err(e) => {
                log::warn!("⚠️ [STORAGE] Valor inválido en '{}', se ignora: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Reemplazar el carrito persistido con la lista completa
    pub fn save_all(&self, items: &[CartItem]) -> Result<(), String> {
        let json = serde_json::to_string(items)
            .map_err(|e| format!("Error serializando carrito: {}", e))?;
        self.store.set_item(&self.key, &json)?;
        log::debug!("💾 [STORAGE] {} cursos guardados en '{}'", items.len(), self.key);
        Ok(())
    }

    /// Eliminar solo la clave del carrito
    pub fn clear(&self) -> Result<(), String> {
        self.store.remove_item(&self.key)?;
        log::debug!("🗑️ [STORAGE] Clave '{}' eliminada", self.key);
        Ok(())
    }

    /// Vaciar TODO el storage compartido, no solo el carrito
    pub fn clear_everything(&self) -> Result<(), String> {
        self.store.clear()?;
        log::warn!("🗑️ [STORAGE] Storage completo vaciado");
        Ok(())
    }
}
