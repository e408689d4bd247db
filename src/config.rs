use crate::utils::constants::*;

/// Alcance de "vaciar carrito" sobre el storage persistente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    /// Solo la clave del carrito
    OwnKey,
    /// Todo el área de storage compartida (comportamiento histórico)
    Everything,
}

impl ClearScope {
    /// Interpretar el valor de CART_CLEAR_SCOPE ("key" | "all")
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "everything" => ClearScope::Everything,
            _ => ClearScope::OwnKey,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_key: String,
    pub catalog_selector: String,
    pub cart_body_selector: String,
    pub clear_button_selector: String,
    pub cart_count_selector: String,
    pub add_to_cart_class: String,
    pub remove_class: String,
    pub clear_scope: ClearScope,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            catalog_selector: CATALOG_SELECTOR.to_string(),
            cart_body_selector: CART_BODY_SELECTOR.to_string(),
            clear_button_selector: CLEAR_BUTTON_SELECTOR.to_string(),
            cart_count_selector: CART_COUNT_SELECTOR.to_string(),
            add_to_cart_class: ADD_TO_CART_CLASS.to_string(),
            remove_class: REMOVE_CLASS.to_string(),
            clear_scope: ClearScope::OwnKey,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            storage_key: option_env!("CART_STORAGE_KEY")
                .unwrap_or(STORAGE_KEY).to_string(),
            catalog_selector: option_env!("CART_CATALOG_SELECTOR")
                .unwrap_or(CATALOG_SELECTOR).to_string(),
            cart_body_selector: option_env!("CART_BODY_SELECTOR")
                .unwrap_or(CART_BODY_SELECTOR).to_string(),
            clear_button_selector: option_env!("CART_CLEAR_BUTTON_SELECTOR")
                .unwrap_or(CLEAR_BUTTON_SELECTOR).to_string(),
            cart_count_selector: option_env!("CART_COUNT_SELECTOR")
                .unwrap_or(CART_COUNT_SELECTOR).to_string(),
            add_to_cart_class: option_env!("CART_ADD_CLASS")
                .unwrap_or(ADD_TO_CART_CLASS).to_string(),
            remove_class: option_env!("CART_REMOVE_CLASS")
                .unwrap_or(REMOVE_CLASS).to_string(),
            clear_scope: ClearScope::parse(option_env!("CART_CLEAR_SCOPE").unwrap_or("key")),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
        }
    }

    /// Nivel de log efectivo (Off si el logging está deshabilitado)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
