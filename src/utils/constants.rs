/// Clave de localStorage donde se guarda el carrito
pub const STORAGE_KEY: &str = "courses";

/// Selectores del markup de la página
pub const CATALOG_SELECTOR: &str = "#courses-list";
pub const CART_BODY_SELECTOR: &str = "#cart-content tbody";
pub const CLEAR_BUTTON_SELECTOR: &str = "#clear-cart";
pub const CART_COUNT_SELECTOR: &str = "#cart-count";

/// Clases que marcan los controles
pub const ADD_TO_CART_CLASS: &str = "add-to-cart";
pub const REMOVE_CLASS: &str = "remove";
