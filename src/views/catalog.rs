// ============================================================================
// CATALOG VIEW - Lectura de las tarjetas de curso del catálogo
// ============================================================================
// Contrato del markup: cada tarjeta tiene <img>, <h4>, .price span y un <a data-id>.
// El botón "add to cart" vive dos niveles por debajo de la tarjeta.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};
use crate::dom::get_attribute;
use crate::models::CartItem;

/// Tarjeta a la que pertenece el botón "add to cart" (abuelo del botón)
pub fn find_course_card(control: &Element) -> Option<Element> {
    control.parent_element()?.parent_element()
}

fn find(card: &Element, selector: &str) -> Result<Element, String> {
    card.query_selector(selector)
        .map_err(|e| format!("Selector inválido '{}': {:?}", selector, e))?
        .ok_or_else(|| format!("Tarjeta de curso sin '{}'", selector))
}

/// Extraer el curso de una tarjeta. Un sub-elemento ausente es un error de
/// markup, no un caso de runtime: se devuelve Err y no se agrega nada.
pub fn read_course_card(card: &Element) -> Result<CartItem, String> {
    let image = find(card, "img")?;
    // .src da la URL absoluta, como la ve el navegador
    let image_url = match image.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => get_attribute(&image, "src").unwrap_or_default(),
    };

    let title = find(card, "h4")?.text_content().unwrap_or_default();
    let price = find(card, ".price span")?.text_content().unwrap_or_default();
    let id = get_attribute(&find(card, "a")?, "data-id")
        .ok_or_else(|| "Tarjeta de curso sin data-id".to_string())?;

    Ok(CartItem::new(id, title, price, image_url))
}
