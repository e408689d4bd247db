// ============================================================================
// EVENT HANDLING - Listeners directos y delegados
// ============================================================================
// Los listeners se registran UNA VEZ al montar la app sobre contenedores que
// viven toda la página, por eso closure.forget() no acumula closures.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MouseEvent};
use crate::dom::{has_class, target_element};

/// Click directo sobre un elemento
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback(
        "click",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}

/// Click delegado: un solo listener en `container`; `handler` recibe el
/// elemento clicado solo si tiene la clase `class`. Otros clicks se ignoran.
/// Con `prevent_default` se cancela la navegación de los <a href="#">.
pub fn on_delegated_click<F>(
    container: &Element,
    class: &str,
    prevent_default: bool,
    mut handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element) + 'static,
{
    let class = class.to_string();
    on_click(container, move |e: MouseEvent| {
        if prevent_default {
            e.prevent_default();
        }
        match target_element(e.target()) {
            Some(target) if has_class(&target, &class) => handler(target),
            _ => log::trace!("🖱️ [EVENT] Click ignorado (sin clase '{}')", class),
        }
    })
}

/// Listener genérico sobre cualquier EventTarget (document, window...)
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(
        event_type,
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();
    Ok(())
}
