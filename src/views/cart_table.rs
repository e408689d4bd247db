// ============================================================================
// CART TABLE VIEW - Filas <tr> del carrito dentro del <tbody>
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, get_attribute};
use crate::models::CartItem;
use crate::views::CartRenderer;

/// Construir la fila de un curso:
/// <tr><td><img></td><td>título</td><td>precio</td><td><a class="remove" data-id>X</a></td></tr>
pub fn render_cart_row(item: &CartItem, remove_class: &str) -> Result<Element, JsValue> {
    let image = ElementBuilder::new("img")?
        .attr("src", &item.image_url)?
        .attr("alt", &item.title)?
        .build();
    let image_cell = ElementBuilder::new("td")?.child(image)?.build();

    let title_cell = ElementBuilder::new("td")?.text(&item.title).build();
    let price_cell = ElementBuilder::new("td")?.text(&item.price).build();

    let remove_link = ElementBuilder::new("a")?
        .class(remove_class)
        .attr("href", "#")?
        .attr("data-id", &item.id)?
        .text("X")
        .build();
    let remove_cell = ElementBuilder::new("td")?.child(remove_link)?.build();

    Ok(ElementBuilder::new("tr")?
        .child(image_cell)?
        .child(title_cell)?
        .child(price_cell)?
        .child(remove_cell)?
        .build())
}

/// Renderer sobre el <tbody> real de la página
pub struct TableRenderer {
    body: Element,
    remove_class: String,
}

impl TableRenderer {
    pub fn new(body: Element, remove_class: impl Into<String>) -> Self {
        Self {
            body,
            remove_class: remove_class.into(),
        }
    }

    /// Id que muestra una fila (data-id de su control "remove")
    fn row_id(&self, row: &Element) -> Option<String> {
        let selector = format!(".{}", self.remove_class);
        row.query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|control| get_attribute(&control, "data-id"))
    }
}

impl CartRenderer for TableRenderer {
    fn render_row(&self, item: &CartItem) -> Result<(), String> {
        let row = render_cart_row(item, &self.remove_class)
            .map_err(|e| format!("Error creando fila {}: {:?}", item.id, e))?;
        self.body.append_child(&row)
            .map_err(|e| format!("Error agregando fila {}: {:?}", item.id, e))?;
        Ok(())
    }

    fn remove_rows(&self, id: &str) -> Result<usize, String> {
        // Copiar primero: children() es una colección viva
        let rows = self.body.children();
        let matching: Vec<Element> = (0..rows.length())
            .filter_map(|i| rows.item(i))
            .filter(|row| self.row_id(row).as_deref() == Some(id))
            .collect();

        for row in &matching {
            row.remove();
        }
        Ok(matching.len())
    }

    fn clear_all_rows(&self) -> Result<(), String> {
        while let Some(child) = self.body.first_child() {
            self.body.remove_child(&child)
                .map_err(|e| format!("Error vaciando tabla: {:?}", e))?;
        }
        Ok(())
    }
}
