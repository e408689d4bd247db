use crate::models::CartItem;

/// Trait de presentación del carrito (tabla visible u otro destino)
pub trait CartRenderer {
    /// Agregar una fila al final
    fn render_row(&self, item: &CartItem) -> Result<(), String>;

    /// Agregar una fila por curso, en orden. Asume la tabla vacía.
    fn render_all(&self, items: &[CartItem]) -> Result<(), String> {
        for item in items {
            self.render_row(item)?;
        }
        Ok(())
    }

    /// Quitar todas las filas que muestran ese id; devuelve cuántas
    fn remove_rows(&self, id: &str) -> Result<usize, String>;

    /// Quitar todas las filas
    fn clear_all_rows(&self) -> Result<(), String>;
}
