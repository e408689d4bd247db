// ============================================================================
// CART STATE - Lista en memoria del carrito (orden de inserción)
// ============================================================================

use crate::models::CartItem;
use crate::state::ReactiveState;

/// Estado del carrito
pub struct CartState {
    items: ReactiveState<Vec<CartItem>>,
}

impl CartState {
    pub fn new() -> Self {
        Self {
            items: ReactiveState::new(Vec::new()),
        }
    }

    /// Copia de los cursos en orden
    pub fn items(&self) -> Vec<CartItem> {
        self.items.snapshot()
    }

    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.with(|items| items.iter().any(|item| item.has_id(id)))
    }

    /// Agregar al final; devuelve la lista resultante
    pub fn push(&self, item: CartItem) -> Vec<CartItem> {
        self.items.update(|items| {
            items.push(item);
            items.clone()
        })
    }

    /// Quitar TODOS los cursos con ese id; devuelve (eliminados, lista resultante)
    pub fn remove_by_id(&self, id: &str) -> (usize, Vec<CartItem>) {
        self.items.update(|items| {
            let before = items.len();
            items.retain(|item| !item.has_id(id));
            (before - items.len(), items.clone())
        })
    }

    /// Reemplazar la lista completa
    pub fn replace(&self, items: Vec<CartItem>) {
        self.items.set(items);
    }

    pub fn clear(&self) {
        self.items.set(Vec::new());
    }

    /// Suscribirse a cambios (recibe la lista actual)
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Vec<CartItem>) + 'static,
    {
        self.items.subscribe(callback);
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str) -> CartItem {
        CartItem::new(id, "t", "$1", "i.png")
    }

    #[test]
    fn test_remove_adjacent_duplicates_in_one_pass() {
        let state = CartState::new();
        for id in ["1", "1", "2", "1"] {
            state.push(course(id));
        }

        let (removed, rest) = state.remove_by_id("1");

        assert_eq!(removed, 3);
        assert_eq!(rest, vec![course("2")]);
        assert!(!state.contains("1"));
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let state = CartState::new();
        state.push(course("1"));

        let (removed, rest) = state.remove_by_id("9");

        assert_eq!(removed, 0);
        assert_eq!(rest.len(), 1);
    }
}
