// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod cart_state;

pub use reactivity::*;
pub use cart_state::*;
