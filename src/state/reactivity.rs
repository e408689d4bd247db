// ============================================================================
// REACTIVITY - Valor observable con suscriptores
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Box<dyn Fn(&T)>;

/// Estado reactivo: cada mutación notifica a los suscriptores con el valor nuevo
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: RefCell<Vec<Callback<T>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Leer el valor sin copiarlo
    pub fn with<R, F>(&self, reader: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        reader(&*self.value.borrow())
    }

    /// Establecer nuevo valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutar con closure y notificar; devuelve lo que devuelva el closure
    pub fn update<R, F>(&self, updater: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = updater(&mut *self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios. Los callbacks no deben mutar este mismo estado.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        let value = self.value.borrow();
        for callback in self.subscribers.borrow().iter() {
            callback(&*value);
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}
