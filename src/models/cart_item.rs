use serde::{Deserialize, Serialize};

/// Un curso dentro del carrito.
///
/// El precio se guarda tal cual se muestra en el catálogo ("$10", "15 €"...);
/// no se hace aritmética con él.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    // Orden de campos igual al JSON histórico: image, title, price, id
    #[serde(rename = "image", default)]
    pub image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    pub id: String,
}

impl CartItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            image_url: image_url.into(),
            title: title.into(),
            price: price.into(),
            id: id.into(),
        }
    }

    /// ¿Corresponde este curso al id dado?
    pub fn has_id(&self, id: &str) -> bool {
        self.id == id
    }
}
