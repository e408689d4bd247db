pub mod renderer;
pub mod cart_table;
pub mod catalog;

pub use renderer::CartRenderer;
pub use cart_table::{render_cart_row, TableRenderer};
pub use catalog::{find_course_card, read_course_card};
