// Tests de DOM: solo en navegador (wasm-pack test --headless --firefox)
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::Element;
use course_cart::config::ClearScope;
use course_cart::dom::{create_element, document};
use course_cart::services::{CartStorage, MemoryStorage};
use course_cart::views::{find_course_card, read_course_card, render_cart_row, CartRenderer, TableRenderer};
use course_cart::{CartItem, CartViewModel};

wasm_bindgen_test_configure!(run_in_browser);

fn mounted(html: &str) -> Element {
    let container = create_element("div").unwrap();
    container.set_inner_html(html);
    document().unwrap().body().unwrap().append_child(&container).unwrap();
    container
}

fn row_ids(body: &Element) -> Vec<String> {
    let links = body.query_selector_all("a.remove").unwrap();
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| {
            use wasm_bindgen::JsCast;
            node.dyn_into::<Element>().ok()?.get_attribute("data-id")
        })
        .collect()
}

#[wasm_bindgen_test]
fn cart_row_has_four_cells_and_remove_control() {
    let item = CartItem::new("1", "Course A", "$10", "a.png");
    let row = render_cart_row(&item, "remove").unwrap();

    assert_eq!(row.tag_name(), "TR");
    assert_eq!(row.children().length(), 4);
    let link = row.query_selector("a.remove").unwrap().unwrap();
    assert_eq!(link.get_attribute("data-id").as_deref(), Some("1"));
    assert_eq!(row.children().item(1).unwrap().text_content().as_deref(), Some("Course A"));
    assert_eq!(row.children().item(2).unwrap().text_content().as_deref(), Some("$10"));
}

#[wasm_bindgen_test]
fn title_is_text_not_markup() {
    let item = CartItem::new("1", "<b>bold</b>", "$1", "a.png");
    let row = render_cart_row(&item, "remove").unwrap();
    assert!(row.query_selector("b").unwrap().is_none());
}

#[wasm_bindgen_test]
fn read_course_card_from_catalog_markup() {
    let container = mounted(
        r##"<div class="card">
             <img src="/img/a.png">
             <div class="info-card">
               <h4>Course A</h4>
               <p class="price">$200 <span>$10</span></p>
               <a href="#" class="add-to-cart" data-id="1">Add</a>
             </div>
           </div>"##,
    );
    let control = container.query_selector(".add-to-cart").unwrap().unwrap();
    let card = find_course_card(&control).unwrap();

    let item = read_course_card(&card).unwrap();

    assert_eq!(item.id, "1");
    assert_eq!(item.title, "Course A");
    assert_eq!(item.price, "$10");
    assert!(item.image_url.ends_with("/img/a.png"));
    container.remove();
}

#[wasm_bindgen_test]
fn read_course_card_without_price_span_fails() {
    let container = mounted(r#"<div><img src="a.png"><h4>A</h4><a data-id="1"></a></div>"#);
    let card = container.first_element_child().unwrap();
    assert!(read_course_card(&card).is_err());
    container.remove();
}

#[wasm_bindgen_test]
fn table_stays_in_sync_with_storage() {
    let container = mounted("<table><tbody></tbody></table>");
    let body = container.query_selector("tbody").unwrap().unwrap();
    let memory = MemoryStorage::new();
    let storage = CartStorage::new(Rc::new(memory.clone()), "courses");
    let renderer = Rc::new(TableRenderer::new(body.clone(), "remove"));
    let cart = CartViewModel::new(storage.clone(), renderer.clone(), ClearScope::OwnKey);

    cart.add_item(CartItem::new("1", "Course A", "$10", "a.png")).unwrap();
    cart.add_item(CartItem::new("2", "Course B", "$20", "b.png")).unwrap();
    cart.add_item(CartItem::new("1", "Course A", "$10", "a.png")).unwrap();
    assert_eq!(row_ids(&body), vec!["1", "2", "1"]);

    cart.remove_item(Some("1")).unwrap();
    assert_eq!(row_ids(&body), vec!["2"]);
    let persisted: Vec<String> = storage.load_all().into_iter().map(|i| i.id).collect();
    assert_eq!(persisted, vec!["2"]);

    cart.clear_all().unwrap();
    assert_eq!(body.children().length(), 0);
    assert_eq!(renderer.remove_rows("2").unwrap(), 0);
    container.remove();
}

mod wiring {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;
    use course_cart::config::AppConfig;
    use course_cart::dom::on_delegated_click;
    use course_cart::App;

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn stored_ids(key: &str) -> Vec<String> {
        let raw = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item(key)
            .unwrap()
            .unwrap_or_else(|| "[]".to_string());
        serde_json::from_str::<Vec<CartItem>>(&raw)
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect()
    }

    /// Página con catálogo, tabla y botón de vaciar bajo ids propios del test
    fn mount_page(suffix: &str) -> (Element, App, String) {
        let page = mounted(&format!(
            r##"<div id="catalog-{s}">
                 <div class="card">
                   <img src="/img/a.png">
                   <div class="info-card">
                     <h4>Course A</h4>
                     <p class="price">$200 <span>$10</span></p>
                     <a href="#" class="button add-to-cart" data-id="1">Add</a>
                   </div>
                 </div>
               </div>
               <table id="cart-{s}"><tbody></tbody></table>
               <a href="#" id="clear-{s}">Clear</a>"##,
            s = suffix
        ));
        let key = format!("courses-{}", suffix);
        let config = AppConfig {
            storage_key: key.clone(),
            catalog_selector: format!("#catalog-{}", suffix),
            cart_body_selector: format!("#cart-{} tbody", suffix),
            clear_button_selector: format!("#clear-{}", suffix),
            ..AppConfig::default()
        };
        let app = App::new(&config).unwrap();
        app.mount().unwrap();
        (page, app, key)
    }

    #[wasm_bindgen_test]
    fn delegated_click_ignores_other_targets() {
        let page = mounted(r#"<ul><li class="pick">a</li><li class="other">b</li></ul>"#);
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        on_delegated_click(&page, "pick", true, move |_| hits_clone.set(hits_clone.get() + 1)).unwrap();

        click(&page, ".other");
        assert_eq!(hits.get(), 0);
        click(&page, ".pick");
        assert_eq!(hits.get(), 1);
        page.remove();
    }

    #[wasm_bindgen_test]
    fn click_outside_add_control_adds_nothing() {
        let (page, app, key) = mount_page("noop");

        click(&page, "#catalog-noop h4");

        assert!(app.cart().is_empty());
        assert_eq!(page.query_selector_all("#cart-noop tbody tr").unwrap().length(), 0);
        assert!(stored_ids(&key).is_empty());
        page.remove();
    }

    #[wasm_bindgen_test]
    fn add_then_remove_through_clicks() {
        let (page, app, key) = mount_page("flow");

        click(&page, "#catalog-flow .add-to-cart");
        assert_eq!(app.cart().len(), 1);
        assert_eq!(page.query_selector_all("#cart-flow tbody tr").unwrap().length(), 1);
        assert_eq!(stored_ids(&key), vec!["1"]);

        click(&page, "#cart-flow a.remove");
        assert!(app.cart().is_empty());
        assert_eq!(page.query_selector_all("#cart-flow tbody tr").unwrap().length(), 0);
        assert!(stored_ids(&key).is_empty());
        page.remove();
    }

    #[wasm_bindgen_test]
    fn clear_button_empties_table_and_storage() {
        let (page, app, key) = mount_page("clear");
        click(&page, "#catalog-clear .add-to-cart");
        click(&page, "#catalog-clear .add-to-cart");
        assert_eq!(stored_ids(&key), vec!["1", "1"]);

        click(&page, "#clear-clear");

        assert!(app.cart().is_empty());
        assert_eq!(page.query_selector_all("#cart-clear tbody tr").unwrap().length(), 0);
        assert!(stored_ids(&key).is_empty());
        page.remove();
    }
}
