//! End-to-end flow: sheet text to checkout link.

use feria_commerce::prelude::*;
use feria_commerce::sheet;

const SHEET: &str = "\
name,description,price,image_url,available
Yogurt,\"Natural, sin azucar\",5000,img/yogurt.jpg,yes
Arepa,De maiz,2000,,YES
Agotado,No disponible,9999,img/agotado.jpg,no
\"Ya, \"\"Rica\"\"\",Mermelada,3.50,img/mermelada.jpg,yes
";

#[test]
fn sheet_text_becomes_catalog() {
    let rows = sheet::decode(SHEET);
    assert_eq!(rows.len(), 4);

    let products = Normalizer::new().normalize(&rows);
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Yogurt", "Arepa", "Ya, \"Rica\""]);

    assert_eq!(products[0].description, "Natural, sin azucar");
    assert_eq!(products[1].image_ref, "img/placeholder.jpg");
    assert_eq!(products[2].price, Price::new(3.5));
}

#[test]
fn catalog_to_cart_to_order_link() {
    let products = Normalizer::new().normalize(&sheet::decode(SHEET));

    let mut cart = Cart::new();
    cart.add_product(&products[0], 1);
    cart.add_product(&products[0], 1);
    cart.add_product(&products[1], 1);
    assert_eq!(cart.line_count(), 2);
    assert_eq!(cart.total(), Price::new(12000.0));

    let summary = cart.format_order_summary().unwrap();
    assert_eq!(
        summary,
        "Yogurt x2 - $10000\nArepa x1 - $2000\nTotal: $12000"
    );

    let config = CheckoutConfig::new("573005970933").with_greeting("");
    let link = config.checkout(&mut cart).unwrap();
    assert_eq!(
        link,
        "https://wa.me/573005970933?text=Yogurt%20x2%20-%20%2410000%0AArepa%20x1%20-%20%242000%0ATotal%3A%20%2412000"
    );
    assert!(cart.is_empty());
}

#[test]
fn restored_cart_keeps_ordering_and_total() {
    let products = Normalizer::new().normalize(&sheet::decode(SHEET));

    let mut cart = Cart::new();
    for product in &products {
        cart.add_product(product, 1);
    }
    cart.change_quantity(0, 4);

    let restored = Cart::from_persistable(cart.to_persistable());
    assert_eq!(restored.lines(), cart.lines());
    assert_eq!(restored.total(), cart.total());
}
