mod common;

use storefront::ScreenProps;

#[tokio::test]
async fn detail_renders_the_fetched_record() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42").await.unwrap();

    let ScreenProps::Detail(props) = host.render().unwrap() else {
        panic!("expected detail screen");
    };
    assert_eq!(props.id, "42");
    assert_eq!(props.name, "Dune");
    assert_eq!(props.description, "Spice and sandworms");
    assert_eq!(props.price, "12.5");
    assert_eq!(props.edit_href, "/book/42/edit");
    assert_eq!(props.back_href, "/book");
}

#[tokio::test]
async fn absent_fields_render_blank() {
    let mut host = common::seeded_host(vec![common::sparse_book(7)]);

    host.open("/book/7").await.unwrap();

    let ScreenProps::Detail(props) = host.render().unwrap() else {
        panic!("expected detail screen");
    };
    assert_eq!(props.name, "Untitled");
    assert_eq!(props.description, "");
    assert_eq!(props.price, "");
}

#[tokio::test]
async fn failed_fetch_leaves_all_fields_blank() {
    let mut host = common::empty_host();

    host.open("/book/9").await.unwrap();

    let ScreenProps::Detail(props) = host.render().unwrap() else {
        panic!("expected detail screen");
    };
    assert_eq!(props.id, "");
    assert_eq!(props.name, "");
    assert_eq!(props.description, "");
    assert_eq!(props.price, "");
}

#[tokio::test]
async fn hrefs_preserve_the_query_string() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42?page=2").await.unwrap();

    let ScreenProps::Detail(props) = host.render().unwrap() else {
        panic!("expected detail screen");
    };
    assert_eq!(props.back_href, "/book?page=2");
    assert_eq!(props.edit_href, "/book/42/edit?page=2");
}
