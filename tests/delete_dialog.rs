mod common;

use storefront::catalog::book::screens::DeleteDialogState;
use storefront::catalog::book::BookGateway;
use storefront::{InMemoryGateway, ScreenHost, ScreenProps};

fn delete_props(
    host: &ScreenHost<InMemoryGateway>,
) -> storefront::catalog::book::screens::DeleteProps {
    match host.render().unwrap() {
        ScreenProps::Delete(props) => props,
        other => panic!("expected delete dialog, got {other:?}"),
    }
}

#[tokio::test]
async fn mount_loads_the_entity_and_opens_the_dialog() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42/delete").await.unwrap();

    let props = delete_props(&host);
    assert_eq!(props.state, DeleteDialogState::Confirming);
    assert_eq!(props.question, "Are you sure you want to delete Book 42?");
    // Still on the dialog; the initial not-yet-attempted state must
    // never trigger navigation.
    assert_eq!(host.location().path, "/book/42/delete");
    assert_eq!(host.history().len(), 1);
}

#[tokio::test]
async fn confirm_deletes_and_navigates_back_to_the_list() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42/delete").await.unwrap();
    host.confirm_delete().await.unwrap();

    assert_eq!(host.location().path, "/book");
    let ScreenProps::List(props) = host.render().unwrap() else {
        panic!("expected list screen after delete");
    };
    assert!(props.rows.is_empty());
}

#[tokio::test]
async fn navigation_preserves_the_query_string() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42/delete?page=2&sort=name,asc").await.unwrap();
    host.confirm_delete().await.unwrap();

    assert_eq!(host.location().href(), "/book?page=2&sort=name,asc");
}

#[tokio::test]
async fn success_is_observed_exactly_once() {
    let mut host = common::seeded_host(vec![common::dune()]);

    host.open("/book/42/delete").await.unwrap();
    host.confirm_delete().await.unwrap();
    let depth = host.history().len();

    // The dialog is gone; further confirms must not navigate again.
    host.confirm_delete().await.unwrap();
    assert_eq!(host.history().len(), depth);
}

#[tokio::test]
async fn stale_success_from_an_earlier_operation_never_closes_the_dialog() {
    let mut host = common::seeded_host(vec![common::dune(), common::sparse_book(7)]);

    // A completed delete leaves update_success raised in the slice.
    host.open("/book/7/delete").await.unwrap();
    host.confirm_delete().await.unwrap();
    assert_eq!(host.location().path, "/book");

    // Opening the next dialog must start from a lowered flag: the
    // mount fetch resets it before the dialog can observe it.
    host.open("/book/42/delete").await.unwrap();
    assert_eq!(delete_props(&host).state, DeleteDialogState::Confirming);
    assert_eq!(host.location().path, "/book/42/delete");
}

#[tokio::test]
async fn cancel_closes_without_deleting() {
    let gateway = InMemoryGateway::seeded(vec![common::dune()]);
    let mut host = ScreenHost::new(gateway, storefront::Translator::empty());

    host.open("/book/42/delete?page=2").await.unwrap();
    host.close_dialog().await.unwrap();

    assert_eq!(host.location().href(), "/book?page=2");
    let ScreenProps::List(props) = host.render().unwrap() else {
        panic!("expected list screen after cancel");
    };
    assert_eq!(props.rows.len(), 1, "cancel must not delete the record");
}

#[tokio::test]
async fn failed_fetch_keeps_the_dialog_loading() {
    let mut host = common::empty_host();

    host.open("/book/9/delete").await.unwrap();

    let props = delete_props(&host);
    assert_eq!(props.state, DeleteDialogState::Loading);
    assert_eq!(host.location().path, "/book/9/delete");
}

#[tokio::test]
async fn question_uses_the_bundle_with_interpolation() {
    let gateway = InMemoryGateway::seeded(vec![common::dune()]);
    assert_eq!(gateway.find_all().await.unwrap().len(), 1);
    let mut host = ScreenHost::new(gateway, common::bundle());

    host.open("/book/42/delete").await.unwrap();

    let props = delete_props(&host);
    assert_eq!(props.question, "Soll Buch 42 wirklich gelöscht werden?");
}
