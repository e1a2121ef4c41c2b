use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use inkbro::config::{ConfigStore, ConfigValue, ValueConfig};
use inkbro::ui::catalog::{
    Activation, CatalogController, CatalogOptions, ItemHeader, SettingItem,
};
use inkbro::ui::modal::{modal_channel, ModalService, ModalState, TextInputRequest};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn timeout_catalog(store: &ConfigStore, modal: Arc<dyn ModalService>) -> CatalogController {
    CatalogController::new(
        vec![
            SettingItem::int_value(
                ItemHeader::new("Timeout", "⏱").summary("Seconds"),
                ValueConfig::new("timeout", 30),
            ),
            SettingItem::int_value(
                ItemHeader::new("Retries", "↻"),
                ValueConfig::new("retries", 3),
            ),
        ],
        store.clone(),
        modal,
        CatalogOptions::default(),
        |_| {},
    )
    .unwrap()
}

#[tokio::test]
async fn typed_value_reaches_store_through_queue() {
    let store = ConfigStore::in_memory();
    let (client, mut queue) = modal_channel();
    let mut catalog = timeout_catalog(&store, Arc::new(client));

    assert_eq!(catalog.activate(0), Activation::EditStarted);
    let request = queue.recv().await.expect("prompt requested");
    queue.enqueue(request);
    assert!(matches!(
        queue.state(),
        ModalState::TextInput { title, help: Some(help), buffer }
            if title == "Timeout" && help == "Seconds" && buffer == "30"
    ));

    for code in [KeyCode::Backspace, KeyCode::Backspace, KeyCode::Char('9'), KeyCode::Enter] {
        assert!(queue.handle_key(press(code)));
    }
    catalog.settle().await;

    assert_eq!(store.get("timeout"), Some(ConfigValue::Int(9)));
    assert_eq!(catalog.title_text(0).as_deref(), Some("Timeout: 9"));
    assert!(!queue.handle_key(press(KeyCode::Enter)));
}

#[tokio::test]
async fn prompts_from_two_items_do_not_overlap() {
    let store = ConfigStore::in_memory();
    let (client, mut queue) = modal_channel();
    let mut catalog = timeout_catalog(&store, Arc::new(client));

    catalog.activate(0);
    catalog.activate(1);
    for _ in 0..2 {
        let request = queue.recv().await.expect("prompt requested");
        queue.enqueue(request);
    }
    assert_eq!(queue.waiting(), 1);

    queue.handle_key(press(KeyCode::Esc));
    catalog.settle().await;
    assert!(matches!(queue.state(), ModalState::TextInput { title, .. } if title == "Retries"));

    queue.handle_key(press(KeyCode::Char('5')));
    queue.handle_key(press(KeyCode::Enter));
    catalog.settle().await;

    assert_eq!(store.get("timeout"), None);
    assert_eq!(store.get("retries"), Some(ConfigValue::Int(35)));
    assert_eq!(catalog.title_text(0).as_deref(), Some("Timeout: 30"));
}

#[tokio::test]
async fn abandoned_requests_are_skipped() {
    let (client, mut queue) = modal_channel();
    let request = |title: &str| TextInputRequest {
        title: title.to_string(),
        help: None,
        initial: "x".to_string(),
    };

    let abandoned = tokio::spawn({
        let client = client.clone();
        let stale = request("Stale");
        async move { client.get_text_input(stale).await }
    });
    let stale = queue.recv().await.expect("client alive");
    abandoned.abort();
    let _ = abandoned.await;

    let live = tokio::spawn({
        let client = client.clone();
        let fresh = request("Live");
        async move { client.get_text_input(fresh).await }
    });
    let fresh = queue.recv().await.expect("client alive");

    queue.enqueue(stale);
    queue.enqueue(fresh);
    assert!(matches!(queue.state(), ModalState::TextInput { title, .. } if title == "Live"));

    queue.confirm();
    assert_eq!(live.await.unwrap(), Some("x".to_string()));
}
