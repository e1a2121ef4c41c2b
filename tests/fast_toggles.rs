mod common;

use std::sync::Arc;

use common::flaky_store;
use inkbro::config::{ConfigStore, ConfigValue, INCOGNITO_MODE, SAVE_HISTORY};
use inkbro::ui::surface::PanelGravity;
use inkbro::ui::toggles::{browser_toggles, FastTogglePanel, FastToggleState, PanelDisposition};
use parking_lot::Mutex;

fn open(store: &ConfigStore) -> (FastTogglePanel, Arc<Mutex<Vec<bool>>>) {
    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);
    let panel = FastTogglePanel::open(
        browser_toggles(),
        store.clone(),
        PanelGravity::Bottom,
        move |needs_extra_action| sink.lock().push(needs_extra_action),
    );
    (panel, results)
}

fn index_of(key: &str) -> usize {
    browser_toggles()
        .iter()
        .position(|toggle| toggle.config.key() == key)
        .expect("toggle present")
}

#[test]
fn history_reports_no_extra_action_and_stays_open() {
    let store = ConfigStore::in_memory();
    let (mut panel, results) = open(&store);
    let history = index_of(SAVE_HISTORY.key());

    assert_eq!(panel.activate(history), Some(PanelDisposition::StayOpen));

    assert_eq!(*results.lock(), vec![false]);
    assert!(panel.is_open());
    assert_eq!(store.get(SAVE_HISTORY.key()), Some(ConfigValue::Bool(false)));
    assert_eq!(panel.state().is_checked(history), Some(false));
}

#[test]
fn incognito_reports_extra_action_and_dismisses() {
    let store = ConfigStore::in_memory();
    let (mut panel, results) = open(&store);
    let incognito = index_of(INCOGNITO_MODE.key());

    assert_eq!(panel.activate(incognito), Some(PanelDisposition::Dismiss));

    assert_eq!(*results.lock(), vec![true]);
    assert!(INCOGNITO_MODE.get(&store));
    assert_eq!(*panel.state(), FastToggleState::Hidden);
}

#[test]
fn secondary_toggles_can_be_flipped_repeatedly() {
    let store = ConfigStore::in_memory();
    let (mut panel, results) = open(&store);

    for index in 5..9 {
        assert_eq!(panel.activate(index), Some(PanelDisposition::StayOpen));
    }
    assert_eq!(*results.lock(), vec![false; 4]);
    assert!(panel.is_open());
}

#[test]
fn failed_save_reports_nothing() {
    let (store, persistence) = flaky_store();
    let (mut panel, results) = open(&store);
    persistence.set_failing(true);

    assert_eq!(panel.activate(0), Some(PanelDisposition::StayOpen));

    assert!(results.lock().is_empty());
    assert_eq!(panel.state().is_checked(0), Some(false));
    assert!(matches!(
        panel.state(),
        FastToggleState::Visible {
            notice: Some(_),
            ..
        }
    ));
}

#[test]
fn keyboard_focus_activates_focused_toggle() {
    let store = ConfigStore::in_memory();
    let (mut panel, results) = open(&store);

    panel.move_down();
    panel.move_down();
    panel.move_down();
    panel.move_down();
    assert_eq!(panel.activate_focused(), Some(PanelDisposition::StayOpen));
    assert_eq!(*results.lock(), vec![false]);

    panel.dismiss();
    assert_eq!(panel.activate_focused(), None);
}
