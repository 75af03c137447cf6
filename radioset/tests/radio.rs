use radioset::Radio;

#[test]
fn test_new_radio_defaults() {
    let radio = Radio::new("Light");

    assert_eq!(radio.title(), "Light");
    assert!(!radio.is_selected());
    assert!(!radio.is_active());
    assert_eq!(radio.group(), None);
    assert!(!radio.is_dirty());
}

#[test]
fn test_set_title() {
    let radio = Radio::new("Light");
    radio.set_title("Dark");
    assert_eq!(radio.title(), "Dark");
    assert!(radio.is_dirty());
}

#[test]
fn test_distinct_radios_have_distinct_ids() {
    let a = Radio::new("A");
    let b = Radio::new("B");

    assert_ne!(a.id(), b.id());
    assert_ne!(a.id_string(), b.id_string());
    assert!(a.id_string().starts_with("__radio_"));
}

#[test]
fn test_clone_shares_state_and_id() {
    let radio = Radio::new("A");
    let alias = radio.clone();

    assert_eq!(alias.id(), radio.id());

    alias.set_selected(true);
    assert!(radio.is_selected());

    radio.set_active(true);
    assert!(alias.is_active());
}

#[test]
fn test_dirty_set_only_on_actual_change() {
    let radio = Radio::new("A");

    // Storing the value already held does not mark the radio dirty
    radio.set_selected(false);
    radio.set_active(false);
    assert!(!radio.is_dirty());

    radio.set_selected(true);
    assert!(radio.is_dirty());

    radio.clear_dirty();
    radio.set_selected(true);
    assert!(!radio.is_dirty());
}
