//! End-to-end scenarios for the password field: typing through category
//! boundaries, deleting back down, committing, and toggling visibility.

use std::cell::RefCell;
use std::rc::Rc;

use passfield::{
    classify, classify_transition, Category, CommittedValue, FieldEvent, PasswordField,
    VisibilityIcon,
};

#[test]
fn typing_to_25_chars_fires_exactly_two_transitions() {
    let mut field = PasswordField::new();
    let mut transitions = Vec::new();

    for i in 0..25 {
        let result = field.apply_edit(i..i, "x").expect("append is in bounds");
        if result.changed {
            transitions.push((field.text().chars().count(), result.category));
        }
    }

    assert_eq!(
        transitions,
        vec![(10, Category::Medium), (20, Category::Strong)]
    );
}

#[test]
fn deleting_from_20_to_9_fires_exactly_two_transitions() {
    let mut field = PasswordField::new();
    field.set_text(&"x".repeat(20));
    assert_eq!(field.category(), Category::Strong);

    let mut transitions = Vec::new();
    while field.text().chars().count() > 9 {
        let end = field.text().chars().count();
        let result = field.apply_edit(end - 1..end, "").expect("delete is in bounds");
        if result.changed {
            transitions.push((field.text().chars().count(), result.category));
        }
    }

    assert_eq!(
        transitions,
        vec![(19, Category::Medium), (9, Category::Weak)]
    );
}

#[test]
fn commit_exposes_password_and_strength_to_observers() {
    let mut field = PasswordField::new();
    let seen: Rc<RefCell<Vec<FieldEvent>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    field.on_event(move |event| sink.borrow_mut().push(event.clone()));

    field.set_text("hunter22");
    let value = field.commit();

    let expected = CommittedValue {
        password: "hunter22".to_string(),
        strength: Category::Weak,
    };
    assert_eq!(value, expected);
    assert_eq!(field.committed(), Some(&expected));
    assert_eq!(
        seen.borrow().as_slice(),
        &[FieldEvent::ValueCommitted(expected)]
    );
}

#[test]
fn committing_an_empty_field_succeeds() {
    let mut field = PasswordField::new();
    let value = field.commit();
    assert_eq!(value.password, "");
    assert_eq!(value.strength, Category::Weak);
}

#[test]
fn commit_then_keep_editing_then_commit_again() {
    let mut field = PasswordField::new();
    field.set_text("short");
    field.commit();

    field.set_text("a much longer passphrase here");
    let value = field.commit();
    assert_eq!(value.strength, Category::Strong);
    assert_eq!(field.committed().unwrap().password, "a much longer passphrase here");
}

#[test]
fn two_visibility_toggles_restore_flag_and_icon() {
    let mut field = PasswordField::new();
    assert!(field.is_text_hidden());
    assert_eq!(field.icon(), VisibilityIcon::EyesClosed);

    field.toggle_visibility();
    assert!(!field.is_text_hidden());
    assert_eq!(field.icon(), VisibilityIcon::EyesOpen);

    field.toggle_visibility();
    assert!(field.is_text_hidden());
    assert_eq!(field.icon(), VisibilityIcon::EyesClosed);
}

#[test]
fn visibility_does_not_affect_classification() {
    let mut field = PasswordField::new();
    field.set_text(&"x".repeat(12));
    let before = field.category();
    field.toggle_visibility();
    assert_eq!(field.category(), before);
}

#[test]
fn transition_flag_agrees_with_direct_classification() {
    let lengths = [0usize, 3, 8, 9, 10, 19, 20, 33];
    for &old_len in &lengths {
        for &new_len in &lengths {
            let a = "p".repeat(old_len);
            let b = "p".repeat(new_len);
            let result = classify_transition(&a, &b);
            assert_eq!(result.category, classify(&b));
            assert_eq!(result.changed, classify(&a) != classify(&b));
        }
    }
}

#[test]
fn category_serializes_to_lowercase_names() {
    assert_eq!(serde_json::to_string(&Category::Weak).unwrap(), "\"weak\"");
    assert_eq!(serde_json::to_string(&Category::Strong).unwrap(), "\"strong\"");

    let value: Category = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(value, Category::Medium);
    assert_eq!(value.description(), "Could be stronger");
}
