use veloce_form::presentation::{clear_error, show_error};
use veloce_form::Field;
use veloce_test_utils::PageForm;

#[test]
fn test_show_creates_element_once() {
    let mut page = PageForm::new();

    show_error(&mut page, Field::Name, "Name is required");
    show_error(&mut page, Field::Name, "Name must be at least 2 characters");

    assert_eq!(page.error_elements_created(Field::Name), 1);
    assert_eq!(
        page.error_text(Field::Name),
        Some("Name must be at least 2 characters")
    );
    assert!(page.has_error_border(Field::Name));
}

#[test]
fn test_clear_blanks_text_and_border() {
    let mut page = PageForm::new();

    show_error(&mut page, Field::Email, "Email is required");
    clear_error(&mut page, Field::Email);

    assert_eq!(page.error_text(Field::Email), Some(""));
    assert!(!page.has_error_border(Field::Email));
}

#[test]
fn test_clear_without_error_is_noop() {
    let mut page = PageForm::new();
    let before = page.clone();

    clear_error(&mut page, Field::Subject);
    clear_error(&mut page, Field::Subject);

    assert_eq!(page, before);
    assert_eq!(page.error_text(Field::Subject), None);
}

#[test]
fn test_repeated_show_is_idempotent() {
    let mut page = PageForm::new();
    show_error(&mut page, Field::Message, "Message is required");
    let once = page.clone();
    show_error(&mut page, Field::Message, "Message is required");
    assert_eq!(page, once);
}
