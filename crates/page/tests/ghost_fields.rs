use dom::Node;
use dom::build::{doc, elem, form, input};
use ghost_text::{GhostOptions, GhostPhase};
use page::{Page, PageError};
use std::cell::RefCell;
use std::rc::Rc;

fn search_page() -> Node {
    doc(vec![elem(
        "body",
        Vec::new(),
        vec![
            form(
                "search",
                vec![elem(
                    "p",
                    Vec::new(),
                    vec![input("text", vec![("id", "q"), ("name", "q"), ("value", "Search")])],
                )],
            ),
            form(
                "login",
                vec![
                    input("text", vec![("id", "user"), ("name", "user"), ("value", "Username")]),
                    input("text", vec![("id", "note"), ("name", "note"), ("value", "Note")]),
                ],
            ),
        ],
    )])
}

fn marked(page: &Page, selector: &str) -> bool {
    let id = page.element(selector).unwrap();
    page.document().has_class(id, "ghost-text")
}

fn value<'a>(page: &'a Page, selector: &str) -> &'a str {
    let id = page.element(selector).unwrap();
    page.value(id).unwrap_or_default()
}

fn phase(page: &Page, selector: &str) -> Option<GhostPhase> {
    page.ghosts().phase(page.element(selector).unwrap())
}

fn attached_search() -> Page {
    let mut page = Page::new(search_page());
    page.attach("#q", GhostOptions::new).unwrap();
    page
}

#[test]
fn attach_shows_ghost_from_markup_value() {
    let page = attached_search();

    assert_eq!(phase(&page, "#q"), Some(GhostPhase::ShowingGhost));
    assert!(marked(&page, "#q"));
    assert_eq!(value(&page, "#q"), "Search");
}

#[test]
fn focus_then_blur_round_trip() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();

    page.focus(q).unwrap();
    assert_eq!(value(&page, "#q"), "");
    assert!(!marked(&page, "#q"));
    assert_eq!(phase(&page, "#q"), Some(GhostPhase::ShowingUser));

    page.blur();
    assert_eq!(value(&page, "#q"), "Search");
    assert!(marked(&page, "#q"));
    assert_eq!(phase(&page, "#q"), Some(GhostPhase::ShowingGhost));
}

#[test]
fn typed_input_survives_blur() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();

    page.focus(q).unwrap();
    page.type_text("hello").unwrap();
    page.blur();

    assert_eq!(value(&page, "#q"), "hello");
    assert!(!marked(&page, "#q"));
}

#[test]
fn deleting_everything_brings_ghost_back() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();

    page.focus(q).unwrap();
    page.type_text("hi").unwrap();
    page.backspace().unwrap();
    page.backspace().unwrap();
    page.blur();

    assert_eq!(value(&page, "#q"), "Search");
    assert!(marked(&page, "#q"));
}

#[test]
fn submit_does_not_send_ghost_text() {
    let mut page = attached_search();
    let form = page.element("#search").unwrap();

    let data = page.submit(form).unwrap();

    assert_eq!(data, vec![("q".to_string(), String::new())]);
    assert!(marked(&page, "#q"));
}

#[test]
fn typing_after_submit_reports_user_phase() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();
    let form = page.element("#search").unwrap();

    page.submit(form).unwrap();
    page.focus(q).unwrap();
    page.type_text("abc").unwrap();
    page.blur();

    assert_eq!(value(&page, "#q"), "abc");
    assert_eq!(phase(&page, "#q"), Some(GhostPhase::ShowingUser));
}

#[test]
fn submit_sends_real_input() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();
    let form = page.element("#search").unwrap();

    page.focus(q).unwrap();
    page.type_text("hello").unwrap();
    page.blur();

    let data = page.submit(form).unwrap();
    assert_eq!(data, vec![("q".to_string(), "hello".to_string())]);
}

#[test]
fn verbatim_ghost_text_is_cleared_on_submit() {
    let mut page = attached_search();
    let q = page.element("#q").unwrap();
    let form = page.element("#search").unwrap();

    page.focus(q).unwrap();
    page.type_text("Search").unwrap();

    let data = page.submit(form).unwrap();
    assert_eq!(data, vec![("q".to_string(), String::new())]);
}

#[test]
fn change_hook_sees_each_keystroke() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut page = Page::new(search_page());
    let sink = Rc::clone(&seen);
    page.attach("#q", move || {
        let sink = Rc::clone(&sink);
        GhostOptions::new().on_change(move |v| sink.borrow_mut().push(v.to_string()))
    })
    .unwrap();
    let q = page.element("#q").unwrap();

    page.focus(q).unwrap();
    page.type_text("abc").unwrap();
    page.backspace().unwrap();

    assert_eq!(*seen.borrow(), vec!["a", "ab", "abc", "ab"]);
}

#[test]
fn moving_focus_blurs_previous_field() {
    let mut page = Page::new(search_page());
    page.attach("#user", GhostOptions::new).unwrap();
    page.attach("#note", GhostOptions::new).unwrap();
    let user = page.element("#user").unwrap();
    let note = page.element("#note").unwrap();

    page.focus(user).unwrap();
    assert_eq!(value(&page, "#user"), "");

    page.focus(note).unwrap();
    assert_eq!(value(&page, "#user"), "Username");
    assert!(marked(&page, "#user"));
    assert_eq!(value(&page, "#note"), "");
    assert_eq!(page.focused(), Some(note));
}

#[test]
fn selection_attaches_every_match() {
    let mut page = Page::new(search_page());
    let ids = page.attach("input", GhostOptions::new).unwrap();

    assert_eq!(ids.len(), 3);
    assert_eq!(page.ghosts().len(), 3);
    assert_eq!(page.document().select(".ghost-text"), ids);
}

#[test]
fn explicit_parent_form_receives_submit() {
    let mut page = Page::new(search_page());
    page.attach("#note", || GhostOptions::new().parent_form("#search"))
        .unwrap();
    let search = page.element("#search").unwrap();
    let login = page.element("#login").unwrap();

    let data = page.submit(login).unwrap();
    assert!(data.contains(&("note".to_string(), "Note".to_string())));

    page.submit(search).unwrap();
    assert_eq!(value(&page, "#note"), "");
}

#[test]
fn clear_on_submit_false_keeps_ghost_text() {
    let mut page = Page::new(search_page());
    page.attach("#q", || GhostOptions::new().clear_on_submit(false))
        .unwrap();
    let form = page.element("#search").unwrap();

    let data = page.submit(form).unwrap();
    assert_eq!(data, vec![("q".to_string(), "Search".to_string())]);
}

#[test]
fn named_operations_with_json_options() {
    let mut page = Page::new(search_page());
    page.invoke("#user", "init", Some(r#"{"ghostText":"Login name","ghostClass":"hint"}"#))
        .unwrap();
    let user = page.element("#user").unwrap();

    // "Username" differs from the configured ghost text.
    assert_eq!(phase(&page, "#user"), Some(GhostPhase::ShowingUser));

    page.invoke("#user", "blur", None).unwrap();
    assert_eq!(value(&page, "#user"), "Username");

    page.focus(user).unwrap();
    page.backspace().unwrap();
    page.blur();
    assert_eq!(value(&page, "#user"), "Usernam");

    page.invoke("#user", "updateSettings", Some(r#"{"ghostText":"Usernam"}"#))
        .unwrap();
    page.invoke("#user", "focus", None).unwrap();
    assert_eq!(value(&page, "#user"), "");
    assert!(!page.document().has_class(user, "hint"));
}

#[test]
fn unknown_operation_is_rejected_before_touching_elements() {
    let mut page = attached_search();

    let err = page.invoke("#q", "destroy", None).unwrap_err();
    assert!(matches!(err, PageError::Ghost(_)));
    assert_eq!(value(&page, "#q"), "Search");

    let err = page.invoke("#q", "focus", Some("{not json")).unwrap_err();
    assert!(matches!(err, PageError::Options(_)));
}

#[test]
fn removing_a_form_releases_its_fields() {
    let mut page = Page::new(search_page());
    page.attach("input", GhostOptions::new).unwrap();
    let user = page.element("#user").unwrap();
    page.focus(user).unwrap();

    let login = page.element("#login").unwrap();
    page.remove_element(login);

    assert_eq!(page.ghosts().len(), 1);
    assert_eq!(page.focused(), None);
    assert!(matches!(page.element("#user"), Err(PageError::NoMatch(_))));
}

#[test]
fn focus_rejects_non_text_targets() {
    let mut page = attached_search();
    let form = page.element("#search").unwrap();
    assert!(matches!(page.focus(form), Err(PageError::NotATextControl(_))));
    assert!(matches!(page.key_press('x'), Err(PageError::NoFocus)));
}
