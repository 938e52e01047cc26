use super::*;

fn div_with_class(doc: &mut Document, class: &str) -> NodeId {
    let id = doc.create_element("div");
    doc.add_class(id, class).unwrap();
    id
}

#[test]
fn append_and_prepend_order_children() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let a = div_with_class(&mut doc, "a");
    let b = div_with_class(&mut doc, "b");
    doc.append_child(body, a).unwrap();
    doc.prepend_child(body, b).unwrap();
    assert_eq!(doc.element(body).unwrap().children(), &[b, a]);
    assert_eq!(doc.element(a).unwrap().parent(), Some(body));
}

#[test]
fn appending_moves_instead_of_copying() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let a = div_with_class(&mut doc, "a");
    doc.append_child(body, a).unwrap();
    doc.append_child(body, a).unwrap();
    assert_eq!(doc.element(body).unwrap().children(), &[a]);
}

#[test]
fn contains_is_inclusive_and_transitive() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(body, outer).unwrap();
    doc.append_child(outer, inner).unwrap();

    assert!(doc.contains(body, inner));
    assert!(doc.contains(inner, inner));
    assert!(!doc.contains(inner, outer));

    doc.detach(outer).unwrap();
    assert!(!doc.contains(body, inner));
    // detaching twice is fine
    doc.detach(outer).unwrap();
}

#[test]
fn cycles_are_rejected() {
    let mut doc = Document::new(100.0);
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(outer, inner).unwrap();
    assert!(doc.append_child(inner, outer).is_err());
    assert!(doc.append_child(outer, outer).is_err());
}

#[test]
fn discard_releases_subtree() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let outer = doc.create_element("div");
    let inner = doc.create_element("div");
    doc.append_child(body, outer).unwrap();
    doc.append_child(outer, inner).unwrap();

    doc.discard(outer).unwrap();
    assert!(doc.element(outer).is_none());
    assert!(doc.element(inner).is_none());
    assert!(doc.is_empty());
    assert!(matches!(doc.discard(outer), Err(GridishError::Document(_))));
    assert!(doc.discard(body).is_err());

    let fresh = doc.create_element("div");
    assert_ne!(fresh, outer);
    assert_ne!(fresh, inner);
}

#[test]
fn listeners_register_and_unregister() {
    let mut doc = Document::new(100.0);
    let first = doc.add_key_listener();
    let second = doc.add_key_listener();
    assert_eq!(doc.key_listeners(), &[first, second]);

    assert!(doc.remove_key_listener(first));
    assert!(!doc.remove_key_listener(first));
    assert!(!doc.has_key_listener(first));
    assert_eq!(doc.key_listeners(), &[second]);
}

#[test]
fn html_escapes_attributes_but_not_style_text() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let div = div_with_class(&mut doc, "grid");
    doc.set_attribute(div, "data-key", "\"1\"").unwrap();
    doc.set_text(div, "a<b").unwrap();
    let style = doc.create_element("style");
    doc.set_text(style, ".a > .b { color: red; }").unwrap();
    doc.append_child(body, div).unwrap();
    doc.append_child(body, style).unwrap();

    assert_eq!(
        doc.to_html(body).unwrap(),
        "<body><div class=\"grid\" data-key=\"&quot;1&quot;\">a&lt;b</div>\
         <style>.a > .b { color: red; }</style></body>"
    );
}

#[test]
fn find_by_class_walks_in_document_order() {
    let mut doc = Document::new(100.0);
    let body = doc.body();
    let a = div_with_class(&mut doc, "hit");
    let b = div_with_class(&mut doc, "miss");
    let c = div_with_class(&mut doc, "hit");
    doc.append_child(body, a).unwrap();
    doc.append_child(body, b).unwrap();
    doc.append_child(b, c).unwrap();
    assert_eq!(doc.find_by_class(body, "hit"), vec![a, c]);
}

#[test]
fn stale_handles_error() {
    let mut doc = Document::new(100.0);
    let ghost = doc.create_element("div");
    doc.discard(ghost).unwrap();
    assert!(doc.add_class(ghost, "x").is_err());
    assert!(doc.set_text(ghost, "x").is_err());
    assert!(!doc.contains(ghost, ghost));
}
