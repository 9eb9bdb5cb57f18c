use super::*;
use serde_json::json;

fn component(value: Value) -> Component {
    serde_json::from_value(value).expect("component should decode")
}

fn component_err(value: Value) -> String {
    serde_json::from_value::<Component>(value)
        .expect_err("component should be rejected")
        .to_string()
}

// =============================================================================
// KINDS
// =============================================================================

#[test]
fn kind_names_round_trip() {
    for kind in ComponentKind::ALL {
        assert_eq!(ComponentKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ComponentKind::from_name("button"), None);
    assert_eq!(ComponentKind::from_name("Image"), None);
}

#[test]
fn accepted_props_include_children() {
    for kind in ComponentKind::ALL {
        assert!(kind.accepted_props().contains(&"children"));
    }
    assert!(!ComponentKind::Button.accepted_props().contains(&"className"));
}

// =============================================================================
// DECODING
// =============================================================================

#[test]
fn decodes_single_key_reference() {
    let c = component(json!({"Text": {"children": "Hi", "as": "h1", "className": "text-6xl"}}));
    assert_eq!(c.kind(), ComponentKind::Text);
    let Component::Text(props) = c else { panic!("expected Text") };
    assert_eq!(props.tag, TextTag::H1);
    assert_eq!(props.class_name.as_deref(), Some("text-6xl"));
    assert_eq!(props.children, Some(Children::Text("Hi".into())));
}

#[test]
fn rejects_reference_without_kind_key() {
    let err = component_err(json!({}));
    assert!(err.contains("no kind key"), "{err}");
}

#[test]
fn rejects_reference_with_multiple_kind_keys() {
    let err = component_err(json!({"Button": {"children": "a"}, "Text": {"children": "b"}}));
    assert!(err.contains("more than one kind key"), "{err}");
}

#[test]
fn rejects_unknown_kind() {
    let err = component_err(json!({"Image": {"src": "x.png"}}));
    assert!(err.contains("unknown component kind `Image`"), "{err}");
}

#[test]
fn rejects_property_outside_kind_shape() {
    let err = component_err(json!({"Button": {"children": "Go", "className": "red"}}));
    assert!(err.contains("does not accept property `className`"), "{err}");
}

#[test]
fn rejects_mistyped_property() {
    let err = component_err(json!({"Button": {"children": "Go", "disabled": "yes"}}));
    assert!(err.contains("invalid `Button` properties"), "{err}");
}

#[test]
fn null_props_decode_as_empty_bag() {
    let c = component(json!({"Text": null}));
    assert_eq!(c, Component::Text(TextProps::default()));
}

#[test]
fn flavor_is_accepted_as_variant_alias() {
    let c = component(json!({"Button": {"children": "Go", "flavor": "secondary"}}));
    let Component::Button(props) = c else { panic!("expected Button") };
    assert_eq!(props.variant, ButtonVariant::Secondary);
}

#[test]
fn unrecognized_variant_falls_back_to_primary() {
    let c = component(json!({"Button": {"variant": "tertiary"}}));
    let Component::Button(props) = c else { panic!("expected Button") };
    assert_eq!(props.variant, ButtonVariant::Primary);

    let c = component(json!({"Button": {"variant": 7}}));
    let Component::Button(props) = c else { panic!("expected Button") };
    assert_eq!(props.variant, ButtonVariant::Primary);
}

#[test]
fn unrecognized_text_tag_falls_back_to_paragraph() {
    let c = component(json!({"Text": {"children": "x", "as": "h7"}}));
    let Component::Text(props) = c else { panic!("expected Text") };
    assert_eq!(props.tag, TextTag::P);
}

#[test]
fn null_children_mean_no_content() {
    let c = component(json!({"Text": {"children": null}}));
    assert!(c.children().is_none());
}

#[test]
fn children_accept_numbers_and_lists() {
    let c = component(json!({"Text": {"children": ["Total: ", 3, ["!"]]}}));
    let nodes = c.children().expect("children").to_nodes();
    assert_eq!(nodes, vec![Node::text("Total: "), Node::text("3"), Node::text("!")]);
}

#[test]
fn serializes_back_to_single_key_form() {
    let c = Component::Text(TextProps { children: Some("Hi".into()), tag: TextTag::H2, ..TextProps::default() });
    assert_eq!(serde_json::to_value(&c).unwrap(), json!({"Text": {"children": "Hi", "as": "h2"}}));
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn button_without_variant_uses_primary_class() {
    let el = render(&component(json!({"Button": {"children": "Go"}})), None);
    assert_eq!(el.tag, Tag::Button);
    assert_eq!(el.class(), Some(ButtonVariant::Primary.class()));
}

#[test]
fn button_secondary_variant_uses_secondary_class() {
    let el = render(&component(json!({"Button": {"variant": "secondary"}})), None);
    assert_eq!(el.class(), Some(ButtonVariant::Secondary.class()));
}

#[test]
fn button_forwards_enumerated_attributes() {
    let props = ButtonProps {
        id: Some("cta".into()),
        on_click: Some("signup".into()),
        disabled: true,
        title: Some("Sign up".into()),
        ..ButtonProps::default()
    };
    let el = render_button(&props, Some(&"Join".into()));
    assert_eq!(el.attr("id"), Some("cta"));
    assert_eq!(el.on_click(), Some("signup"));
    assert_eq!(el.attr("disabled"), Some(""));
    assert_eq!(el.attr("title"), Some("Sign up"));
    assert_eq!(el.text_content().as_deref(), Some("Join"));
}

#[test]
fn text_without_tag_renders_paragraph() {
    let el = render(&component(json!({"Text": {"children": "body"}})), None);
    assert_eq!(el.tag, Tag::P);
}

#[test]
fn text_h2_renders_level_two_heading() {
    let el = render(&component(json!({"Text": {"children": "x", "as": "h2"}})), None);
    assert_eq!(el.tag, Tag::H2);
}

#[test]
fn text_forwards_class_name() {
    let props = TextProps { class_name: Some("text-lg".into()), ..TextProps::default() };
    let el = render_text(&props, None);
    assert_eq!(el.class(), Some("text-lg"));
}

#[test]
fn render_without_content_leaves_no_children() {
    let el = render_text(&TextProps::default(), None);
    assert!(el.children.is_empty());
    assert_eq!(el.text_content(), None);
}

#[test]
fn render_with_empty_content_keeps_empty_text_node() {
    let el = render_text(&TextProps::default(), Some(&"".into()));
    assert_eq!(el.children, vec![Node::text("")]);
}
