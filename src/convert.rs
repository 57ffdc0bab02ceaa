use std::collections::HashMap;

use roxmltree::{Document, Node};

use crate::component::{ClickAction, ClickEvent, Color, Component, HoverEvent};
use crate::error::Error;
use crate::template;

/// Convert a parsed document into its root component.
///
/// The root element must be `<message>` with at least one direct `<t>` child;
/// the result is a blank white container whose `extra` holds one converted
/// component per segment, in document order.
pub fn document(doc: &Document, variables: &HashMap<String, String>) -> Result<Component, Error> {
    let root = doc.root_element();
    if root.tag_name().name() != "message" {
        return Err(Error::WrongRoot(root.tag_name().name().to_string()));
    }
    let segments: Vec<Node> = child_elements(root, "t").collect();
    if segments.is_empty() {
        return Err(Error::EmptyMessage);
    }
    aggregate(&segments, variables)
}

/// Fold sibling segments into one container component, in input order.
/// The first failing member aborts the whole fold.
fn aggregate(segments: &[Node], variables: &HashMap<String, String>) -> Result<Component, Error> {
    let mut group = Component::group();
    for segment in segments {
        group.extra.push(convert_segment(*segment, variables)?);
    }
    Ok(group)
}

/// Convert one `<t>` element and everything below it.
fn convert_segment(node: Node, variables: &HashMap<String, String>) -> Result<Component, Error> {
    let mut component = Component {
        bold: style_flag(node, "bold"),
        italic: style_flag(node, "italic"),
        underlined: style_flag(node, "underlined"),
        strikethrough: style_flag(node, "strikethrough"),
        obfuscated: style_flag(node, "obfuscated"),
        // Unrecognized or absent colors fall back to white rather than erroring.
        color: Some(
            node.attribute("color")
                .and_then(|value| value.to_lowercase().parse().ok())
                .unwrap_or(Color::White),
        ),
        ..Component::default()
    };

    for child in node.children() {
        if child.is_text() {
            let content = template::substitute(child.text().unwrap_or(""), variables);
            // Text merges into the node itself until something lands in
            // `extra`; after that it trails as its own leaf to keep
            // left-to-right reading order.
            if component.extra.is_empty() {
                component.text.push_str(&content);
            } else {
                component.extra.push(Component::plain(content));
            }
            continue;
        }
        if !child.is_element() {
            continue;
        }
        match child.tag_name().name() {
            "t" => {
                let nested = convert_segment(child, variables)?;
                component.extra.push(nested);
            }
            "hover" => component.hover_event = Some(hover_event(child, variables)?),
            "click" => component.click_event = Some(click_event(child, variables)?),
            other => return Err(Error::UnknownTag(other.to_string())),
        }
    }

    Ok(component)
}

/// Boolean style attributes parse leniently: exactly "true" in any case is
/// true, any other value is false. An absent attribute leaves the flag unset.
fn style_flag(node: Node, name: &str) -> Option<bool> {
    node.attribute(name)
        .map(|value| value.eq_ignore_ascii_case("true"))
}

/// Build the hover event for one `<hover>` element.
///
/// Content groups are probed in a fixed order (text segments, then a single
/// item, then a single achievement) so documents carrying more than one stay
/// deterministic. Item content is recognized but deliberately rejected.
fn hover_event(node: Node, variables: &HashMap<String, String>) -> Result<HoverEvent, Error> {
    let texts: Vec<Node> = child_elements(node, "t").collect();
    if !texts.is_empty() {
        return Ok(HoverEvent::ShowText(Box::new(aggregate(&texts, variables)?)));
    }
    if child_elements(node, "item").count() == 1 {
        return Err(Error::UnsupportedItem);
    }
    let achievements: Vec<Node> = child_elements(node, "achievement").collect();
    if achievements.len() == 1 {
        let value = template::substitute(&first_level_text(achievements[0]), variables);
        return Ok(HoverEvent::ShowAchievement(value));
    }
    Err(Error::InvalidHover)
}

/// Build the click event for one `<click>` element.
fn click_event(node: Node, variables: &HashMap<String, String>) -> Result<ClickEvent, Error> {
    let action: ClickAction = node
        .attribute("action")
        .and_then(|value| value.parse().ok())
        .ok_or(Error::InvalidClickAction)?;
    Ok(ClickEvent {
        action,
        value: template::substitute(&first_level_text(node), variables),
    })
}

/// Direct element children with the given tag, in document order.
fn child_elements<'a, 'input>(
    parent: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Concatenated direct text children of an element, nested elements skipped,
/// no trimming.
fn first_level_text(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
