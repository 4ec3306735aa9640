use core::fmt::Write;

use flick_core::{Element, Node};

/// Serialises a view tree to HTML.
#[must_use]
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(element) => write_element(out, element),
    }
}

fn write_element(out: &mut String, element: &Element) {
    let _ = write!(out, "<{}", element.tag());
    if let Some(class) = element.class_name() {
        let _ = write!(out, " class=\"{}\"", escape(class));
    }
    for (name, value) in element.attributes() {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
    out.push('>');
    for child in element.child_nodes() {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.tag());
}

/// Escapes text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use flick_core::{Element, Node};

    use super::{escape, to_html};

    #[test]
    fn serialises_nested_elements() {
        let view: Node = Element::new("ul")
            .child(Element::new("li").class("place-item").child("A"))
            .child(Element::new("li").attr("data-index", "1").child("B"))
            .into();
        assert_eq!(
            to_html(&view),
            r#"<ul><li class="place-item">A</li><li data-index="1">B</li></ul>"#
        );
    }

    #[test]
    fn payload_text_is_escaped() {
        let view: Node = Element::new("p")
            .child(String::from("<script>\"x\" & 'y'</script>"))
            .into();
        assert_eq!(
            to_html(&view),
            "<p>&lt;script&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/script&gt;</p>"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
