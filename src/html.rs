use crate::node::{Node, NodeKind, Tree};

/// Stylesheet embedded in every rendered document.
pub const STYLESHEET: &str = r#"
<style>
  body {
    background-color: #fcfffa;
    margin: 1.25rem;
    margin-bottom: 3rem;
    font-size: 1.05em;
  }

  code {
    color: indianred;
    font-weight: 700;
  }

  pre {
    background-color: #202020;
    color: #dedede;
    padding: 0.75rem 0.5rem;
    font-weight: normal !important;
  }

  li {
    padding: 0.25rem 0.5rem;
  }
</style>
"#;

/// Render a whole tree as an HTML document.
pub fn tree_to_html(tree: &Tree) -> String {
    let mut out = String::new();
    node_to_html(tree, tree.get(tree.root()), &mut out);
    out
}

fn node_to_html(tree: &Tree, node: &Node, out: &mut String) {
    match node.kind {
        NodeKind::Root => {
            out.push_str("<html>");
            out.push_str(STYLESHEET);
            out.push_str("<body>\n");
            children_to_html(tree, node, out);
            out.push_str("\n</body>\n</html>");
        }
        NodeKind::List => {
            out.push_str("<ul>\n");
            children_to_html(tree, node, out);
            out.push_str("\n</ul>");
        }
        NodeKind::Heading(_) | NodeKind::Paragraph | NodeKind::Pre | NodeKind::ListItem => {
            // Every kind in this arm has a tag
            let tag = node.kind.tag().unwrap_or_default();
            out.push('<');
            out.push_str(&tag);
            out.push('>');
            out.push_str(&node.text);
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        NodeKind::Text => out.push_str(&node.text),
    }
}

/// Children one per line, without a trailing newline.
fn children_to_html(tree: &Tree, node: &Node, out: &mut String) {
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        node_to_html(tree, tree.get(*child), out);
    }
}
