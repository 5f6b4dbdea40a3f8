mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Depth-first search for the element with `id`, `root` included.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    root.content
        .children()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Visit every element, parents before their children.
pub fn walk<'a>(root: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(root);
    for child in root.content.children() {
        walk(child, visit);
    }
}
