mod content;
mod node;
mod tag;

pub use content::Content;
pub use node::Element;
pub use tag::{InputType, SelectOption, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Some(children) = root.content.children_mut() {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// The chain of elements from `root` down to the element with `id`, inclusive.
/// Returns None if no element has that ID.
pub fn find_path<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if find_path_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn find_path_recursive<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.content.children() {
        if find_path_recursive(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Collect every element under `root` (inclusive) matching `pred`, in document order.
pub fn collect<'a>(root: &'a Element, pred: &impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_recursive(root, pred, &mut result);
    result
}

fn collect_recursive<'a>(
    element: &'a Element,
    pred: &impl Fn(&Element) -> bool,
    result: &mut Vec<&'a Element>,
) {
    if pred(element) {
        result.push(element);
    }
    for child in element.content.children() {
        collect_recursive(child, pred, result);
    }
}

/// Visit every element under `root` (inclusive) mutably, in document order.
pub fn walk_mut(root: &mut Element, f: &mut impl FnMut(&mut Element)) {
    f(root);
    if let Some(children) = root.content.children_mut() {
        for child in children {
            walk_mut(child, f);
        }
    }
}
