use minibasic::lang::ast::Label;
use minibasic::lang::Tree;

fn label(name: &str) -> Option<Label> {
    Some(Label::Var(name.to_string()))
}

#[test]
fn test_add_child_depths() {
    let mut tree = Tree::new();
    let a = tree.alloc(label("A"));
    let b = tree.alloc(label("B"));
    let c = tree.alloc(label("C"));
    tree.add_child(a, b);
    tree.add_child(b, c);
    assert_eq!(tree.depth(a), 0);
    assert_eq!(tree.depth(b), 1);
    assert_eq!(tree.depth(c), 2);
    assert_eq!(tree.root(c), a);
    tree.check_consistency(a);
}

#[test]
fn test_add_child_renumbers_subtree() {
    let mut tree = Tree::new();
    let a = tree.alloc(label("A"));
    let b = tree.alloc(label("B"));
    let c = tree.alloc(label("C"));
    tree.add_child(b, c);
    tree.add_child(a, b);
    assert_eq!(tree.depth(c), 2);
    tree.check_consistency(a);
}

#[test]
fn test_insert_above_preserves_slot() {
    let mut tree = Tree::new();
    let root = tree.alloc(label("ROOT"));
    let left = tree.alloc(label("L"));
    let mid = tree.alloc(label("M"));
    let right = tree.alloc(label("R"));
    tree.add_child(root, left);
    tree.add_child(root, mid);
    tree.add_child(root, right);

    let wrapper = tree.alloc(label("W"));
    tree.insert_above(mid, wrapper);

    assert_eq!(tree.children(root), &[left, wrapper, right]);
    assert_eq!(tree.parent(wrapper), Some(root));
    assert_eq!(tree.children(wrapper), &[mid]);
    assert_eq!(tree.parent(mid), Some(wrapper));
    assert_eq!(tree.depth(wrapper), 1);
    assert_eq!(tree.depth(mid), 2);
    tree.check_consistency(root);
}

#[test]
fn test_insert_above_fragment_root() {
    let mut tree = Tree::new();
    let a = tree.alloc(label("A"));
    let b = tree.alloc(label("B"));
    tree.add_child(a, b);
    let w = tree.alloc(label("W"));
    tree.insert_above(a, w);
    assert_eq!(tree.parent(w), None);
    assert_eq!(tree.children(w), &[a]);
    assert_eq!(tree.depth(a), 1);
    assert_eq!(tree.depth(b), 2);
    tree.check_consistency(w);
}

#[test]
fn test_promote_substitutes_into_grandparent() {
    let mut tree = Tree::new();
    let root = tree.alloc(label("ROOT"));
    let wrapper = tree.alloc(None);
    let node = tree.alloc(label("N"));
    let kid = tree.alloc(label("K"));
    tree.add_child(root, wrapper);
    tree.add_child(wrapper, node);
    tree.add_child(node, kid);

    tree.promote(node);

    assert_eq!(tree.children(root), &[node]);
    assert_eq!(tree.parent(node), Some(root));
    assert_eq!(tree.depth(node), 1);
    assert_eq!(tree.depth(kid), 2);
    // the wrapper is out of the tree entirely
    assert_eq!(tree.parent(wrapper), None);
    tree.check_consistency(root);
}

#[test]
fn test_promote_under_fragment_root() {
    let mut tree = Tree::new();
    let wrapper = tree.alloc(None);
    let node = tree.alloc(label("N"));
    tree.add_child(wrapper, node);
    tree.promote(node);
    assert_eq!(tree.parent(node), None);
    assert_eq!(tree.depth(node), 0);
    tree.check_consistency(node);
}

#[test]
fn test_insert_above_then_promote_is_identity() {
    let mut tree = Tree::new();
    let root = tree.alloc(label("ROOT"));
    let left = tree.alloc(label("L"));
    let mid = tree.alloc(label("M"));
    let kid = tree.alloc(label("K"));
    let right = tree.alloc(label("R"));
    tree.add_child(root, left);
    tree.add_child(root, mid);
    tree.add_child(mid, kid);
    tree.add_child(root, right);

    let wrapper = tree.alloc(None);
    tree.insert_above(mid, wrapper);
    tree.promote(mid);

    // original shape and depths restored
    assert_eq!(tree.children(root), &[left, mid, right]);
    assert_eq!(tree.parent(mid), Some(root));
    assert_eq!(tree.depth(mid), 1);
    assert_eq!(tree.depth(kid), 2);
    tree.check_consistency(root);
}
