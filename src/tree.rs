//! The annotated tree itself.
//! [`Tree`] is the crate's central type; [`arrange`](crate::arrange) from the
//! [`arrange` module](crate::arrange) is the main way of producing one.

mod iter;
mod node;

pub use self::{
    iter::{Children, Descendants, Preorder, WalkEvent},
    node::Tree,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sexpr() -> Tree<&'static str, u32> {
        Tree::new(
            0,
            "call",
            vec![
                Tree::leaf(1, "add"),
                Tree::new(2, "args", vec![Tree::leaf(3, "1"), Tree::leaf(4, "2")]),
            ],
        )
    }

    #[test]
    fn assert_send_sync() {
        fn f<T: Send + Sync>() {}
        f::<Tree<String, u32>>();
        f::<Children<'static, String, u32>>();
        f::<Preorder<'static, String, u32>>();
    }

    #[test]
    fn leaves_have_no_children() {
        let leaf = Tree::leaf((), "word");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.children().len(), 0);
        assert!(!sexpr().is_leaf());
    }

    #[test]
    fn children_iterate_in_stored_order() {
        let tree = sexpr();
        let labels: Vec<_> = tree.children().map(|child| *child.label()).collect();
        assert_eq!(labels, ["add", "args"]);
        let reversed: Vec<_> = tree.children().rev().map(|child| *child.label()).collect();
        assert_eq!(reversed, ["args", "add"]);
    }

    #[test]
    fn preorder_enters_node_before_children() {
        let tree = sexpr();
        let entered: Vec<_> = tree.descendants().map(|node| *node.annotation()).collect();
        assert_eq!(entered, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn preorder_is_restartable() {
        let tree = sexpr();
        let first: Vec<_> = tree.descendants().map(|node| *node.label()).collect();
        let second: Vec<_> = tree.descendants().map(|node| *node.label()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn preorder_balances_enter_and_leave() {
        let tree = sexpr();
        let mut depth = 0_i32;
        for event in tree.preorder() {
            match event {
                WalkEvent::Enter(_) => depth += 1,
                WalkEvent::Leave(_) => depth -= 1,
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn map_preserves_shape_and_labels() {
        let tree = sexpr();
        let shape: Vec<_> = tree.descendants().map(|n| (*n.label(), n.children().len())).collect();
        let mapped = tree.map(|n| n * 10);
        let mapped_shape: Vec<_> = mapped.descendants().map(|n| (*n.label(), n.children().len())).collect();
        assert_eq!(shape, mapped_shape);
        assert_eq!(*mapped.annotation(), 0);
        assert_eq!(*mapped.children().last().unwrap().annotation(), 20);
    }

    #[test]
    fn map_identity() {
        let tree = sexpr();
        assert_eq!(tree.clone().map(|a| a), tree);
    }

    #[test]
    fn map_composes() {
        let f = |a: u32| a + 1;
        let g = |a: u32| a * 2;
        let tree = sexpr();
        assert_eq!(tree.clone().map(f).map(g), tree.map(|a| g(f(a))));
    }
}
