#![allow(unused)]

use quickcheck::{Arbitrary, Gen};
use spantree::{RawSpan, Term, TextRange, TextSize, Tree};

const LEAF_WORDS: &[&str] = &["add", "mul", "cons", "x", "y", "42", "0", "nil"];
const BRANCH_LABELS: &[&str] = &["call", "list", "pair", "block"];

/// A randomly generated unannotated term together with the source text it was
/// cut from. Leaf offsets are assigned while the source is written, so every
/// generated term is well formed by construction.
#[derive(Debug, Clone)]
pub struct UnannotatedTerm {
    pub term:   Term<String>,
    pub source: String,
}

/// An [`UnannotatedTerm`] arranged over its source: the term with every node
/// annotated by the range it spans.
#[derive(Debug, Clone)]
pub struct RangedTerm {
    pub term:   Tree<String, TextRange>,
    pub source: String,
}

fn gen_term(g: &mut Gen, depth: usize, source: &mut String) -> Term<String> {
    let make_leaf = depth == 0 || u8::arbitrary(g) % 3 == 0;
    if make_leaf {
        let word = *g.choose(LEAF_WORDS).unwrap();
        let start = TextSize::of(source.as_str());
        source.push_str(word);
        let end = TextSize::of(source.as_str());
        source.push(' ');
        Term::leaf(word.to_string(), RawSpan::new(start, end))
    } else {
        let label = *g.choose(BRANCH_LABELS).unwrap();
        let arity = usize::from(u8::arbitrary(g) % 3) + 1;
        let children = (0..arity).map(|_| gen_term(g, depth - 1, source)).collect();
        Term::branch(label.to_string(), children)
    }
}

impl Arbitrary for UnannotatedTerm {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut source = String::new();
        let term = gen_term(g, 4, &mut source);
        UnannotatedTerm { term, source }
    }
}

impl Arbitrary for RangedTerm {
    fn arbitrary(g: &mut Gen) -> Self {
        let UnannotatedTerm { term, source } = UnannotatedTerm::arbitrary(g);
        let term = term.arranged(&source).expect("generated terms are well formed");
        RangedTerm { term, source }
    }
}

/// Labels and arities in pre-order, the shape shared by terms and trees.
pub fn term_shape(term: &Term<String>, out: &mut Vec<(String, usize)>) {
    match term {
        Term::Leaf { label, .. } => out.push((label.clone(), 0)),
        Term::Branch { label, children } => {
            out.push((label.clone(), children.len()));
            for child in children {
                term_shape(child, out);
            }
        }
    }
}

pub fn tree_shape<A>(tree: &Tree<String, A>) -> Vec<(String, usize)> {
    tree.descendants()
        .map(|node| (node.label().clone(), node.children().len()))
        .collect()
}

/// The spans recorded on the term's leaves, in pre-order.
pub fn leaf_spans(term: &Term<String>, out: &mut Vec<RawSpan>) {
    match term {
        Term::Leaf { span, .. } => out.push(*span),
        Term::Branch { children, .. } => {
            for child in children {
                leaf_spans(child, out);
            }
        }
    }
}
