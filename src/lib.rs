//! `spantree` is a generic library for syntax trees whose nodes are annotated
//! with the source ranges they cover. The central [`Tree`] type is inspired
//! in part by the recursively-annotated terms of Swift's
//! [Doubt](https://github.com/github/semantic).
//!
//! A [`Tree<L, A>`] pairs, at every node, an annotation `A` with a label `L`
//! and an ordered sequence of children. Trees are built in one pass with
//! annotation and structure supplied together, are immutable afterwards, and
//! support shape-preserving [`map`](Tree::map) and pre-order traversal.
//!
//! The other half of the crate is [`arrange`]: given an unannotated [`Term`]
//! whose leaves carry the raw offsets of the source region that produced
//! them, plus the source text itself, `arrange` computes for every node the
//! minimal contiguous [`TextRange`] covering that node and all of its
//! descendants. Leaves keep their recorded offsets and inner nodes span from
//! the smallest child start to the largest child end. The pass is a pure
//! bottom-up fold: deterministic, allocation-only, and all-or-nothing (a
//! malformed leaf fails the whole call with [`MalformedTerm`], never with a
//! partially annotated tree).
//!
//! Both halves are plain values with no shared mutable state, so independent
//! trees can be arranged from multiple threads without synchronization.
#![forbid(unconditional_recursion, future_incompatible)]
#![deny(unsafe_code)]

mod arrange;
pub mod tree;

#[cfg(feature = "serde1")]
mod serde_impls;

// Reexport types for working with strings.
pub use text_size::{TextLen, TextRange, TextSize};

pub use crate::{
    arrange::{arrange, MalformedTerm, RawSpan, Term},
    tree::{Children, Descendants, Preorder, Tree, WalkEvent},
};
