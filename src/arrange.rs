//! Bottom-up source-range annotation.
//!
//! [`arrange`] consumes an unannotated [`Term`] together with the source text
//! it was derived from and produces a [`Tree`] that carries, at every node,
//! the minimal contiguous [`TextRange`] covering that node and all of its
//! descendants.

use text_size::{TextLen, TextRange, TextSize};
use thiserror::Error;

use crate::Tree;

/// Raw, unvalidated offsets into a source text, as recorded on a leaf by a
/// parser or a test generator.
///
/// `RawSpan` deliberately does not enforce `start <= end` so that whatever
/// produced the term cannot crash the annotation pass; [`arrange`] validates
/// the offsets and reports bad ones as [`MalformedTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawSpan {
    pub start: TextSize,
    pub end:   TextSize,
}

impl RawSpan {
    /// Records a pair of offsets, without validation.
    #[inline]
    pub fn new<S: Into<TextSize>, E: Into<TextSize>>(start: S, end: E) -> Self {
        RawSpan {
            start: start.into(),
            end:   end.into(),
        }
    }

    /// Checks the offsets against the length of the associated source text.
    fn check(self, source_len: TextSize) -> Result<TextRange, MalformedTerm> {
        if self.end < self.start {
            return Err(MalformedTerm::InvertedSpan {
                start: self.start,
                end:   self.end,
            });
        }
        if self.end > source_len {
            return Err(MalformedTerm::OutOfBounds {
                end: self.end,
                len: source_len,
            });
        }
        Ok(TextRange::new(self.start, self.end))
    }
}

impl From<TextRange> for RawSpan {
    #[inline]
    fn from(range: TextRange) -> Self {
        RawSpan {
            start: range.start(),
            end:   range.end(),
        }
    }
}

/// A term without per-node annotation, the raw input to [`arrange`].
///
/// A `Term` has the same shape as a [`Tree`], but only its leaves carry
/// position metadata: each [`Leaf`](Term::Leaf) records the raw offsets of the
/// source region that produced it, while a [`Branch`](Term::Branch) carries
/// nothing but its label and children. Where that metadata comes from is the
/// producer's business (parser output, or synthesized alongside the source by
/// a test generator); [`arrange`] only requires that it is present and within
/// bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term<L> {
    /// A childless node covering the source region `span`.
    Leaf { label: L, span: RawSpan },
    /// An inner node. Its extent is recovered from its children, so a branch
    /// without children is malformed.
    Branch { label: L, children: Vec<Term<L>> },
}

impl<L> Term<L> {
    /// Creates a leaf covering `span`.
    #[inline]
    pub fn leaf<S: Into<RawSpan>>(label: L, span: S) -> Self {
        Term::Leaf {
            label,
            span: span.into(),
        }
    }

    /// Creates an inner node over `children`.
    #[inline]
    pub fn branch(label: L, children: Vec<Term<L>>) -> Self {
        Term::Branch { label, children }
    }

    /// The syntactic tag of this node.
    #[inline]
    pub fn label(&self) -> &L {
        match self {
            Term::Leaf { label, .. } => label,
            Term::Branch { label, .. } => label,
        }
    }

    /// Annotates every node of this term with the source range it covers.
    /// Method form of [`arrange`].
    #[inline]
    pub fn arranged(self, source: &str) -> Result<Tree<L, TextRange>, MalformedTerm> {
        arrange(self, source)
    }
}

/// The ways a [`Term`] can fail to be arranged over a source text.
///
/// Detected during the bottom-up fold and surfaced immediately; [`arrange`]
/// never returns a partially annotated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedTerm {
    /// A node has neither children nor recorded source offsets, so no span
    /// can be recovered for it.
    #[error("node has no children and no source position")]
    MissingPosition,
    /// A leaf recorded offsets with `end < start`.
    #[error("leaf span is inverted: start {start:?} > end {end:?}")]
    InvertedSpan { start: TextSize, end: TextSize },
    /// A leaf's recorded offsets reach past the end of the source text.
    #[error("leaf span ends at {end:?}, past the end of the source (length {len:?})")]
    OutOfBounds { end: TextSize, len: TextSize },
}

/// Annotates every node of `term` with the minimal contiguous range of
/// `source` covering that node and all of its descendants.
///
/// Leaf ranges are the leaves' own recorded offsets, validated against
/// `source` but otherwise taken verbatim. The range of an inner node is the
/// smallest range containing all of its children's ranges, computed
/// bottom-up. The output tree has exactly the shape of the input term: same
/// labels, same arity, same child order.
///
/// The computation is deterministic and has no side effects beyond
/// allocating the result; arranging the same term over the same source twice
/// yields identical trees.
///
/// # Errors
///
/// Fails with [`MalformedTerm`] if a node has neither children nor offsets,
/// if recorded offsets are inverted, or if they fall outside `source`. On
/// error no partial tree is returned.
///
/// # Example
///
/// ```
/// use spantree::{arrange, RawSpan, Term, TextRange};
///
/// let source = "(add 1 2)";
/// let term = Term::branch("call", vec![
///     Term::leaf("add", RawSpan::new(1_u32, 4_u32)),
///     Term::leaf("1", RawSpan::new(5_u32, 6_u32)),
///     Term::leaf("2", RawSpan::new(7_u32, 8_u32)),
/// ]);
/// let tree = arrange(term, source)?;
/// assert_eq!(*tree.annotation(), TextRange::new(1.into(), 8.into()));
/// # Ok::<(), spantree::MalformedTerm>(())
/// ```
pub fn arrange<L>(term: Term<L>, source: &str) -> Result<Tree<L, TextRange>, MalformedTerm> {
    arrange_node(term, source.text_len())
}

fn arrange_node<L>(term: Term<L>, source_len: TextSize) -> Result<Tree<L, TextRange>, MalformedTerm> {
    match term {
        Term::Leaf { label, span } => Ok(Tree::leaf(span.check(source_len)?, label)),
        Term::Branch { label, children } => {
            let children = children
                .into_iter()
                .map(|child| arrange_node(child, source_len))
                .collect::<Result<Vec<_>, _>>()?;
            let range = enclosing_range(&children)?;
            Ok(Tree::new(range, label, children))
        }
    }
}

/// The smallest range containing every child's range: the minimum of the
/// starts to the maximum of the ends.
fn enclosing_range<L>(children: &[Tree<L, TextRange>]) -> Result<TextRange, MalformedTerm> {
    let (first, rest) = match children.split_first() {
        Some(split) => split,
        None => return Err(MalformedTerm::MissingPosition),
    };
    let mut start = first.annotation().start();
    let mut end = first.annotation().end();
    for child in rest {
        start = start.min(child.annotation().start());
        end = end.max(child.annotation().end());
    }
    Ok(TextRange::new(start, end))
}
