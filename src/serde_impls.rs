//! Serialization and Deserialization for annotated trees.
//!
//! Trees are serialized as their pre-order event stream: an `Enter` event
//! carrying label and annotation for every node, a bare `Leave` event on the
//! way back up. Deserialization folds the stream back into a tree and rejects
//! unbalanced or empty streams.

use crate::{Tree, WalkEvent};
use serde::{
    de::{Error, SeqAccess, Visitor},
    Deserialize, Serialize,
};
use std::{fmt, marker::PhantomData};

#[derive(Deserialize, Serialize)]
#[serde(tag = "t", content = "c")]
enum Event<L, A> {
    Enter(L, A),
    Leave,
}

impl<L, A> Serialize for Tree<L, A>
where
    L: Serialize,
    A: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let events = self.preorder().map(|event| match event {
            WalkEvent::Enter(node) => Event::Enter(node.label(), node.annotation()),
            WalkEvent::Leave(_) => Event::Leave,
        });
        serializer.collect_seq(events)
    }
}

impl<'de, L, A> Deserialize<'de> for Tree<L, A>
where
    L: Deserialize<'de>,
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EventVisitor<L, A> {
            _marker: PhantomData<Tree<L, A>>,
        }

        impl<'de, L, A> Visitor<'de> for EventVisitor<L, A>
        where
            L: Deserialize<'de>,
            A: Deserialize<'de>,
        {
            type Value = Tree<L, A>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a list of tree events")
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut open: Vec<(A, L, Vec<Tree<L, A>>)> = Vec::new();
                let mut root = None;

                while let Some(next) = seq.next_element::<Event<L, A>>()? {
                    match next {
                        Event::Enter(label, annotation) => {
                            if root.is_some() {
                                return Err(S::Error::custom("event after the root node was closed"));
                            }
                            open.push((annotation, label, Vec::new()));
                        }
                        Event::Leave => {
                            let (annotation, label, children) = open
                                .pop()
                                .ok_or_else(|| S::Error::custom("`Leave` event without matching `Enter`"))?;
                            let node = Tree::new(annotation, label, children);
                            match open.last_mut() {
                                Some((_, _, siblings)) => siblings.push(node),
                                None => root = Some(node),
                            }
                        }
                    }
                }

                if !open.is_empty() {
                    return Err(S::Error::custom("`Enter` event without matching `Leave`"));
                }
                root.ok_or_else(|| S::Error::custom("empty event stream"))
            }
        }

        deserializer.deserialize_seq(EventVisitor { _marker: PhantomData })
    }
}
