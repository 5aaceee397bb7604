//! Chain: an ordered walk between two frames of the tree.

use crate::segment::Segment;

/// One step of a chain. A forward step goes from the parent frame to the segment tip,
/// a reversed one from the segment tip back to the parent frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainElement {
    pub segment: Segment,
    pub forward: bool,
}

/// Ordered walk from the `start` frame to the `end` frame. The chain is a plain value
/// holding copies of the segments it crosses; it stays valid even if the tree it came
/// from is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    start: String,
    end: String,
    elements: Vec<ChainElement>,
}

impl Chain {
    /// Empty chain starting at `start`. Until segments are pushed, the chain
    /// represents the identity transform.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Chain {
            start: start.into(),
            end: end.into(),
            elements: Vec::new(),
        }
    }

    /// Append a step. Segments are not checked for connectivity; appending a forward
    /// segment hanging off the current end is what makes a serial chain.
    pub fn push(&mut self, segment: Segment, forward: bool) {
        self.elements.push(ChainElement { segment, forward });
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn elements(&self) -> &[ChainElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChainElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Names of the moving joints this chain crosses, in chain order.
    pub fn joint_names(&self) -> Vec<&str> {
        self.elements
            .iter()
            .map(|e| e.segment.joint())
            .filter(|joint| !joint.is_fixed())
            .map(|joint| joint.name())
            .collect()
    }

    /// Number of moving joints this chain crosses.
    pub fn joint_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.segment.joint().is_fixed()).count()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a ChainElement;
    type IntoIter = std::slice::Iter<'a, ChainElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
