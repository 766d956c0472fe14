//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Cst, NodeId};

impl Cst {
    pub(crate) fn ensure_node(&self, id: NodeId) {
        if id.as_u32() as usize >= self.len() {
            Self::unknown_node(id);
        }
    }

    pub(crate) fn unknown_node(id: NodeId) -> ! {
        panic!(
            "Cst: node {} not found \
             (NodeId must come from the same tree)",
            id.as_u32()
        )
    }

    pub(crate) fn leaf_parent(id: NodeId) -> ! {
        panic!(
            "Cst: node {} is a leaf and cannot take children \
             (parser frames must reference interior nodes)",
            id.as_u32()
        )
    }
}
