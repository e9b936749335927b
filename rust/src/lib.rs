//! Generic in-memory hierarchical container.
//!
//! A [`Tree`] owns its nodes in a generation-checked arena and hands out
//! [`NodeId`] handles. A sibling policy picks the structural discipline:
//!
//! - [`OrderedTree`]: children keep insertion order and may repeat; `find` is
//!   a pre-order scan; `sort_by` reorders a sibling range.
//! - [`UniqueTree`]: children are unique and kept in key order; inserting an
//!   equal key fails with [`TreeError::DuplicateKey`]; `find` binary-searches
//!   each level it visits; `sort_by` is an accepted no-op.
//! - [`PathTree`]: a [`UniqueTree`] for keys that nest like paths, whose
//!   `find` descends a single branch.
//!
//! All of them share the same traversals: pre-order, children, leaves, ancestors.
//!
//! ```
//! use gentree::{FileInfo, PathTree};
//!
//! let mut tree = PathTree::new(FileInfo::directory("/root"));
//! let root = tree.root().unwrap();
//! let b = tree.insert(root, FileInfo::directory("/b")).unwrap();
//! tree.insert(root, FileInfo::file("/a")).unwrap();
//! let y = tree.insert(b, FileInfo::directory("/b/y")).unwrap();
//!
//! assert_eq!(tree.find(&FileInfo::file("/b/y")), Some(y));
//! assert!(tree.insert(root, FileInfo::file("/a")).is_err());
//! assert_eq!(tree.render().to_string(), "/root\n /a\n /b\n  /b/y\n");
//! ```

mod compact_arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod macros;
mod node;
mod path;
mod policy;
mod render;
mod sort_operations;
mod tree_structure;
mod types;
mod validation;

pub use compact_arena::{ArenaStats, CompactArena};
pub use construction::{InitResult, DEFAULT_CAPACITY};
pub use error::{FindResult, ModifyResult, TreeError, TreeResult, TreeResultExt};
pub use iteration::{
    AncestorIterator, AncestorValueIterator, ChildIterator, ChildValueIterator, LeafIterator,
    LeafValueIterator, PreOrderIterator, PreOrderValueIterator,
};
pub use path::FileInfo;
pub use policy::{
    ByKey, ChildPolicy, InsertionOrder, InsertionOrderBy, KeyOrder, NaturalOrder, PathOrder, Siblings,
};
pub use render::Rendered;
pub use types::{Descent, NodeId, OrderedTree, PathTree, Placement, Tree, UniqueTree};
