//! Shared file-tree scenario used by the integration tests.
#![allow(dead_code)]

use gentree::{ChildPolicy, FileInfo, NodeId, Tree};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Pre-order scan by exact path string.
pub fn find_file<P>(tree: &Tree<FileInfo, P>, path: &str) -> NodeId {
    tree.find_by(|info| info.has_path(path))
        .unwrap_or_else(|| panic!("{} not in tree", path))
}

pub fn create<P: Default>() -> Tree<FileInfo, P> {
    Tree::with_root(FileInfo::directory("/root"), P::default())
}

/// /a, /b {/b/x, /b/y {g, h, i}, /b/z}, /c under the root.
pub fn insert_children<P: ChildPolicy<FileInfo>>(tree: &mut Tree<FileInfo, P>) {
    let root = tree.root().unwrap();
    tree.insert(root, FileInfo::file("/a")).unwrap();
    let b = tree.insert(root, FileInfo::directory("/b")).unwrap();
    tree.insert(b, FileInfo::file("/b/x")).unwrap();
    let y = tree.insert(b, FileInfo::directory("/b/y")).unwrap();
    tree.insert(y, FileInfo::file("/b/y/g")).unwrap();
    tree.insert(y, FileInfo::file("/b/y/h")).unwrap();
    tree.insert(y, FileInfo::file("/b/y/i")).unwrap();
    tree.insert(b, FileInfo::file("/b/z")).unwrap();
    tree.insert(root, FileInfo::file("/c")).unwrap();
}

/// A replacement for /b/y: /b/y/p, /b/y/d {q, r, s}, /b/y/q {r, s}.
pub fn replacement_for_y<P: ChildPolicy<FileInfo> + Default>() -> Tree<FileInfo, P> {
    let mut sub = Tree::with_root(FileInfo::directory("/b/y"), P::default());
    let root = sub.root().unwrap();
    sub.insert(root, FileInfo::file("/b/y/p")).unwrap();
    let d = sub.insert(root, FileInfo::directory("/b/y/d")).unwrap();
    sub.insert(d, FileInfo::file("/b/y/d/q")).unwrap();
    sub.insert(d, FileInfo::file("/b/y/d/r")).unwrap();
    sub.insert(d, FileInfo::file("/b/y/d/s")).unwrap();
    let q = sub.insert(root, FileInfo::file("/b/y/q")).unwrap();
    sub.insert(q, FileInfo::file("/b/y/q/r")).unwrap();
    sub.insert(q, FileInfo::file("/b/y/q/s")).unwrap();
    sub
}

pub fn replace_subtree<P: ChildPolicy<FileInfo> + Default>(tree: &mut Tree<FileInfo, P>) -> NodeId {
    let sub = replacement_for_y::<P>();
    let y = tree.find(&FileInfo::directory("/b/y")).unwrap();
    tree.replace_subtree(y, &sub).unwrap()
}

pub fn erase_single<P: ChildPolicy<FileInfo>>(tree: &mut Tree<FileInfo, P>) {
    let r = tree.find(&FileInfo::file("/b/y/d/r")).unwrap();
    tree.erase(r).unwrap();
}

pub fn erase_children<P: ChildPolicy<FileInfo>>(tree: &mut Tree<FileInfo, P>) {
    let d = find_file(tree, "/b/y/d");
    tree.erase_children(d).unwrap();
}

pub fn replace_single<P: ChildPolicy<FileInfo>>(tree: &mut Tree<FileInfo, P>) {
    let s = find_file(tree, "/b/y/q/s");
    tree.replace_value(s, FileInfo::file("/b/y/q/t")).unwrap();
}

pub fn sort_children<P: ChildPolicy<FileInfo>>(tree: &mut Tree<FileInfo, P>) {
    let y = find_file(tree, "/b/y");
    tree.sort_children(y).unwrap();
}

pub fn sub_tree<P: ChildPolicy<FileInfo> + Default>(tree: &Tree<FileInfo, P>) -> Tree<FileInfo, P> {
    let y = find_file(tree, "/b/y");
    Tree::from_subtree(tree, y).unwrap()
}

pub fn paths<P>(tree: &Tree<FileInfo, P>) -> Vec<&str> {
    tree.values().map(FileInfo::absolute_path).collect()
}

/// Listing after running every step above, for either discipline.
pub const FINAL_LISTING: &str = "\
/root
 /a
 /b
  /b/x
  /b/y
   /b/y/d
   /b/y/p
   /b/y/q
    /b/y/q/r
    /b/y/q/t
  /b/z
 /c
";
