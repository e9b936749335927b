mod common;

use common::*;
use gentree::{FileInfo, OrderedTree, PathTree, TreeError, UniqueTree};

macro_rules! file_tree_suite {
    ($($name:ident => $policy:ty),+ $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_ $name _two_builds_stay_equal>]() {
                    init_logging();
                    let mut tree1 = create::<$policy>();
                    let mut tree2 = create::<$policy>();
                    assert_eq!(tree1, tree2);

                    insert_children(&mut tree1);
                    insert_children(&mut tree2);
                    assert_eq!(tree1, tree2);

                    replace_subtree(&mut tree1);
                    replace_subtree(&mut tree2);
                    assert_eq!(tree1, tree2);

                    erase_single(&mut tree1);
                    erase_single(&mut tree2);
                    assert_eq!(tree1, tree2);

                    erase_children(&mut tree1);
                    erase_children(&mut tree2);
                    assert_eq!(tree1, tree2);

                    replace_single(&mut tree1);
                    replace_single(&mut tree2);
                    assert_eq!(tree1, tree2);

                    sort_children(&mut tree1);
                    sort_children(&mut tree2);
                    assert_eq!(tree1, tree2);

                    let sub1 = sub_tree(&tree1);
                    let sub2 = sub_tree(&tree2);
                    assert_eq!(sub1, sub2);

                    assert_eq!(tree1.render().to_string(), FINAL_LISTING);
                    assert!(tree1.check_invariants_detailed().is_ok());
                }

                #[test]
                fn [<test_ $name _pre_order_visits_each_node_once>]() {
                    let mut tree = create::<$policy>();
                    insert_children(&mut tree);
                    let handles: Vec<_> = tree.handles().collect();
                    assert_eq!(handles.len(), tree.len());
                    assert_eq!(handles.len(), 10);

                    let mut seen = std::collections::HashSet::new();
                    for (index, handle) in handles.iter().enumerate() {
                        assert!(seen.insert(*handle));
                        if let Some(parent) = tree.parent(*handle).unwrap() {
                            let parent_index = handles.iter().position(|h| *h == parent).unwrap();
                            assert!(parent_index < index);
                        }
                    }
                }

                #[test]
                fn [<test_ $name _erase_removes_subtree>]() {
                    let mut tree = create::<$policy>();
                    insert_children(&mut tree);
                    let b = find_file(&tree, "/b");
                    let root = tree.root().unwrap();
                    let below_b: Vec<_> = tree.pre_order_from(b).unwrap().map(|(id, _)| id).collect();

                    tree.erase(b).unwrap();
                    assert_eq!(tree.child_count(root).unwrap(), 2);
                    assert!(tree.handles().all(|h| !below_b.contains(&h)));
                    for stale in below_b {
                        assert_eq!(tree.value(stale), Err(TreeError::InvalidHandle(stale)));
                    }
                    assert_eq!(paths(&tree), ["/root", "/a", "/c"]);
                }

                #[test]
                fn [<test_ $name _replace_preserves_position>]() {
                    let mut tree = create::<$policy>();
                    insert_children(&mut tree);
                    let b = find_file(&tree, "/b");
                    let y = find_file(&tree, "/b/y");
                    let index = tree.position(y).unwrap();
                    let count = tree.child_count(b).unwrap();

                    let new_y = replace_subtree(&mut tree);
                    assert_eq!(tree.position(new_y), Some(index));
                    assert_eq!(tree.child_count(b).unwrap(), count);
                    assert_eq!(tree.parent(new_y).unwrap(), Some(b));
                    assert!(!tree.contains(y));
                    assert_eq!(tree.find_item(&FileInfo::file("/b/y/g")), Err(TreeError::NotFound));
                }

                #[test]
                fn [<test_ $name _subtree_round_trip>]() {
                    let mut tree = create::<$policy>();
                    insert_children(&mut tree);
                    replace_subtree(&mut tree);
                    let y = find_file(&tree, "/b/y");

                    let sub = sub_tree(&tree);
                    let direct: Vec<_> = tree.pre_order_from(y).unwrap().values().collect();
                    assert_eq!(sub.len(), direct.len());
                    assert!(sub.values().eq(direct.into_iter()));
                }

                #[test]
                fn [<test_ $name _foreign_handles_rejected>]() {
                    let mut tree1 = create::<$policy>();
                    let tree2 = create::<$policy>();
                    let foreign = tree2.root().unwrap();
                    assert_eq!(
                        tree1.insert(foreign, FileInfo::file("/x")),
                        Err(TreeError::InvalidHandle(foreign))
                    );
                    assert_eq!(tree1.len(), 1);
                }
            )+
        }
    };
}

file_tree_suite! {
    ordered => gentree::InsertionOrder,
    unique => gentree::NaturalOrder,
    path => gentree::PathOrder,
}

#[test]
fn test_ordered_keeps_insertion_order_until_sorted() {
    let mut tree: OrderedTree<FileInfo> = create();
    insert_children(&mut tree);
    replace_subtree(&mut tree);
    let y = find_file(&tree, "/b/y");
    let before: Vec<_> = tree
        .children_of(y)
        .unwrap()
        .values()
        .map(FileInfo::absolute_path)
        .collect();
    assert_eq!(before, ["/b/y/p", "/b/y/d", "/b/y/q"]);

    tree.sort_children(y).unwrap();
    let after: Vec<_> = tree
        .children_of(y)
        .unwrap()
        .values()
        .map(FileInfo::absolute_path)
        .collect();
    assert_eq!(after, ["/b/y/d", "/b/y/p", "/b/y/q"]);
}

#[test]
fn test_ordered_accepts_duplicate_paths() {
    let mut tree: OrderedTree<FileInfo> = create();
    let root = tree.root().unwrap();
    tree.insert(root, FileInfo::file("/a")).unwrap();
    tree.insert(root, FileInfo::file("/a")).unwrap();
    assert_eq!(tree.child_count(root).unwrap(), 2);
}

#[test]
fn test_unique_rejects_duplicate_and_leaves_tree_unchanged() {
    init_logging();
    let mut tree: UniqueTree<FileInfo> = create();
    insert_children(&mut tree);
    let b = find_file(&tree, "/b");
    let before = tree.render().to_string();

    assert_eq!(
        tree.insert(b, FileInfo::directory("/b/y")),
        Err(TreeError::DuplicateKey { parent: b })
    );
    assert_eq!(tree.render().to_string(), before);
    assert_eq!(tree.len(), 10);
}

macro_rules! deep_find_test {
    ($name:ident, $tree:ty) => {
        #[test]
        fn $name() {
            let mut tree: $tree = create();
            insert_children(&mut tree);
            let b = find_file(&tree, "/b");

            let y = tree.find(&FileInfo::directory("/b/y")).unwrap();
            assert_eq!(tree.parent(y).unwrap(), Some(b));
            assert!(tree.value(y).unwrap().is_directory());

            assert_eq!(tree.find(&FileInfo::file("/b/y/q")), None);
            assert_eq!(tree.find_item(&FileInfo::file("/b/y/q")), Err(TreeError::NotFound));
            assert_eq!(tree.find(&FileInfo::file("/b/y/h")), Some(find_file(&tree, "/b/y/h")));
            assert_eq!(tree.find(&FileInfo::file("/d")), None);
        }
    };
}

deep_find_test!(test_unique_deep_find, UniqueTree<FileInfo>);
deep_find_test!(test_path_deep_find, PathTree<FileInfo>);

#[test]
fn test_unique_sort_leaves_pre_order_unchanged() {
    let mut tree: UniqueTree<FileInfo> = create();
    insert_children(&mut tree);
    let before = paths(&tree).join(",");

    let root = tree.root().unwrap();
    let b = find_file(&tree, "/b");
    let first = tree.children(b).unwrap()[0];
    let last = *tree.children(b).unwrap().last().unwrap();
    tree.sort_children_by(root, |x, y| y.cmp(x)).unwrap();
    tree.sort_by(first, Some(last), |x, y| y.cmp(x)).unwrap();

    assert_eq!(paths(&tree).join(","), before);
}

#[test]
fn test_unique_subtree_replace_with_colliding_root() {
    let mut tree: UniqueTree<FileInfo> = create();
    insert_children(&mut tree);
    let y = find_file(&tree, "/b/y");
    let before = tree.render().to_string();

    let clash: UniqueTree<FileInfo> = UniqueTree::new(FileInfo::file("/b/z"));
    assert!(tree.replace_subtree(y, &clash).unwrap_err().is_duplicate_key());
    assert_eq!(tree.render().to_string(), before);
    assert!(tree.contains(y));
}
