//! Internal macros.

/// Generate a values-only adapter for each traversal iterator.
///
/// For `Kind` this expects an iterator `KindIterator<'a, T>` yielding
/// `(NodeId, &'a T)` and emits `KindValueIterator<'a, T>` plus a `values()`
/// method on `KindIterator`.
macro_rules! value_iterators {
    ($($kind:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Iterator over the values yielded by [`" $kind "Iterator`]."]
                pub struct [<$kind ValueIterator>]<'a, T> {
                    inner: [<$kind Iterator>]<'a, T>,
                }

                impl<'a, T> [<$kind Iterator>]<'a, T> {
                    /// Drop the handles and yield values only.
                    pub fn values(self) -> [<$kind ValueIterator>]<'a, T> {
                        [<$kind ValueIterator>] { inner: self }
                    }
                }

                impl<'a, T> Iterator for [<$kind ValueIterator>]<'a, T> {
                    type Item = &'a T;

                    fn next(&mut self) -> Option<Self::Item> {
                        self.inner.next().map(|(_, value)| value)
                    }
                }

                impl<'a, T> std::iter::FusedIterator for [<$kind ValueIterator>]<'a, T> {}
            )+
        }
    };
}

pub(crate) use value_iterators;
