/// Generates a typed container around one of the raw `sortx_core` buffers,
/// together with the accessors that do not depend on ordering.
#[macro_export]
macro_rules! define_sorted_wrapper {
    (
        $(#[$struct_doc:meta])*
        $vis:vis struct $wrapper_name:ident <$($wrapper_generics:ident),*> {
            $inner_vis:vis inner: $inner_type:ty,
        }
    ) => {
        $(#[$struct_doc])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug)]
        $vis struct $wrapper_name<$($wrapper_generics),*> {
            $inner_vis inner: $inner_type,
        }

        impl<$($wrapper_generics),*> $wrapper_name<$($wrapper_generics),*> {
            /// Creates an empty container.
            #[inline(always)]
            pub const fn new() -> Self {
                Self {
                    inner: <$inner_type>::new(),
                }
            }

            /// Creates an empty container with room for `cap` elements.
            #[inline(always)]
            pub fn with_capacity(cap: usize) -> Self {
                Self {
                    inner: <$inner_type>::with_capacity(cap),
                }
            }

            /// Number of stored elements, `O(1)`.
            #[inline(always)]
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            #[inline(always)]
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// Removes every element, keeping the allocation.
            #[inline(always)]
            pub fn clear(&mut self) {
                self.inner.clear();
            }
        }

        impl<$($wrapper_generics),*> Default for $wrapper_name<$($wrapper_generics),*> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
