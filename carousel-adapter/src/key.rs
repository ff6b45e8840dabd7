#[cfg(feature = "std")]
pub trait CarouselKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> CarouselKey for T {}

#[cfg(not(feature = "std"))]
pub trait CarouselKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> CarouselKey for T {}

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = std::collections::HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = alloc::collections::BTreeMap<K, usize>;
