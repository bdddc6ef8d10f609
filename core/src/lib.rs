pub mod heap;
pub mod map;
pub mod trie;

pub use heap::MaxHeap;
pub use map::BucketMap;
pub use trie::PrefixTree;
