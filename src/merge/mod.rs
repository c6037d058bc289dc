//! Merge-Dedup Engine
//!
//! Combines any number of ascending integer sequences into a single ascending,
//! duplicate-free sequence.
//!
//! ## Variants
//! - **`dedup`**: straightforward K-way merge that scans every cursor on each step.
//!   O(total_elements * K).
//! - **`heap`**: same output, driven by a K-element min-heap over the cursors.
//!   O(total_elements * log K).
//!
//! Both functions are pure. Inputs may be empty and may carry internal duplicates;
//! they must already be sorted ascending.

pub mod dedup;
pub mod heap;

pub use dedup::merge_dedup;
pub use heap::merge_dedup_heap;
