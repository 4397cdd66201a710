//! Validity gateway: engine predicates over aliased blocks.
//!
//! Each predicate reads the block by value and asks the process-wide
//! engine. Nothing is allocated or written, and `false` is the only failure
//! signal. The engine must be ready; see [`crate::engine::engine`].

use planar_arena::Block;
use planar_core::{RawRot, RawVec2};

use crate::engine::engine;

/// Whether the engine considers `value` a valid float.
pub fn is_valid_float(value: f32) -> bool {
    engine().is_valid_float(value)
}

/// Whether the engine considers the vector in `block` valid.
pub fn is_valid_vec2(block: &Block<'_, RawVec2>) -> bool {
    engine().is_valid_vec2(block.get())
}

/// Whether the engine considers the rotation in `block` valid.
pub fn is_valid_rotation(block: &Block<'_, RawRot>) -> bool {
    engine().is_valid_rotation(block.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ensure_ready;
    use planar_core::RawTransform;

    #[test]
    fn predicates_read_blocks() {
        ensure_ready();
        assert!(is_valid_float(3.0));
        assert!(!is_valid_float(f32::NAN));
        assert!(is_valid_vec2(&Block::auto(RawVec2::new(1.0, 1.0))));
        assert!(!is_valid_vec2(&Block::auto(RawVec2::new(f32::INFINITY, 1.0))));
        assert!(!is_valid_rotation(&Block::auto(RawRot::new(2.0, 2.0))));
    }

    #[test]
    fn predicates_see_view_writes() {
        ensure_ready();
        let transform = Block::auto(RawTransform::IDENTITY);
        let mut q = transform.field(RawTransform::ROTATION);
        assert!(is_valid_rotation(&q));
        q.set(RawRot::new(0.0, 0.0));
        assert!(!is_valid_rotation(&transform.field(RawTransform::ROTATION)));
    }
}
