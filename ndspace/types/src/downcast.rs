//! Helpers for recovering a concrete type from a type-erased runtime object.

use std::any::Any;

/// Returns true if `value` is a `U`.
#[inline]
pub fn dynamic_is<U: Any>(value: &dyn Any) -> bool {
    value.is::<U>()
}

/// Debug-asserts that `value` is a `U`. Compiles to nothing in release builds.
#[inline]
pub fn assert_is<U: Any>(value: &dyn Any) {
    debug_assert!(
        dynamic_is::<U>(value),
        "expected a value of type {}",
        std::any::type_name::<U>()
    );
}

/// Cast `value` to the concrete type the caller knows it has.
///
/// # Panics
/// Panics if `value` is not a `U`.
#[inline]
pub fn cast<U: Any>(value: &dyn Any) -> &U {
    match value.downcast_ref::<U>() {
        Some(value) => value,
        None => panic!("cannot cast to {}", std::any::type_name::<U>()),
    }
}

/// Mutable version of [`cast`].
///
/// # Panics
/// Panics if `value` is not a `U`.
#[inline]
pub fn cast_mut<U: Any>(value: &mut dyn Any) -> &mut U {
    match value.downcast_mut::<U>() {
        Some(value) => value,
        None => panic!("cannot cast to {}", std::any::type_name::<U>()),
    }
}
