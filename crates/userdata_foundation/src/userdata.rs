//! Non-owning pointers to caller data.
//!
//! A [`UserData`] is what a store associates with a [`Handle`](crate::Handle).
//! Stores never read, copy, or free the pointee: they hand back the exact
//! pointer they were given. Keeping the pointee alive (and not moving it) for
//! as long as any store may return it is the caller's job.

use std::fmt;
use std::ptr::NonNull;

/// Type-erased, non-null, non-owning pointer to caller data.
///
/// Pointer-sized: `Option<UserData>` fits in a single machine word, which is
/// what a host's native per-window slot holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct UserData(NonNull<()>);

impl UserData {
    /// Erases a mutable reference into a userdata pointer.
    ///
    /// The borrow ends immediately; the returned pointer carries no lifetime.
    #[must_use]
    pub fn from_mut<T>(value: &mut T) -> Self {
        Self(NonNull::from(value).cast())
    }

    /// Erases a shared reference into a userdata pointer.
    ///
    /// Use this for interior-mutable data such as `Cell<T>`, which can be
    /// updated through the pointer while the caller still reads it.
    #[must_use]
    pub fn from_ref<T>(value: &T) -> Self {
        Self(NonNull::from(value).cast())
    }

    /// Wraps a raw pointer, returning `None` for null.
    #[must_use]
    pub fn from_raw(ptr: *mut ()) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    /// Returns the raw pointer.
    #[must_use]
    pub fn as_ptr(self) -> *mut () {
        self.0.as_ptr()
    }

    /// Returns the pointer cast to `T`.
    #[must_use]
    pub fn cast<T>(self) -> NonNull<T> {
        self.0.cast()
    }

    /// Returns the address of the pointee.
    #[must_use]
    pub fn addr(self) -> usize {
        self.0.as_ptr() as usize
    }

    /// Reborrows the pointee as `&mut T`.
    ///
    /// # Safety
    ///
    /// The pointer must have been created from a `&mut T` (same `T`) whose
    /// referent is still alive and has not moved, and no other reference to
    /// that referent may be live for `'a`.
    #[must_use]
    pub unsafe fn as_mut<'a, T>(self) -> &'a mut T {
        // SAFETY: upheld by the caller.
        unsafe { self.0.cast::<T>().as_mut() }
    }

    /// Reborrows the pointee as `&T`.
    ///
    /// # Safety
    ///
    /// The pointer must have been created from a reference to a `T` that is
    /// still alive and has not moved, and no `&mut T` to it may be live for
    /// `'a`.
    #[must_use]
    pub unsafe fn as_ref<'a, T>(self) -> &'a T {
        // SAFETY: upheld by the caller.
        unsafe { self.0.cast::<T>().as_ref() }
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserData({:p})", self.0)
    }
}

impl<T> From<&mut T> for UserData {
    fn from(value: &mut T) -> Self {
        Self::from_mut(value)
    }
}
