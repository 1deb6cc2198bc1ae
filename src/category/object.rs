// Copyright 2025 Cowboy AI, LLC.

//! Objects of a category
//!
//! An object is a named marker for a type. The type parameter `T` is the
//! carrier of values that morphisms out of this object accept. Identity for
//! composition purposes is the name alone.

use std::fmt;
use std::marker::PhantomData;

/// A named object whose values are carried by `T`
pub struct Object<T> {
    name: String,
    _carrier: PhantomData<fn() -> T>,
}

impl<T> Object<T> {
    /// Create a new object, storing the name verbatim
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _carrier: PhantomData,
        }
    }

    /// Name identifying this object
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `other` names the same categorical object
    ///
    /// Carrier types are ignored; two separately constructed objects with
    /// the same name are the same object.
    pub fn same_as<U>(&self, other: &Object<U>) -> bool {
        self.name == other.name
    }
}

impl<T> Clone for Object<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> PartialEq for Object<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Object<T> {}

impl<T> fmt::Debug for Object<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("name", &self.name).finish()
    }
}

impl<T> fmt::Display for Object<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ob({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_name_verbatim() {
        let obj = Object::<i64>::new("  Int ");
        assert_eq!(obj.name(), "  Int ");
    }

    #[test]
    fn test_display_matches_repr() {
        let obj = Object::<String>::new("String");
        assert_eq!(obj.to_string(), "Ob(String)");
    }

    #[test]
    fn test_same_name_is_same_object() {
        let a = Object::<i32>::new("Int");
        let b = Object::<i32>::new("Int");
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_ignores_carrier() {
        let int = Object::<i32>::new("Number");
        let float = Object::<f64>::new("Number");
        assert!(int.same_as(&float));
        assert!(!int.same_as(&Object::<f64>::new("Real")));
    }

    #[test]
    fn test_objects_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Object<std::rc::Rc<u8>>>();
    }
}
