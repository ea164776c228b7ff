// Test-only helpers shared by unit tests across modules.

/// Implements `Document` for a struct by forwarding to a `GenericDocument` field.
///
/// `put = method` routes writes through an inherent `fn(&mut self, &str, FieldValue)`.
macro_rules! forward_document {
    (@read $field:ident) => {
        fn get(&self, key: &str) -> Option<&$crate::core::doc::FieldValue> {
            $crate::core::doc::Document::get(&self.$field, key)
        }
        fn keys(&self) -> Vec<String> {
            $crate::core::doc::Document::keys(&self.$field)
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
    ($ty:ty => $field:ident) => {
        impl $crate::core::doc::Document for $ty {
            fn put(&mut self, key: &str, value: $crate::core::doc::FieldValue) {
                $crate::core::doc::Document::put(&mut self.$field, key, value);
            }
            forward_document!(@read $field);
        }
    };
    ($ty:ty => $field:ident, put = $put:ident) => {
        impl $crate::core::doc::Document for $ty {
            fn put(&mut self, key: &str, value: $crate::core::doc::FieldValue) {
                self.$put(key, value);
            }
            forward_document!(@read $field);
        }
    };
}
