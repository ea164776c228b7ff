// Shared fixtures for integration tests; included with `#[macro_use] mod support;`.

/// Implements `Document` for a struct by forwarding to a `GenericDocument` field.
///
/// `put = method` routes writes through an inherent `fn(&mut self, &str, FieldValue)`.
macro_rules! forward_document {
    (@read $field:ident) => {
        fn get(&self, key: &str) -> Option<&docbind::api::FieldValue> {
            docbind::api::Document::get(&self.$field, key)
        }
        fn keys(&self) -> Vec<String> {
            docbind::api::Document::keys(&self.$field)
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
    ($ty:ty => $field:ident) => {
        impl docbind::api::Document for $ty {
            fn put(&mut self, key: &str, value: docbind::api::FieldValue) {
                docbind::api::Document::put(&mut self.$field, key, value);
            }
            forward_document!(@read $field);
        }
    };
    ($ty:ty => $field:ident, put = $put:ident) => {
        impl docbind::api::Document for $ty {
            fn put(&mut self, key: &str, value: docbind::api::FieldValue) {
                self.$put(key, value);
            }
            forward_document!(@read $field);
        }
    };
}
