//! Purpose: Exercise the JSON decoding collaborator end to end against real resolvers.
//! Exports: Integration tests only.
//! Role: Verify typed subdocuments land where bindings and layouts say they should.
//! Invariants: Decoding with a broken binding fails as a whole; no partial tree is returned.

#[macro_use]
mod support;

use docbind::api::{
    DescribeFields, DocType, Document, DocumentDecoder, ErrorKind, FieldLayout, FieldPath,
    FieldValue, GenericDocument, PathTypeResolver,
};
use serde_json::json;

#[derive(Debug, Default)]
struct Order {
    id: Option<String>,
    rest: GenericDocument,
}

#[derive(Debug, Default)]
struct Address {
    zip: Option<Box<dyn Document>>,
    rest: GenericDocument,
}

impl Order {
    fn put_field(&mut self, key: &str, value: FieldValue) {
        match key {
            "id" => self.id = value.as_str().map(str::to_string),
            _ => self.rest.put(key, value),
        }
    }
}

impl Address {
    fn put_field(&mut self, key: &str, value: FieldValue) {
        match (key, value) {
            ("zip", FieldValue::Document(doc)) => self.zip = Some(doc),
            (key, value) => self.rest.put(key, value),
        }
    }
}

forward_document!(Order => rest, put = put_field);
forward_document!(Address => rest, put = put_field);

impl DescribeFields for Order {
    fn field_layout() -> FieldLayout {
        FieldLayout::new().field("billingAddress", DocType::of::<Address>())
    }
}

#[test]
fn bound_paths_decode_into_typed_documents() {
    let resolver = PathTypeResolver::new(
        DocType::of::<Order>(),
        [("shippingAddress", DocType::of::<Address>())],
    );
    let doc = DocumentDecoder::new(&resolver)
        .decode_value(&json!({
            "id": "o-1",
            "shippingAddress": {"city": "Porto", "zip": {"plus4": "1"}},
        }))
        .expect("decode");

    let order = doc.downcast_ref::<Order>().expect("order");
    assert_eq!(order.id.as_deref(), Some("o-1"));

    let address = order
        .get("shippingAddress")
        .and_then(FieldValue::as_document)
        .and_then(|doc| doc.downcast_ref::<Address>())
        .expect("address");
    assert_eq!(
        address.get("city").and_then(FieldValue::as_str),
        Some("Porto")
    );
    let zip = address.zip.as_deref().expect("zip");
    assert!(zip.is::<GenericDocument>());
    assert_eq!(zip.to_json(), json!({"plus4": "1"}));
}

#[test]
fn described_root_decodes_through_layout() {
    let resolver = PathTypeResolver::with_root(DocType::described::<Order>());
    let doc = DocumentDecoder::new(&resolver)
        .decode_str(r#"{"billingAddress":{"city":"Lyon"},"notes":{"text":"x"}}"#)
        .expect("decode");

    let billing = doc
        .get("billingAddress")
        .and_then(FieldValue::as_document)
        .expect("billing");
    assert!(billing.is::<Address>());

    let notes = doc
        .get("notes")
        .and_then(FieldValue::as_document)
        .expect("notes");
    assert!(notes.is::<GenericDocument>());
}

#[test]
fn broken_binding_aborts_the_decode() {
    let resolver = PathTypeResolver::new(
        DocType::of::<Order>(),
        [("shippingAddress.zip", DocType::abstract_type("Zip"))],
    );
    let err = DocumentDecoder::new(&resolver)
        .decode_value(&json!({"shippingAddress": {"zip": {}}}))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Instantiation);
    assert_eq!(err.type_name(), Some("Zip"));
    assert_eq!(err.path(), Some(&FieldPath::from(["shippingAddress", "zip"])));
}

#[test]
fn scalars_and_lists_are_kept_as_values() {
    let resolver = PathTypeResolver::with_root(DocType::generic());
    let doc = DocumentDecoder::new(&resolver)
        .decode_value(&json!({"n": 1, "tags": ["a", {"k": null}], "ok": true}))
        .expect("decode");

    assert_eq!(
        doc.to_json(),
        json!({"n": 1, "tags": ["a", {"k": null}], "ok": true})
    );
    let tags = doc.get("tags").and_then(FieldValue::as_list).expect("tags");
    assert!(tags[1].as_document().is_some());
}
