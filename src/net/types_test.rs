use super::*;

#[test]
fn bulk_waste_record_serializes_camel_case_fields() {
    let record = BulkWasteRecord {
        image: "https://img.example/a.png".to_owned(),
        name: "Scrap copper".to_owned(),
        description: "Offcuts".to_owned(),
        quantity_available: 12.0,
        quantity_unit: "kgs".to_owned(),
        price: 450.5,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "image": "https://img.example/a.png",
            "name": "Scrap copper",
            "description": "Offcuts",
            "quantityAvailable": 12.0,
            "quantityUnit": "kgs",
            "price": 450.5,
        })
    );
}

#[test]
fn image_upload_response_ignores_extra_fields() {
    let raw = r#"{"public_id":"x1","secure_url":"https://res.example/x1.jpg","url":"http://res.example/x1.jpg"}"#;
    let resp: ImageUploadResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.secure_url, "https://res.example/x1.jpg");
}

#[test]
fn image_upload_response_requires_secure_url() {
    let raw = r#"{"url":"http://res.example/x1.jpg"}"#;
    assert!(serde_json::from_str::<ImageUploadResponse>(raw).is_err());
}
