use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_UPLOAD_PRESET", "unsigned"),
    ]))
    .unwrap();

    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.cloudinary_upload_url, "https://api.cloudinary.com/v1_1/demo/image/upload");
    assert_eq!(cfg.cloudinary_cloud_name, "demo");
    assert_eq!(cfg.cloudinary_upload_preset, "unsigned");
}

#[test]
fn from_lookup_honors_overrides_and_trims_backend_slash() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("BACKEND_URL", "https://api.example.test/"),
        ("CLOUDINARY_URL", "https://upload.example.test/image"),
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_UPLOAD_PRESET", "unsigned"),
    ]))
    .unwrap();

    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.cloudinary_upload_url, "https://upload.example.test/image");
}

#[test]
fn from_lookup_requires_cloud_name() {
    let err = AppConfig::from_lookup(lookup_from(&[("CLOUDINARY_UPLOAD_PRESET", "unsigned")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "CLOUDINARY_CLOUD_NAME" });
}

#[test]
fn from_lookup_treats_blank_preset_as_missing() {
    let err = AppConfig::from_lookup(lookup_from(&[
        ("CLOUDINARY_CLOUD_NAME", "demo"),
        ("CLOUDINARY_UPLOAD_PRESET", "   "),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("CLOUDINARY_UPLOAD_PRESET"));
}
