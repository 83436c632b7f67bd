use keyspec::{IndexKind, config::IndexConfig, prelude::*};

#[derive(FieldValues)]
struct Entity {
    #[keyspec(rename = "firstName")]
    first: String,
    #[keyspec(rename = "lastName")]
    last: String,
    #[keyspec(rename = "createdAt")]
    created: Option<u64>,
    #[keyspec(skip)]
    #[allow(dead_code)]
    password_hash: String,
}

fn encode(segments: &[Segment]) -> Vec<Segment> {
    segments.to_vec()
}

fn text(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

fn gsi() -> IndexBuilder<Entity> {
    IndexBuilder::for_entity_kind(IndexKind::Global)
}

#[test]
fn can_build_gsi() {
    let sk = KeySpec::new("created-at", ["createdAt"]).with_transform(|values| {
        if values.is_present("createdAt") {
            values
        } else {
            values.with("createdAt", 1_606_780_800_000u64)
        }
    });

    let index = gsi()
        .with_name("test1")
        .with_partition_key(KeySpec::new("users-by-name", ["firstName", "lastName"]))
        .with_sort_key(sk)
        .with_encoding_method(encode)
        .build()
        .expect("complete builder");

    assert_eq!(index.kind(), IndexKind::Global);
    assert_eq!(
        index.partition_key(&Values::new().with("firstName", "Josh").with("lastName", "Smith")),
        vec![text("users-by-name"), text("Josh"), text("Smith")]
    );
    assert_eq!(
        index.sort_key_prefix(),
        vec![text("created-at"), Segment::Int(1_606_780_800_000)]
    );
}

#[test]
fn fail_to_build_if_missing_args() {
    assert_eq!(
        gsi().build().unwrap_err().to_string(),
        "Missing GSI index name"
    );
    assert_eq!(
        gsi().with_name("test2").build().unwrap_err().to_string(),
        "Missing GSI index PK options"
    );
    assert_eq!(
        gsi()
            .with_name("test3")
            .with_partition_key(KeySpec::new("users-by-name", ["firstName", "lastName"]))
            .build()
            .unwrap_err()
            .to_string(),
        "Missing GSI index SK options"
    );
    assert_eq!(
        gsi()
            .with_name("test4")
            .with_partition_key(KeySpec::new("users-by-name", ["firstName", "lastName"]))
            .with_sort_key(KeySpec::new("created-at", ["createdAt"]))
            .build()
            .unwrap_err()
            .to_string(),
        "Missing GSI index encoding method"
    );
}

#[test]
fn renamed_and_skipped_fields() {
    let index = gsi()
        .with_name("secrets")
        .with_partition_key(KeySpec::new("user", ["firstName", "passwordHash", "password_hash"]))
        .with_sort_key(KeySpec::new("created-at", ["lastName", "createdAt"]))
        .with_encoding_method(encode)
        .build()
        .expect("complete builder");

    let entity = Entity {
        first: "Cher".to_string(),
        last: "Sarkisian".to_string(),
        created: None,
        password_hash: "hunter2".to_string(),
    };

    let keys = index.keys(&entity);
    assert_eq!(
        keys.partition,
        vec![text("user"), text("Cher"), Segment::Null, Segment::Null]
    );
    assert_eq!(keys.sort, vec![text("created-at"), text("Sarkisian")]);
}

#[test]
fn gsi_from_config() {
    let config = IndexConfig::from_toml_str(
        r#"
        name = "by-last-name"
        kind = "global"

        [partition_key]
        prefix = "users-by-last-name"
        fields = ["lastName"]

        [sort_key]
        prefix = "first-name"
        fields = ["firstName"]
        "#,
    )
    .expect("valid config");

    let index = IndexBuilder::<Entity>::from_config(&config)
        .with_encoding_method(encode)
        .build()
        .expect("complete builder");

    assert_eq!(index.kind(), IndexKind::Global);
    assert_eq!(
        index.to_string(),
        "GSI by-last-name users-by-last-name(lastName) first-name(firstName)"
    );
}
