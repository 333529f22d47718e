use std::collections::HashMap;

use typedstruct::{ConstructError, FieldType, TypedBuilder, TypedStruct, typed_struct};
use typedstruct_testhelpers::test;

typed_struct! {
    /// Two fields from the basic example: one bare, one defaulted.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Example {
        field(a_field, u32);
        field(with_default, u32, default = 7);
    }

    #[derive(Debug, PartialEq)]
    pub struct User {
        field(name, String, enforce = true);
        field(email, String);
        field(tags, Vec<String>, default = vec!["new".to_string()]);
    }

    #[derive(Debug, PartialEq)]
    pub struct Empty {}
}

#[test]
fn keys_keep_declaration_order() {
    assert_eq!(Example::keys(), ["a_field", "with_default"]);
    assert_eq!(User::keys(), ["name", "email", "tags"]);
}

#[test]
fn defaults_report_source_text() {
    assert_eq!(
        Example::defaults(),
        [("a_field", None), ("with_default", Some("7"))]
    );
    assert_eq!(
        User::defaults(),
        [
            ("name", None),
            ("email", None),
            ("tags", Some("vec![\"new\".to_string()]")),
        ]
    );
}

#[test]
fn types_follow_nullability_rules() {
    assert_eq!(
        Example::types(),
        [
            ("a_field", FieldType::Nullable("u32")),
            ("with_default", FieldType::Declared("u32")),
        ]
    );
    assert_eq!(
        User::types(),
        [
            ("name", FieldType::Declared("String")),
            ("email", FieldType::Nullable("String")),
            ("tags", FieldType::Declared("Vec<String>")),
        ]
    );
}

#[test]
fn generated_fields_use_effective_types() {
    let example = Example {
        a_field: None,
        with_default: 7,
    };
    assert_eq!(example, Example::default());

    let user = User {
        name: "ferris".to_string(),
        email: Some("ferris@example.com".to_string()),
        tags: Vec::new(),
    };
    assert_eq!(user.email.as_deref(), Some("ferris@example.com"));
}

#[test]
fn builder_fills_defaults() {
    let example = Example::builder().build().unwrap();
    assert_eq!(example.a_field, None);
    assert_eq!(example.with_default, 7);

    let example = Example::builder()
        .a_field(3u32)
        .with_default(9u32)
        .build()
        .unwrap();
    assert_eq!(example.a_field, Some(3));
    assert_eq!(example.with_default, 9);
}

#[test]
fn nullable_setter_accepts_none() {
    let example = Example::builder().a_field(None::<u32>).build().unwrap();
    assert_eq!(example.a_field, None);
}

#[test]
fn missing_required_field() {
    let err = User::builder()
        .email("x@example.com".to_string())
        .build()
        .unwrap_err();
    assert_eq!(err, ConstructError::missing_required("User", "name"));
    assert_eq!(err.to_string(), "missing required field `name` for `User`");
    assert_eq!(err.code(), "construct::missing_required_field");
}

#[test]
fn required_value_is_stored_as_given() {
    let user = User::builder().name("ferris").build().unwrap();
    assert_eq!(
        user,
        User {
            name: "ferris".to_string(),
            email: None,
            tags: vec!["new".to_string()],
        }
    );
    assert_eq!(User::required(), ["name"]);
}

#[test]
fn empty_block() {
    assert!(Empty::keys().is_empty());
    assert!(Empty::defaults().is_empty());
    assert!(Empty::types().is_empty());
    assert!(Empty::required().is_empty());
    assert_eq!(Empty::builder().build(), Ok(Empty {}));
    assert_eq!(Empty::default(), Empty {});
    assert_eq!(Empty::descriptor().to_string(), "struct Empty {}");
}

#[test]
fn reflection_is_stable() {
    assert_eq!(User::keys(), User::keys());
    assert_eq!(User::defaults(), User::defaults());
    assert_eq!(User::types(), User::types());
    assert_eq!(User::NAME, "User");
    assert_eq!(User::FIELDS.len(), 3);
}

#[test]
fn descriptor_renders_effective_types() {
    insta::assert_snapshot!(User::descriptor().to_string(), @r"
    struct User {
        name: String,
        email: Option<String>,
        tags: Vec<String>,
    }
    ");
}

#[test]
fn trait_builder_is_generic() {
    fn build_default<S: TypedStruct>() -> Result<S, ConstructError>
    where
        S::Builder: TypedBuilder<Output = S>,
    {
        S::Builder::default().build()
    }

    assert_eq!(build_default::<Example>().unwrap(), Example::default());
    assert!(build_default::<User>().is_err());
}

typed_struct! {
    #[typed_struct(enforce)]
    #[derive(Debug)]
    struct Account {
        field(id, u64);
        field(tier, u8, default = 1);
        field(nickname, String, enforce = false);
        field(region, String, default = String::from("eu"), enforce = true);
    }
}

#[test]
fn block_enforce() {
    assert_eq!(Account::required(), ["id", "region"]);
    assert_eq!(
        Account::type_names(),
        [
            ("id", "u64".to_string()),
            ("tier", "u8".to_string()),
            ("nickname", "Option<String>".to_string()),
            ("region", "String".to_string()),
        ]
    );

    // enforced with a default: still has to be supplied
    let err = Account::builder().id(1u64).build().unwrap_err();
    assert_eq!(err, ConstructError::missing_required("Account", "region"));

    let account = Account::builder().id(1u64).region("us").build().unwrap();
    assert_eq!(account.tier, 1);
    assert_eq!(account.nickname, None);
    assert_eq!(account.region, "us");
}

typed_struct! {
    struct Generics {
        field(by_name, HashMap<String, u32>, default = HashMap::new());
        field(pair, (u8, i64));
        field(callback, fn(u8) -> bool, default = |b| b > 0);
    }
}

#[test]
fn types_with_commas_and_arrows() {
    assert_eq!(
        Generics::type_names(),
        [
            ("by_name", "HashMap<String, u32>".to_string()),
            ("pair", "Option<(u8, i64)>".to_string()),
            ("callback", "fn(u8) -> bool".to_string()),
        ]
    );
    let value = Generics::builder().pair((1u8, -1i64)).build().unwrap();
    assert!(value.by_name.is_empty());
    assert_eq!(value.pair, Some((1, -1)));
    assert!((value.callback)(2));
}

typed_struct! {
    struct Job {
        field(build, u32, default = 0);
    }
}

#[test]
fn field_named_build() {
    let job = TypedBuilder::build(Job::builder().build(5u32)).unwrap();
    assert_eq!(job.build, 5);
}

fn limit() -> u32 {
    10
}

typed_struct! {
    #[derive(Debug, PartialEq)]
    struct Limits {
        field(limit, u32, default = 3);
        field(cap, u32, default = limit());
    }
}

#[test]
fn default_calls_function_named_like_earlier_field() {
    let limits = Limits::builder().build().unwrap();
    assert_eq!(limits, Limits { limit: 3, cap: 10 });
    assert_eq!(Limits::default(), limits);

    let limits = Limits::builder().limit(1u32).build().unwrap();
    assert_eq!(limits.cap, 10);
}
