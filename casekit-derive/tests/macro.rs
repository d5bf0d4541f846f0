use casekit::{Case, FieldNames};

/// Request payload for a public API.
///
/// # Explanation
///
/// - #[field_names(case = "camel")] generates the field names in camelCase.
/// - #[field_name(rename = "...")] overrides the generated name for a single field.
/// - #[field_name(skip)] leaves a field out of the generated names.
/// - Every named field gets an associated `&'static str` constant in SCREAMING_SNAKE_CASE.
#[casekit_derive::field_names(case = "camel")]
#[allow(dead_code)]
struct CreateUserRequest {
    user_name: String,
    email_address: String,
    #[field_name(rename = "pwd")]
    password: String,
    #[field_name(skip)]
    internal_trace_id: u64,
    r#type: String,
}

#[casekit_derive::field_names(case = "kebab")]
#[allow(dead_code)]
pub struct HeaderNames {
    content_type: String,
    x_request_id: String,
    retry_after_2: String,
}

#[casekit_derive::field_names(case = "snake")]
#[allow(dead_code)]
struct Page<T> {
    next_page: Option<String>,
    items: Vec<T>,
}

#[test]
fn test_camel_field_names() {
    assert_eq!(CreateUserRequest::USER_NAME, "userName");
    assert_eq!(CreateUserRequest::EMAIL_ADDRESS, "emailAddress");
    assert_eq!(CreateUserRequest::PASSWORD, "pwd");
    assert_eq!(CreateUserRequest::TYPE, "type");

    assert_eq!(
        CreateUserRequest::FIELD_NAMES,
        &["userName", "emailAddress", "pwd", "type"]
    );
    assert_eq!(CreateUserRequest::CASE, Case::Camel);
    assert_eq!(
        CreateUserRequest::field_names(),
        CreateUserRequest::FIELD_NAMES
    );
}

#[test]
fn test_kebab_field_names() {
    assert_eq!(HeaderNames::CONTENT_TYPE, "content-type");
    assert_eq!(HeaderNames::X_REQUEST_ID, "x-request-id");
    // Separators before digits are kept.
    assert_eq!(HeaderNames::RETRY_AFTER_2, "retry-after_2");
    assert_eq!(<HeaderNames as FieldNames>::CASE, Case::Kebab);
}

#[test]
fn test_generic_struct() {
    assert_eq!(Page::<u8>::FIELD_NAMES, &["next_page", "items"]);
    assert_eq!(<Page<String> as FieldNames>::field_names(), &["next_page", "items"]);
}

#[test]
fn test_struct_is_usable() {
    let page = Page {
        next_page: None,
        items: vec![1, 2, 3],
    };

    assert_eq!(page.items.len(), 3);
    assert!(page.next_page.is_none());
}

#[test]
fn test_names_detect_as_target_case() {
    for name in CreateUserRequest::FIELD_NAMES {
        let case = casekit::detect_case(name);
        assert!(matches!(case, Case::Camel | Case::Snake), "{name}: {case}");
    }

    for name in HeaderNames::FIELD_NAMES.iter().take(2) {
        assert_eq!(casekit::detect_case(name), Case::Kebab);
    }
}
