use console_access_core::NonEmptyString;
use console_access_domain::{ClientReadError, ProcessedError, ServerError, StructuredError};

use super::{
    ALREADY_EXISTS_PATTERN, CLIENT_READ_MESSAGE, CodeTemplate, ErrorCatalog, PARSE_ERROR_PATTERN,
    UNKNOWN_ERROR_MESSAGE, get_parse_error, get_resource_name, process_server_error,
};

fn structured(error_code: Option<&str>, message: &str) -> ServerError {
    ServerError::Structured(StructuredError {
        status_code: 400,
        error_code: error_code.map(str::to_owned),
        message: message.to_owned(),
        request_id: Some("2".to_owned()),
    })
}

fn already_exists(message: &str) -> ServerError {
    structured(Some("ObjectAlreadyExists"), message)
}

fn non_empty(value: &str) -> NonEmptyString {
    match NonEmptyString::new(value) {
        Ok(value) => value,
        Err(error) => panic!("test message must not be empty: {error}"),
    }
}

#[test]
fn message_patterns_compile() {
    assert_eq!(std::sync::LazyLock::force(&PARSE_ERROR_PATTERN).captures_len(), 2);
    assert_eq!(std::sync::LazyLock::force(&ALREADY_EXISTS_PATTERN).captures_len(), 2);
}

#[test]
fn get_parse_error_extracts_readable_part() {
    assert_eq!(
        get_parse_error("unable to parse JSON body: hi, you have an error at line 129 column 4")
            .as_deref(),
        Some("Hi, you have an error")
    );
}

#[test]
fn get_parse_error_prefix_ignores_case() {
    assert_eq!(
        get_parse_error("Unable to parse json body: missing field `name` at line 1 column 2")
            .as_deref(),
        Some("Missing field `name`")
    );
}

#[test]
fn get_parse_error_rejects_other_messages() {
    assert_eq!(get_parse_error("some nonsense"), None);
    assert_eq!(get_parse_error("unable to parse JSON body: no position"), None);
    assert_eq!(get_parse_error(""), None);
}

#[test]
fn get_resource_name_cases() {
    let cases = [
        ("projectCreate", "", Some("project")),
        ("projectCreate", "already exists: project \"abc\"", Some("project")),
        ("instanceCreate", "already exists: disk \"abc\"", Some("disk")),
        ("instanceNetworkInterfaceCreate", "", Some("interface")),
        (
            "instanceNetworkInterfaceCreate",
            "already exists: something else",
            Some("something else"),
        ),
        ("doesNotContainC-reate", "", None),
    ];

    for (operation, message, expected) in cases {
        assert_eq!(
            get_resource_name(operation, message).as_deref(),
            expected,
            "{operation} / {message}"
        );
    }
}

#[test]
fn get_resource_name_singularizes_and_needs_a_noun() {
    assert_eq!(get_resource_name("vpcSubnetsCreate", "").as_deref(), Some("subnet"));
    assert_eq!(get_resource_name("create", ""), None);
    assert_eq!(get_resource_name("projectList", ""), None);
}

#[test]
fn parse_errors_use_extracted_message() {
    let error = ServerError::Structured(StructuredError {
        status_code: 400,
        error_code: None,
        message: "unable to parse JSON body: hi, you have an error at line 129 column 4".to_owned(),
        request_id: Some("1".to_owned()),
    });

    assert_eq!(
        process_server_error("fakeThingView", &error),
        ProcessedError {
            message: "Hi, you have an error".to_owned(),
            status_code: 400,
            error_code: None,
            request_id: Some("1".to_owned()),
        }
    );
}

#[test]
fn client_read_errors_get_fixed_message() {
    let error = ServerError::ClientRead(ClientReadError {
        status_code: 200,
        detail: Some("failed to parse JSON".to_owned()),
    });

    assert_eq!(
        process_server_error("fakeThingView", &error),
        ProcessedError {
            message: CLIENT_READ_MESSAGE.to_owned(),
            status_code: 200,
            error_code: None,
            request_id: None,
        }
    );
}

#[test]
fn already_exists_pulls_resource_from_message() {
    let processed = process_server_error(
        "instanceCreate",
        &already_exists("already exists: instance \"instance-name\""),
    );

    assert_eq!(processed.message, "Instance name already exists");
    assert_eq!(processed.error_code.as_deref(), Some("ObjectAlreadyExists"));
    assert_eq!(processed.request_id.as_deref(), Some("2"));
}

#[test]
fn already_exists_prefers_message_resource_over_operation() {
    let processed =
        process_server_error("instanceCreate", &already_exists("already exists: disk \"boot\""));
    assert_eq!(processed.message, "Disk name already exists");
}

#[test]
fn already_exists_falls_back_to_operation_name() {
    assert_eq!(
        process_server_error("fakeThingCreate", &already_exists("whatever")).message,
        "Thing name already exists"
    );
    assert_eq!(
        process_server_error("instanceCreate", &already_exists("whatever")).message,
        "Instance name already exists"
    );
}

#[test]
fn already_exists_without_resource_uses_server_message() {
    let processed = process_server_error("womp", &already_exists("whatever"));
    assert_eq!(processed.message, "Whatever");
}

#[test]
fn not_found_capitalizes_server_message() {
    let processed = process_server_error(
        "diskView",
        &structured(Some("ObjectNotFound"), "not found: whatever"),
    );
    assert_eq!(processed.message, "Not found: whatever");
}

#[test]
fn forbidden_uses_global_message() {
    let processed =
        process_server_error("siloCreate", &structured(Some("Forbidden"), "forbidden"));
    assert_eq!(processed.message, "Action not authorized");
}

#[test]
fn unknown_code_falls_back_to_server_message() {
    let processed = process_server_error("womp", &structured(Some("WeirdError"), "whatever"));

    assert_eq!(processed.message, "Whatever");
    assert_eq!(processed.error_code.as_deref(), Some("WeirdError"));
    assert_eq!(processed.status_code, 400);
}

#[test]
fn empty_message_never_produces_empty_output() {
    assert_eq!(
        process_server_error("womp", &structured(Some("WeirdError"), "")).message,
        UNKNOWN_ERROR_MESSAGE
    );
    assert_eq!(
        process_server_error("diskView", &structured(Some("ObjectNotFound"), "  ")).message,
        UNKNOWN_ERROR_MESSAGE
    );
}

#[test]
fn empty_error_code_is_normalized_away() {
    let processed = process_server_error("womp", &structured(Some(""), "whatever"));
    assert_eq!(processed.error_code, None);
}

#[test]
fn operation_override_wins_over_code_template() {
    let catalog = ErrorCatalog::default().with_operation_message(
        "instanceCreate",
        "ObjectAlreadyExists",
        non_empty("An instance with that name is already running"),
    );

    assert_eq!(
        catalog
            .process("instanceCreate", &already_exists("whatever"))
            .message,
        "An instance with that name is already running"
    );
    assert_eq!(
        catalog
            .process("diskCreate", &already_exists("whatever"))
            .message,
        "Disk name already exists"
    );
}

#[test]
fn parse_error_takes_priority_over_code_maps() {
    let catalog = ErrorCatalog::default().with_global_message(
        "InvalidRequest",
        non_empty("Request was rejected"),
    );
    let error = structured(
        Some("InvalidRequest"),
        "unable to parse JSON body: bad value at line 1 column 9",
    );

    assert_eq!(catalog.process("diskCreate", &error).message, "Bad value");
}

#[test]
fn empty_catalog_only_relays_server_messages() {
    let catalog = ErrorCatalog::empty();
    assert_eq!(
        catalog
            .process("siloCreate", &structured(Some("Forbidden"), "forbidden"))
            .message,
        "Forbidden"
    );

    let catalog = catalog.with_code_template("Forbidden", CodeTemplate::ServerMessage);
    assert_eq!(
        catalog
            .process("siloCreate", &structured(Some("Forbidden"), "no access"))
            .message,
        "No access"
    );
}
