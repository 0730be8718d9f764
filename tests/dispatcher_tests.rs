
use apictl::config::bindings::ResolverBindings;
use apictl::engine::{Dispatcher, PathParamResolver, ResolvedRequest};
use apictl::error::Error;
use apictl::spec::RouteTable;
use test_helpers::{apps_table, bindings, FakeTransport, ScriptedChooser};

const APPS: &str = r#"[{"id":"42","name":"answer"},{"id":"7","name":"seven"}]"#;

async fn dispatch(
    table: &RouteTable,
    bindings: &ResolverBindings,
    transport: &FakeTransport,
    chooser: &ScriptedChooser,
    path: &str,
    payload: Option<&str>,
    method: Option<&str>,
) -> Result<ResolvedRequest, Error> {
    let resolver = PathParamResolver::new(bindings, transport, chooser);
    Dispatcher::new(table, resolver)
        .resolve(path, payload, method)
        .await
}

#[tokio::test]
async fn test_templated_path_resolves_through_selection() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default().with("/v1/apps", 200, APPS);
    let chooser = ScriptedChooser::answering("42");

    let req = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps/{app_id}", None, None)
        .await
        .unwrap();
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/v1/apps/42");
    assert_eq!(req.payload, None);
    assert_eq!(req.resolved_params["app_id"], "42");
    assert_eq!(req.route.operation_id, "GetApp");
    assert_eq!(transport.requested_paths(), vec!["/v1/apps"]);
}

#[tokio::test]
async fn test_literal_path_is_used_verbatim() {
    let table = apps_table();
    let bindings = bindings(&[("app_id", "ignored")]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps/abc", None, None)
        .await
        .unwrap();
    assert_eq!(req.path, "/v1/apps/abc");
    assert_eq!(req.resolved_params["app_id"], "abc");
    assert!(transport.requested_paths().is_empty());
}

#[tokio::test]
async fn test_payload_selects_write_method() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(
        &table,
        &bindings,
        &transport,
        &chooser,
        "/v1/apps",
        Some(r#"{"name":"x"}"#),
        None,
    )
    .await
    .unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.payload.as_deref(), Some(r#"{"name":"x"}"#));
    assert_eq!(req.route.body_schema_name(), "service.CreateAppRequest");
}

#[tokio::test]
async fn test_empty_payload_counts_as_none() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps", Some(""), None)
        .await
        .unwrap();
    assert_eq!(req.method, "GET");
    assert_eq!(req.payload, None);
}

#[tokio::test]
async fn test_template_with_trailing_literal_resolves() {
    let table = apps_table();
    let bindings = bindings(&[("install_id", "inst-1")]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(
        &table,
        &bindings,
        &transport,
        &chooser,
        "/v1/installs/{install_id}/reprovision",
        Some("{}"),
        None,
    )
    .await
    .unwrap();
    assert_eq!(req.path, "/v1/installs/inst-1/reprovision");
    assert_eq!(req.method, "POST");
}

#[tokio::test]
async fn test_mixed_path_keeps_literals() {
    let table = apps_table();
    let bindings = bindings(&[("app_id", "from-env")]);
    let transport = FakeTransport::default()
        .with("/v1/apps", 200, APPS)
        .with("/v1/installs", 200, r#"[{"id":"i1","name":"first"}]"#);
    let chooser = ScriptedChooser::answering("i1");

    let req = dispatch(
        &table,
        &bindings,
        &transport,
        &chooser,
        "/v1/apps/lit/installs/{install_id}",
        None,
        None,
    )
    .await
    .unwrap();
    assert_eq!(req.path, "/v1/apps/lit/installs/i1");
    assert_eq!(req.route.operation_id, "GetAppInstall");
    assert_eq!(req.resolved_params["app_id"], "lit");
    assert_eq!(req.resolved_params["install_id"], "i1");
    // Only the open placeholder is listed; the literal is neither looked up nor replaced.
    assert_eq!(transport.requested_paths(), vec!["/v1/installs"]);
    assert!(chooser.offered_for("app_id").is_none());
}

#[tokio::test]
async fn test_upstream_failure_produces_no_request() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default().with("/v1/apps", 500, "{}");
    let chooser = ScriptedChooser::answering("42");

    let err = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps/{app_id}", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Upstream { ref param, .. } if param == "app_id"));
}

#[tokio::test]
async fn test_unknown_path_is_lookup_error_with_suggestions() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let err = dispatch(&table, &bindings, &transport, &chooser, "/v1/aps", None, None)
        .await
        .unwrap_err();
    let Error::Lookup { path, suggestions } = err else {
        panic!("expected lookup error");
    };
    assert_eq!(path, "/v1/aps");
    assert!(suggestions.len() <= 3);
    assert!(suggestions.iter().any(|s| s == "/v1/apps"));
}

#[tokio::test]
async fn test_put_patch_without_payload_is_ambiguous() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let err = dispatch(
        &table,
        &bindings,
        &transport,
        &chooser,
        "/v1/installs/abc/inputs",
        None,
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        Error::AmbiguousMethod { ref available, .. } if available == &["PUT", "PATCH"]
    ));
    assert!(err.to_string().contains("use -X to specify"));
}

#[tokio::test]
async fn test_override_for_missing_method_is_rejected() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let err = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps", None, Some("delete"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MethodNotAvailable { ref method, ref path } if method == "DELETE" && path == "/v1/apps"
    ));
}

#[tokio::test]
async fn test_override_selects_among_candidates() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(&table, &bindings, &transport, &chooser, "/v1/apps/abc", None, Some("Delete"))
        .await
        .unwrap();
    assert_eq!(req.method, "DELETE");
    assert_eq!(req.route.operation_id, "DeleteApp");
}

#[tokio::test]
async fn test_put_patch_with_payload_prefers_patch() {
    let table = apps_table();
    let bindings = bindings(&[]);
    let transport = FakeTransport::default();
    let chooser = ScriptedChooser::cancelling();

    let req = dispatch(
        &table,
        &bindings,
        &transport,
        &chooser,
        "/v1/installs/abc/inputs",
        Some("{}"),
        None,
    )
    .await
    .unwrap();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.route.operation_id, "PatchInputs");
}
