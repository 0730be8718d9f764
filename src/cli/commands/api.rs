//! Handlers for a single API path: `--info` and request execution.

use crate::cli::{info, render, Cli};
use crate::config::bindings::ResolverBindings;
use crate::engine::{Dispatcher, HttpRequest, HttpTransport, PathParamResolver, Transport};
use crate::error::Error;
use crate::interactive::{Chooser, TerminalChooser};
use crate::spec::RouteTable;
use crate::suggestions;
use std::io::Write;
use tracing::debug;

/// Splits repeated `-q key=value` arguments into pairs.
///
/// The value may itself contain `=`; only the first one separates.
pub fn parse_query_params(raw: &[String]) -> Result<Vec<(String, String)>, Error> {
    raw.iter()
        .map(|item| {
            item.split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| Error::InvalidQuery(item.clone()))
        })
        .collect()
}

/// Prints endpoint details for every route matching `path`.
pub fn show_info(table: &RouteTable, path: &str, api_url: &str) -> Result<(), Error> {
    let routes = table.lookup(path);
    if routes.is_empty() {
        return Err(Error::Lookup {
            path: path.to_string(),
            suggestions: suggestions::suggest_paths(table, path),
        });
    }
    print!("{}", info::render_endpoint_info(&routes, api_url));
    Ok(())
}

/// Collaborators shared by every request made in one invocation.
pub struct RequestContext<'a, T: Transport + ?Sized, C: Chooser + ?Sized> {
    pub table: &'a RouteTable,
    pub bindings: &'a ResolverBindings,
    pub transport: &'a T,
    pub chooser: &'a C,
}

/// User input for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestInput<'a> {
    pub path: &'a str,
    pub payload: Option<&'a str>,
    pub method: Option<&'a str>,
    pub query: Vec<(String, String)>,
    pub raw: bool,
}

/// Resolves `input`, sends it and renders the response to `out`/`err`.
pub async fn send_request<T, C, O, E>(
    ctx: &RequestContext<'_, T, C>,
    input: RequestInput<'_>,
    out: &mut O,
    err: &mut E,
) -> Result<(), Error>
where
    T: Transport + ?Sized,
    C: Chooser + ?Sized,
    O: Write,
    E: Write,
{
    let resolver = PathParamResolver::new(ctx.bindings, ctx.transport, ctx.chooser);
    let resolved = Dispatcher::new(ctx.table, resolver)
        .resolve(input.path, input.payload, input.method)
        .await?;
    debug!(
        method = %resolved.method,
        path = %resolved.path,
        operation = %resolved.route.operation_id,
        "resolved request"
    );

    let request = HttpRequest {
        method: resolved.method,
        path: resolved.path,
        query: input.query,
        body: resolved.payload,
    };
    let response = ctx.transport.send(&request).await?;
    render::render_response(&response, input.raw, out, err)
}

/// Runs the request described by the command line against the real terminal and network.
pub async fn execute_request(
    cli: &Cli,
    path: &str,
    ctx: &RequestContext<'_, HttpTransport, TerminalChooser>,
) -> Result<(), Error> {
    // Bad query arguments fail before any list endpoint is contacted.
    let query = parse_query_params(&cli.query)?;
    let input = RequestInput {
        path,
        payload: cli.payload.as_deref(),
        method: cli.method.as_deref(),
        query,
        raw: cli.raw,
    };
    send_request(ctx, input, &mut std::io::stdout(), &mut std::io::stderr()).await
}
