//! Handler for `apictl --list`.

use crate::cli::commands::api::{send_request, RequestContext, RequestInput};
use crate::engine::Transport;
use crate::error::Error;
use crate::interactive::{ChoiceItem, Chooser};
use crate::spec::{Route, RouteTable};
use std::io::Write;

const ACTION_PRINT: &str = "print";
const ACTION_EXECUTE: &str = "execute";
const ACTION_DOCS: &str = "docs";

/// One choice per route, identified by its `METHOD path` display name.
#[must_use]
pub fn route_choices(table: &RouteTable) -> Vec<ChoiceItem> {
    table
        .routes()
        .iter()
        .map(|route| {
            let name = route.display_name();
            if route.summary.is_empty() {
                ChoiceItem::new(name.clone(), name)
            } else {
                ChoiceItem::new(name.clone(), format!("{name}  {}", route.summary))
            }
        })
        .collect()
}

fn action_choices() -> Vec<ChoiceItem> {
    vec![
        ChoiceItem::new(ACTION_PRINT, "print method and path"),
        ChoiceItem::new(ACTION_EXECUTE, "send the request"),
        ChoiceItem::new(ACTION_DOCS, "show the documentation link"),
    ]
}

/// Prints every route as a `METHOD path` line.
pub fn print_routes<W: Write>(table: &RouteTable, out: &mut W) -> Result<(), Error> {
    for route in table.routes() {
        writeln!(out, "{}", route.display_name())?;
    }
    Ok(())
}

/// Lets the user pick a route, then print it, send it or show its docs link.
///
/// Sending goes through normal resolution with the picked route's template
/// and method, so placeholders are filled as for a typed path. Cancelling
/// either menu prints nothing.
pub async fn browse_routes<T, C, O, E>(
    ctx: &RequestContext<'_, T, C>,
    api_url: &str,
    out: &mut O,
    err: &mut E,
) -> Result<(), Error>
where
    T: Transport + ?Sized,
    C: Chooser + ?Sized,
    O: Write,
    E: Write,
{
    let Some(selected) = ctx.chooser.choose("an endpoint", &route_choices(ctx.table))? else {
        return Ok(());
    };
    let route = find_route(ctx.table, &selected)?;

    let Some(action) = ctx.chooser.choose("an action", &action_choices())? else {
        return Ok(());
    };
    match action.as_str() {
        ACTION_EXECUTE => {
            let input = RequestInput {
                path: &route.path,
                method: Some(route.method.as_str()),
                ..RequestInput::default()
            };
            send_request(ctx, input, out, err).await
        }
        ACTION_DOCS => {
            writeln!(out, "{}", route.docs_url(api_url))?;
            Ok(())
        }
        _ => {
            writeln!(out, "{}", route.display_name())?;
            Ok(())
        }
    }
}

fn find_route<'t>(table: &'t RouteTable, display_name: &str) -> Result<&'t Route, Error> {
    table
        .routes()
        .iter()
        .find(|route| route.display_name() == display_name)
        .ok_or_else(|| Error::Interactive(format!("Unknown endpoint: {display_name}")))
}
