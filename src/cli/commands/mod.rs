//! CLI command handlers.
//!
//! [`run`] loads settings and the route table once, then hands off to the
//! handler selected by the flags on [`Cli`].

#[allow(clippy::missing_errors_doc)]
pub mod api;
#[allow(clippy::missing_errors_doc)]
pub mod list;

use crate::cli::Cli;
use crate::config::bindings::ResolverBindings;
use crate::config::settings::Settings;
use crate::engine::{loader, HttpTransport};
use crate::error::Error;
use crate::interactive::TerminalChooser;
use crate::spec::RouteTable;
use clap::CommandFactory;

/// Runs the command described by `cli`.
///
/// # Errors
/// Returns whatever the selected handler fails with, or a settings or
/// API description loading error.
pub async fn run(cli: &Cli) -> Result<(), Error> {
    let settings = Settings::load()?;
    let description = loader::load_api_description(settings.spec_file.as_deref())?;
    let table = RouteTable::new(description);

    if cli.list {
        if cli.raw {
            return list::print_routes(&table, &mut std::io::stdout());
        }
        return browse(&table, &settings).await;
    }

    let Some(path) = cli.path.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if cli.info {
        return api::show_info(&table, path, &settings.api_url);
    }

    let transport = HttpTransport::new(&settings)?;
    let chooser = TerminalChooser::new();
    let bindings = ResolverBindings::from_settings(&settings);
    let ctx = api::RequestContext {
        table: &table,
        bindings: &bindings,
        transport: &transport,
        chooser: &chooser,
    };
    api::execute_request(cli, path, &ctx).await
}

async fn browse(table: &RouteTable, settings: &Settings) -> Result<(), Error> {
    let transport = HttpTransport::new(settings)?;
    let chooser = TerminalChooser::new();
    let bindings = ResolverBindings::from_settings(settings);
    let ctx = api::RequestContext {
        table,
        bindings: &bindings,
        transport: &transport,
        chooser: &chooser,
    };
    list::browse_routes(
        &ctx,
        &settings.api_url,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}
