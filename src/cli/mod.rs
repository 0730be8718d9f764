pub mod commands;
pub mod errors;
pub mod info;
pub mod render;
pub mod tracing_init;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "apictl",
    author,
    version,
    about = "Make requests against the API described by the embedded API description",
    long_about = "Make requests against the API described by the embedded API description.\n\n\
                  The HTTP method is inferred from the request:\n  \
                  - No payload: GET\n  \
                  - With payload: POST (or PATCH/PUT if no POST exists for the path)\n\n\
                  Placeholders such as {app_id} are filled from APICTL_APP_ID,\n\
                  APICTL_INSTALL_ID and APICTL_ORG_ID, or picked interactively.\n\n\
                  Examples:\n  \
                  apictl /v1/apps\n  \
                  apictl /v1/apps -q limit=5\n  \
                  apictl /v1/apps '{\"name\":\"my-app\"}'\n  \
                  apictl -X DELETE /v1/apps/{app_id}\n  \
                  apictl /v1/apps/{app_id} --info\n  \
                  apictl --list"
)]
pub struct Cli {
    /// API path, literal or templated (e.g. /v1/apps/{app_id})
    pub path: Option<String>,

    /// Raw JSON request body
    pub payload: Option<String>,

    /// HTTP method override (GET, POST, PUT, PATCH, DELETE)
    #[arg(short = 'X', long = "method", value_name = "METHOD")]
    pub method: Option<String>,

    /// Query parameter as key=value (repeatable)
    #[arg(short = 'q', long = "query", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub query: Vec<String>,

    /// Browse endpoints, then print, execute or show docs for the pick
    #[arg(long)]
    pub list: bool,

    /// Show endpoint details (params, body schema) instead of executing
    #[arg(long)]
    pub info: bool,

    /// Output raw response bodies without formatting
    #[arg(long)]
    pub raw: bool,

    /// Output all errors as structured JSON to stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,
}
