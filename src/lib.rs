// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive CLI.
//
// Module responsibilities:
// - `api`: the exchange client and the Assembly64 endpoint calls.
// - `transport`: request/response values and the blocking HTTP transport.
// - `query`: AQL query string construction.
// - `models`: response shapes for presets, results and content entries.
// - `config` / `error` / `logging`: ambient setup shared by the binary.
// - `ui`: prompts, listing and writing downloads to disk.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod transport;
pub mod ui;

pub use api::{ApiClient, ExchangeRequest, Payload, CONTENT_TYPE_BINARY, CONTENT_TYPE_JSON};
pub use config::{ClientConfig, Timeout};
pub use error::{Error, Result};
pub use query::build_query;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
