//! # spektrum-sdk
//!
//! Async client for the Spektrum planning and deployment API.
//!
//! Each operation issues exactly one HTTP request with `content-type:
//! application/json` and the `x-api-key` header, then maps the response to a
//! typed result or a [`SpektrumError`]. There are no retries, timeouts, or
//! caches; wrap calls in `tokio::time::timeout` if you need a deadline.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | [`create_project`](SpektrumClient::create_project) | POST | `/planning/project` |
//! | [`create_task`](SpektrumClient::create_task) | POST | `/planning/task` |
//! | [`leave_comment`](SpektrumClient::leave_comment) | POST | `/planning/task/leave-comment` |
//! | [`get_app_url`](SpektrumClient::get_app_url) | GET | `/deployment/projects/{id}/environments/DEV/entry-point` |
//! | [`code_and_deploy`](SpektrumClient::code_and_deploy) | POST | `/ai/module/development` |
//!
//! # Error Handling
//!
//! ```no_run
//! # use spektrum_sdk::{SpektrumClient, SpektrumError};
//! # async fn example() -> Result<(), SpektrumError> {
//! let client = SpektrumClient::from_env()?;
//! match client.get_app_url("prj-1").await {
//!     Ok(url) => println!("Deployed at {url}"),
//!     Err(SpektrumError::Request { status: 404, .. }) => println!("Not deployed yet"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod deployment;
mod error;
mod http;
mod planning;

pub use client::{API_KEY_HEADER, ApiRequest, SpektrumClient};
pub use error::{Result, SpektrumError};
pub use http::ResponseBody;

pub use reqwest::Method;
pub use spektrum_config::{ClientOptions, ConfigError, DEFAULT_ENDPOINT, ResolvedConfig};
pub use spektrum_core as model;
