// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! AWS SigV4 request signer.
//!
//! Build a [`SignedRequest`] from a [`Credential`], then either inspect the
//! canonical forms and the `Authorization` value or hand it to the transport
//! configured in [`fetch_core::Context`] with [`SignedRequest::perform`].
//!
//! ```no_run
//! use fetch_aws_v4::{Config, SignedRequest};
//! use fetch_core::{Context, OsEnv};
//! use fetch_file_read_tokio::TokioFileRead;
//! use fetch_http_send_reqwest::ReqwestHttpSend;
//! use http::Method;
//!
//! # async fn example() -> fetch_core::Result<()> {
//! let ctx = Context::new()
//!     .with_file_read(TokioFileRead)
//!     .with_http_send(ReqwestHttpSend::default())
//!     .with_env(OsEnv);
//!
//! let config = Config::load(&ctx).await?;
//! let cred = config.credential()?;
//!
//! let req = SignedRequest::new(Method::GET, "https://api.example.com/v1/hosts", &cred)?;
//! let resp = req.perform(&ctx, "").await?;
//! println!("{}", resp.status());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod canonical;
pub mod signer;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::SignedRequest;

mod constants;
pub use constants::DEFAULT_REGION;
