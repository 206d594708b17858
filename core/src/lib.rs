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

//! Core components for fetching signed requests.
//!
//! This crate provides the foundational types shared by the signing service
//! and the `fetch` binary.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading, HTTP sending, and environment access
//! - **Target**: The parsed, immutable form of the URL a request is sent to
//! - **Error**: The error type returned by every fallible operation in the workspace
//!
//! ## Example
//!
//! ```no_run
//! use fetch_core::{Context, StaticEnv, Target};
//!
//! # fn example() -> fetch_core::Result<()> {
//! let ctx = Context::new().with_env(StaticEnv::default());
//! let target = Target::parse("https://api.example.com/v1/hosts?page=2")?;
//! assert_eq!(target.host(), "api.example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::HttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::SigningCredential;
mod error;
pub use error::{Error, ErrorKind, Result};
mod request;
pub use request::Target;
