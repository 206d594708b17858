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

mod cli;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cli::{AuthcurlArgs, Cli, Command};
use fetch_aws_v4::{Config, SignedRequest};
use fetch_core::{Context, OsEnv};
use fetch_file_read_tokio::TokioFileRead;
use fetch_http_send_reqwest::ReqwestHttpSend;
use http::Method;
use log::{debug, warn};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Authcurl(args) => authcurl(args).await,
    }
}

/// Send a signed GET to `args.url` and write the body to stdout.
async fn authcurl(args: AuthcurlArgs) -> Result<()> {
    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let config = args.apply(Config::load(&ctx).await?);
    debug!("resolved config: {config:?}");

    let http = ReqwestHttpSend::with_insecure_ssl(config.allow_insecure_ssl)?;
    let ctx = ctx.with_http_send(http);
    let cred = config.credential()?;

    let resp = SignedRequest::new(Method::GET, &args.url, &cred)?
        .perform(&ctx, "")
        .await?;
    if !resp.status().is_success() {
        warn!("{} responded with status {}", args.url, resp.status());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(resp.body())?;
    stdout.flush()?;
    Ok(())
}
