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

use crate::constants::*;
use crate::Credential;
use fetch_core::utils::Redact;
use fetch_core::{Context, Error, Result};
use log::debug;
use serde::Deserialize;
use std::fmt::{Debug, Formatter};

/// Config for fetch.
///
/// Values are resolved in this order, later sources win:
///
/// - defaults
/// - config file: `authcurl.json` or `authcurl.toml` found in `~/.authcurl`,
///   `~/.config/authcurl` or `~/.config`. YAML files are not read.
/// - env values prefixed with `AUTH_`
/// - command line flags, applied by the caller
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - env value: [`AUTH_ACCESS_KEY`]
    /// - config file: `access_key`
    /// - default to empty
    pub access_key: String,
    /// `secret_key` will be loaded from
    ///
    /// - env value: [`AUTH_SECRET_KEY`]
    /// - config file: `secret_key`
    /// - default to empty
    pub secret_key: String,
    /// `region` will be loaded from
    ///
    /// - env value: [`AUTH_REGION`]
    /// - config file: `region`
    /// - default to `us-east-1`
    pub region: String,
    /// `service` will be loaded from
    ///
    /// - env value: [`AUTH_SERVICE`]
    /// - config file: `service`
    /// - default to empty
    pub service: String,
    /// `allow_insecure_ssl` will be loaded from
    ///
    /// - env value: [`AUTH_ALLOW_INSECURE_SSL`]
    /// - config file: `allow_insecure_ssl`
    /// - default to `false`
    pub allow_insecure_ssl: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            region: DEFAULT_REGION.to_string(),
            service: String::new(),
            allow_insecure_ssl: false,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("region", &self.region)
            .field("service", &self.service)
            .field("allow_insecure_ssl", &self.allow_insecure_ssl)
            .finish()
    }
}

/// Keys accepted in the config file, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    access_key: Option<String>,
    secret_key: Option<String>,
    #[serde(alias = "Region")]
    region: Option<String>,
    service: Option<String>,
    allow_insecure_ssl: Option<bool>,
}

impl Config {
    /// Load config from defaults, config file and env.
    pub async fn load(ctx: &Context) -> Result<Self> {
        Self::default().from_config_file(ctx).await?.from_env(ctx)
    }

    /// Load config from the first config file found in the search paths.
    ///
    /// Missing files are skipped. A file that exists but can't be parsed is
    /// an error.
    pub async fn from_config_file(mut self, ctx: &Context) -> Result<Self> {
        for dir in CONFIG_SEARCH_PATHS {
            for ext in CONFIG_FILE_EXTENSIONS {
                let path = format!("{dir}/{CONFIG_FILE_NAME}.{ext}");
                let Some(path) = ctx.expand_home_dir(&path) else {
                    debug!("failed to expand homedir for path: {path}");
                    return Ok(self);
                };

                let content = match ctx.file_read_as_string(&path).await {
                    Ok(content) => content,
                    Err(err) => {
                        debug!("config file {path} not loaded: {err:?}");
                        continue;
                    }
                };

                let file: ConfigFile = match ext {
                    "json" => serde_json::from_str(&content).map_err(|e| {
                        Error::config_invalid(format!("failed to parse config file {path}"))
                            .with_source(e)
                    })?,
                    _ => toml::from_str(&content).map_err(|e| {
                        Error::config_invalid(format!("failed to parse config file {path}"))
                            .with_source(e)
                    })?,
                };
                debug!("loaded config file {path}");

                self.apply(file);
                return Ok(self);
            }
        }

        debug!("no config file found");
        Ok(self)
    }

    /// Load config from env values prefixed with `AUTH_`.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(AUTH_ACCESS_KEY) {
            self.access_key = v;
        }
        if let Some(v) = ctx.env_var(AUTH_SECRET_KEY) {
            self.secret_key = v;
        }
        if let Some(v) = ctx.env_var(AUTH_REGION) {
            self.region = v;
        }
        if let Some(v) = ctx.env_var(AUTH_SERVICE) {
            self.service = v;
        }
        if let Some(v) = ctx.env_var(AUTH_ALLOW_INSECURE_SSL) {
            self.allow_insecure_ssl = parse_bool(&v).ok_or_else(|| {
                Error::config_invalid(format!(
                    "env {AUTH_ALLOW_INSECURE_SSL} must be a boolean, got {v}"
                ))
            })?;
        }

        Ok(self)
    }

    /// Build the credential used to sign requests.
    ///
    /// Returns [`ErrorKind::MissingCredential`](fetch_core::ErrorKind::MissingCredential)
    /// if the access key or secret key is empty.
    pub fn credential(&self) -> Result<Credential> {
        if self.access_key.is_empty() {
            return Err(Error::missing_credential(format!(
                "access key is not set, use --access-key, {AUTH_ACCESS_KEY} or the config file"
            )));
        }
        if self.secret_key.is_empty() {
            return Err(Error::missing_credential(format!(
                "secret key is not set, use --secret-key, {AUTH_SECRET_KEY} or the config file"
            )));
        }

        Ok(Credential {
            access_key_id: self.access_key.clone(),
            secret_access_key: self.secret_key.clone(),
            region: self.region.clone(),
            service: self.service.clone(),
        })
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(v) = file.access_key {
            self.access_key = v;
        }
        if let Some(v) = file.secret_key {
            self.secret_key = v;
        }
        if let Some(v) = file.region {
            self.region = v;
        }
        if let Some(v) = file.service {
            self.service = v;
        }
        if let Some(v) = file.allow_insecure_ssl {
            self.allow_insecure_ssl = v;
        }
    }
}

/// Parse boolean the way `strconv.ParseBool` does.
fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
