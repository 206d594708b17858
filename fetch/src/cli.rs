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

use clap::{Args, Parser, Subcommand};
use fetch_aws_v4::Config;

/// Fetch requests from authenticated API endpoints.
#[derive(Parser, Debug)]
#[command(name = "fetch", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch requests from aws-authenticated API endpoints.
    Authcurl(AuthcurlArgs),
}

/// Flags left unset keep the value loaded from the config file or `AUTH_*`
/// env.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct AuthcurlArgs {
    /// URL to fetch.
    pub url: String,

    /// AWS access key.
    #[arg(long)]
    pub access_key: Option<String>,

    /// AWS secret key.
    #[arg(long)]
    pub secret_key: Option<String>,

    /// AWS region [default: us-east-1].
    #[arg(short, long)]
    pub region: Option<String>,

    /// AWS service name.
    #[arg(short, long)]
    pub service: Option<String>,

    /// Accept invalid TLS certificates.
    #[arg(
        short = 'k',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_insecure_ssl: Option<bool>,
}

impl AuthcurlArgs {
    /// Override `config` with every flag given on the command line.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(v) = &self.access_key {
            config.access_key = v.clone();
        }
        if let Some(v) = &self.secret_key {
            config.secret_key = v.clone();
        }
        if let Some(v) = &self.region {
            config.region = v.clone();
        }
        if let Some(v) = &self.service {
            config.service = v.clone();
        }
        if let Some(v) = self.allow_insecure_ssl {
            config.allow_insecure_ssl = v;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> AuthcurlArgs {
        let cli = Cli::try_parse_from(args).expect("args must be valid");
        match cli.command {
            Command::Authcurl(args) => args,
        }
    }

    #[test]
    fn test_parse_url_only() {
        let args = parse(&["fetch", "authcurl", "https://api.example.com/v1/hosts"]);
        assert_eq!(
            args,
            AuthcurlArgs {
                url: "https://api.example.com/v1/hosts".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "fetch",
            "authcurl",
            "--access-key",
            "AKIDEXAMPLE",
            "--secret-key",
            "secret",
            "-r",
            "eu-west-1",
            "-s",
            "execute-api",
            "-k",
            "https://api.example.com/",
        ]);
        assert_eq!(
            args,
            AuthcurlArgs {
                url: "https://api.example.com/".to_string(),
                access_key: Some("AKIDEXAMPLE".to_string()),
                secret_key: Some("secret".to_string()),
                region: Some("eu-west-1".to_string()),
                service: Some("execute-api".to_string()),
                allow_insecure_ssl: Some(true),
            }
        );
    }

    #[test]
    fn test_parse_explicit_false() {
        let args = parse(&[
            "fetch",
            "authcurl",
            "--allow-insecure-ssl=false",
            "https://api.example.com/",
        ]);
        assert_eq!(args.allow_insecure_ssl, Some(false));
    }

    #[test]
    fn test_parse_requires_url() {
        assert!(Cli::try_parse_from(["fetch", "authcurl"]).is_err());
        assert!(Cli::try_parse_from(["fetch"]).is_err());
    }

    #[test]
    fn test_apply_only_given_flags() {
        let config = Config {
            access_key: "from-config".to_string(),
            secret_key: "config-secret".to_string(),
            region: "ap-southeast-2".to_string(),
            service: "execute-api".to_string(),
            allow_insecure_ssl: true,
        };

        let args = AuthcurlArgs {
            url: "https://api.example.com/".to_string(),
            access_key: Some("from-flag".to_string()),
            ..Default::default()
        };

        let config = args.apply(config);
        assert_eq!(config.access_key, "from-flag");
        assert_eq!(config.secret_key, "config-secret");
        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.service, "execute-api");
        assert!(config.allow_insecure_ssl);
    }

    #[test]
    fn test_apply_to_defaults() {
        let args = parse(&["fetch", "authcurl", "-s", "execute-api", "https://x/"]);

        let config = args.apply(Config::default());
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.service, "execute-api");
        assert!(!config.allow_insecure_ssl);
    }
}
