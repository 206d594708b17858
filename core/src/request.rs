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

use crate::{Error, Result};
use http::Uri;

/// Target is the parsed form of the url a request is sent to.
///
/// It's immutable once parsed: signing reads from it but never writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    uri: Uri,
    host: String,
    path: String,
    query: Vec<(String, String)>,
}

impl Target {
    /// Parse target from an absolute url.
    ///
    /// Returns [`ErrorKind::InvalidTarget`](crate::ErrorKind::InvalidTarget)
    /// if the url can't be parsed or doesn't carry a host.
    pub fn parse(url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;

        if uri.scheme().is_none() {
            return Err(Error::invalid_target(format!("url {url} has no scheme")));
        }
        let host = match uri.host() {
            Some(host) if !host.is_empty() => host,
            _ => return Err(Error::invalid_target(format!("url {url} has no host"))),
        };
        // Userinfo must never leak into the host header.
        let host = match uri.port_u16() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let path = match uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };
        let query = uri
            .query()
            .map(|v| {
                form_urlencoded::parse(v.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Target {
            uri,
            host,
            path,
            query,
        })
    }

    /// The url this target was parsed from.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Host with the explicit port if present, like `example.com:8080`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path of the url, `/` if the url doesn't have one.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Percent decoded query pairs in the order they appear in the url.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Render query pairs sorted by key and then by value.
    ///
    /// ```shell
    /// [(c, d), (a, b)] with ("=", "&") => "a=b&c=d"
    /// ```
    ///
    /// Pairs are sorted on their decoded form, then `encode` is applied to
    /// every key and value before joining.
    pub fn query_to_string(
        &self,
        sep: &str,
        join: &str,
        encode: impl Fn(&str) -> String,
    ) -> String {
        let mut query = self.query.iter().collect::<Vec<_>>();
        query.sort();

        let mut s = String::with_capacity(16);
        for (idx, (k, v)) in query.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&encode(k));
            s.push_str(sep);
            s.push_str(&encode(v));
        }

        s
    }
}
