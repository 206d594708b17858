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

use crate::canonical;
use crate::constants::{DEFAULT_CONTENT_TYPE, X_AMZ_DATE};
use crate::signer;
use crate::Credential;
use bytes::Bytes;
use fetch_core::time::{format_date, format_iso8601, now, DateTime};
use fetch_core::{Context, Error, Result, SigningCredential, Target};
use http::header::{self, HeaderName};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;

/// SignedRequest is one outgoing request signed with AWS SigV4.
///
/// The signing time is captured once at construction and reused for every
/// canonicalization and signing call of this instance. A request that has to
/// be resent must be built again to get a fresh time.
///
/// ```no_run
/// use fetch_aws_v4::{Credential, SignedRequest};
/// use fetch_core::Context;
/// use http::Method;
///
/// # async fn example(ctx: Context, cred: Credential) -> fetch_core::Result<()> {
/// let req = SignedRequest::new(Method::GET, "https://api.example.com/v1/hosts", &cred)?;
/// let resp = req.perform(&ctx, "").await?;
/// println!("{}", String::from_utf8_lossy(resp.body()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SignedRequest<'a> {
    method: Method,
    target: Target,
    headers: HeaderMap,
    time: DateTime,
    credential: &'a Credential,
}

impl<'a> SignedRequest<'a> {
    /// Create a new signed request.
    ///
    /// Seeds the `host`, `content-type` and `x-amz-date` headers. Returns
    /// [`ErrorKind::InvalidTarget`](fetch_core::ErrorKind::InvalidTarget) if
    /// `url` can't be parsed or has no host.
    pub fn new(method: Method, url: &str, credential: &'a Credential) -> Result<Self> {
        let target = Target::parse(url)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_str(target.host())?);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );

        let mut req = Self {
            method,
            target,
            headers,
            time: now(),
            credential,
        };
        req.insert_date_header()?;

        Ok(req)
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Result<Self> {
        self.time = time;
        self.insert_date_header()?;
        Ok(self)
    }

    fn insert_date_header(&mut self) -> Result<()> {
        let value = HeaderValue::try_from(format_iso8601(self.time))?;
        self.headers.insert(X_AMZ_DATE, value);
        Ok(())
    }

    /// Insert a header, overwriting any previous value of the same name.
    ///
    /// Names are case-insensitive. The new value shows up in every
    /// canonicalization computed afterwards.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Parsed target url.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Current header set.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Signing time captured at construction.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// See [`canonical::canonical_uri`].
    pub fn canonical_uri(&self) -> &str {
        canonical::canonical_uri(&self.target)
    }

    /// See [`canonical::canonical_query_string`].
    pub fn canonical_query_string(&self) -> String {
        canonical::canonical_query_string(&self.target)
    }

    /// See [`canonical::canonical_headers`].
    pub fn canonical_headers(&self) -> String {
        canonical::canonical_headers(&self.headers)
    }

    /// See [`canonical::signed_headers`].
    pub fn signed_headers(&self) -> String {
        canonical::signed_headers(&self.headers)
    }

    /// See [`canonical::signed_payload`].
    pub fn signed_payload(&self, payload: &[u8]) -> String {
        canonical::signed_payload(payload)
    }

    /// See [`canonical::canonical_request`].
    pub fn canonical_request(&self, payload: &[u8]) -> String {
        canonical::canonical_request(&self.method, &self.target, &self.headers, payload)
    }

    /// See [`canonical::hashed_canonical_request`].
    pub fn hashed_canonical_request(&self, payload: &[u8]) -> String {
        canonical::hashed_canonical_request(&self.method, &self.target, &self.headers, payload)
    }

    /// Calculate the `Authorization` header value for `payload`.
    ///
    /// Returns [`ErrorKind::MissingCredential`](fetch_core::ErrorKind::MissingCredential)
    /// if the access key or secret key is empty.
    pub fn authorization(&self, payload: &[u8]) -> Result<String> {
        let cred = self.credential;
        if !cred.is_valid() {
            return Err(Error::missing_credential(
                "access key and secret key are required to sign request",
            ));
        }

        let date = format_date(self.time);
        let scope = signer::credential_scope(&date, &cred.region, &cred.service);
        debug!("calculated scope: {scope}");

        let string_to_sign = signer::string_to_sign(
            &format_iso8601(self.time),
            &scope,
            &self.hashed_canonical_request(payload),
        );
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            signer::derive_signing_key(&cred.secret_access_key, &date, &cred.region, &cred.service);
        let signature = signer::signature(&signing_key, &string_to_sign);

        Ok(signer::authorization_header(
            &cred.access_key_id,
            &scope,
            &self.signed_headers(),
            &signature,
        ))
    }

    /// Calculate the `Authorization` header for `payload` and attach it.
    ///
    /// Signing again after adding headers recalculates it from scratch.
    pub fn sign(&mut self, payload: &[u8]) -> Result<()> {
        let mut authorization = HeaderValue::from_str(&self.authorization(payload)?)?;
        authorization.set_sensitive(true);
        self.headers.insert(header::AUTHORIZATION, authorization);

        Ok(())
    }

    /// Sign the request and hand it to the transport in `ctx`.
    ///
    /// The response or the transport error is returned unchanged. Nothing is
    /// retried.
    pub async fn perform(
        mut self,
        ctx: &Context,
        payload: impl Into<Bytes>,
    ) -> Result<http::Response<Bytes>> {
        let payload = payload.into();
        self.sign(&payload)?;

        let mut req = http::Request::new(payload);
        *req.method_mut() = self.method;
        *req.uri_mut() = self.target.uri().clone();
        *req.headers_mut() = self.headers;

        ctx.http_send(req).await
    }
}
