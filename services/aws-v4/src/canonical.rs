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

//! Canonical form of a request.
//!
//! Every function here is a pure read of the target and header set: calling
//! them twice without mutating the inputs yields byte-identical output.
//!
//! - [Create a canonical request](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#create-canonical-request)

use crate::constants::AWS_QUERY_ENCODE_SET;
use fetch_core::hash::hex_sha256;
use fetch_core::Target;
use http::header;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use percent_encoding::utf8_percent_encode;

/// Canonical URI: the path of the target, `/` when empty.
///
/// The path is used as parsed, no `.` or `..` segment is resolved.
pub fn canonical_uri(target: &Target) -> &str {
    match target.path() {
        "" => "/",
        v => v,
    }
}

/// Canonical query string: pairs sorted by decoded key then decoded value,
/// percent-encoded, rendered as `key=value` and joined by `&\n`.
///
/// # Note
///
/// SigV4 joins query pairs with a bare `&`. Endpoints verifying requests
/// signed by fetch expect `&\n`, so a strict SigV4 verifier will reject any
/// signed request that carries more than one query parameter.
pub fn canonical_query_string(target: &Target) -> String {
    target.query_to_string("=", "&\n", |v| {
        utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string()
    })
}

/// Canonical headers: `name:value\n` per header, sorted by name.
///
/// ```shell
/// [(host, example.com), (content-type, text/plain)] => "content-type:text/plain\nhost:example.com\n"
/// ```
pub fn canonical_headers(headers: &HeaderMap) -> String {
    let mut s = String::with_capacity(128);
    for (name, value) in canonical_header_entries(headers) {
        s.push_str(name);
        s.push(':');
        s.push_str(&value);
        s.push('\n');
    }
    s
}

/// Signed headers: sorted header names joined by `;`.
pub fn signed_headers(headers: &HeaderMap) -> String {
    canonical_header_entries(headers)
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(";")
}

/// Lowercase hex encoded SHA256 of the payload.
pub fn signed_payload(payload: &[u8]) -> String {
    hex_sha256(payload)
}

/// Canonical request:
///
/// ```shell
/// GET
/// /v1/network-hosts
/// baz=foo&
/// foo=bar
/// content-type:application/vnd.api+json
/// host:www.example.com
/// x-amz-date:20150830T123600Z
///
/// content-type;host;x-amz-date
/// e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
/// ```
pub fn canonical_request(
    method: &Method,
    target: &Target,
    headers: &HeaderMap,
    payload: &[u8],
) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    f.push_str(method.as_str());
    f.push('\n');
    f.push_str(canonical_uri(target));
    f.push('\n');
    f.push_str(&canonical_query_string(target));
    f.push('\n');
    // Already terminated by `\n`, the next one makes the blank line.
    f.push_str(&canonical_headers(headers));
    f.push('\n');
    f.push_str(&signed_headers(headers));
    f.push('\n');
    f.push_str(&signed_payload(payload));

    f
}

/// Lowercase hex encoded SHA256 of the canonical request.
pub fn hashed_canonical_request(
    method: &Method,
    target: &Target,
    headers: &HeaderMap,
    payload: &[u8],
) -> String {
    hex_sha256(canonical_request(method, target, headers, payload).as_bytes())
}

/// Collect `(name, normalized value)` sorted by name.
///
/// `HeaderName` is always lowercase, so names are used as is. Multiple
/// values of the same name are joined by `,` in insertion order. The
/// `authorization` header carries the signature itself and is never signed.
fn canonical_header_entries(headers: &HeaderMap) -> Vec<(&str, String)> {
    let mut entries = headers
        .keys()
        .filter(|name| *name != header::AUTHORIZATION)
        .map(|name| {
            let value = headers
                .get_all(name)
                .iter()
                .map(header_value_normalize)
                .collect::<Vec<_>>()
                .join(",");
            (name.as_str(), value)
        })
        .collect::<Vec<_>>();
    entries.sort_unstable_by(|l, r| l.0.cmp(r.0));

    entries
}

/// Normalize header value.
///
/// Values starting with `"` are kept verbatim. Others get every run of
/// whitespace collapsed into a single space and both ends trimmed.
fn header_value_normalize(v: &HeaderValue) -> String {
    let v = String::from_utf8_lossy(v.as_bytes());
    if v.starts_with('"') {
        return v.into_owned();
    }

    v.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CONTENT_TYPE, X_AMZ_DATE};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const URL: &str = "http://www.example.com/v1/network-hosts?foo=bar&baz=foo";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );
        headers.insert(header::HOST, HeaderValue::from_static("www.example.com"));
        headers.insert(X_AMZ_DATE, HeaderValue::from_static("20150830T123600Z"));
        headers
    }

    #[test]
    fn test_canonical_uri() {
        let target = Target::parse(URL).unwrap();
        assert_eq!(canonical_uri(&target), "/v1/network-hosts");

        let target = Target::parse("http://www.example.com").unwrap();
        assert_eq!(canonical_uri(&target), "/");
    }

    #[test]
    fn test_canonical_query_string() {
        let target = Target::parse(URL).unwrap();
        assert_eq!(canonical_query_string(&target), "baz=foo&\nfoo=bar");
    }

    #[test_case("http://www.example.com/", ""; "empty")]
    #[test_case("http://www.example.com/?b=2&a=1&b=1", "a=1&\nb=1&\nb=2"; "ties broken by value")]
    #[test_case("http://www.example.com/?flag&a=1", "a=1&\nflag="; "no value")]
    #[test_case("http://www.example.com/?q=a%20b&p=x/y", "p=x%2Fy&\nq=a%20b"; "reencoded")]
    #[test_case("http://www.example.com/?a%C3%A9=1&az=2", "az=2&\na%C3%A9=1"; "sorted before encoding")]
    fn test_canonical_query_string_cases(url: &str, expected: &str) {
        let target = Target::parse(url).unwrap();
        assert_eq!(canonical_query_string(&target), expected);
    }

    #[test]
    fn test_canonical_headers() {
        assert_eq!(
            canonical_headers(&default_headers()),
            "content-type:application/vnd.api+json\n\
             host:www.example.com\n\
             x-amz-date:20150830T123600Z\n"
        );
    }

    #[test]
    fn test_canonical_headers_with_spaces() {
        let mut headers = default_headers();
        headers.insert("foo", HeaderValue::from_static(r#""   oh  yeah""#));
        headers.insert("bar", HeaderValue::from_static("   oh     yeah"));

        assert_eq!(
            canonical_headers(&headers),
            "bar:oh yeah\n\
             content-type:application/vnd.api+json\n\
             foo:\"   oh  yeah\"\n\
             host:www.example.com\n\
             x-amz-date:20150830T123600Z\n"
        );
    }

    #[test_case("plain", "plain"; "untouched")]
    #[test_case("  a \t b  ", "a b"; "tabs and ends")]
    #[test_case(r#""  quoted  ""#, r#""  quoted  ""#; "quoted kept")]
    #[test_case(r#"  "not first""#, r#""not first""#; "quote after spaces collapses")]
    #[test_case("", ""; "empty")]
    fn test_header_value_normalize(input: &'static str, expected: &str) {
        assert_eq!(
            header_value_normalize(&HeaderValue::from_static(input)),
            expected
        );
    }

    #[test]
    fn test_canonical_headers_joins_multiple_values() {
        let mut headers = HeaderMap::new();
        headers.append("x-multi", HeaderValue::from_static("b"));
        headers.append("x-multi", HeaderValue::from_static("  a  "));

        assert_eq!(canonical_headers(&headers), "x-multi:b,a\n");
        assert_eq!(signed_headers(&headers), "x-multi");
    }

    #[test]
    fn test_authorization_is_never_signed() {
        let mut headers = default_headers();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("AWS4-HMAC-SHA256 Credential=..."),
        );

        assert_eq!(signed_headers(&headers), "content-type;host;x-amz-date");
        assert!(!canonical_headers(&headers).contains("authorization"));
    }

    #[test]
    fn test_signed_headers() {
        assert_eq!(
            signed_headers(&default_headers()),
            "content-type;host;x-amz-date"
        );
    }

    #[test]
    fn test_signed_payload() {
        assert_eq!(signed_payload(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_canonical_request() {
        let target = Target::parse(URL).unwrap();

        let expected = "GET\n\
                        /v1/network-hosts\n\
                        baz=foo&\nfoo=bar\n\
                        content-type:application/vnd.api+json\n\
                        host:www.example.com\n\
                        x-amz-date:20150830T123600Z\n\
                        \n\
                        content-type;host;x-amz-date\n"
            .to_string()
            + EMPTY_SHA256;

        assert_eq!(
            canonical_request(&Method::GET, &target, &default_headers(), b""),
            expected
        );
    }

    #[test]
    fn test_hashed_canonical_request() {
        let target = Target::parse(URL).unwrap();
        let headers = default_headers();

        for payload in [&b""[..], b"{}", br#"{"data":{"type":"network-hosts"}}"#] {
            let creq = canonical_request(&Method::POST, &target, &headers, payload);
            assert_eq!(
                hashed_canonical_request(&Method::POST, &target, &headers, payload),
                hex_sha256(creq.as_bytes())
            );
        }

        assert_eq!(
            hashed_canonical_request(&Method::GET, &target, &headers, b""),
            "5be77cdd10f0ee94ed2d43696335a8221b5534d65758b765f356477b455c14f9"
        );
    }
}
