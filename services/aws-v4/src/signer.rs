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

//! SigV4 signature calculation.
//!
//! - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)

use crate::constants::{AWS4_HMAC_SHA256, AWS4_REQUEST};
use fetch_core::hash::{hex_hmac_sha256, hmac_sha256_chain};

/// Scope: `20220313/<region>/<service>/aws4_request`
///
/// `date` is the `YYYYMMDD` prefix of the signing time.
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{AWS4_REQUEST}")
}

/// StringToSign:
///
/// ```shell
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(timestamp: &str, scope: &str, hashed_canonical_request: &str) -> String {
    format!("{AWS4_HMAC_SHA256}\n{timestamp}\n{scope}\n{hashed_canonical_request}")
}

/// Derive the signing key from secret key.
///
/// ```shell
/// kDate    = HMAC("AWS4" + secret, date)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
pub fn derive_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let secret = format!("AWS4{secret}");

    hmac_sha256_chain(
        secret.as_bytes(),
        [
            date.as_bytes(),
            region.as_bytes(),
            service.as_bytes(),
            AWS4_REQUEST.as_bytes(),
        ],
    )
}

/// Lowercase hex encoded HMAC-SHA256 of string to sign.
pub fn signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

/// Value of the `Authorization` header.
pub fn authorization_header(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "{AWS4_HMAC_SHA256} Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fetch_core::hash::hmac_sha256;
    use pretty_assertions::assert_eq;

    // Example values published in the SigV4 documentation.
    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
    const DATE: &str = "20150830";

    #[test]
    fn test_credential_scope() {
        assert_eq!(
            credential_scope(DATE, "us-east-1", "iam"),
            "20150830/us-east-1/iam/aws4_request"
        );
    }

    #[test]
    fn test_string_to_sign() {
        assert_eq!(
            string_to_sign(
                "20150830T123600Z",
                "20150830/us-east-1/iam/aws4_request",
                "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
            ),
            "AWS4-HMAC-SHA256\n\
             20150830T123600Z\n\
             20150830/us-east-1/iam/aws4_request\n\
             f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59"
        );
    }

    #[test]
    fn test_derive_signing_key() {
        let key = derive_signing_key(SECRET, DATE, "us-east-1", "iam");
        assert_eq!(
            hex::encode(key),
            "c4afb1cc5771d871763a393e44b703571b55cc28424d1a5e86da6ed3c154a4b9"
        );
    }

    #[test]
    fn test_derive_signing_key_step_by_step() {
        let k_date = hmac_sha256(format!("AWS4{SECRET}").as_bytes(), DATE.as_bytes());
        let k_region = hmac_sha256(&k_date, b"us-east-1");
        let k_service = hmac_sha256(&k_region, b"iam");
        let k_signing = hmac_sha256(&k_service, b"aws4_request");

        assert_eq!(derive_signing_key(SECRET, DATE, "us-east-1", "iam"), k_signing);
    }

    #[test]
    fn test_signature() {
        let key = derive_signing_key(SECRET, DATE, "us-east-1", "iam");
        let sts = string_to_sign(
            "20150830T123600Z",
            "20150830/us-east-1/iam/aws4_request",
            "f536975d06c0309214f805bb90ccff089219ecd68b2577efef23edd43b7e1a59",
        );

        assert_eq!(
            signature(&key, &sts),
            "5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(
            authorization_header(
                "AKIDEXAMPLE",
                "20150830/us-east-1/iam/aws4_request",
                "content-type;host;x-amz-date",
                "5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
            ),
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/iam/aws4_request, \
             SignedHeaders=content-type;host;x-amz-date, \
             Signature=5d672d79c15b13162d9279b0855cfba6789a8edb4c82c400e06b5924a6f2b5d7"
        );
    }
}
