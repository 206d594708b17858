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

//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Digest;
use sha2::Sha256;

/// Hex encoded SHA256 hash.
///
/// Use this function instead of `hex::encode(sha256(content))` can reduce
/// extra copy.
pub fn hex_sha256(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content).as_slice())
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Chained HMAC with SHA256 hash.
///
/// Folds `messages` from left to right, keying every step with the raw
/// output of the previous one:
///
/// ```shell
/// hmac(hmac(hmac(key, m0), m1), m2)
/// ```
///
/// An empty `messages` returns `key` unchanged.
pub fn hmac_sha256_chain<'a>(key: &[u8], messages: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    messages
        .into_iter()
        .fold(key.to_vec(), |key, msg| hmac_sha256(&key, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_sha256_empty() {
        assert_eq!(
            hex_sha256(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hex_hmac_sha256_matches_raw() {
        let key = b"key";
        let msg = b"The quick brown fox jumps over the lazy dog";

        assert_eq!(
            hex_hmac_sha256(key, msg),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
        assert_eq!(hex::encode(hmac_sha256(key, msg)), hex_hmac_sha256(key, msg));
    }

    #[test]
    fn test_hmac_sha256_chain_folds_left() {
        let step1 = hmac_sha256(b"seed", b"a");
        let step2 = hmac_sha256(&step1, b"b");
        let step3 = hmac_sha256(&step2, b"c");

        let chained = hmac_sha256_chain(b"seed", [&b"a"[..], b"b", b"c"]);
        assert_eq!(chained, step3);
    }

    #[test]
    fn test_hmac_sha256_chain_empty() {
        let messages: [&[u8]; 0] = [];
        assert_eq!(hmac_sha256_chain(b"seed", messages), b"seed".to_vec());
    }
}
