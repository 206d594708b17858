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

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use fetch_aws_v4::signer;
use fetch_aws_v4::{Credential, SignedRequest};
use http::Method;
use once_cell::sync::Lazy;

criterion_group!(benches, bench);
criterion_main!(benches);

static CREDENTIAL: Lazy<Credential> = Lazy::new(|| Credential {
    access_key_id: "access_key_id".to_string(),
    secret_access_key: "secret_access_key".to_string(),
    region: "us-east-1".to_string(),
    service: "execute-api".to_string(),
});

const URL: &str = "http://127.0.0.1:9000/v1/network-hosts?foo=bar&baz=foo";
const PAYLOAD: &[u8] = br#"{"data":{"type":"network-hosts"}}"#;

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("aws_v4");

    group.bench_function("canonical_request", |b| {
        let req = SignedRequest::new(Method::GET, URL, &CREDENTIAL).expect("url must be valid");

        b.iter(|| req.canonical_request(PAYLOAD))
    });

    group.bench_function("derive_signing_key", |b| {
        b.iter(|| {
            signer::derive_signing_key(
                &CREDENTIAL.secret_access_key,
                "20150830",
                &CREDENTIAL.region,
                &CREDENTIAL.service,
            )
        })
    });

    group.bench_function("sign", |b| {
        b.iter(|| {
            let mut req =
                SignedRequest::new(Method::GET, URL, &CREDENTIAL).expect("url must be valid");
            req.sign(PAYLOAD).expect("must success");
            req
        })
    });

    group.finish()
}
