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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Signing algorithm and scope terminator.
pub const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";
pub const AWS4_REQUEST: &str = "aws4_request";

// Headers used in signed requests.
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const DEFAULT_CONTENT_TYPE: &str = "application/vnd.api+json";

// Config values.
/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";
pub const CONFIG_FILE_NAME: &str = "authcurl";
/// Config file formats tried in each search path, in order.
pub const CONFIG_FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];
/// Directories searched for the config file, relative to the home dir, in order.
pub const CONFIG_SEARCH_PATHS: [&str; 3] = ["~/.authcurl", "~/.config/authcurl", "~/.config"];

// Env values used to configure fetch.
pub const AUTH_ACCESS_KEY: &str = "AUTH_ACCESS_KEY";
pub const AUTH_SECRET_KEY: &str = "AUTH_SECRET_KEY";
pub const AUTH_REGION: &str = "AUTH_REGION";
pub const AUTH_SERVICE: &str = "AUTH_SERVICE";
pub const AUTH_ALLOW_INSECURE_SSL: &str = "AUTH_ALLOW_INSECURE_SSL";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
