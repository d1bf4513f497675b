// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod validator;

pub use validator::{Validator, ValidatorScope};
