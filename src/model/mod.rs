// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Immutable models of message interfaces, methods, parameters and types.
//!
//! Everything here is derived once per batch from the declarations and never
//! mutated after resolution.

mod interface;
mod method;
mod parameter;
mod return_type;
mod types;

pub use interface::{IdRange, InterfaceKind, MessageInterface};
pub use method::{FormatArgument, LogLevel, Message, MessageId, MessageMethod};
pub use parameter::{Parameter, ParameterRole, Transform};
pub use return_type::{ConstructionSignature, ConstructorShape, ReturnType, ThrowableType};
pub use types::{ArgumentType, TypeCatalog, TypeCategory};
