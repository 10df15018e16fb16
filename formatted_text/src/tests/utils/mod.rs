// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod samples;
mod scripted_layout;

pub(crate) use samples::{colored, compile_default, surface};
pub(crate) use scripted_layout::ScriptedLayout;
