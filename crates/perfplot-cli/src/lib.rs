// Dweve PerfPlot - Benchmark comparison charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PerfPlot CLI library.
//!
//! Exposes the command definitions, configuration layering and pipeline
//! orchestration used by the `perfplot` binary so they can be tested and
//! embedded.
//!
//! - [`cli`]: clap command and argument definitions
//! - [`config`]: defaults, YAML file and command-line layering
//! - [`pipeline`]: parse, reconcile, plan and render
//! - [`report`]: console and JSON reconciliation report
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
