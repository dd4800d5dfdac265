// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod csv;
#[cfg(test)]
mod csv_test;
pub mod errors;
pub mod telemetry;
