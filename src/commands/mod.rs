// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod debts;
pub mod doctor;
pub mod exporter;
pub mod income;
pub mod plan;
pub mod schedule;
pub mod strategy;
pub mod summary;
