// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod ids;
pub mod models;
pub mod query;
pub mod repository;
pub mod row;
pub mod utils;

pub use error::{RepoError, RepoResult};
pub use query::{Filters, Page, QueryOptions, SortDirection};
pub use repository::{Entity, MemoryRepository, Repository, SqliteRepository, Store};
