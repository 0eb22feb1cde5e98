// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, slice::Iter};

use recarray_type::{Result, Type};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub r#type: Type,
}

impl Column {
	pub fn new(name: impl Into<String>, r#type: Type) -> Self {
		Self {
			name: name.into(),
			r#type,
		}
	}
}

/// Ordered, uniquely named columns. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSchema {
	columns: Vec<Column>,
}

impl ColumnSchema {
	pub fn new(columns: Vec<Column>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(columns.len());
		for column in &columns {
			if !seen.insert(column.name.as_str()) {
				return Err(SchemaError::DuplicateColumn {
					column: column.name.clone(),
				}
				.into());
			}
		}

		Ok(Self {
			columns,
		})
	}

	/// Builds a schema from parallel name and type lists.
	pub fn from_parts(names: Vec<String>, types: Vec<Type>) -> Result<Self> {
		if names.len() != types.len() {
			return Err(SchemaError::CountMismatch {
				names: names.len(),
				types: types.len(),
			}
			.into());
		}

		Self::new(names.into_iter().zip(types).map(|(name, r#type)| Column::new(name, r#type)).collect())
	}

	/// Builds a schema from `(name, type token)` pairs, e.g.
	/// `[("id", "bigint"), ("tags", "varchar(32)")]`.
	pub fn parse(columns: &[(&str, &str)]) -> Result<Self> {
		let columns = columns
			.iter()
			.map(|(name, token)| {
				token.parse::<Type>().map(|r#type| Column::new(*name, r#type)).map_err(|cause| {
					SchemaError::InvalidTypeToken {
						column: name.to_string(),
						token: token.to_string(),
						cause,
					}
				})
			})
			.collect::<std::result::Result<Vec<_>, _>>()?;

		Self::new(columns)
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> Iter<'_, Column> {
		self.columns.iter()
	}

	pub fn column(&self, index: usize) -> Option<&Column> {
		self.columns.get(index)
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.iter().map(|c| c.name.as_str())
	}

	pub fn types(&self) -> impl Iterator<Item = &Type> {
		self.columns.iter().map(|c| &c.r#type)
	}
}

impl<'a> IntoIterator for &'a ColumnSchema {
	type Item = &'a Column;
	type IntoIter = Iter<'a, Column>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.iter()
	}
}
