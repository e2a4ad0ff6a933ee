// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The generic DAO.
//!
//! [`BaseDao`] gives any [`Entity`] a full set of CRUD, count and pagination
//! operations over a [`SqlExecutor`]. Statements come from the entity
//! descriptor resolved once at construction; no per-entity SQL is written.
//!
//! # Call flow
//!
//! ```text
//! dao.update_selective(&order)
//!   ├── statement::update_selective(descriptor, order)   validation, no I/O
//!   ├── hooks.before_update(order)                       when enabled
//!   ├── executor.execute(sql, params)                    the only await on I/O
//!   └── hooks.after_update(order, affected)              when enabled
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use fastsql::prelude::*;
//!
//! let dao = BaseDao::<Order, _>::new(PgExecutor::new(pool), DaoConfig::default())?;
//!
//! dao.insert_selective(&order).await?;
//! let found = dao.select_one_by_id(&42).await?;
//! let page = dao
//!     .select_page_where("total > :min", 2, 20, params! { "min" => 100 })
//!     .await?;
//! ```
//!
//! # Atomicity
//!
//! Each call sends its statements one by one. [`BaseDao::insert_or_update`]
//! looks the key up then writes, and paginated selects run the row and count queries
//! separately; neither pair is atomic unless the executor runs inside a
//! transaction.

use std::sync::Arc;

use crate::{
    config::DaoConfig,
    descriptor::EntityDescriptor,
    dialect::Dialect,
    entity::Entity,
    error::{ConfigError, DaoError},
    executor::SqlExecutor,
    hooks::{DaoHooks, DefaultHooks},
    mapper::{FieldRowMapper, RowMapper},
    page::{PageRequest, PageResult, build_count_query, build_rows_query},
    params::{Params, Row},
    statement::{self, Statement},
    value::{ToValue, Value, ValueError}
};

/// Result of a DAO operation over executor `X`.
pub type DaoResult<T, X> = Result<T, DaoError<<X as SqlExecutor>::Error>>;

/// Generic data-access object for entity `E` over executor `X`.
pub struct BaseDao<E: Entity, X> {
    executor:   X,
    descriptor: Arc<EntityDescriptor<E>>,
    config:     DaoConfig,
    hooks:      Arc<dyn DaoHooks<E>>,
    mapper:     Arc<dyn RowMapper<E>>
}

impl<E, X> BaseDao<E, X>
where
    E: Entity + Default,
    X: SqlExecutor
{
    /// Create a DAO that maps rows with [`FieldRowMapper`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the entity metadata is invalid.
    pub fn new(executor: X, config: DaoConfig) -> Result<Self, ConfigError> {
        Self::with_mapper(executor, config, FieldRowMapper)
    }
}

impl<E, X> BaseDao<E, X>
where
    E: Entity,
    X: SqlExecutor
{
    /// Create a DAO with a custom row mapper.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the entity metadata is invalid.
    pub fn with_mapper(
        executor: X,
        config: DaoConfig,
        mapper: impl RowMapper<E> + 'static
    ) -> Result<Self, ConfigError> {
        let descriptor = EntityDescriptor::resolve(&config.naming)?;
        Ok(Self {
            executor,
            descriptor: Arc::new(descriptor),
            config,
            hooks: Arc::new(DefaultHooks),
            mapper: Arc::new(mapper)
        })
    }

    /// Replace the lifecycle hooks.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl DaoHooks<E> + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Resolved entity metadata.
    pub fn descriptor(&self) -> &EntityDescriptor<E> {
        &self.descriptor
    }

    /// Configuration in effect.
    pub const fn config(&self) -> &DaoConfig {
        &self.config
    }

    /// SQL dialect in effect.
    pub const fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Underlying executor.
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    /// Insert every field of `entity`, binding `NULL` for unset ones.
    ///
    /// Returns the affected row count.
    pub async fn insert(&self, entity: &E) -> DaoResult<u64, X> {
        let statement = statement::insert(&self.descriptor, entity);
        self.run_insert(entity, statement).await
    }

    /// Insert the non-null fields of `entity`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyFieldSet`](crate::ValidationError::EmptyFieldSet)
    /// when no non-key field is set; nothing is sent.
    pub async fn insert_selective(&self, entity: &E) -> DaoResult<u64, X> {
        let statement = statement::insert_selective(&self.descriptor, entity)?;
        self.run_insert(entity, statement).await
    }

    /// Update every non-key field of `entity` by primary key.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingPrimaryKeyValue`](crate::ValidationError::MissingPrimaryKeyValue)
    /// when the key is unset; nothing is sent.
    pub async fn update(&self, entity: &E) -> DaoResult<u64, X> {
        let statement = statement::update(&self.descriptor, entity)?;
        self.run_update(entity, statement).await
    }

    /// Update the non-null non-key fields of `entity` by primary key.
    pub async fn update_selective(&self, entity: &E) -> DaoResult<u64, X> {
        let statement = statement::update_selective(&self.descriptor, entity)?;
        self.run_update(entity, statement).await
    }

    /// Update exactly `columns` of `entity` by primary key.
    ///
    /// Columns may be given as column names or field names.
    pub async fn update_columns(&self, entity: &E, columns: &[&str]) -> DaoResult<u64, X> {
        let statement = statement::update_columns(&self.descriptor, entity, columns)?;
        self.run_update(entity, statement).await
    }

    /// Insert `entity` when its key is unset or unknown, update it otherwise.
    ///
    /// Looks the key up with [`select_one_by_id`](Self::select_one_by_id)
    /// first. The lookup and the write are separate statements: a concurrent writer can
    /// insert the same key in between, in which case the insert fails with the
    /// store's constraint error.
    pub async fn insert_or_update(&self, entity: &E) -> DaoResult<u64, X> {
        let key = self.descriptor.key_value(entity);
        if key.is_unset() {
            return self.insert(entity).await;
        }
        match self.select_one_by_key(key).await? {
            None => self.insert(entity).await,
            Some(_) => self.update(entity).await
        }
    }

    /// Delete the row with primary key `id`.
    pub async fn delete_one_by_id(&self, id: &E::Id) -> DaoResult<u64, X> {
        let Statement {
            sql,
            params
        } = statement::delete_by_id(&self.descriptor, id.to_value());
        if self.config.hooks.before_delete {
            self.hooks.before_delete(id).await;
        }
        let affected = self.execute(&sql, &params).await?;
        if self.config.hooks.after_delete {
            self.hooks.after_delete(id, affected).await;
        }
        Ok(affected)
    }

    /// Delete every row of the table.
    pub async fn delete_all(&self) -> DaoResult<u64, X> {
        let sql = statement::delete_where(&self.descriptor, None);
        self.execute(&sql, &Params::None).await
    }

    /// Delete the rows matching `condition`.
    ///
    /// `condition` is a raw `WHERE` fragment. Use
    /// [`delete_all`](Self::delete_all) to empty the table.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyCondition`](crate::ValidationError::EmptyCondition)
    /// for a blank condition; nothing is sent.
    pub async fn delete_where(&self, condition: &str, params: Params) -> DaoResult<u64, X> {
        let condition = statement::require_condition(&self.descriptor, condition, "delete_where")?;
        let sql = statement::delete_where(&self.descriptor, Some(condition));
        self.execute(&sql, &params).await
    }

    /// Delete each row whose primary key is in `ids`, as one batch.
    ///
    /// Returns one affected row count per id. An empty `ids` returns an empty
    /// result without calling the executor.
    pub async fn delete_in_batch(&self, ids: &[E::Id]) -> DaoResult<Vec<u64>, X> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = statement::delete_by_id(&self.descriptor, Value::Null).sql;
        let batch: Vec<Params> = ids
            .iter()
            .map(|id| statement::key_params(&self.descriptor, id.to_value()))
            .collect();
        self.log(&sql);
        self.executor
            .execute_batch(&sql, &batch)
            .await
            .map_err(DaoError::Store)
    }

    /// Select the row with primary key `id`.
    ///
    /// Returns `Ok(None)` when no row matches.
    ///
    /// # Errors
    ///
    /// [`DaoError::Cardinality`] when several rows match.
    pub async fn select_one_by_id(&self, id: &E::Id) -> DaoResult<Option<E>, X> {
        self.select_one_by_key(id.to_value()).await
    }

    /// Select the single row matching `condition`.
    ///
    /// Returns `Ok(None)` when no row matches.
    ///
    /// # Errors
    ///
    /// - [`DaoError::Cardinality`] when several rows match
    /// - [`ValidationError::EmptyCondition`](crate::ValidationError::EmptyCondition)
    ///   for a blank condition
    pub async fn select_one_where(&self, condition: &str, params: Params) -> DaoResult<Option<E>, X> {
        let condition =
            statement::require_condition(&self.descriptor, condition, "select_one_where")?;
        let sql = statement::select_where(&self.descriptor, Some(condition));
        self.select_one(&sql, &params).await
    }

    /// Select every row matching `condition`.
    ///
    /// A blank condition is rejected; use [`select_all`](Self::select_all).
    pub async fn select_where(&self, condition: &str, params: Params) -> DaoResult<Vec<E>, X> {
        let condition = statement::require_condition(&self.descriptor, condition, "select_where")?;
        let sql = statement::select_where(&self.descriptor, Some(condition));
        self.query(&sql, &params).await
    }

    /// Select every row of the table.
    pub async fn select_all(&self) -> DaoResult<Vec<E>, X> {
        let sql = statement::select_where(&self.descriptor, None);
        self.query(&sql, &Params::None).await
    }

    /// Count the rows matching `condition`.
    ///
    /// A blank condition is rejected; use [`count`](Self::count).
    pub async fn count_where(&self, condition: &str, params: Params) -> DaoResult<u64, X> {
        let condition = statement::require_condition(&self.descriptor, condition, "count_where")?;
        let sql = statement::count_where(&self.descriptor, Some(condition));
        self.count_sql(&sql, &params).await
    }

    /// Count every row of the table.
    pub async fn count(&self) -> DaoResult<u64, X> {
        let sql = statement::count_where(&self.descriptor, None);
        self.count_sql(&sql, &Params::None).await
    }

    /// Select one page of the whole table.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`](crate::ValidationError) for a page number or
    /// size below 1, raised before any statement is sent.
    pub async fn select_page(&self, page_number: i64, page_size: i64) -> DaoResult<PageResult<E>, X> {
        let page = PageRequest::new(page_number, page_size)?;
        let base = statement::select_where(&self.descriptor, None);
        self.page(&base, &page, &Params::None).await
    }

    /// Select one page of the rows matching `condition`, with their total.
    ///
    /// Runs the paged row query and the count query built from the same base
    /// statement, with the same parameters.
    ///
    /// # Errors
    ///
    /// A [`ValidationError`](crate::ValidationError) for an invalid page or a
    /// blank condition, raised before any statement is sent.
    pub async fn select_page_where(
        &self,
        condition: &str,
        page_number: i64,
        page_size: i64,
        params: Params
    ) -> DaoResult<PageResult<E>, X> {
        let page = PageRequest::new(page_number, page_size)?;
        let condition =
            statement::require_condition(&self.descriptor, condition, "select_page_where")?;
        let base = statement::select_where(&self.descriptor, Some(condition));
        self.page(&base, &page, &params).await
    }

    /// Select one page of an arbitrary query, with its unpaginated total.
    ///
    /// `sql` is any select whose columns map onto `E`, with `?` or `:name`
    /// placeholders matching `params`. It is wrapped for the configured
    /// dialect exactly like the entity's own pages:
    ///
    /// ```rust,ignore
    /// let page = dao
    ///     .select_page_sql(
    ///         "SELECT o.* FROM orders o JOIN customers c ON c.email = o.customer_email \
    ///          WHERE c.region = :region",
    ///         1,
    ///         50,
    ///         params! { "region" => "eu" }
    ///     )
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// A [`ValidationError`](crate::ValidationError) for an invalid page or a
    /// blank statement, raised before any statement is sent.
    pub async fn select_page_sql(
        &self,
        sql: &str,
        page_number: i64,
        page_size: i64,
        params: Params
    ) -> DaoResult<PageResult<E>, X> {
        let page = PageRequest::new(page_number, page_size)?;
        let base = statement::require_condition(&self.descriptor, sql, "select_page_sql")?;
        self.page(base, &page, &params).await
    }

    async fn page(
        &self,
        base: &str,
        page: &PageRequest,
        params: &Params
    ) -> DaoResult<PageResult<E>, X> {
        let rows_sql = build_rows_query(base, page, self.config.dialect);
        let items = self.query(&rows_sql, params).await?;

        let count_sql = build_count_query(base);
        let total_count = self.count_sql(&count_sql, params).await?;

        Ok(PageResult::new(items, total_count, page))
    }

    async fn run_insert(&self, entity: &E, statement: Statement) -> DaoResult<u64, X> {
        if self.config.hooks.before_insert {
            self.hooks.before_insert(entity).await;
        }
        let affected = self.execute(&statement.sql, &statement.params).await?;
        if self.config.hooks.after_insert {
            self.hooks.after_insert(entity, affected).await;
        }
        Ok(affected)
    }

    async fn run_update(&self, entity: &E, statement: Statement) -> DaoResult<u64, X> {
        if self.config.hooks.before_update {
            self.hooks.before_update(entity).await;
        }
        let affected = self.execute(&statement.sql, &statement.params).await?;
        if self.config.hooks.after_update {
            self.hooks.after_update(entity, affected).await;
        }
        Ok(affected)
    }

    async fn select_one_by_key(&self, key: Value) -> DaoResult<Option<E>, X> {
        let Statement {
            sql,
            params
        } = statement::select_by_id(&self.descriptor, key);
        self.select_one(&sql, &params).await
    }

    async fn select_one(&self, sql: &str, params: &Params) -> DaoResult<Option<E>, X> {
        let mut rows = self.fetch(sql, params).await?;
        match rows.len() {
            0 => Ok(None),
            1 => rows.pop().map(|row| self.map_row(row)).transpose(),
            n => {
                tracing::error!(
                    table = self.descriptor.table_name(),
                    rows = n,
                    sql,
                    "unique lookup matched several rows"
                );
                Err(DaoError::Cardinality {
                    table: self.descriptor.table_name().to_owned(),
                    rows:  n
                })
            }
        }
    }

    async fn query(&self, sql: &str, params: &Params) -> DaoResult<Vec<E>, X> {
        self.fetch(sql, params)
            .await?
            .into_iter()
            .map(|row| self.map_row(row))
            .collect()
    }

    async fn fetch(&self, sql: &str, params: &Params) -> DaoResult<Vec<Row>, X> {
        self.log(sql);
        self.executor.query(sql, params).await.map_err(DaoError::Store)
    }

    async fn execute(&self, sql: &str, params: &Params) -> DaoResult<u64, X> {
        self.log(sql);
        self.executor.execute(sql, params).await.map_err(DaoError::Store)
    }

    async fn count_sql(&self, sql: &str, params: &Params) -> DaoResult<u64, X> {
        self.log(sql);
        let count = self
            .executor
            .query_scalar(sql, params)
            .await
            .map_err(DaoError::Store)?;
        u64::try_from(count).map_err(|_| DaoError::Mapping {
            entity: E::ENTITY_NAME,
            source: ValueError::OutOfRange {
                value:  count.to_string(),
                target: "row count"
            }
        })
    }

    fn map_row(&self, row: Row) -> DaoResult<E, X> {
        self.mapper
            .map_row(&self.descriptor, row)
            .map_err(|source| DaoError::Mapping {
                entity: E::ENTITY_NAME,
                source
            })
    }

    fn log(&self, sql: &str) {
        tracing::debug!(
            target: "fastsql::sql",
            table = self.descriptor.table_name(),
            sql,
            "executing statement"
        );
    }
}

impl<E: Entity, X: Clone> Clone for BaseDao<E, X> {
    fn clone(&self) -> Self {
        Self {
            executor:   self.executor.clone(),
            descriptor: Arc::clone(&self.descriptor),
            config:     self.config.clone(),
            hooks:      Arc::clone(&self.hooks),
            mapper:     Arc::clone(&self.mapper)
        }
    }
}

impl<E: Entity, X> std::fmt::Debug for BaseDao<E, X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseDao")
            .field("descriptor", &self.descriptor)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
