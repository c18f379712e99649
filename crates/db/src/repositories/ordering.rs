//! Atomic reorder executor shared by every ordered collection.
//!
//! A move is a single transaction: the target's partition rows are read and
//! locked `FOR UPDATE`, the neighbor is chosen by the pure planner in
//! `parish_core::ordering`, and both `order_index` writes commit together.
//! A failure of either write rolls the whole exchange back, so the
//! per-partition uniqueness of `order_index` can never be left broken by a
//! half-applied swap.

use sqlx::PgPool;

use parish_core::ordering::{plan_move, MoveDirection, MoveOutcome, OrderedRow};
use parish_core::types::DbId;

#[derive(sqlx::FromRow)]
struct IndexRow {
    id: DbId,
    order_index: i32,
}

/// Move one row up or down within its partition.
///
/// `partition_col`, when present, names the column that scopes the ordering
/// (the target row's own value is used to select the partition); rows in
/// other partitions are never read, locked, or written. Boundary moves and
/// unknown ids return their outcome without performing any write.
pub(crate) async fn move_within_partition(
    pool: &PgPool,
    table: &'static str,
    partition_col: Option<&'static str>,
    id: DbId,
    direction: MoveDirection,
) -> Result<MoveOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let rows: Vec<IndexRow> = match partition_col {
        Some(col) => {
            let query = format!(
                "SELECT id, order_index FROM {table} \
                 WHERE {col} = (SELECT {col} FROM {table} WHERE id = $1) \
                 ORDER BY order_index, id \
                 FOR UPDATE"
            );
            sqlx::query_as(&query).bind(id).fetch_all(&mut *tx).await?
        }
        None => {
            let query =
                format!("SELECT id, order_index FROM {table} ORDER BY order_index, id FOR UPDATE");
            sqlx::query_as(&query).fetch_all(&mut *tx).await?
        }
    };

    let partition: Vec<OrderedRow> = rows
        .iter()
        .map(|r| OrderedRow {
            id: r.id,
            order_index: r.order_index,
        })
        .collect();

    let plan = match plan_move(&partition, id, direction) {
        Ok(plan) => plan,
        Err(outcome) => return Ok(outcome),
    };

    let update = format!("UPDATE {table} SET order_index = $2 WHERE id = $1");
    sqlx::query(&update)
        .bind(plan.target_id)
        .bind(plan.target_new_index)
        .execute(&mut *tx)
        .await?;
    sqlx::query(&update)
        .bind(plan.neighbor_id)
        .bind(plan.neighbor_new_index)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(MoveOutcome::Moved)
}
