use sqlx::PgPool;

/// Privilege-separated access to the `projects` table: `read_pool` connects
/// with the SELECT-only role, `write_pool` with the elevated role.
#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub read_pool: PgPool,
    pub write_pool: PgPool,
}
