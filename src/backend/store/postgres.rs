/**
 * PostgreSQL User Store
 *
 * A `UserStore` backed by the `users` table. The ordered groups array of a
 * user is stored as one JSONB document, so each mutation below is a single
 * `UPDATE` of one row and inherits PostgreSQL's row-level atomicity.
 *
 * # Projections
 *
 * Group summaries and per-group notes are computed in SQL with
 * `jsonb_array_elements ... WITH ORDINALITY`, preserving stored order, so
 * only the projected data leaves the database.
 */
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use super::{Credentials, NewUser, StoreError, UserStore};
use crate::shared::{Group, GroupSummary, Note, User, UserId};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    groups: Json<Vec<Group>>,
}

impl UserRow {
    fn into_user(self) -> Result<User, StoreError> {
        let id = parse_stored_id(&self.id)?;
        Ok(User {
            id,
            email: self.email,
            groups: self.groups.0,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CredentialsRow {
    id: String,
    email: String,
    password_hash: String,
}

fn parse_stored_id(raw: &str) -> Result<UserId, StoreError> {
    UserId::parse(raw).map_err(|e| StoreError::Corrupt {
        id: raw.to_string(),
        message: e.to_string(),
    })
}

/// User store on a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = UserId::generate();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, groups
            "#,
        )
        .bind(id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StoreError::Conflict(format!("email already registered: {}", user.email))
            }
            other => StoreError::Database(other),
        })?;

        row.into_user()
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, StoreError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            Ok(Credentials {
                id: parse_stored_id(&row.id)?,
                email: row.email,
                password_hash: row.password_hash,
            })
        })
        .transpose()
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, groups
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn group_summaries(&self, id: &UserId) -> Result<Option<Vec<GroupSummary>>, StoreError> {
        let summaries: Option<Json<Vec<GroupSummary>>> = sqlx::query_scalar(
            r#"
            SELECT COALESCE(
                jsonb_agg(
                    jsonb_build_object(
                        'groupId', t.g->'groupId',
                        'groupName', t.g->'groupName',
                        'groupColor', t.g->'groupColor',
                        'shortForm', t.g->'shortForm'
                    )
                    ORDER BY t.ord
                ) FILTER (WHERE t.g IS NOT NULL),
                '[]'::jsonb
            )
            FROM users u
            LEFT JOIN LATERAL jsonb_array_elements(u.groups) WITH ORDINALITY AS t(g, ord) ON TRUE
            WHERE u.id = $1
            GROUP BY u.id
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(summaries.map(|json| json.0))
    }

    async fn group_notes(&self, id: &UserId) -> Result<Option<Vec<Vec<Note>>>, StoreError> {
        let notes: Option<Json<Vec<Vec<Note>>>> = sqlx::query_scalar(
            r#"
            SELECT COALESCE(
                jsonb_agg(COALESCE(t.g->'notes', '[]'::jsonb) ORDER BY t.ord)
                    FILTER (WHERE t.g IS NOT NULL),
                '[]'::jsonb
            )
            FROM users u
            LEFT JOIN LATERAL jsonb_array_elements(u.groups) WITH ORDINALITY AS t(g, ord) ON TRUE
            WHERE u.id = $1
            GROUP BY u.id
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(notes.map(|json| json.0))
    }

    async fn push_group(&self, id: &UserId, group: Group) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET groups = groups || jsonb_build_array($2::jsonb),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, groups
            "#,
        )
        .bind(id.to_string())
        .bind(Json(&group))
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn push_note(
        &self,
        id: &UserId,
        group_id: i64,
        note: Note,
    ) -> Result<Option<Vec<Group>>, StoreError> {
        let groups: Option<Json<Vec<Group>>> = sqlx::query_scalar(
            r#"
            UPDATE users
            SET groups = (
                    SELECT jsonb_agg(
                        CASE WHEN t.g->'groupId' = to_jsonb($2::bigint)
                            THEN jsonb_set(
                                t.g,
                                '{notes}',
                                COALESCE(t.g->'notes', '[]'::jsonb) || jsonb_build_array($3::jsonb)
                            )
                            ELSE t.g
                        END
                        ORDER BY t.ord
                    )
                    FROM jsonb_array_elements(users.groups) WITH ORDINALITY AS t(g, ord)
                ),
                updated_at = NOW()
            WHERE id = $1
              AND groups @> jsonb_build_array(jsonb_build_object('groupId', $2::bigint))
            RETURNING groups
            "#,
        )
        .bind(id.to_string())
        .bind(group_id)
        .bind(Json(&note))
        .fetch_optional(&self.pool)
        .await?;

        Ok(groups.map(|json| json.0))
    }

    async fn pull_group(&self, id: &UserId, group_id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET groups = COALESCE(
                    (
                        SELECT jsonb_agg(t.g ORDER BY t.ord)
                        FROM jsonb_array_elements(users.groups) WITH ORDINALITY AS t(g, ord)
                        WHERE t.g->'groupId' IS DISTINCT FROM to_jsonb($2::bigint)
                    ),
                    '[]'::jsonb
                ),
                updated_at = NOW()
            WHERE id = $1
              AND groups @> jsonb_build_array(jsonb_build_object('groupId', $2::bigint))
            "#,
        )
        .bind(id.to_string())
        .bind(group_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
