//! SQLite adapter for the recipe store.
//!
//! The catalog is an embedded single-node store, so persistence runs on
//! SQLite through `sqlx`. The schema is created on connect; referential
//! integrity (cascade delete from recipe to ingredients) is declared in the
//! schema and enforced through the `foreign_keys` pragma on every pooled
//! connection.

use std::str::FromStr;
use std::time::Duration;

use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};

use crate::domain::recipe::{Ingredient, Recipe};
use crate::domain::value_objects::{IngredientId, RecipeId};
use crate::infrastructure::store::{NewRecipe, RecipeChanges, RecipeStore, StoreError};

// AUTOINCREMENT is load-bearing on both tables: replaced ingredient ids must
// stay dead. Plain rowid allocation hands the highest freed id back to the
// next insert, which would resurrect the id invalidated by a replace.
const CREATE_RECIPES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL
    )
";

const CREATE_INGREDIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS ingredients (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE
    )
";

const CREATE_INGREDIENTS_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_ingredients_recipe_id ON ingredients(recipe_id)
";

// =============================================================================
// SqliteRecipeStore
// =============================================================================

/// SQLite-backed recipe store.
///
/// # Examples
///
/// ```rust,ignore
/// use cookbook::infrastructure::SqliteRecipeStore;
///
/// let store = SqliteRecipeStore::connect("sqlite:cookbook.db?mode=rwc").await?;
/// ```
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

// =============================================================================
// Constructors
// =============================================================================

impl SqliteRecipeStore {
    /// Opens (creating if missing) the database at `database_url` and
    /// ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the URL is invalid or the
    /// database cannot be opened.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    /// Opens a fresh in-memory database, used by tests.
    ///
    /// Every new in-memory SQLite connection is a distinct database, so the
    /// pool is pinned to a single connection that is never retired.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the connection cannot be
    /// established.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.create_schema().await?;
        Ok(store)
    }

    /// Returns a reference to the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_RECIPES_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INGREDIENTS_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_INGREDIENTS_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

impl SqliteRecipeStore {
    /// Groups recipe/ingredient join rows (ordered by recipe id, then
    /// ingredient id) into recipe records.
    fn collect_recipes(rows: &[SqliteRow]) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = Vec::new();

        for row in rows {
            let recipe_id = RecipeId::new(row.get("recipe_id"));

            if recipes.last().map(|recipe| recipe.id) != Some(recipe_id) {
                recipes.push(Recipe::new(
                    recipe_id,
                    row.get("recipe_name"),
                    row.get("description"),
                    Vec::new(),
                ));
            }

            let ingredient_id: Option<i64> = row.get("ingredient_id");
            if let (Some(id), Some(recipe)) = (ingredient_id, recipes.last_mut()) {
                recipe.ingredients.push(Ingredient::new(
                    IngredientId::new(id),
                    row.get("ingredient_name"),
                    recipe_id,
                ));
            }
        }

        recipes
    }
}

// =============================================================================
// RecipeStore Implementation
// =============================================================================

impl RecipeStore for SqliteRecipeStore {
    async fn create_recipe(&self, draft: NewRecipe) -> Result<Recipe, StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO recipes (name, description) VALUES (?1, ?2)")
            .bind(&draft.name)
            .bind(&draft.description)
            .execute(&mut *tx)
            .await?;
        let recipe_id = RecipeId::new(result.last_insert_rowid());

        for name in &draft.ingredients {
            sqlx::query("INSERT INTO ingredients (name, recipe_id) VALUES (?1, ?2)")
                .bind(name)
                .bind(recipe_id.value())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_recipe(recipe_id).await
    }

    async fn create_ingredient(
        &self,
        recipe_id: RecipeId,
        name: &str,
    ) -> Result<Ingredient, StoreError> {
        let recipe_row = sqlx::query("SELECT id FROM recipes WHERE id = ?1")
            .bind(recipe_id.value())
            .fetch_optional(&self.pool)
            .await?;
        if recipe_row.is_none() {
            return Err(StoreError::recipe_not_found(recipe_id));
        }

        let result = sqlx::query("INSERT INTO ingredients (name, recipe_id) VALUES (?1, ?2)")
            .bind(name)
            .bind(recipe_id.value())
            .execute(&self.pool)
            .await?;

        Ok(Ingredient::new(
            IngredientId::new(result.last_insert_rowid()),
            name.to_string(),
            recipe_id,
        ))
    }

    async fn list_recipes(&self, name_filter: Option<&str>) -> Result<Vec<Recipe>, StoreError> {
        // instr keeps the match case-sensitive; LIKE would fold ASCII case.
        let rows = match name_filter {
            Some(needle) => {
                sqlx::query(
                    r"
                    SELECT r.id AS recipe_id, r.name AS recipe_name, r.description AS description,
                           i.id AS ingredient_id, i.name AS ingredient_name
                    FROM recipes r
                    LEFT JOIN ingredients i ON i.recipe_id = r.id
                    WHERE instr(r.name, ?1) > 0
                    ORDER BY r.id, i.id
                    ",
                )
                .bind(needle)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r"
                    SELECT r.id AS recipe_id, r.name AS recipe_name, r.description AS description,
                           i.id AS ingredient_id, i.name AS ingredient_name
                    FROM recipes r
                    LEFT JOIN ingredients i ON i.recipe_id = r.id
                    ORDER BY r.id, i.id
                    ",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(Self::collect_recipes(&rows))
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT r.id AS recipe_id, r.name AS recipe_name, r.description AS description,
                   i.id AS ingredient_id, i.name AS ingredient_name
            FROM recipes r
            LEFT JOIN ingredients i ON i.recipe_id = r.id
            WHERE r.id = ?1
            ORDER BY i.id
            ",
        )
        .bind(id.value())
        .fetch_all(&self.pool)
        .await?;

        Self::collect_recipes(&rows)
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::recipe_not_found(id))
    }

    async fn update_recipe(
        &self,
        id: RecipeId,
        changes: RecipeChanges,
    ) -> Result<Recipe, StoreError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT id FROM recipes WHERE id = ?1")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(StoreError::recipe_not_found(id));
        }

        if let Some(name) = &changes.name {
            sqlx::query("UPDATE recipes SET name = ?1 WHERE id = ?2")
                .bind(name)
                .bind(id.value())
                .execute(&mut *tx)
                .await?;
        }

        if let Some(description) = &changes.description {
            sqlx::query("UPDATE recipes SET description = ?1 WHERE id = ?2")
                .bind(description)
                .bind(id.value())
                .execute(&mut *tx)
                .await?;
        }

        if let Some(names) = &changes.ingredients {
            // Destructive replace: the prior set is deleted and re-created
            // with fresh ids even when the incoming names are identical.
            sqlx::query("DELETE FROM ingredients WHERE recipe_id = ?1")
                .bind(id.value())
                .execute(&mut *tx)
                .await?;

            for name in names {
                sqlx::query("INSERT INTO ingredients (name, recipe_id) VALUES (?1, ?2)")
                    .bind(name)
                    .bind(id.value())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        self.get_recipe(id).await
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::recipe_not_found(id));
        }

        tracing::debug!(recipe_id = id.value(), "Deleted recipe");
        Ok(())
    }

    async fn delete_ingredients_of_recipe(&self, id: RecipeId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM ingredients WHERE recipe_id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ingredient_exists(&self, id: IngredientId) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT id FROM ingredients WHERE id = ?1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

// =============================================================================
// Tests
// =============================================================================
