#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taskdeck::db::db::Db;
    use taskdeck::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use taskdeck::db::tasks::Tasks;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            MigrationTestContext { temp_dir }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("tasks.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.db_path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::open_without_migrations(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version_after_first = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version_after_second = get_db_version(&conn).unwrap();

        assert_eq!(version_after_first, version_after_second);
        let history = manager.get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), version_after_first as usize);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_data_file_keeps_rows(ctx: &mut MigrationTestContext) {
        // Simulate a data file written before the migration system existed:
        // tasks table present, no migrations table.
        {
            let conn = Db::open_without_migrations(ctx.db_path()).unwrap();
            conn.execute(
                "CREATE TABLE tasks (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    done INTEGER NOT NULL CHECK(done IN (0,1)),
                    tag TEXT,
                    due_date TEXT,
                    priority TEXT,
                    created_at TEXT
                )",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO tasks (title, done, tag, due_date, priority, created_at)
                 VALUES ('Legacy task', 1, 'Arbeit', '2024-02-01', 'Hoch', '2024-01-15 09:30:00')",
                [],
            )
            .unwrap();
        }

        let store = Tasks::open(ctx.db_path()).unwrap();

        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.title, "Legacy task");
        assert!(task.done);
        assert_eq!(task.created_at, "2024-01-15 09:30:00");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_creates_parent_directory(ctx: &mut MigrationTestContext) {
        let nested = ctx.temp_dir.path().join("data").join("tasks.db");

        let store = Tasks::open(&nested).unwrap();

        assert!(nested.exists());
        assert!(store.tasks().is_empty());
    }
}
