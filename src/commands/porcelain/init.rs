use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the storage directories and write the initial state
    ///
    /// The repository starts with a single headless `master` branch and an
    /// empty index.
    pub fn init(&mut self) -> Result<(), RepositoryError> {
        fs::create_dir_all(self.database().objects_path()).with_context(|| {
            format!(
                "Failed to create {} directory",
                self.database().objects_path().display()
            )
        })?;

        self.save()?;

        writeln!(
            self.writer(),
            "Initialized empty svc repository in {}",
            self.config().storage_path().display()
        )?;

        Ok(())
    }
}
