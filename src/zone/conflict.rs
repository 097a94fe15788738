use std::path::PathBuf;

/// A move whose destination already holds a file of the same name.
///
/// Carries everything a prompt needs to describe the clash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub file_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Collision {
    pub fn prompt(&self) -> String {
        let folder = self
            .destination
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        format!("{} already exists in {}. Overwrite it?", self.file_name, folder)
    }
}

/// Answer to a [`Collision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Overwrite,
    Skip,
    /// Overwrite this and every later collision in the same batch.
    OverwriteAll,
    /// Skip this and every later collision in the same batch.
    SkipAll,
}

impl Decision {
    pub fn from_choice(overwrite: bool, apply_all: bool) -> Self {
        match (overwrite, apply_all) {
            (true, false) => Decision::Overwrite,
            (true, true) => Decision::OverwriteAll,
            (false, false) => Decision::Skip,
            (false, true) => Decision::SkipAll,
        }
    }

    pub fn overwrites(self) -> bool {
        matches!(self, Decision::Overwrite | Decision::OverwriteAll)
    }

    pub fn applies_to_all(self) -> bool {
        matches!(self, Decision::OverwriteAll | Decision::SkipAll)
    }
}

/// Decides collisions for a batch that runs to completion in one call.
pub trait ConflictResolver {
    fn resolve(&mut self, collision: &Collision) -> Decision;
}

impl<F> ConflictResolver for F
where
    F: FnMut(&Collision) -> Decision,
{
    fn resolve(&mut self, collision: &Collision) -> Decision {
        self(collision)
    }
}

/// Resolver that replaces every existing destination.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysOverwrite;

impl ConflictResolver for AlwaysOverwrite {
    fn resolve(&mut self, _collision: &Collision) -> Decision {
        Decision::OverwriteAll
    }
}

/// Resolver that leaves every colliding source where it is.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysSkip;

impl ConflictResolver for AlwaysSkip {
    fn resolve(&mut self, _collision: &Collision) -> Decision {
        Decision::SkipAll
    }
}
