//! Built-in template catalog.
//!
//! Pure data: a fixed mapping `variant → (directory set, artifact set,
//! parameterized template text)`.  No side effects, no failure modes — the
//! catalog is total for every [`Language`] variant.
//!
//! Each variant lives in its own sibling module (`javascript`, `typescript`)
//! with an identical shape: a `FILES` table of [`FileTemplate`] entries plus
//! the `const` template strings they point at.  The directory set is shared
//! because both variants currently emit the same layout; only the file
//! contents differ.
//!
//! Template strings use `{{PROJECT_NAME}}` as their only placeholder — see
//! [`crate::domain::RenderContext`].

use crate::domain::Language;

mod javascript;
mod typescript;

/// What role a planned file plays in the generated project.
///
/// Lets callers (and tests) reason about the artifact set without string-
/// matching on paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Express application module (`src/app.*`).
    AppModule,
    /// Server entry point: `server.js` at the root for JavaScript,
    /// `src/server.ts` for TypeScript.
    ServerEntry,
    /// `.env` with the default environment variables.
    EnvFile,
    /// `.gitignore`.
    GitIgnore,
    /// `package.json`.
    PackageManifest,
    /// `README.md`.
    Readme,
    /// `tsconfig.json` (TypeScript only).
    CompilerConfig,
    /// `nodemon.json` (TypeScript only).
    WatchConfig,
}

/// One artifact in the catalog: its role, target path, and template text.
#[derive(Debug, Clone, Copy)]
pub struct FileTemplate {
    pub kind: ArtifactKind,
    pub path: &'static str,
    pub content: &'static str,
}

/// Directory layout, parents before children.  Fixed across variants.
const DIRECTORIES: &[&str] = &[
    "src",
    "src/controllers",
    "src/middlewares",
    "src/models",
    "src/routes",
    "src/services",
];

/// The directory set for a variant, in creation order.
pub fn directories(_language: Language) -> &'static [&'static str] {
    DIRECTORIES
}

/// The artifact set for a variant, in write order.
pub fn files(language: Language) -> &'static [FileTemplate] {
    match language {
        Language::JavaScript => javascript::FILES,
        Language::TypeScript => typescript::FILES,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
