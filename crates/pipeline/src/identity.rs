//! Repository identity resolution.

use crate::environment::{vars, Environment};
use crate::{Identity, RepositoryName, RepositoryOwner};

/// Resolves the owner and bare repository name from the runner environment.
///
/// `GITHUB_REPOSITORY_OWNER` is preferred since it names the base repository
/// for forks; older runners do not set it, so `GITHUB_ACTOR` is the fallback.
/// The repository name is taken from `GITHUB_REPOSITORY` independently of the
/// resolved owner. Missing variables resolve to empty strings.
pub fn resolve_identity(env: &impl Environment) -> Identity {
    let owner = env
        .var(vars::GITHUB_REPOSITORY_OWNER)
        .filter(|owner| !owner.is_empty())
        .unwrap_or_else(|| env.var_or_empty(vars::GITHUB_ACTOR));

    Identity {
        owner: RepositoryOwner::new(owner),
        repo: repository_name(&env.var_or_empty(vars::GITHUB_REPOSITORY)),
    }
}

/// Returns the segment after the final `/`, or the whole string if there is none.
pub fn repository_name(full_name: &str) -> RepositoryName {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    RepositoryName::new(name)
}
