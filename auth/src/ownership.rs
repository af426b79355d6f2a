//! Ownership-authorization contract for resource-owning collaborators.
//!
//! Every store that keys resources to a user applies this predicate before
//! returning, mutating, or deleting anything: the session guard supplies the
//! authenticated principal, the collaborator supplies the resource.

/// A resource that may belong to a principal.
pub trait Owned {
    /// Stable identifier of the owning principal, if the resource has one.
    fn owner(&self) -> Option<&str>;

    /// Whether `principal` owns this resource.
    ///
    /// An ownerless resource belongs to nobody; it is never handed to an
    /// authenticated caller.
    fn owned_by(&self, principal: &str) -> bool {
        self.owner() == Some(principal)
    }
}

/// Filter an iterator of resources down to those owned by `principal`.
pub fn owned_only<'a, R>(
    resources: impl IntoIterator<Item = R> + 'a,
    principal: &'a str,
) -> impl Iterator<Item = R> + 'a
where
    R: Owned + 'a,
{
    resources
        .into_iter()
        .filter(move |resource| resource.owned_by(principal))
}
