//! Per-call lookup table from provider ID to member.

use std::collections::HashMap;

use node_ref_resolver_sdk::MemberRecord;

/// Provider ID index over one member snapshot.
///
/// Borrows the snapshot it was built from and lives no longer than a single
/// resolution. Lookups only; the index is never iterated, so the order of
/// resolved references comes solely from the caller's request.
#[derive(Debug)]
pub struct ResolutionIndex<'a> {
    by_provider_id: HashMap<&'a str, &'a MemberRecord>,
}

impl<'a> ResolutionIndex<'a> {
    /// Indexes `members` by provider ID.
    ///
    /// Members with an empty provider ID are skipped since nothing can match
    /// them. When several members share a provider ID the later one in
    /// snapshot order wins and the collision is logged.
    #[must_use]
    pub fn build(members: &'a [MemberRecord]) -> Self {
        let mut by_provider_id = HashMap::with_capacity(members.len());

        for member in members {
            if member.provider_id.is_empty() {
                tracing::trace!(member = %member.name, "skipping member without provider ID");
                continue;
            }

            if let Some(replaced) = by_provider_id.insert(member.provider_id.as_str(), member) {
                tracing::warn!(
                    provider_id = %member.provider_id,
                    replaced = %replaced.name,
                    kept = %member.name,
                    "duplicate provider ID in member snapshot, keeping the later member"
                );
            }
        }

        Self { by_provider_id }
    }

    /// Returns the member registered under `provider_id`, if any.
    #[must_use]
    pub fn get(&self, provider_id: &str) -> Option<&'a MemberRecord> {
        self.by_provider_id.get(provider_id).copied()
    }

    /// Number of distinct provider IDs indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_provider_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_provider_id.is_empty()
    }
}
