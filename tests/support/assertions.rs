use vaultsnap::domain::{Snapshot, VaultScoped};

/// Bundle `k` belongs to vault `k + 1` and the snapshot has `expected` bundles.
pub fn assert_contiguous_vaults<B: VaultScoped>(snapshot: &Snapshot<B>, expected: usize) {
    assert_eq!(snapshot.len(), expected, "bundle count");
    for (k, bundle) in snapshot.bundles.iter().enumerate() {
        assert_eq!(
            bundle.vault_id().get(),
            k as u64 + 1,
            "bundle {k} belongs to the wrong vault"
        );
    }
}
