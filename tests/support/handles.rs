use vaultsnap::port::ContractRef;
use vaultsnap::testkit::domain::address;

/// Controller and market manager handles with fixed, distinct addresses.
pub fn controller_and_market_manager() -> (ContractRef, ContractRef) {
    (ContractRef::new(address(0xc1)), ContractRef::new(address(0xc2)))
}
