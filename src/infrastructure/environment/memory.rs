//! In-memory target environment
//!
//! Models the subset of a network the provisioning engine observes: code
//! and owner per account. It acts as the deterministic factory itself, so
//! deployments land where the address oracle says they will.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::ports::{EnvResult, EnvironmentError, TargetEnvironment};
use crate::domain::services::predict_address;
use crate::domain::value_objects::{Address, ContentHash, Payload, Salt};

/// State of one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub code: Vec<u8>,
    /// `None` models an instance without an owner interface
    pub owner: Option<Address>,
}

impl Account {
    pub fn new(code: impl Into<Vec<u8>>, owner: Option<Address>) -> Self {
        Self {
            code: code.into(),
            owner,
        }
    }
}

/// In-memory environment for tests and local runs
#[derive(Debug, Default)]
pub struct InMemoryEnvironment {
    /// Identity that owns freshly deployed instances
    deployer: Address,
    accounts: RefCell<BTreeMap<Address, Account>>,
    deploy_calls: Cell<usize>,
    scripted_revert: RefCell<Option<Vec<u8>>>,
    broken_owner_checks: RefCell<BTreeSet<Address>>,
}

impl InMemoryEnvironment {
    pub fn new(deployer: Address) -> Self {
        Self {
            deployer,
            ..Self::default()
        }
    }

    pub fn with_accounts(deployer: Address, accounts: BTreeMap<Address, Account>) -> Self {
        Self {
            deployer,
            accounts: RefCell::new(accounts),
            ..Self::default()
        }
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Place an account directly, bypassing the factory
    pub fn insert_account(&self, address: Address, account: Account) {
        self.accounts.borrow_mut().insert(address, account);
    }

    pub fn account(&self, address: &Address) -> Option<Account> {
        self.accounts.borrow().get(address).cloned()
    }

    /// Snapshot of every account
    pub fn accounts(&self) -> BTreeMap<Address, Account> {
        self.accounts.borrow().clone()
    }

    /// Number of `deploy_via_factory` calls received, failed ones included
    pub fn deploy_calls(&self) -> usize {
        self.deploy_calls.get()
    }

    /// Make the next deploy call revert with `data`
    pub fn revert_next_deploy(&self, data: impl Into<Vec<u8>>) {
        *self.scripted_revert.borrow_mut() = Some(data.into());
    }

    /// Make owner checks at `address` fail
    pub fn break_owner_check(&self, address: Address) {
        self.broken_owner_checks.borrow_mut().insert(address);
    }

    fn code_at(&self, address: &Address) -> Vec<u8> {
        self.accounts
            .borrow()
            .get(address)
            .map(|account| account.code.clone())
            .unwrap_or_default()
    }
}

impl TargetEnvironment for InMemoryEnvironment {
    fn has_content(&self, address: &Address) -> EnvResult<bool> {
        Ok(!self.code_at(address).is_empty())
    }

    fn footprint_hash(&self, address: &Address) -> EnvResult<ContentHash> {
        Ok(ContentHash::of(&self.code_at(address)))
    }

    fn owner_of(&self, address: &Address) -> EnvResult<Address> {
        if self.broken_owner_checks.borrow().contains(address) {
            return Err(EnvironmentError::Unavailable(format!(
                "owner() query at {} failed",
                address
            )));
        }
        self.accounts
            .borrow()
            .get(address)
            .and_then(|account| account.owner)
            .ok_or(EnvironmentError::Reverted { data: Vec::new() })
    }

    fn deploy_via_factory(
        &self,
        factory: &Address,
        payload: &Payload,
        salt: &Salt,
    ) -> EnvResult<Address> {
        self.deploy_calls.set(self.deploy_calls.get() + 1);

        if let Some(data) = self.scripted_revert.borrow_mut().take() {
            return Err(EnvironmentError::Reverted { data });
        }

        let address = predict_address(factory, salt, &payload.creation_hash());
        if !self.code_at(&address).is_empty() {
            // Collisions revert without data, like the deterministic proxy
            return Err(EnvironmentError::Reverted { data: Vec::new() });
        }

        self.insert_account(
            address,
            Account::new(payload.runtime(), Some(self.deployer)),
        );
        Ok(address)
    }
}
