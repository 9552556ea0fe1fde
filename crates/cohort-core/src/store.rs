use crate::{
    model::{Account, CampaignSend, Contact, Deal, Record},
    schema::EntityKind,
};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Storage-layer failures propagate to the caller unchanged; the executor
/// performs no retry.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("read failed for {entity}: {message}")]
    ReadFailed {
        entity: &'static str,
        message: String,
    },
}

///
/// Store
///
/// Read port the executor scans through. One call visits every row of the
/// named collection in storage order; the executor owns matching and
/// windowing.
///

pub trait Store {
    fn scan(
        &self,
        entity: EntityKind,
        visit: &mut dyn FnMut(&dyn Record),
    ) -> Result<(), StoreError>;
}

///
/// MemoryStore
///
/// In-memory collections, one per entity. Insertion order is scan order.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    contacts: Vec<Contact>,
    accounts: Vec<Account>,
    deals: Vec<Deal>,
    campaign_sends: Vec<CampaignSend>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    pub fn insert_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn insert_deal(&mut self, deal: Deal) {
        self.deals.push(deal);
    }

    pub fn insert_campaign_send(&mut self, send: CampaignSend) {
        self.campaign_sends.push(send);
    }

    #[must_use]
    pub fn len(&self, entity: EntityKind) -> usize {
        match entity {
            EntityKind::Contacts => self.contacts.len(),
            EntityKind::Accounts => self.accounts.len(),
            EntityKind::Deals => self.deals.len(),
            EntityKind::CampaignSends => self.campaign_sends.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self, entity: EntityKind) -> bool {
        self.len(entity) == 0
    }
}

impl Store for MemoryStore {
    fn scan(
        &self,
        entity: EntityKind,
        visit: &mut dyn FnMut(&dyn Record),
    ) -> Result<(), StoreError> {
        match entity {
            EntityKind::Contacts => {
                for row in &self.contacts {
                    visit(row);
                }
            }
            EntityKind::Accounts => {
                for row in &self.accounts {
                    visit(row);
                }
            }
            EntityKind::Deals => {
                for row in &self.deals {
                    visit(row);
                }
            }
            EntityKind::CampaignSends => {
                for row in &self.campaign_sends {
                    visit(row);
                }
            }
        }

        Ok(())
    }
}
