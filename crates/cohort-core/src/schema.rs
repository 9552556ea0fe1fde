///
/// Entity schema
///
/// Closed set of queryable collections and their per-entity field
/// allow-lists. The allow-list is a security boundary: a filter clause can
/// only reference fields named here, never raw column names. Adding an
/// entity means extending `EntityKind` and the executor's dispatch.
///

///
/// EntityKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    Contacts,
    Accounts,
    Deals,
    CampaignSends,
}

impl EntityKind {
    pub const ALL: [Self; 4] = [
        Self::Contacts,
        Self::Accounts,
        Self::Deals,
        Self::CampaignSends,
    ];

    /// Wire name of the collection.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Accounts => "accounts",
            Self::Deals => "deals",
            Self::CampaignSends => "campaign_sends",
        }
    }

    /// Resolve a wire entity name. Unknown names are a hard error at the
    /// interface boundary, unlike field resolution which is lenient.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == name)
    }

    /// Field allow-list for this entity.
    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Contacts => CONTACT_FIELDS,
            Self::Accounts => ACCOUNT_FIELDS,
            Self::Deals => DEAL_FIELDS,
            Self::CampaignSends => CAMPAIGN_SEND_FIELDS,
        }
    }

    /// Map a wire field name to its schema entry, or `None` when the field
    /// is not allow-listed for this entity.
    #[must_use]
    pub fn resolve_field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

///
/// FieldType
///
/// Declared type of an allow-listed field; drives coercion of wire JSON
/// literals into typed `Value`s during compilation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldType {
    Text,
    Int,
    Float,
    Bool,
    Timestamp,
    TextList,
    Id,
}

///
/// FieldSpec
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
}

const fn field(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec { name, ty }
}

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    field("id", FieldType::Id),
    field("firstName", FieldType::Text),
    field("lastName", FieldType::Text),
    field("email", FieldType::Text),
    field("status", FieldType::Text),
    field("lifecycleStage", FieldType::Text),
    field("engagementScore", FieldType::Int),
    field("tags", FieldType::TextList),
    field("createdAt", FieldType::Timestamp),
    field("lastActivityAt", FieldType::Timestamp),
];

pub const ACCOUNT_FIELDS: &[FieldSpec] = &[
    field("id", FieldType::Id),
    field("name", FieldType::Text),
    field("domain", FieldType::Text),
    field("industry", FieldType::Text),
    field("status", FieldType::Text),
    field("employeeCount", FieldType::Int),
    field("annualRevenue", FieldType::Float),
    field("createdAt", FieldType::Timestamp),
];

pub const DEAL_FIELDS: &[FieldSpec] = &[
    field("id", FieldType::Id),
    field("accountId", FieldType::Id),
    field("name", FieldType::Text),
    field("stage", FieldType::Text),
    field("amount", FieldType::Float),
    field("probability", FieldType::Float),
    field("closed", FieldType::Bool),
    field("createdAt", FieldType::Timestamp),
    field("expectedCloseAt", FieldType::Timestamp),
];

pub const CAMPAIGN_SEND_FIELDS: &[FieldSpec] = &[
    field("id", FieldType::Id),
    field("contactId", FieldType::Id),
    field("campaign", FieldType::Text),
    field("channel", FieldType::Text),
    field("opened", FieldType::Bool),
    field("clicked", FieldType::Bool),
    field("sentAt", FieldType::Timestamp),
];

///
/// TESTS
///
